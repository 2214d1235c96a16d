// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Narrow-phase collision queries for Impact.

This crate provides:
- Bounding volumes (`Aabb`, `Obb`, `Sphere`, `Plane`, `Segment`).
- Step-to-step motion of a centre (`Motion`).
- The `narrow` test suite: static overlap, swept time-of-impact, the 15-axis
  oriented-box separating-axis test, and box-versus-segment.

Design notes:
- Pure functions over `Copy` values: no shared state, no allocation, safe to
  call from any number of threads over read-only snapshots.
- Results carry their payload only when there is one (`Option<SweepInterval>`,
  `SatOutcome`), so a hit flag can never disagree with its data.
- Float32 throughout; degenerate numeric cases (parallel edge axes, zero
  relative velocity) are guarded instead of producing NaN.
"]

mod error;
/// Narrow-phase tests over bounding volumes.
pub mod narrow;
/// Time-aware helpers for swept queries.
pub mod temporal;
/// Bounding-volume value types.
pub mod types;

pub use error::GeomError;
pub use narrow::{
    NarrowConfig, Penetration, SatAxis, SatOutcome, SphereContact, SweepInterval,
};
pub use temporal::motion::Motion;
pub use types::{aabb::Aabb, obb::Obb, plane::Plane, segment::Segment, sphere::Sphere};
