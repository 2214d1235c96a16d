// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Algebra substrate for Impact.

This crate provides:
- A float32 3D vector (`Vec3`).
- A column-major 3×3 matrix (`Mat3`).
- An orthonormal rotation frame relative to a parent (`Basis`).
- A basis plus an origin offset (`Frame`), supporting nested local/parent
  transforms.

Design notes:
- Value types only: everything is `Copy`, nothing is shared or cached.
- Float32 throughout; no fused multiply-add so results match across targets.
- Degenerate input is handled at the edges: `Vec3::normalize` maps
  near-zero vectors to zero and `Vec3::try_normalize` reports them.
"]

mod basis;
mod error;
mod frame;
mod mat3;
mod scalar;
mod vec3;

pub use basis::Basis;
pub use error::MathError;
pub use frame::Frame;
pub use mat3::Mat3;
pub use scalar::{approx_eq, deg_to_rad, rad_to_deg, EPSILON};
pub use vec3::Vec3;
