// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Narrow-phase collision tests.
//!
//! Every function here is pure and total: given well-formed inputs it returns
//! a definite answer without allocating or touching shared state. Callers are
//! an external broad phase (which decides *which* pairs to test) and an
//! integrator (which supplies the previous/current poses and consumes the
//! results). Nothing here resolves collisions.
//!
//! | Query | Function | Result |
//! |---|---|---|
//! | AABB vs AABB | [`aabb_overlaps`] | `bool` |
//! | AABB vs sphere | [`aabb_overlaps_sphere`] | `bool` |
//! | Swept sphere vs plane | [`sphere_plane_sweep`] | `Option<SphereContact>` |
//! | Swept AABB vs AABB | [`aabb_sweep`] | `Option<SweepInterval>` |
//! | OBB vs OBB | [`obb_sat`] / [`obb_overlap`] | `SatOutcome` / `Option<Penetration>` |
//! | AABB vs segment | [`aabb_segment_overlap`] | `bool` |
//! | OBB vs segment | [`obb_segment_overlap`] | `bool` |

mod config;
mod contact;
mod overlap;
mod sat;
mod segment;
mod sweep;

pub use config::NarrowConfig;
pub use contact::{Penetration, SatAxis, SatOutcome, SphereContact, SweepInterval};
pub use overlap::{aabb_overlaps, aabb_overlaps_sphere};
pub use sat::{obb_overlap, obb_overlap_with, obb_sat, obb_sat_with};
pub use segment::{aabb_segment_overlap, obb_segment_overlap};
pub use sweep::{aabb_sweep, aabb_sweep_with, sphere_plane_sweep};
