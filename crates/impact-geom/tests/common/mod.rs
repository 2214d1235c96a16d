// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use impact_geom::Obb;
use impact_math::{Basis, Vec3};
use tracing_subscriber::EnvFilter;

/// Routes `trace!` output through the test harness; `RUST_LOG=impact_geom=trace`
/// shows every axis decision.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Basis rotated by `ax`, `ay`, `az` radians about X, Y, then Z.
pub fn rotated_basis(ax: f32, ay: f32, az: f32) -> Basis {
    let mut basis = Basis::identity();
    basis.rotate_x(ax);
    basis.rotate_y(ay);
    basis.rotate_z(az);
    basis
}

/// Cube-ish OBB helper.
pub fn obb(center: Vec3, basis: Basis, half_extents: Vec3) -> Obb {
    Obb::from_parts(center, basis, half_extents)
}
