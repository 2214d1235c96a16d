// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use impact_math::{Mat3, Vec3};
use tracing::trace;

use super::{NarrowConfig, Penetration, SatAxis, SatOutcome};
use crate::types::obb::Obb;

/// Oriented-box separating-axis test with default thresholds.
///
/// See [`obb_sat_with`].
pub fn obb_sat(a: &Obb, b: &Obb) -> SatOutcome {
    obb_sat_with(a, b, &NarrowConfig::DEFAULT)
}

/// Oriented-box separating-axis test over the 15 candidate axes.
///
/// Candidates are evaluated in [`SatAxis::ALL`] order inside A's local frame,
/// where A's face normals are the unit axes. For each axis `L` the two boxes
/// project to radii `ra`, `rb` and the centres are `|L · d|` apart:
///
/// * `|L · d| > ra + rb` on any axis returns [`SatOutcome::Separated`] with
///   that axis immediately.
/// * Otherwise the boxes overlap, and the axis with the smallest
///   `ra + rb - |L · d|` gives the penetration. Ties keep the earlier axis.
///
/// The reported normal is unit length, in world space, and oriented from A
/// towards B. Edge axes shorter than `config.degenerate_axis_epsilon` come
/// from near-parallel edges and are skipped.
pub fn obb_sat_with(a: &Obb, b: &Obb, config: &NarrowConfig) -> SatOutcome {
    let basis_a = a.basis();
    // Column j is B's axis j expressed in A's frame.
    let rot = basis_a.inverse().compose(&b.basis()).matrix();
    let offset = basis_a.to_local(&b.center().sub(&a.center()));
    let extents_a = a.half_extents();
    let extents_b = b.half_extents();

    let mut best_axis = SatAxis::FaceA(0);
    let mut best_normal = Vec3::UNIT_X;
    let mut best_depth = f32::INFINITY;

    for axis in SatAxis::ALL {
        let raw = local_direction(axis, &rot);
        let len = raw.length();
        if axis.is_edge() && len < config.degenerate_axis_epsilon {
            trace!(?axis, len, "skipping degenerate edge axis");
            continue;
        }
        let dir = raw.scale(1.0 / len);

        let ra = dir.abs().dot(&extents_a);
        let rb = (0..3)
            .map(|k| extents_b.component(k) * dir.dot(&rot.col(k)).abs())
            .sum::<f32>();
        let dist = dir.dot(&offset);
        let depth = ra + rb - dist.abs();

        if depth < 0.0 {
            trace!(?axis, gap = -depth, "separating axis found");
            return SatOutcome::Separated(axis);
        }
        if depth < best_depth {
            best_depth = depth;
            best_axis = axis;
            best_normal = if dist < 0.0 { -dir } else { dir };
        }
    }

    let normal = basis_a.to_parent(&best_normal);
    trace!(axis = ?best_axis, depth = best_depth, "boxes overlap");
    SatOutcome::Overlapping(Penetration {
        normal,
        depth: best_depth,
        axis: best_axis,
    })
}

/// Boolean-style wrapper: penetration data when the boxes overlap.
pub fn obb_overlap(a: &Obb, b: &Obb) -> Option<Penetration> {
    obb_sat(a, b).penetration()
}

/// [`obb_overlap`] with explicit thresholds.
pub fn obb_overlap_with(a: &Obb, b: &Obb, config: &NarrowConfig) -> Option<Penetration> {
    obb_sat_with(a, b, config).penetration()
}

fn local_direction(axis: SatAxis, rot: &Mat3) -> Vec3 {
    let unit = Mat3::identity();
    match axis {
        SatAxis::FaceA(i) => unit.col(i),
        SatAxis::FaceB(j) => rot.col(j),
        SatAxis::Edge(i, j) => unit.col(i).cross(&rot.col(j)),
    }
}
