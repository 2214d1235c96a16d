// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use impact_math::Vec3;
use tracing::trace;

use super::{aabb_overlaps, NarrowConfig, SphereContact, SweepInterval};
use crate::temporal::motion::Motion;
use crate::types::{aabb::Aabb, plane::Plane};

/// Swept sphere versus plane over one step.
///
/// Returns the contact with `u = 0` at the previous centre when the sphere
/// already straddles the plane (`|d0| <= radius`). Otherwise contact exists
/// only when the sphere starts on the positive side and ends closer than
/// `radius`; `u = (d0 - r) / (d0 - d1)` and the point is the centre at `u`.
///
/// The test is one-sided: a sphere approaching from the negative half-space
/// is never reported.
pub fn sphere_plane_sweep(radius: f32, motion: &Motion, plane: &Plane) -> Option<SphereContact> {
    let d0 = plane.signed_distance(&motion.prev());
    let d1 = plane.signed_distance(&motion.curr());

    if d0.abs() <= radius {
        trace!(d0, radius, "sphere starts in contact with plane");
        return Some(SphereContact {
            point: motion.prev(),
            u: 0.0,
        });
    }

    if d0 > radius && d1 < radius {
        // d0 > r > d1, so the denominator is strictly positive.
        let u = (d0 - radius) / (d0 - d1);
        trace!(d0, d1, u, "sphere crosses plane during step");
        return Some(SphereContact {
            point: motion.at(u),
            u,
        });
    }

    None
}

/// Swept AABB versus AABB with default thresholds.
///
/// See [`aabb_sweep_with`].
pub fn aabb_sweep(
    extents_a: Vec3,
    motion_a: &Motion,
    extents_b: Vec3,
    motion_b: &Motion,
) -> Option<SweepInterval> {
    aabb_sweep_with(extents_a, motion_a, extents_b, motion_b, &NarrowConfig::DEFAULT)
}

/// Swept AABB versus AABB.
///
/// Boxes keep their half-extents and translate linearly between the previous
/// and current centres of their [`Motion`]s. Returns the overlap interval
/// `[u0, u1]` clipped to the step, or `None` when the boxes never touch.
///
/// Boxes overlapping at the start report `u0 == u1 == 0`. An axis whose
/// relative displacement is within `config.velocity_epsilon` of zero adds no
/// bound if the boxes already overlap on it and rules out contact otherwise.
pub fn aabb_sweep_with(
    extents_a: Vec3,
    motion_a: &Motion,
    extents_b: Vec3,
    motion_b: &Motion,
    config: &NarrowConfig,
) -> Option<SweepInterval> {
    let start_a = Aabb::new(motion_a.prev(), extents_a);
    let start_b = Aabb::new(motion_b.prev(), extents_b);
    if aabb_overlaps(&start_a, &start_b) {
        trace!("boxes overlap at start of step");
        return Some(SweepInterval { u0: 0.0, u1: 0.0 });
    }

    // Frame of A: A is at rest and B moves with the relative displacement.
    let velocity = motion_b.displacement().sub(&motion_a.displacement());
    let offset = motion_b.prev().sub(&motion_a.prev());
    let reach = extents_a.add(&extents_b);

    let mut u0 = 0.0f32;
    let mut u1 = 1.0f32;
    for axis in 0..3 {
        let d = offset.component(axis);
        let r = reach.component(axis);
        let v = velocity.component(axis);

        if v.abs() <= config.velocity_epsilon {
            if d.abs() > r {
                trace!(axis, d, r, "separated on axis with no relative motion");
                return None;
            }
            continue;
        }

        let t_a = (-r - d) / v;
        let t_b = (r - d) / v;
        let (enter, exit) = if t_a <= t_b { (t_a, t_b) } else { (t_b, t_a) };
        u0 = u0.max(enter);
        u1 = u1.min(exit);
    }

    if u0 <= u1 {
        trace!(u0, u1, "swept boxes meet");
        Some(SweepInterval { u0, u1 })
    } else {
        None
    }
}
