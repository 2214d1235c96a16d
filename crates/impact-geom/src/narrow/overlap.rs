// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::{aabb::Aabb, sphere::Sphere};

/// Static AABB overlap: centre distance against summed half-extents per axis.
///
/// Touching faces count as overlapping.
pub fn aabb_overlaps(a: &Aabb, b: &Aabb) -> bool {
    let gap = b.center().sub(&a.center()).abs();
    let reach = a.half_extents().add(&b.half_extents());
    (0..3).all(|i| gap.component(i) <= reach.component(i))
}

/// Static AABB versus sphere.
///
/// Accumulates the squared distance from the sphere centre to the box and
/// compares it with the squared radius. A centre inside the box is always a
/// hit.
pub fn aabb_overlaps_sphere(aabb: &Aabb, sphere: &Sphere) -> bool {
    let rel = sphere.center().sub(&aabb.center());
    let extents = aabb.half_extents();
    let mut dist_sq = 0.0f32;
    for i in 0..3 {
        let s = rel.component(i);
        let e = extents.component(i);
        if s < -e {
            let d = s + e;
            dist_sq += d * d;
        } else if s > e {
            let d = s - e;
            dist_sq += d * d;
        }
    }
    dist_sq <= sphere.radius() * sphere.radius()
}
