// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]

mod common;

use impact_geom::narrow::{aabb_overlaps, aabb_overlaps_sphere};
use impact_geom::{Aabb, Sphere};
use impact_math::Vec3;
use proptest::prelude::*;

fn unit_box_at(x: f32, y: f32, z: f32) -> Aabb {
    Aabb::new(Vec3::new(x, y, z), Vec3::splat(1.0))
}

#[test]
fn aabb_overlap_by_center_distance() {
    common::init_tracing();
    let a = unit_box_at(0.0, 0.0, 0.0);
    assert!(aabb_overlaps(&a, &unit_box_at(1.5, 0.0, 0.0)));
    assert!(!aabb_overlaps(&a, &unit_box_at(2.1, 0.0, 0.0)));
    // Overlap on two axes is not enough.
    assert!(!aabb_overlaps(&a, &unit_box_at(0.5, 0.5, -2.5)));
}

#[test]
fn aabb_sphere_distance_test() {
    let aabb = unit_box_at(0.0, 0.0, 0.0);
    assert!(!aabb_overlaps_sphere(&aabb, &Sphere::new(Vec3::new(3.0, 0.0, 0.0), 1.0)));
    assert!(aabb_overlaps_sphere(&aabb, &Sphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0)));
    // Exactly touching the face.
    assert!(aabb_overlaps_sphere(&aabb, &Sphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0)));
}

#[test]
fn zero_radius_sphere_is_a_point_query() {
    let aabb = Aabb::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0));
    for p in [
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(3.0, -2.0, 3.0),
        Vec3::new(3.01, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
    ] {
        assert_eq!(
            aabb_overlaps_sphere(&aabb, &Sphere::new(p, 0.0)),
            aabb.contains_point(&p),
            "{p:?}"
        );
    }
}

fn coord() -> impl Strategy<Value = f32> {
    -20.0f32..20.0
}

fn extent() -> impl Strategy<Value = f32> {
    0.0f32..5.0
}

prop_compose! {
    fn arb_aabb()(
        cx in coord(), cy in coord(), cz in coord(),
        ex in extent(), ey in extent(), ez in extent(),
    ) -> Aabb {
        Aabb::new(Vec3::new(cx, cy, cz), Vec3::new(ex, ey, ez))
    }
}

proptest! {
    #[test]
    fn aabb_overlap_is_symmetric(a in arb_aabb(), b in arb_aabb()) {
        prop_assert_eq!(aabb_overlaps(&a, &b), aabb_overlaps(&b, &a));
    }

    #[test]
    fn sphere_centered_inside_box_always_hits(
        aabb in arb_aabb(),
        fx in -1.0f32..1.0, fy in -1.0f32..1.0, fz in -1.0f32..1.0,
        radius in 0.01f32..3.0,
    ) {
        let e = aabb.half_extents();
        let center = aabb.center().add(&Vec3::new(fx * e.x(), fy * e.y(), fz * e.z()));
        prop_assert!(aabb_overlaps_sphere(&aabb, &Sphere::new(center, radius)));
    }

    #[test]
    fn bounding_box_overlap_is_implied_by_sphere_hit(
        aabb in arb_aabb(),
        cx in coord(), cy in coord(), cz in coord(),
        radius in 0.0f32..5.0,
    ) {
        let sphere = Sphere::new(Vec3::new(cx, cy, cz), radius);
        if aabb_overlaps_sphere(&aabb, &sphere) {
            prop_assert!(aabb_overlaps(&aabb, &sphere.bounding_aabb()));
        }
    }
}
