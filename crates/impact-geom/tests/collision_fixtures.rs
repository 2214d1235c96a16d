// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Fixture-driven validation for the narrow-phase queries.
//!
//! Each table in `fixtures/collision-fixtures.json` lists hand-computed
//! expectations; the tests replay them through the public API.

mod common;

use once_cell::sync::Lazy;
use serde::Deserialize;

use common::{obb, rotated_basis};
use impact_geom::narrow::{
    aabb_overlaps, aabb_overlaps_sphere, aabb_sweep, obb_sat, sphere_plane_sweep,
};
use impact_geom::{Aabb, Motion, Obb, Plane, SatOutcome, Sphere};
use impact_math::Vec3;

static RAW_FIXTURES: &str = include_str!("fixtures/collision-fixtures.json");

static FIXTURES: Lazy<CollisionFixtures> = Lazy::new(|| {
    let fixtures: CollisionFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse collision fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct CollisionFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    aabb_overlap: Vec<AabbPairFixture>,
    aabb_sphere: Vec<AabbSphereFixture>,
    sphere_plane_sweep: Vec<SphereSweepFixture>,
    aabb_sweep: Vec<AabbSweepFixture>,
    obb_sat: Vec<ObbSatFixture>,
}

impl CollisionFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(!slice.is_empty(), "collision fixture set '{name}' must not be empty");
        }

        ensure("aabb_overlap", &self.aabb_overlap);
        ensure("aabb_sphere", &self.aabb_sphere);
        ensure("sphere_plane_sweep", &self.sphere_plane_sweep);
        ensure("aabb_sweep", &self.aabb_sweep);
        ensure("obb_sat", &self.obb_sat);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f32,
    #[serde(default = "Tolerance::default_relative")]
    relative: f32,
}

impl Tolerance {
    const fn default_absolute() -> f32 {
        1e-5
    }

    const fn default_relative() -> f32 {
        1e-5
    }

    fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AabbInput {
    center: [f32; 3],
    half_extents: [f32; 3],
}

impl AabbInput {
    fn build(&self) -> Aabb {
        Aabb::new(self.center.into(), self.half_extents.into())
    }
}

#[derive(Debug, Deserialize)]
struct ObbInput {
    center: [f32; 3],
    rotate: [f32; 3],
    half_extents: [f32; 3],
}

impl ObbInput {
    fn build(&self) -> Obb {
        let [ax, ay, az] = self.rotate;
        obb(self.center.into(), rotated_basis(ax, ay, az), self.half_extents.into())
    }
}

#[derive(Debug, Deserialize)]
struct AabbPairFixture {
    a: AabbInput,
    b: AabbInput,
    expected: bool,
}

#[derive(Debug, Deserialize)]
struct AabbSphereFixture {
    aabb: AabbInput,
    center: [f32; 3],
    radius: f32,
    expected: bool,
}

#[derive(Debug, Deserialize)]
struct SphereSweepFixture {
    radius: f32,
    prev: [f32; 3],
    curr: [f32; 3],
    normal: [f32; 3],
    distance: f32,
    expected: Option<ContactExpectation>,
}

#[derive(Debug, Deserialize)]
struct ContactExpectation {
    u: f32,
    point: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct AabbSweepFixture {
    extents_a: [f32; 3],
    prev_a: [f32; 3],
    curr_a: [f32; 3],
    extents_b: [f32; 3],
    prev_b: [f32; 3],
    curr_b: [f32; 3],
    expected: Option<[f32; 2]>,
}

#[derive(Debug, Deserialize)]
struct ObbSatFixture {
    a: ObbInput,
    b: ObbInput,
    expected: SatExpectation,
}

#[derive(Debug, Deserialize)]
struct SatExpectation {
    overlapping: bool,
    #[serde(default)]
    depth: Option<f32>,
    #[serde(default)]
    normal: Option<[f32; 3]>,
}

fn assert_scalar(tol: &Tolerance, label: &str, actual: f32, expected: f32) {
    let allowed = tol.allowed_error(expected);
    let diff = (actual - expected).abs();
    assert!(
        diff <= allowed,
        "{label}: expected {expected}, got {actual} (diff {diff}, allowed {allowed})"
    );
}

fn assert_vec(tol: &Tolerance, label: &str, actual: Vec3, expected: [f32; 3]) {
    let actual = actual.to_array();
    for i in 0..3 {
        assert_scalar(tol, &format!("{label}[{i}]"), actual[i], expected[i]);
    }
}

#[test]
fn static_overlap_fixtures_hold() {
    common::init_tracing();
    let fx = &*FIXTURES;
    for (i, f) in fx.aabb_overlap.iter().enumerate() {
        let (a, b) = (f.a.build(), f.b.build());
        assert_eq!(aabb_overlaps(&a, &b), f.expected, "aabb_overlap#{i}");
        assert_eq!(aabb_overlaps(&b, &a), f.expected, "aabb_overlap#{i} (swapped)");
    }
    for (i, f) in fx.aabb_sphere.iter().enumerate() {
        let sphere = Sphere::new(f.center.into(), f.radius);
        assert_eq!(
            aabb_overlaps_sphere(&f.aabb.build(), &sphere),
            f.expected,
            "aabb_sphere#{i}"
        );
    }
}

#[test]
fn swept_fixtures_hold() {
    common::init_tracing();
    let fx = &*FIXTURES;
    let tol = &fx.tolerance;
    for (i, f) in fx.sphere_plane_sweep.iter().enumerate() {
        let motion = Motion::new(f.prev.into(), f.curr.into());
        let plane = Plane::new(f.normal.into(), f.distance);
        let actual = sphere_plane_sweep(f.radius, &motion, &plane);
        match (&f.expected, actual) {
            (None, None) => {}
            (Some(want), Some(got)) => {
                assert_scalar(tol, &format!("sphere_plane_sweep#{i}.u"), got.u, want.u);
                assert_vec(tol, &format!("sphere_plane_sweep#{i}.point"), got.point, want.point);
            }
            (want, got) => panic!("sphere_plane_sweep#{i}: expected {want:?}, got {got:?}"),
        }
    }
    for (i, f) in fx.aabb_sweep.iter().enumerate() {
        let a = Motion::new(f.prev_a.into(), f.curr_a.into());
        let b = Motion::new(f.prev_b.into(), f.curr_b.into());
        let actual = aabb_sweep(f.extents_a.into(), &a, f.extents_b.into(), &b);
        match (f.expected, actual) {
            (None, None) => {}
            (Some([u0, u1]), Some(got)) => {
                assert_scalar(tol, &format!("aabb_sweep#{i}.u0"), got.u0, u0);
                assert_scalar(tol, &format!("aabb_sweep#{i}.u1"), got.u1, u1);
            }
            (want, got) => panic!("aabb_sweep#{i}: expected {want:?}, got {got:?}"),
        }
    }
}

#[test]
fn obb_sat_fixtures_hold() {
    common::init_tracing();
    let fx = &*FIXTURES;
    let tol = &fx.tolerance;
    for (i, f) in fx.obb_sat.iter().enumerate() {
        let outcome = obb_sat(&f.a.build(), &f.b.build());
        assert_eq!(outcome.is_overlapping(), f.expected.overlapping, "obb_sat#{i}: {outcome:?}");
        if let SatOutcome::Overlapping(pen) = outcome {
            if let Some(depth) = f.expected.depth {
                assert_scalar(tol, &format!("obb_sat#{i}.depth"), pen.depth, depth);
            }
            if let Some(normal) = f.expected.normal {
                assert_vec(tol, &format!("obb_sat#{i}.normal"), pen.normal, normal);
            }
        }
    }
}
