// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use impact_math::Vec3;

use super::aabb::Aabb;

/// Sphere given by centre and radius (radius ≥ 0 by caller contract).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Creates a sphere.
    #[must_use]
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Centre of the sphere.
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of the sphere.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Tight axis-aligned bounds.
    #[must_use]
    pub fn bounding_aabb(&self) -> Aabb {
        Aabb::new(self.center, Vec3::splat(self.radius))
    }
}
