// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use impact_math::Vec3;

use crate::GeomError;

/// Infinite plane `{ p : normal · p = distance }`.
///
/// - `normal` must be unit length; [`Plane::from_points`] guarantees it, the
///   other constructors trust the caller.
/// - `distance` is the signed offset of the plane from the origin along
///   `normal`.
/// - The side `normal` points into is "in front"; signed distances are
///   positive there.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vec3,
    distance: f32,
}

impl Plane {
    /// Creates a plane from a unit normal and its signed offset from the origin.
    #[must_use]
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Creates the plane through `point` with unit `normal`.
    #[must_use]
    pub fn from_point_normal(point: &Vec3, normal: Vec3) -> Self {
        Self::new(normal, normal.dot(point))
    }

    /// Creates the plane through three points, wound counter-clockwise when
    /// viewed from the front (`normal = (b - a) × (c - a)`, normalised).
    pub fn from_points(a: &Vec3, b: &Vec3, c: &Vec3) -> Result<Self, GeomError> {
        let normal = b
            .sub(a)
            .cross(&c.sub(a))
            .try_normalize()
            .ok_or(GeomError::DegeneratePlane)?;
        Ok(Self::from_point_normal(a, normal))
    }

    /// Unit normal.
    #[must_use]
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed offset from the origin along the normal.
    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Signed distance of `point` from the plane (positive in front).
    #[must_use]
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn project(&self, point: &Vec3) -> Vec3 {
        point.sub(&self.normal.scale(self.signed_distance(point)))
    }
}
