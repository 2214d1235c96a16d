// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use impact_math::Vec3;

use crate::GeomError;

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `half_extents` components are ≥ 0. [`Aabb::new`] trusts the caller;
///   [`Aabb::try_new`] rejects negative values.
/// - Values are `f32`, in whatever space the caller works in (world space for
///   the static tests, box-local space for the segment test).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    center: Vec3,
    half_extents: Vec3,
}

impl Aabb {
    /// Builds a box from its centre and half-extents without validation.
    #[must_use]
    pub const fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Builds a box, rejecting negative half-extents.
    pub fn try_new(center: Vec3, half_extents: Vec3) -> Result<Self, GeomError> {
        for axis in 0..3 {
            let value = half_extents.component(axis);
            if value < 0.0 {
                return Err(GeomError::NegativeExtent { axis, value });
            }
        }
        Ok(Self::new(center, half_extents))
    }

    /// Builds the box spanning `min..=max`.
    ///
    /// If any component of `min` exceeds `max` the resulting extent is
    /// negative; use [`Aabb::try_new`] on the result's parts to detect it.
    #[must_use]
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::new(min.add(&max).scale(0.5), max.sub(&min).scale(0.5))
    }

    /// Centre of the box.
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Half-extents along X, Y and Z.
    #[must_use]
    pub const fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.center.sub(&self.half_extents)
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.center.add(&self.half_extents)
    }

    /// Same extents, centred at `center`.
    #[must_use]
    pub const fn with_center(&self, center: Vec3) -> Self {
        Self::new(center, self.half_extents)
    }

    /// Returns the smallest box containing both inputs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let a = self.min().to_array();
        let b = self.max().to_array();
        let c = other.min().to_array();
        let d = other.max().to_array();
        Self::from_min_max(
            Vec3::new(a[0].min(c[0]), a[1].min(c[1]), a[2].min(c[2])),
            Vec3::new(b[0].max(d[0]), b[1].max(d[1]), b[2].max(d[2])),
        )
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let offset = point.sub(&self.center).abs();
        (0..3).all(|i| offset.component(i) <= self.half_extents.component(i))
    }
}
