// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use impact_math::Vec3;

use crate::types::aabb::Aabb;

/// Centre of a volume at two adjacent frames, bounding its motion over a step.
///
/// - `prev` corresponds to `u = 0`.
/// - `curr` corresponds to `u = 1`.
///
/// Only translation is modelled; swept tests treat orientation as fixed
/// across the step.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    prev: Vec3,
    curr: Vec3,
}

impl Motion {
    /// Creates a motion from the previous and current centre.
    #[must_use]
    pub const fn new(prev: Vec3, curr: Vec3) -> Self {
        Self { prev, curr }
    }

    /// A volume that did not move during the step.
    #[must_use]
    pub const fn stationary(at: Vec3) -> Self {
        Self::new(at, at)
    }

    /// Centre at the previous frame.
    #[must_use]
    pub const fn prev(&self) -> Vec3 {
        self.prev
    }

    /// Centre at the current frame.
    #[must_use]
    pub const fn curr(&self) -> Vec3 {
        self.curr
    }

    /// Displacement over the step (`curr - prev`).
    #[must_use]
    pub fn displacement(&self) -> Vec3 {
        self.curr.sub(&self.prev)
    }

    /// Centre at normalised time `u` (linear interpolation).
    #[must_use]
    pub fn at(&self, u: f32) -> Vec3 {
        self.prev.lerp(&self.curr, u)
    }

    /// Conservative bounds of a box with `half_extents` over the whole step.
    ///
    /// The union of the start and end boxes; exact for linear motion.
    #[must_use]
    pub fn swept_aabb(&self, half_extents: Vec3) -> Aabb {
        let a0 = Aabb::new(self.prev, half_extents);
        let a1 = Aabb::new(self.curr, half_extents);
        a0.union(&a1)
    }
}
