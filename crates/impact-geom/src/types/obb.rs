// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use impact_math::{Basis, Frame, Vec3};

use super::aabb::Aabb;

/// Oriented bounding box: a pose [`Frame`] plus half-extents along the
/// frame's local axes.
///
/// The frame's origin is the box centre and its basis columns are the box
/// axes in world (parent) coordinates. Half-extents are ≥ 0 by caller
/// contract.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb {
    frame: Frame,
    half_extents: Vec3,
}

impl Obb {
    /// Creates a box from its pose and half-extents.
    #[must_use]
    pub const fn new(frame: Frame, half_extents: Vec3) -> Self {
        Self {
            frame,
            half_extents,
        }
    }

    /// Creates a box from centre, orientation, and half-extents.
    #[must_use]
    pub const fn from_parts(center: Vec3, basis: Basis, half_extents: Vec3) -> Self {
        Self::new(Frame::new(center, basis), half_extents)
    }

    /// Lifts an axis-aligned box into an oriented one with identity basis.
    #[must_use]
    pub const fn from_aabb(aabb: &Aabb) -> Self {
        Self::from_parts(aabb.center(), Basis::identity(), aabb.half_extents())
    }

    /// Pose of the box.
    #[must_use]
    pub const fn frame(&self) -> Frame {
        self.frame
    }

    /// Centre in world coordinates.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.frame.origin()
    }

    /// Box axes in world coordinates.
    #[must_use]
    pub fn basis(&self) -> Basis {
        self.frame.basis()
    }

    /// Half-extents along the box's local axes.
    #[must_use]
    pub const fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// The box in its own local space: centred at the origin, axis-aligned.
    #[must_use]
    pub const fn local_aabb(&self) -> Aabb {
        Aabb::new(Vec3::ZERO, self.half_extents)
    }

    /// Returns `true` if the world-space `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: &Vec3) -> bool {
        self.local_aabb()
            .contains_point(&self.frame.point_to_local(point))
    }

    /// Tight world-space axis-aligned bounds, e.g. for an external broad phase.
    ///
    /// World half-extent `i` is `Σ_j |M_ij| · e_j` where `M` is the basis.
    #[must_use]
    pub fn bounding_aabb(&self) -> Aabb {
        let m = self.basis().matrix();
        let half = Vec3::new(
            m.row(0).abs().dot(&self.half_extents),
            m.row(1).abs().dot(&self.half_extents),
            m.row(2).abs().dot(&self.half_extents),
        );
        Aabb::new(self.center(), half)
    }
}
