// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use impact_math::{Frame, Vec3};

/// Line segment stored as midpoint, unit direction, and half-length.
///
/// This is the form the box-versus-segment separating-axis test consumes.
/// A zero-length segment carries a zero direction and degenerates to a point.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    midpoint: Vec3,
    direction: Vec3,
    half_length: f32,
}

impl Segment {
    /// Creates a segment; `direction` is assumed unit length.
    #[must_use]
    pub const fn new(midpoint: Vec3, direction: Vec3, half_length: f32) -> Self {
        Self {
            midpoint,
            direction,
            half_length,
        }
    }

    /// Creates the segment from `start` to `end`.
    #[must_use]
    pub fn from_endpoints(start: &Vec3, end: &Vec3) -> Self {
        let delta = end.sub(start);
        match delta.try_normalize() {
            Some(direction) => Self::new(start.lerp(end, 0.5), direction, delta.length() * 0.5),
            None => Self::new(start.lerp(end, 0.5), Vec3::ZERO, 0.0),
        }
    }

    /// Midpoint.
    #[must_use]
    pub const fn midpoint(&self) -> Vec3 {
        self.midpoint
    }

    /// Unit direction (zero for a degenerate segment).
    #[must_use]
    pub const fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Half the segment's length.
    #[must_use]
    pub const fn half_length(&self) -> f32 {
        self.half_length
    }

    /// Start and end points.
    #[must_use]
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        let reach = self.direction.scale(self.half_length);
        (self.midpoint.sub(&reach), self.midpoint.add(&reach))
    }

    /// Re-expresses the segment in `frame`'s local coordinates.
    ///
    /// The midpoint is treated as a point, the direction as a free vector.
    #[must_use]
    pub fn to_local(&self, frame: &Frame) -> Self {
        Self::new(
            frame.point_to_local(&self.midpoint),
            frame.vector_to_local(&self.direction),
            self.half_length,
        )
    }
}
