// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use impact_math::Vec3;

/// First contact of a swept sphere with a plane.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphereContact {
    /// Sphere centre at the moment of contact.
    pub point: Vec3,
    /// Fraction of the step in `[0, 1]` at which contact begins.
    pub u: f32,
}

/// Sub-interval of a step during which two swept boxes overlap.
///
/// Both ends lie in `[0, 1]` with `u0 <= u1`. `u0 == u1 == 0` means the boxes
/// already overlapped at the start of the step.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepInterval {
    /// Normalised time of first contact.
    pub u0: f32,
    /// Normalised time of last contact, clamped to the end of the step.
    pub u1: f32,
}

/// One of the 15 candidate axes of the box-box separating-axis test.
///
/// Indices name local box axes: `0 = x`, `1 = y`, `2 = z`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SatAxis {
    /// Face normal of the first box.
    FaceA(usize),
    /// Face normal of the second box.
    FaceB(usize),
    /// Cross product of edge `.0` of the first box with edge `.1` of the second.
    Edge(usize, usize),
}

impl SatAxis {
    /// All candidate axes in evaluation order: A's faces, B's faces, then the
    /// nine edge pairs in row-major order.
    pub const ALL: [Self; 15] = [
        Self::FaceA(0),
        Self::FaceA(1),
        Self::FaceA(2),
        Self::FaceB(0),
        Self::FaceB(1),
        Self::FaceB(2),
        Self::Edge(0, 0),
        Self::Edge(0, 1),
        Self::Edge(0, 2),
        Self::Edge(1, 0),
        Self::Edge(1, 1),
        Self::Edge(1, 2),
        Self::Edge(2, 0),
        Self::Edge(2, 1),
        Self::Edge(2, 2),
    ];

    /// Position of this axis in [`SatAxis::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::FaceA(i) => i,
            Self::FaceB(j) => 3 + j,
            Self::Edge(i, j) => 6 + 3 * i + j,
        }
    }

    /// `true` for the nine edge-edge axes.
    pub const fn is_edge(self) -> bool {
        matches!(self, Self::Edge(..))
    }
}

/// Minimum-penetration data for two overlapping oriented boxes.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Penetration {
    /// Unit world-space normal pointing from the first box towards the second.
    pub normal: Vec3,
    /// Overlap along `normal`; zero when the boxes only touch.
    pub depth: f32,
    /// Candidate axis that produced the minimum.
    pub axis: SatAxis,
}

/// Result of the box-box separating-axis test.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SatOutcome {
    /// The boxes are disjoint; the payload is the first axis that separates them.
    Separated(SatAxis),
    /// The boxes overlap or touch.
    Overlapping(Penetration),
}

impl SatOutcome {
    /// `true` when the boxes overlap or touch.
    pub const fn is_overlapping(&self) -> bool {
        matches!(self, Self::Overlapping(_))
    }

    /// Penetration data, if the boxes overlap.
    pub const fn penetration(&self) -> Option<Penetration> {
        match self {
            Self::Overlapping(p) => Some(*p),
            Self::Separated(_) => None,
        }
    }

    /// The separating axis, if the boxes are disjoint.
    pub const fn separating_axis(&self) -> Option<SatAxis> {
        match self {
            Self::Separated(axis) => Some(*axis),
            Self::Overlapping(_) => None,
        }
    }
}
