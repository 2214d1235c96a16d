// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Basis, Vec3};

/// Coordinate frame: an orthonormal [`Basis`] plus an origin, both relative to
/// a parent frame.
///
/// Conventions:
/// - `origin` is the local origin written in parent coordinates.
/// - Points are translated by the origin when crossing frames; free vectors
///   (directions, displacements) only rotate.
/// - Frames nest: [`Frame::compose`] flattens a child frame into its
///   grandparent.
///
/// # Examples
/// ```
/// use impact_math::{Basis, Frame, Vec3};
/// let frame = Frame::new(Vec3::new(1.0, 2.0, 3.0), Basis::identity());
/// let p = Vec3::new(1.0, 1.0, 1.0);
/// let local = frame.point_to_local(&p);
/// assert_eq!(local.to_array(), [0.0, -1.0, -2.0]);
/// assert_eq!(frame.point_to_parent(&local), p);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    origin: Vec3,
    basis: Basis,
}

impl Frame {
    /// Identity frame (zero origin, identity basis).
    pub const fn identity() -> Self {
        Self {
            origin: Vec3::ZERO,
            basis: Basis::identity(),
        }
    }

    /// Creates a frame from an origin and a basis.
    pub const fn new(origin: Vec3, basis: Basis) -> Self {
        Self { origin, basis }
    }

    /// Frame with identity basis located at `origin`.
    pub const fn from_origin(origin: Vec3) -> Self {
        Self::new(origin, Basis::identity())
    }

    /// Origin in parent coordinates.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Orientation relative to the parent.
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Replaces the origin.
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// Replaces the basis.
    pub fn set_basis(&mut self, basis: Basis) {
        self.basis = basis;
    }

    /// Moves the origin by `delta` given in parent coordinates.
    pub fn translate(&mut self, delta: &Vec3) {
        self.origin = self.origin.add(delta);
    }

    /// Moves the origin by `delta` given in local coordinates.
    pub fn translate_local(&mut self, delta: &Vec3) {
        self.origin = self.origin.add(&self.basis.to_parent(delta));
    }

    /// Rotates the frame about its local X axis; the origin stays put.
    pub fn rotate_x(&mut self, angle: f32) {
        self.basis.rotate_x(angle);
    }

    /// Rotates the frame about its local Y axis; the origin stays put.
    pub fn rotate_y(&mut self, angle: f32) {
        self.basis.rotate_y(angle);
    }

    /// Rotates the frame about its local Z axis; the origin stays put.
    pub fn rotate_z(&mut self, angle: f32) {
        self.basis.rotate_z(angle);
    }

    /// Converts a parent-space point into local coordinates.
    pub fn point_to_local(&self, point: &Vec3) -> Vec3 {
        self.basis.to_local(&point.sub(&self.origin))
    }

    /// Converts a local point into parent coordinates.
    pub fn point_to_parent(&self, point: &Vec3) -> Vec3 {
        self.basis.to_parent(point).add(&self.origin)
    }

    /// Converts a parent-space free vector into local coordinates.
    pub fn vector_to_local(&self, v: &Vec3) -> Vec3 {
        self.basis.to_local(v)
    }

    /// Converts a local free vector into parent coordinates.
    pub fn vector_to_parent(&self, v: &Vec3) -> Vec3 {
        self.basis.to_parent(v)
    }

    /// Expresses `child` (given relative to `self`) relative to `self`'s parent.
    pub fn compose(&self, child: &Self) -> Self {
        Self {
            origin: self.point_to_parent(&child.origin),
            basis: self.basis.compose(&child.basis),
        }
    }

    /// Frame mapping parent coordinates to local ones as its `*_to_parent`.
    pub fn inverse(&self) -> Self {
        let basis = self.basis.inverse();
        Self {
            origin: -self.basis.to_local(&self.origin),
            basis,
        }
    }
}
