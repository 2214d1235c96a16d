// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Mat3, MathError, Vec3};

/// Deviation from `MᵀM = I` accepted by [`Basis::try_from_matrix`].
pub const ORTHONORMAL_TOLERANCE: f32 = 1e-4;

/// Orthonormal rotation frame expressed relative to a parent frame.
///
/// The columns of the wrapped [`Mat3`] are the local X, Y and Z axes written
/// in parent coordinates.
///
/// Invariants:
/// - Columns are unit length, mutually orthogonal, and right-handed. The
///   unchecked constructors trust the caller; [`Basis::try_from_matrix`]
///   validates.
/// - The `rotate_*` helpers preserve orthonormality analytically but do not
///   renormalise, so long chains of incremental rotations drift. Call
///   [`Basis::orthonormalized`] periodically to pull the frame back.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Basis {
    matrix: Mat3,
}

impl Basis {
    /// Identity basis (local axes coincide with the parent's).
    pub const fn identity() -> Self {
        Self {
            matrix: Mat3::identity(),
        }
    }

    /// Builds a basis from three axes given in parent coordinates.
    pub const fn from_axes(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self {
            matrix: Mat3::from_cols(x, y, z),
        }
    }

    /// Wraps a matrix whose columns are assumed orthonormal.
    pub const fn from_matrix(matrix: Mat3) -> Self {
        Self { matrix }
    }

    /// Wraps `matrix` after checking that it is orthonormal and right-handed.
    pub fn try_from_matrix(matrix: Mat3) -> Result<Self, MathError> {
        let deviation = Self::from_matrix(matrix).orthonormality_error();
        if deviation > ORTHONORMAL_TOLERANCE {
            return Err(MathError::NotOrthonormal { deviation });
        }
        let determinant = matrix.determinant();
        if determinant < 0.0 {
            return Err(MathError::LeftHanded { determinant });
        }
        Ok(Self { matrix })
    }

    /// Underlying matrix (columns are the local axes).
    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    /// Local X axis in parent coordinates.
    pub fn x_axis(&self) -> Vec3 {
        self.matrix.col(0)
    }

    /// Local Y axis in parent coordinates.
    pub fn y_axis(&self) -> Vec3 {
        self.matrix.col(1)
    }

    /// Local Z axis in parent coordinates.
    pub fn z_axis(&self) -> Vec3 {
        self.matrix.col(2)
    }

    /// Local axis `idx` (`0 = x`, `1 = y`, `2 = z`).
    pub fn axis(&self, idx: usize) -> Vec3 {
        self.matrix.col(idx)
    }

    /// Rotates the frame about its own X axis by `angle` radians (right-handed).
    ///
    /// The X axis is unchanged; Y and Z turn in the plane they span.
    pub fn rotate_x(&mut self, angle: f32) {
        let [x, y, z] = self.matrix.cols();
        if let Some((y, z)) = rotate_pair(y, z, angle) {
            self.matrix = Mat3::from_cols(x, y, z);
        }
    }

    /// Rotates the frame about its own Y axis by `angle` radians (right-handed).
    pub fn rotate_y(&mut self, angle: f32) {
        let [x, y, z] = self.matrix.cols();
        if let Some((z, x)) = rotate_pair(z, x, angle) {
            self.matrix = Mat3::from_cols(x, y, z);
        }
    }

    /// Rotates the frame about its own Z axis by `angle` radians (right-handed).
    pub fn rotate_z(&mut self, angle: f32) {
        let [x, y, z] = self.matrix.cols();
        if let Some((x, y)) = rotate_pair(x, y, angle) {
            self.matrix = Mat3::from_cols(x, y, z);
        }
    }

    /// Projects a parent-space vector onto each local axis.
    pub fn to_local(&self, v: &Vec3) -> Vec3 {
        Vec3::new(
            v.dot(&self.x_axis()),
            v.dot(&self.y_axis()),
            v.dot(&self.z_axis()),
        )
    }

    /// Sums the local axes scaled by the components of `v`.
    pub fn to_parent(&self, v: &Vec3) -> Vec3 {
        self.matrix.mul_vec(v)
    }

    /// Expresses `child` (given relative to `self`) relative to `self`'s parent.
    pub fn compose(&self, child: &Self) -> Self {
        Self::from_matrix(self.matrix.multiply(&child.matrix))
    }

    /// The inverse rotation (the transpose, for an orthonormal basis).
    pub fn inverse(&self) -> Self {
        Self::from_matrix(self.matrix.transpose())
    }

    /// Re-orthogonalises the frame with Gram–Schmidt, keeping X's direction.
    ///
    /// Y is made perpendicular to X and Z is rebuilt as `X × Y`, so the
    /// result is right-handed even if the input had drifted.
    pub fn orthonormalized(&self) -> Self {
        let x = self.x_axis().normalize();
        let y = self.y_axis();
        let y = y.sub(&x.scale(x.dot(&y))).normalize();
        let z = x.cross(&y);
        Self::from_axes(x, y, z)
    }

    /// Largest absolute entry of `MᵀM - I`; zero for an exact rotation.
    pub fn orthonormality_error(&self) -> f32 {
        let gram = self.matrix.transpose().multiply(&self.matrix);
        let mut err = 0.0f32;
        for col in 0..3 {
            for row in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                err = err.max((gram.at(row, col) - expected).abs());
            }
        }
        err
    }
}

/// Standard 2D rotation of the axis pair `(u, v)` by `angle`, turning `u`
/// toward `v`. Returns `None` for an exactly-zero angle.
#[allow(clippy::float_cmp)]
fn rotate_pair(u: Vec3, v: Vec3, angle: f32) -> Option<(Vec3, Vec3)> {
    if angle == 0.0 {
        return None;
    }
    let (s, c) = angle.sin_cos();
    let u_new = u.scale(c).add(&v.scale(s));
    let v_new = v.scale(c).sub(&u.scale(s));
    Some((u_new, v_new))
}
