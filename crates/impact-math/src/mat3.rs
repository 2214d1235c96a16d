// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vec3;

/// Column‑major 3×3 matrix stored as three column vectors.
///
/// - Column `i` is the image of the `i`-th standard basis vector, so
///   `m.mul_vec(v) == col(0)*v.x + col(1)*v.y + col(2)*v.z`.
/// - No orthogonality is enforced; see [`crate::Basis`] for the rotation
///   subset.
/// - `Default` is the identity.
///
/// # Examples
/// ```
/// use impact_math::{Mat3, Vec3};
/// let m = Mat3::from_cols(Vec3::UNIT_Y, Vec3::UNIT_X, Vec3::UNIT_Z);
/// assert_eq!(m.mul_vec(&Vec3::new(1.0, 2.0, 3.0)).to_array(), [2.0, 1.0, 3.0]);
/// assert_eq!(m.determinant(), -1.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    cols: [Vec3; 3],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            cols: [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z],
        }
    }

    /// Returns the all-zero matrix.
    pub const fn zero() -> Self {
        Self {
            cols: [Vec3::ZERO, Vec3::ZERO, Vec3::ZERO],
        }
    }

    /// Builds a matrix from three column vectors.
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Returns column `idx`.
    ///
    /// # Panics
    /// Panics if `idx > 2`.
    pub fn col(&self, idx: usize) -> Vec3 {
        self.cols[idx]
    }

    /// Returns row `idx` as a vector.
    ///
    /// # Panics
    /// Panics if `idx > 2`.
    pub fn row(&self, idx: usize) -> Vec3 {
        Vec3::new(
            self.cols[0].component(idx),
            self.cols[1].component(idx),
            self.cols[2].component(idx),
        )
    }

    /// Returns all three columns.
    pub fn cols(&self) -> [Vec3; 3] {
        self.cols
    }

    /// Element at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.cols[col].component(row)
    }

    /// Adds two matrices element-wise.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::from_cols(
            self.cols[0].add(&rhs.cols[0]),
            self.cols[1].add(&rhs.cols[1]),
            self.cols[2].add(&rhs.cols[2]),
        )
    }

    /// Subtracts `rhs` element-wise.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::from_cols(
            self.cols[0].sub(&rhs.cols[0]),
            self.cols[1].sub(&rhs.cols[1]),
            self.cols[2].sub(&rhs.cols[2]),
        )
    }

    /// Scales every element by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::from_cols(
            self.cols[0].scale(scalar),
            self.cols[1].scale(scalar),
            self.cols[2].scale(scalar),
        )
    }

    /// Matrix-vector product `self * v`.
    pub fn mul_vec(&self, v: &Vec3) -> Vec3 {
        self.cols[0]
            .scale(v.x())
            .add(&self.cols[1].scale(v.y()))
            .add(&self.cols[2].scale(v.z()))
    }

    /// Matrix product `self * rhs`: `self` applied to each column of `rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_cols(
            self.mul_vec(&rhs.cols[0]),
            self.mul_vec(&rhs.cols[1]),
            self.mul_vec(&rhs.cols[2]),
        )
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    /// Determinant via the scalar triple product `c0 · (c1 × c2)`.
    pub fn determinant(&self) -> f32 {
        self.cols[0].dot(&self.cols[1].cross(&self.cols[2]))
    }

    /// Returns `true` when every element differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (0..3).all(|i| self.cols[i].approx_eq(&other.cols[i], tolerance))
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[Vec3; 3]> for Mat3 {
    fn from(cols: [Vec3; 3]) -> Self {
        Self { cols }
    }
}

impl core::ops::Add for Mat3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::add(&self, &rhs)
    }
}

impl core::ops::Sub for Mat3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.mul_vec(&rhs)
    }
}

impl core::ops::Mul<f32> for Mat3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}
