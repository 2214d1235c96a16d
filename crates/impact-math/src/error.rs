// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors reported by the checked constructors in this crate.
///
/// Arithmetic itself never fails; these only surface when a caller asks for
/// validation (for example [`crate::Basis::try_from_matrix`]).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The matrix columns are not unit length and mutually orthogonal.
    #[error("basis is not orthonormal (max deviation {deviation})")]
    NotOrthonormal {
        /// Largest absolute deviation found in `MᵀM - I`.
        deviation: f32,
    },
    /// The columns are orthonormal but form a left-handed frame.
    #[error("basis is left-handed (determinant {determinant})")]
    LeftHanded {
        /// Determinant of the rejected matrix.
        determinant: f32,
    },
}
