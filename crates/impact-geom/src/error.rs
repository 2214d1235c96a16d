// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Error type for checked volume constructors and configuration loading.
///
/// The collision queries themselves are total and never return this.
#[derive(Debug, Error)]
pub enum GeomError {
    /// A half-extent was negative.
    #[error("negative half-extent {value} on axis {axis}")]
    NegativeExtent {
        /// Axis index (`0 = x`, `1 = y`, `2 = z`).
        axis: usize,
        /// Offending value.
        value: f32,
    },
    /// Three points passed to `Plane::from_points` do not span a plane.
    #[error("plane points are collinear or coincident")]
    DegeneratePlane,
    /// A `NarrowConfig` document failed to parse.
    #[cfg(feature = "serde")]
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
