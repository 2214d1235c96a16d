// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Numeric thresholds used by the narrow phase.
///
/// The defaults suit float32 poses in the ±10⁴ range. Behind the `serde`
/// feature the config round-trips through JSON; absent fields take their
/// default.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct NarrowConfig {
    /// Edge-edge axes (`a_i × b_j`) shorter than this are treated as parallel
    /// edges and skipped; the face axes already cover that direction.
    pub degenerate_axis_epsilon: f32,
    /// Per-axis relative displacements with magnitude at or below this are
    /// treated as zero by the swept box test (no division is performed).
    pub velocity_epsilon: f32,
}

impl NarrowConfig {
    /// Default thresholds.
    pub const DEFAULT: Self = Self {
        degenerate_axis_epsilon: 1e-5,
        velocity_epsilon: 1e-9,
    };

    /// Parses a config from JSON; absent fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, crate::GeomError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialises the config as pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String, crate::GeomError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for NarrowConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
