// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Temporal types for swept (continuous) queries.
//!
//! A simulation step is normalised to `u ∈ [0, 1]`: `u = 0` is the previous
//! frame's pose, `u = 1` the current one. Motion within a step is assumed
//! linear.

#[doc = "Previous/current centre pair over one step."]
pub mod motion;
