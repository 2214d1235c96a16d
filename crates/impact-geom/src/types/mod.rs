// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Bounding-volume value types consumed by the narrow phase.
//!
//! Conventions:
//! - Boxes are stored as a centre plus non-negative half-extents. Extents are
//!   a caller contract; only the `try_*` constructors check them.
//! - Oriented volumes embed an [`impact_math::Frame`] by value rather than
//!   extending it, so copying a box copies its pose.

#[doc = "Axis-aligned boxes (centre and half-extents)."]
pub mod aabb;
#[doc = "Oriented boxes (pose frame and half-extents)."]
pub mod obb;
#[doc = "Infinite planes (unit normal and signed offset)."]
pub mod plane;
#[doc = "Line segments (midpoint, unit direction, half-length)."]
pub mod segment;
#[doc = "Spheres (centre and radius)."]
pub mod sphere;
