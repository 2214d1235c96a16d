// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::{aabb::Aabb, obb::Obb, segment::Segment};

/// Segment versus AABB.
///
/// Separating-axis test over the three box faces plus the three cross
/// products of the segment direction with the box axes. Both inputs must be
/// in the same frame. The segment direction is expected to be unit length.
pub fn aabb_segment_overlap(segment: &Segment, aabb: &Aabb) -> bool {
    let t = segment.midpoint().sub(&aabb.center());
    let dir = segment.direction();
    let dir_abs = dir.abs();
    let e = aabb.half_extents();
    let hl = segment.half_length();

    for i in 0..3 {
        if t.component(i).abs() > e.component(i) + hl * dir_abs.component(i) {
            return false;
        }
    }

    // The segment projects to a point on these axes.
    let cross = t.cross(&dir);
    let radii = [
        e.y() * dir_abs.z() + e.z() * dir_abs.y(),
        e.x() * dir_abs.z() + e.z() * dir_abs.x(),
        e.x() * dir_abs.y() + e.y() * dir_abs.x(),
    ];
    (0..3).all(|i| cross.component(i).abs() <= radii[i])
}

/// Segment versus OBB. The segment is given in world space and tested in the
/// box's local frame.
pub fn obb_segment_overlap(obb: &Obb, segment: &Segment) -> bool {
    aabb_segment_overlap(&segment.to_local(&obb.frame()), &obb.local_aabb())
}
