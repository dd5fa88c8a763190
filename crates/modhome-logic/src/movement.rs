//! Collision-resolving room movement.
//!
//! Algorithm: "clamp then push"
//! 1. Tentatively relocate the room to the requested position
//! 2. Clamp the position into module bounds on each axis independently
//! 3. Collect every same-module room overlapping the clamped rectangle
//! 4. Push each collider flush against the moved room's edge, along
//!    whichever axis has the larger overlap, then clamp the collider too
//!
//! Resolution is single-pass: pushed rooms are not re-checked against their
//! own new neighbors. Secondary overlaps are left for the next drag, which
//! keeps move outcomes stable for saved plans.

use crate::geometry::{clamp_to_module, rects_overlap, room_rect};
use crate::plan::{Module, Position, Room};

/// Result of a collision-resolving move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResolution {
    /// The moved room with its final (clamped) position.
    pub updated_room: Room,
    /// Colliders displaced out of the way, with their new positions.
    /// Rooms not listed here were untouched.
    pub pushed_rooms: Vec<Room>,
}

/// Move `room` to `new_position` inside `module`, pushing any same-module
/// rooms it now overlaps. `all_rooms` is the module's room collection; the
/// moved room itself is skipped by id. The caller merges `updated_room` and
/// `pushed_rooms` back over the untouched remainder.
pub fn move_room_with_collision(
    room: &Room,
    new_position: Position,
    module: &Module,
    all_rooms: &[Room],
) -> MoveResolution {
    let mut updated_room = room.clone();
    updated_room.position = clamp_to_module(new_position, room.dimensions, module);

    let moved_rect = room_rect(&updated_room);
    let mut pushed_rooms = Vec::new();

    for other in all_rooms {
        if other.id == room.id || other.module_id != room.module_id {
            continue;
        }
        let other_rect = room_rect(other);
        if !rects_overlap(&moved_rect, &other_rect) {
            continue;
        }

        // Overlap depth along each axis, measured from the moved room's
        // trailing edge into the collider.
        let push_x = moved_rect.right() - other_rect.x;
        let push_y = moved_rect.bottom() - other_rect.y;

        // Push along the axis with the larger overlap, landing the collider
        // flush against the moved room's edge.
        let target = if push_x > push_y {
            Position::new(moved_rect.right(), other_rect.y)
        } else {
            Position::new(other_rect.x, moved_rect.bottom())
        };

        let mut pushed = other.clone();
        pushed.position = clamp_to_module(target, other.dimensions, module);
        pushed_rooms.push(pushed);
    }

    MoveResolution {
        updated_room,
        pushed_rooms,
    }
}
