//! Placement search — collision lookup and grid-based position finding.
//!
//! Algorithm for [`find_available_position`]:
//! 1. Try the preferred position if one was supplied
//! 2. Scan a grid starting just past the extent of existing rooms
//!    (new rooms append after current content, left-to-right, top-to-bottom)
//! 3. Fall back to the same scan from the module origin
//! 4. Return `None` only when even the fallback scan finds nothing
//!
//! The scan is row-major (y outer, x inner) with inclusive bounds, so the
//! step count is capped by the module's grid cell count and the search
//! always terminates.

use crate::geometry::{rects_overlap, room_rect, Rect};
use crate::plan::{Dimensions, Module, Position, Room};

/// Find the first room in `others` whose rectangle overlaps `room`'s,
/// skipping `exclude` if given. Ties break by iteration order.
pub fn find_collision<'a>(room: &Room, others: &'a [Room], exclude: Option<u32>) -> Option<&'a Room> {
    let rect = room_rect(room);
    others.iter().find(|other| {
        if exclude == Some(other.id) {
            return false;
        }
        rects_overlap(&rect, &room_rect(other))
    })
}

fn position_is_free(pos: Position, dims: Dimensions, module: &Module, existing: &[Room]) -> bool {
    let rect = Rect::new(pos.x, pos.y, dims.width, dims.length);
    let in_bounds = rect.x >= 0.0
        && rect.y >= 0.0
        && rect.right() <= module.dimensions.width
        && rect.bottom() <= module.dimensions.length;
    in_bounds && !existing.iter().any(|r| rects_overlap(&rect, &room_rect(r)))
}

/// Row-major grid scan over `[start_x..] × [start_y..]`, inclusive of the
/// last position where the room still fits.
fn scan_grid(
    start: Position,
    dims: Dimensions,
    module: &Module,
    existing: &[Room],
    grid: f32,
) -> Option<Position> {
    if grid <= 0.0 {
        // A zero or negative step would never advance the cursor.
        return None;
    }
    let max_x = module.dimensions.width - dims.width;
    let max_y = module.dimensions.length - dims.length;
    let mut y = start.y;
    while y <= max_y {
        let mut x = start.x;
        while x <= max_x {
            let pos = Position::new(x, y);
            if position_is_free(pos, dims, module, existing) {
                return Some(pos);
            }
            x += grid;
        }
        y += grid;
    }
    None
}

/// Find a non-colliding, in-bounds position for `room` inside `module`.
///
/// Prefers space after already-placed rooms so the layout reads as appended
/// content; falls back to an origin scan before giving up. Returns `None`
/// when no free grid position exists anywhere in the module.
pub fn find_available_position(
    room: &Room,
    module: &Module,
    existing: &[Room],
    grid: f32,
    preferred: Option<Position>,
) -> Option<Position> {
    let dims = room.dimensions;

    if let Some(pos) = preferred {
        if position_is_free(pos, dims, module, existing) {
            return Some(pos);
        }
    }

    // Extent of current content: max right edge and max bottom edge.
    let mut max_right: f32 = 0.0;
    let mut max_bottom: f32 = 0.0;
    for r in existing {
        max_right = max_right.max(r.position.x + r.dimensions.width);
        max_bottom = max_bottom.max(r.position.y + r.dimensions.length);
    }

    let extension_start = Position::new(max_right + grid, max_bottom + grid);
    if let Some(pos) = scan_grid(extension_start, dims, module, existing, grid) {
        return Some(pos);
    }

    scan_grid(Position::ORIGIN, dims, module, existing, grid)
}
