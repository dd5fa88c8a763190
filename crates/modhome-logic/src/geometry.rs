//! Rectangle geometry — overlap tests, module bounds, snapping, clamping.
//!
//! Everything here works on axis-aligned rectangles in feet. Overlap uses
//! strict inequalities on all four half-plane tests, so rooms that share an
//! edge do not count as colliding.

use serde::{Deserialize, Serialize};

use crate::plan::{Dimensions, Module, Position, Room};

/// Axis-aligned rectangle: origin at top-left, y growing down the module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// True iff the rectangles share positive-area intersection.
/// Touching edges do not overlap.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Project a room's position and dimensions into a rectangle.
pub fn room_rect(room: &Room) -> Rect {
    Rect::new(
        room.position.x,
        room.position.y,
        room.dimensions.width,
        room.dimensions.length,
    )
}

/// True iff the room's rectangle lies fully inside its module's footprint.
pub fn fits_within_module(room: &Room, module: &Module) -> bool {
    let rect = room_rect(room);
    rect.x >= 0.0
        && rect.y >= 0.0
        && rect.right() <= module.dimensions.width
        && rect.bottom() <= module.dimensions.length
}

/// Round each coordinate to the nearest multiple of `grid` (half rounds up).
pub fn snap_to_grid(position: Position, grid: f32) -> Position {
    Position::new(
        (position.x / grid).round() * grid,
        (position.y / grid).round() * grid,
    )
}

/// Clamp a room origin so a room of `dims` stays inside the module,
/// each axis independently.
pub fn clamp_to_module(position: Position, dims: Dimensions, module: &Module) -> Position {
    Position::new(
        position.x.clamp(0.0, module.dimensions.width - dims.width),
        position.y.clamp(0.0, module.dimensions.length - dims.length),
    )
}
