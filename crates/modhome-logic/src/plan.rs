//! Floor-plan data model — rooms, modules, and the plan aggregate.
//!
//! A [`Module`] is a rectangular structural "box", the unit of factory
//! construction. A [`Room`] is a rectangular occupant of one module,
//! positioned relative to that module's origin. A [`FloorPlan`] is the full
//! assembly plus derived metrics that are recomputed after every mutation.

use serde::{Deserialize, Serialize};

use crate::catalog::RoomType;

/// A point in feet, relative to the owning module's origin (for rooms) or
/// the plan origin (for modules).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width × length in feet. Length runs along the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub length: f32,
}

impl Dimensions {
    pub fn new(width: f32, length: f32) -> Self {
        Self { width, length }
    }

    pub fn area(&self) -> f32 {
        self.width * self.length
    }
}

/// A named rectangular space within a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub room_type: RoomType,
    pub name: String,
    pub dimensions: Dimensions,
    /// Offset from the owning module's origin, in feet.
    pub position: Position,
    pub module_id: u32,
    /// True for rooms that inherently span two vertical levels
    /// (vaulted living rooms, staircases).
    #[serde(default)]
    pub is_multi_story: bool,
    /// Floor levels this room spans. `None` means just the module's own level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<u8>>,
}

/// Structural classification of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Standard,
    Roof,
}

impl Default for ModuleType {
    fn default() -> Self {
        ModuleType::Standard
    }
}

/// A rectangular structural unit containing rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: u32,
    #[serde(default)]
    pub module_type: ModuleType,
    pub dimensions: Dimensions,
    /// Offset from the plan origin, in feet.
    pub position: Position,
    /// Floor level, 1 or 2.
    pub level: u8,
    pub rooms: Vec<Room>,
}

impl Module {
    /// Find a room in this module by id.
    pub fn room(&self, room_id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }
}

/// The aggregate root: all modules plus derived metrics.
///
/// `total_sqft` and `estimated_price` are pure functions of the modules and
/// must never drift from the geometry; the builder recomputes them after
/// every structural mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub modules: Vec<Module>,
    pub estimated_price: f32,
    pub total_sqft: f32,
}

impl FloorPlan {
    /// An empty custom plan, the starting state before any template is loaded.
    pub fn custom() -> Self {
        Self {
            id: "custom".to_string(),
            name: "Custom Plan".to_string(),
            description: String::new(),
            modules: Vec::new(),
            estimated_price: 0.0,
            total_sqft: 0.0,
        }
    }

    /// Find a module by id.
    pub fn module(&self, module_id: u32) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Find the module containing a given room.
    pub fn module_of_room(&self, room_id: u32) -> Option<&Module> {
        self.modules.iter().find(|m| m.room(room_id).is_some())
    }

    /// Find a room anywhere in the plan.
    pub fn room(&self, room_id: u32) -> Option<&Room> {
        self.modules.iter().find_map(|m| m.room(room_id))
    }

    /// Modules on a given floor level, for the level-filtered canvas view.
    pub fn modules_on_level(&self, level: u8) -> impl Iterator<Item = &Module> {
        self.modules.iter().filter(move |m| m.level == level)
    }

    /// Total number of rooms across all modules.
    pub fn room_count(&self) -> usize {
        self.modules.iter().map(|m| m.rooms.len()).sum()
    }
}
