//! Floor-plan builder — the orchestrator owning the mutable plan state.
//!
//! Routes the canvas intents (load template, add room, move room, delete
//! room) through the geometry, placement, and movement modules, and
//! recomputes the derived aggregates after every structural mutation so the
//! caller can re-render immediately with consistent metrics.
//!
//! Intent semantics:
//! - **Load template** deep-copies the template so later edits never reach
//!   back into the catalog's plan data.
//! - **Add room** resolves a target module (explicit target, else the first
//!   module, else a synthesized default module), then runs placement search.
//!   An exhausted search is non-fatal: the room lands at the origin and the
//!   outcome records the fallback so the caller may warn.
//! - **Move room** converts the pixel drag delta into feet, snaps it to the
//!   grid, and resolves collisions by pushing direct colliders.
//! - **Delete room** removes by id wherever the room lives; unknown ids are
//!   a no-op, as are move intents for unknown ids.

use serde::{Deserialize, Serialize};

use crate::catalog::RoomType;
use crate::constants::{grid, modules};
use crate::geometry::snap_to_grid;
use crate::movement::move_room_with_collision;
use crate::placement::find_available_position;
use crate::plan::{Dimensions, FloorPlan, Module, ModuleType, Position, Room};
use crate::pricing::{estimated_price, total_sqft};

/// Grid and canvas-scale configuration, shared by placement search and drag
/// snapping so the two code paths cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid spacing in feet.
    pub grid_ft: f32,
    /// Canvas scale in pixels per foot.
    pub px_per_foot: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_ft: grid::GRID_FT,
            px_per_foot: grid::PX_PER_FOOT,
        }
    }
}

/// Where an add-room intent should place the new room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRoomTarget {
    /// Dropped on the canvas: first existing module, else a new one.
    FirstAvailable,
    /// Dropped on a specific module.
    Module(u32),
}

/// How the placement search resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementOutcome {
    /// A collision-free, in-bounds grid position was found.
    Found(Position),
    /// Search exhausted; the room was placed at the origin and may overlap.
    FallbackOrigin,
}

/// Result of an add-room intent.
#[derive(Debug, Clone, PartialEq)]
pub struct AddRoomOutcome {
    pub room_id: u32,
    pub module_id: u32,
    /// True when no suitable module existed and one was synthesized.
    pub created_module: bool,
    pub placement: PlacementOutcome,
}

/// Result of a move-room intent.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    Moved {
        /// The moved room's final snapped, clamped position.
        position: Position,
        /// Ids of rooms displaced by push resolution.
        pushed: Vec<u32>,
    },
    /// Unknown room id: the intent is dropped.
    RoomNotFound,
}

/// Owns the editable plan, the selection, and id allocation.
#[derive(Debug, Clone)]
pub struct FloorPlanBuilder {
    plan: FloorPlan,
    selected_room: Option<u32>,
    grid: GridConfig,
    next_room_id: u32,
    next_module_id: u32,
}

impl Default for FloorPlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorPlanBuilder {
    /// Start from an empty custom plan.
    pub fn new() -> Self {
        Self {
            plan: FloorPlan::custom(),
            selected_room: None,
            grid: GridConfig::default(),
            next_room_id: 1,
            next_module_id: 1,
        }
    }

    /// Start from an empty custom plan with a non-default grid.
    pub fn with_grid(grid: GridConfig) -> Self {
        Self {
            grid,
            ..Self::new()
        }
    }

    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn selected_room(&self) -> Option<u32> {
        self.selected_room
    }

    /// Select a room for the info panel. Unknown ids clear the selection.
    pub fn select_room(&mut self, room_id: Option<u32>) {
        self.selected_room = room_id.filter(|id| self.plan.room(*id).is_some());
    }

    /// Replace the current plan with a deep copy of `template`, recompute
    /// aggregates, and clear the selection.
    pub fn load_template(&mut self, template: &FloorPlan) {
        self.plan = template.clone();
        self.selected_room = None;
        let max_room = self
            .plan
            .modules
            .iter()
            .flat_map(|m| m.rooms.iter().map(|r| r.id))
            .max()
            .unwrap_or(0);
        let max_module = self.plan.modules.iter().map(|m| m.id).max().unwrap_or(0);
        self.next_room_id = max_room + 1;
        self.next_module_id = max_module + 1;
        self.recompute_aggregates();
    }

    /// Add a room of `room_type` from the library.
    pub fn add_room(&mut self, room_type: RoomType, target: AddRoomTarget) -> AddRoomOutcome {
        let explicit = match target {
            AddRoomTarget::Module(id) => self.plan.modules.iter().position(|m| m.id == id),
            AddRoomTarget::FirstAvailable => None,
        };

        // Explicit target, else first module, else synthesize a default box.
        let (module_index, created_module) = match explicit {
            Some(index) => (index, false),
            None if !self.plan.modules.is_empty() => (0, false),
            None => {
                let module = Module {
                    id: self.next_module_id,
                    module_type: ModuleType::Standard,
                    dimensions: Dimensions::new(modules::DEFAULT_WIDTH, modules::DEFAULT_LENGTH),
                    position: Position::ORIGIN,
                    level: 1,
                    rooms: Vec::new(),
                };
                self.next_module_id += 1;
                self.plan.modules.push(module);
                (self.plan.modules.len() - 1, true)
            }
        };

        let module = &self.plan.modules[module_index];
        let is_multi_story = room_type.is_multi_story();
        let mut room = Room {
            id: self.next_room_id,
            room_type,
            name: room_type.display_name().to_string(),
            dimensions: room_type.standard_size(),
            position: Position::ORIGIN,
            module_id: module.id,
            is_multi_story,
            levels: is_multi_story.then(|| vec![1, 2]),
        };
        self.next_room_id += 1;

        let placement =
            match find_available_position(&room, module, &module.rooms, self.grid.grid_ft, None) {
                Some(pos) => {
                    room.position = pos;
                    PlacementOutcome::Found(pos)
                }
                // Non-fatal: keep the room at the origin rather than reject
                // the add. The caller can warn from the outcome.
                None => PlacementOutcome::FallbackOrigin,
            };

        let outcome = AddRoomOutcome {
            room_id: room.id,
            module_id: room.module_id,
            created_module,
            placement,
        };
        self.plan.modules[module_index].rooms.push(room);
        self.recompute_aggregates();
        outcome
    }

    /// Move a room by a pixel drag delta from the canvas.
    pub fn move_room(&mut self, room_id: u32, dx_px: f32, dy_px: f32) -> MoveOutcome {
        let located = self
            .plan
            .modules
            .iter()
            .enumerate()
            .find_map(|(i, m)| m.room(room_id).map(|r| (i, r.clone())));
        let Some((module_index, room)) = located else {
            return MoveOutcome::RoomNotFound;
        };

        let module = &self.plan.modules[module_index];

        let delta_ft = Position::new(dx_px / self.grid.px_per_foot, dy_px / self.grid.px_per_foot);
        let raw = Position::new(room.position.x + delta_ft.x, room.position.y + delta_ft.y);
        let snapped = snap_to_grid(raw, self.grid.grid_ft);

        let resolution = move_room_with_collision(&room, snapped, module, &module.rooms);
        let position = resolution.updated_room.position;
        let pushed: Vec<u32> = resolution.pushed_rooms.iter().map(|r| r.id).collect();

        // Merge: moved room first, then pushed rooms, then the untouched rest.
        let mut rooms = Vec::with_capacity(module.rooms.len());
        rooms.push(resolution.updated_room);
        let untouched: Vec<Room> = module
            .rooms
            .iter()
            .filter(|r| r.id != room_id && !pushed.contains(&r.id))
            .cloned()
            .collect();
        rooms.extend(resolution.pushed_rooms);
        rooms.extend(untouched);
        self.plan.modules[module_index].rooms = rooms;

        self.recompute_aggregates();
        MoveOutcome::Moved { position, pushed }
    }

    /// Delete a room by id. Returns false (and changes nothing) when the id
    /// is unknown.
    pub fn delete_room(&mut self, room_id: u32) -> bool {
        let before = self.plan.room_count();
        for module in &mut self.plan.modules {
            module.rooms.retain(|r| r.id != room_id);
        }
        let removed = self.plan.room_count() < before;
        if removed {
            if self.selected_room == Some(room_id) {
                self.selected_room = None;
            }
            self.recompute_aggregates();
        }
        removed
    }

    fn recompute_aggregates(&mut self) {
        self.plan.total_sqft = total_sqft(&self.plan.modules);
        self.plan.estimated_price = estimated_price(self.plan.modules.len(), self.plan.total_sqft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::fits_within_module;
    use crate::templates;

    fn plan_with_module(width: f32, length: f32, rooms: Vec<Room>) -> FloorPlan {
        FloorPlan {
            modules: vec![Module {
                id: 1,
                module_type: ModuleType::Standard,
                dimensions: Dimensions::new(width, length),
                position: Position::ORIGIN,
                level: 1,
                rooms,
            }],
            ..FloorPlan::custom()
        }
    }

    fn room(id: u32, room_type: RoomType, x: f32, y: f32, w: f32, l: f32) -> Room {
        Room {
            id,
            room_type,
            name: room_type.display_name().to_string(),
            dimensions: Dimensions::new(w, l),
            position: Position::new(x, y),
            module_id: 1,
            is_multi_story: false,
            levels: None,
        }
    }

    // --- Add room ---

    #[test]
    fn add_to_empty_plan_synthesizes_a_module() {
        let mut builder = FloorPlanBuilder::new();
        let outcome = builder.add_room(RoomType::Kitchen, AddRoomTarget::FirstAvailable);

        assert!(outcome.created_module);
        let plan = builder.plan();
        assert_eq!(plan.modules.len(), 1);
        assert_eq!(plan.modules[0].dimensions, Dimensions::new(16.0, 65.0));
        assert_eq!(plan.modules[0].level, 1);

        // A 15-wide kitchen only fits at x = 0, found by the origin scan
        let kitchen = plan.room(outcome.room_id).unwrap();
        assert_eq!(kitchen.position, Position::ORIGIN);
        assert_eq!(outcome.placement, PlacementOutcome::Found(Position::ORIGIN));

        assert_eq!(plan.total_sqft, 1040.0);
        assert_eq!(plan.estimated_price, 236_000.0);
    }

    #[test]
    fn add_prefers_the_explicit_target_module() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&templates::twinline_130());
        let outcome = builder.add_room(RoomType::Hallway, AddRoomTarget::Module(2));
        assert_eq!(outcome.module_id, 2);
        assert!(!outcome.created_module);
    }

    #[test]
    fn add_without_target_uses_the_first_module() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&templates::twinline_130());
        let outcome = builder.add_room(RoomType::Hallway, AddRoomTarget::FirstAvailable);
        assert_eq!(outcome.module_id, 1);
        assert!(!outcome.created_module);
    }

    #[test]
    fn added_room_is_in_bounds_or_at_fallback_origin() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&templates::sugarline_65());
        for room_type in [RoomType::Laundry, RoomType::Hallway, RoomType::Office] {
            let outcome = builder.add_room(room_type, AddRoomTarget::FirstAvailable);
            let plan = builder.plan();
            let module = plan.module(outcome.module_id).unwrap();
            let added = module.room(outcome.room_id).unwrap();
            match outcome.placement {
                PlacementOutcome::Found(_) => assert!(fits_within_module(added, module)),
                PlacementOutcome::FallbackOrigin => assert_eq!(added.position, Position::ORIGIN),
            }
        }
    }

    #[test]
    fn multi_story_room_types_span_both_levels() {
        let mut builder = FloorPlanBuilder::new();
        let outcome = builder.add_room(RoomType::Staircase, AddRoomTarget::FirstAvailable);
        let stair = builder.plan().room(outcome.room_id).unwrap();
        assert!(stair.is_multi_story);
        assert_eq!(stair.levels, Some(vec![1, 2]));

        let outcome = builder.add_room(RoomType::Office, AddRoomTarget::FirstAvailable);
        let office = builder.plan().room(outcome.room_id).unwrap();
        assert!(!office.is_multi_story);
        assert_eq!(office.levels, None);
    }

    #[test]
    fn exhausted_search_falls_back_to_origin() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&plan_with_module(
            16.0,
            16.0,
            vec![room(1, RoomType::Living, 0.0, 0.0, 16.0, 16.0)],
        ));
        let outcome = builder.add_room(RoomType::Office, AddRoomTarget::FirstAvailable);
        assert_eq!(outcome.placement, PlacementOutcome::FallbackOrigin);
        let added = builder.plan().room(outcome.room_id).unwrap();
        assert_eq!(added.position, Position::ORIGIN);
        // Documented overlap: the add is never rejected
        assert_eq!(builder.plan().room_count(), 2);
    }

    // --- Move room ---

    #[test]
    fn drag_delta_is_scaled_and_snapped() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&plan_with_module(
            30.0,
            30.0,
            vec![room(1, RoomType::Office, 0.0, 0.0, 10.0, 10.0)],
        ));
        // 18 px at 4 px/ft = 4.5 ft, snapped to 4; 39 px = 9.75 ft → 8
        let outcome = builder.move_room(1, 18.0, 39.0);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                position: Position::new(4.0, 8.0),
                pushed: vec![],
            }
        );
        assert_eq!(builder.plan().room(1).unwrap().position, Position::new(4.0, 8.0));
    }

    #[test]
    fn move_is_clamped_to_module_bounds() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&plan_with_module(
            30.0,
            30.0,
            vec![room(1, RoomType::Office, 0.0, 0.0, 10.0, 10.0)],
        ));
        let outcome = builder.move_room(1, 400.0, -80.0);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                position: Position::new(20.0, 0.0),
                pushed: vec![],
            }
        );
    }

    #[test]
    fn move_pushes_direct_colliders() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&plan_with_module(
            30.0,
            30.0,
            vec![
                room(1, RoomType::Office, 0.0, 0.0, 10.0, 10.0),
                room(2, RoomType::Office, 12.0, 8.0, 10.0, 10.0),
            ],
        ));
        // Room 1 lands at (4, 0); push_x and push_y tie at 2, and ties go
        // vertical, so room 2 drops flush under room 1's bottom edge.
        let outcome = builder.move_room(1, 16.0, 0.0);
        match outcome {
            MoveOutcome::Moved { position, pushed } => {
                assert_eq!(position, Position::new(4.0, 0.0));
                assert_eq!(pushed, vec![2]);
            }
            other => panic!("expected Moved, got {:?}", other),
        }
        assert_eq!(builder.plan().room(2).unwrap().position, Position::new(12.0, 10.0));
    }

    #[test]
    fn moving_an_unknown_room_is_a_noop() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&templates::sugarline_65());
        let before = builder.plan().clone();
        assert_eq!(builder.move_room(999, 40.0, 40.0), MoveOutcome::RoomNotFound);
        assert_eq!(builder.plan(), &before);
    }

    // --- Delete room ---

    #[test]
    fn delete_removes_the_room_and_clears_its_selection() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&templates::sugarline_65());
        builder.select_room(Some(2));
        assert_eq!(builder.selected_room(), Some(2));

        assert!(builder.delete_room(2));
        assert!(builder.plan().room(2).is_none());
        assert_eq!(builder.selected_room(), None);
    }

    #[test]
    fn deleting_an_unknown_room_is_a_noop() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&templates::sugarline_65());
        let before = builder.plan().clone();
        assert!(!builder.delete_room(999));
        assert_eq!(builder.plan(), &before);
    }

    #[test]
    fn selection_requires_an_existing_room() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&templates::sugarline_65());
        builder.select_room(Some(999));
        assert_eq!(builder.selected_room(), None);
    }

    // --- Templates and aggregates ---

    #[test]
    fn loading_a_template_recomputes_the_advertised_price() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&templates::sugarline_65());
        let plan = builder.plan();
        assert_eq!(plan.total_sqft, 1040.0);
        // Advertised 200k; the pricing model says 80k + 1040 × 150
        assert_eq!(plan.estimated_price, 236_000.0);
    }

    #[test]
    fn loaded_plans_are_independent_of_the_template() {
        let template = templates::sugarline_65();
        let mut a = FloorPlanBuilder::new();
        let mut b = FloorPlanBuilder::new();
        a.load_template(&template);
        b.load_template(&template);

        assert!(a.delete_room(1));
        assert_eq!(a.plan().room_count(), 3);
        assert_eq!(b.plan().room_count(), 4);
        assert_eq!(template.modules[0].rooms.len(), 4);
    }

    #[test]
    fn aggregates_stay_consistent_across_intents() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&templates::twinline_130());
        builder.add_room(RoomType::Laundry, AddRoomTarget::Module(2));
        builder.move_room(3, 8.0, 8.0);
        builder.delete_room(4);
        builder.add_room(RoomType::Hallway, AddRoomTarget::FirstAvailable);

        let plan = builder.plan();
        let expected_sqft = total_sqft(&plan.modules);
        assert_eq!(plan.total_sqft, expected_sqft);
        assert_eq!(
            plan.estimated_price,
            plan.modules.len() as f32 * 80_000.0 + expected_sqft * 150.0
        );
    }

    #[test]
    fn new_ids_do_not_collide_with_template_ids() {
        let mut builder = FloorPlanBuilder::new();
        builder.load_template(&templates::summit_stack());
        let outcome = builder.add_room(RoomType::Hallway, AddRoomTarget::FirstAvailable);
        assert!(builder
            .plan()
            .modules
            .iter()
            .flat_map(|m| &m.rooms)
            .filter(|r| r.id == outcome.room_id)
            .count()
            == 1);
        assert_eq!(outcome.room_id, 14);
    }
}
