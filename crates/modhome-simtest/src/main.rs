//! Modhome Headless Validation Harness
//!
//! Validates the pure floor-plan engine and its catalog data without the
//! web canvas. Runs entirely in-process — no DOM, no rendering, no network.
//!
//! Usage:
//!   cargo run -p modhome-simtest
//!   cargo run -p modhome-simtest -- --verbose

use modhome_logic::builder::{AddRoomTarget, FloorPlanBuilder, MoveOutcome, PlacementOutcome};
use modhome_logic::catalog::{room_library, RoomType};
use modhome_logic::geometry::{fits_within_module, rects_overlap, snap_to_grid, Rect};
use modhome_logic::movement::move_room_with_collision;
use modhome_logic::placement::{find_available_position, find_collision};
use modhome_logic::plan::{Dimensions, FloorPlan, Module, ModuleType, Position, Room};
use modhome_logic::pricing::{estimated_price, total_sqft};
use modhome_logic::templates;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

// ── Room catalog (same JSON the site build consumes) ────────────────────
const CATALOG_JSON: &str = include_str!("../../../data/room_catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogSpec {
    room_type: RoomType,
    label: String,
    category: String,
    width: f32,
    length: f32,
    multi_story: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Modhome Floor-Plan Harness ===\n");

    let mut results = Vec::new();

    // 1. Room catalog data file vs compiled catalog
    results.extend(validate_room_catalog());

    // 2. Geometry sweeps
    results.extend(validate_geometry());

    // 3. Placement search
    results.extend(validate_placement());

    // 4. Collision-resolving movement
    results.extend(validate_movement());

    // 5. Template catalog
    results.extend(validate_templates());

    // 6. Builder intent scenarios
    results.extend(validate_builder());

    // 7. Seeded random intent sweep
    results.extend(random_intent_sweep());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Shared fixtures ─────────────────────────────────────────────────────

fn probe_room(id: u32, module_id: u32, x: f32, y: f32, w: f32, l: f32) -> Room {
    Room {
        id,
        room_type: RoomType::Office,
        name: "Office".to_string(),
        dimensions: Dimensions::new(w, l),
        position: Position::new(x, y),
        module_id,
        is_multi_story: false,
        levels: None,
    }
}

fn bare_module(id: u32, w: f32, l: f32, rooms: Vec<Room>) -> Module {
    Module {
        id,
        module_type: ModuleType::Standard,
        dimensions: Dimensions::new(w, l),
        position: Position::ORIGIN,
        level: 1,
        rooms,
    }
}

// ── 1. Room catalog ─────────────────────────────────────────────────────

fn validate_room_catalog() -> Vec<TestResult> {
    println!("--- Room Catalog ---");
    let mut results = Vec::new();

    let catalog: Vec<CatalogSpec> = match serde_json::from_str(CATALOG_JSON) {
        Ok(c) => c,
        Err(e) => {
            results.push(check(
                "catalog_parse",
                false,
                format!("JSON parse error: {}", e),
            ));
            return results;
        }
    };

    results.push(check(
        "catalog_complete",
        catalog.len() == RoomType::ALL.len(),
        format!("{} of {} room types", catalog.len(), RoomType::ALL.len()),
    ));

    let size_mismatches: Vec<&CatalogSpec> = catalog
        .iter()
        .filter(|spec| {
            spec.room_type.standard_size() != Dimensions::new(spec.width, spec.length)
        })
        .collect();
    results.push(check(
        "catalog_sizes_match",
        size_mismatches.is_empty(),
        if size_mismatches.is_empty() {
            "all standard sizes agree with the data file".into()
        } else {
            format!(
                "mismatched: {}",
                size_mismatches
                    .iter()
                    .map(|s| s.label.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        },
    ));

    let story_mismatches = catalog
        .iter()
        .filter(|spec| spec.room_type.is_multi_story() != spec.multi_story)
        .count();
    results.push(check(
        "catalog_multi_story_flags",
        story_mismatches == 0,
        format!("{} mismatched multi-story flags", story_mismatches),
    ));

    let library = room_library();
    let library_mismatches = catalog
        .iter()
        .filter(|spec| {
            !library.iter().any(|e| {
                e.room_type == spec.room_type && e.label == spec.label && e.category == spec.category
            })
        })
        .count();
    results.push(check(
        "catalog_matches_library",
        library_mismatches == 0,
        format!("{} entries missing from the library", library_mismatches),
    ));

    results
}

// ── 2. Geometry ─────────────────────────────────────────────────────────

fn validate_geometry() -> Vec<TestResult> {
    println!("--- Geometry ---");
    let mut results = Vec::new();

    // Overlap symmetry over a deterministic sweep of rectangle pairs
    let mut asymmetric = 0;
    let mut pairs = 0;
    for ax in 0..6 {
        for ay in 0..6 {
            for bx in 0..6 {
                for by in 0..6 {
                    let a = Rect::new(ax as f32 * 3.0, ay as f32 * 3.0, 5.0, 7.0);
                    let b = Rect::new(bx as f32 * 3.0, by as f32 * 3.0, 7.0, 5.0);
                    pairs += 1;
                    if rects_overlap(&a, &b) != rects_overlap(&b, &a) {
                        asymmetric += 1;
                    }
                }
            }
        }
    }
    results.push(check(
        "overlap_symmetry",
        asymmetric == 0,
        format!("{} asymmetric of {} pairs", asymmetric, pairs),
    ));

    let touching = !rects_overlap(
        &Rect::new(0.0, 0.0, 10.0, 10.0),
        &Rect::new(10.0, 0.0, 10.0, 10.0),
    ) && !rects_overlap(
        &Rect::new(0.0, 0.0, 10.0, 10.0),
        &Rect::new(0.0, 10.0, 10.0, 10.0),
    );
    results.push(check(
        "touching_edges_no_overlap",
        touching,
        "edge-adjacent rooms do not collide".into(),
    ));

    let snapped = snap_to_grid(Position::new(5.0, 6.1), 4.0);
    results.push(check(
        "snap_rounds_to_grid",
        snapped == Position::new(4.0, 8.0),
        format!("(5.0, 6.1) → ({}, {})", snapped.x, snapped.y),
    ));

    results
}

// ── 3. Placement ────────────────────────────────────────────────────────

fn validate_placement() -> Vec<TestResult> {
    println!("--- Placement Search ---");
    let mut results = Vec::new();

    // First-match tie-break in iteration order
    let candidate = probe_room(1, 1, 5.0, 5.0, 10.0, 10.0);
    let others = vec![
        probe_room(2, 1, 30.0, 30.0, 5.0, 5.0),
        probe_room(3, 1, 8.0, 8.0, 4.0, 4.0),
        probe_room(4, 1, 6.0, 6.0, 4.0, 4.0),
    ];
    let hit = find_collision(&candidate, &others, None).map(|r| r.id);
    results.push(check(
        "collision_first_match",
        hit == Some(3),
        format!("hit = {:?}", hit),
    ));

    // Append-after-content scan
    let module = bare_module(1, 16.0, 65.0, vec![]);
    let existing = vec![probe_room(2, 1, 0.0, 0.0, 8.0, 8.0)];
    let pos = find_available_position(&probe_room(1, 1, 0.0, 0.0, 4.0, 4.0), &module, &existing, 4.0, None);
    results.push(check(
        "placement_appends_after_content",
        pos == Some(Position::new(12.0, 12.0)),
        format!("position = {:?}", pos),
    ));

    // Fully occupied module exhausts the search
    let full = bare_module(1, 16.0, 16.0, vec![]);
    let occupant = vec![probe_room(2, 1, 0.0, 0.0, 16.0, 16.0)];
    let pos = find_available_position(&probe_room(1, 1, 0.0, 0.0, 12.0, 12.0), &full, &occupant, 4.0, None);
    results.push(check(
        "placement_exhaustion_returns_none",
        pos.is_none(),
        format!("position = {:?}", pos),
    ));

    // Any found position is in-bounds and collision-free, across a sweep of
    // partially filled modules
    let mut bad = 0;
    let mut found = 0;
    for occupied_rows in 0..4 {
        let rooms: Vec<Room> = (0..occupied_rows)
            .map(|i| probe_room(10 + i, 1, 0.0, i as f32 * 16.0, 16.0, 16.0))
            .collect();
        let module = bare_module(1, 16.0, 65.0, vec![]);
        for (w, l) in [(4.0, 4.0), (8.0, 8.0), (12.0, 12.0), (16.0, 16.0)] {
            let probe = probe_room(1, 1, 0.0, 0.0, w, l);
            if let Some(pos) = find_available_position(&probe, &module, &rooms, 4.0, None) {
                found += 1;
                let mut placed = probe.clone();
                placed.position = pos;
                if !fits_within_module(&placed, &module)
                    || find_collision(&placed, &rooms, None).is_some()
                {
                    bad += 1;
                }
            }
        }
    }
    results.push(check(
        "placement_results_valid",
        bad == 0,
        format!("{} invalid of {} found positions", bad, found),
    ));

    results
}

// ── 4. Movement ─────────────────────────────────────────────────────────

fn validate_movement() -> Vec<TestResult> {
    println!("--- Collision-Resolving Movement ---");
    let mut results = Vec::new();

    let module = bare_module(1, 30.0, 30.0, vec![]);

    // Larger x-overlap pushes the collider flush right
    let a = probe_room(1, 1, 0.0, 0.0, 10.0, 10.0);
    let b = probe_room(2, 1, 12.0, 8.0, 10.0, 10.0);
    let res = move_room_with_collision(&a, Position::new(5.0, 0.0), &module, &[a.clone(), b.clone()]);
    let pushed_right = res.pushed_rooms.len() == 1
        && res.pushed_rooms[0].position == Position::new(15.0, 8.0);
    results.push(check(
        "push_flush_right",
        pushed_right,
        format!("pushed = {:?}", res.pushed_rooms.iter().map(|r| r.position).collect::<Vec<_>>()),
    ));

    // Column-aligned collider gets the vertical push
    let b = probe_room(2, 1, 12.0, 0.0, 10.0, 10.0);
    let res = move_room_with_collision(&a, Position::new(5.0, 0.0), &module, &[a.clone(), b.clone()]);
    let pushed_down = res.pushed_rooms.len() == 1
        && res.pushed_rooms[0].position == Position::new(12.0, 10.0);
    results.push(check(
        "push_column_down",
        pushed_down,
        format!("pushed = {:?}", res.pushed_rooms.iter().map(|r| r.position).collect::<Vec<_>>()),
    ));

    // Out-of-bounds target is clamped per axis
    let res = move_room_with_collision(&a, Position::new(25.0, -5.0), &module, &[a.clone()]);
    results.push(check(
        "move_clamps_to_bounds",
        res.updated_room.position == Position::new(20.0, 0.0),
        format!("position = {:?}", res.updated_room.position),
    ));

    results
}

// ── 5. Templates ────────────────────────────────────────────────────────

fn validate_templates() -> Vec<TestResult> {
    println!("--- Templates ---");
    let mut results = Vec::new();

    let plans = templates::default_plans();
    results.push(check(
        "three_default_templates",
        plans.len() == 3,
        format!("{} templates", plans.len()),
    ));

    let sqft_ok = plans
        .iter()
        .all(|p| total_sqft(&p.modules) == p.total_sqft);
    results.push(check(
        "template_sqft_consistent",
        sqft_ok,
        "advertised sqft matches module footprints".into(),
    ));

    let lookup_ok = plans.iter().all(|p| templates::by_id(&p.id).is_some())
        && templates::by_id("no-such-plan").is_none();
    results.push(check(
        "template_lookup",
        lookup_ok,
        "by_id finds each template and rejects unknown ids".into(),
    ));

    // Isolation: mutating a loaded instance leaves a second load untouched
    let template = templates::sugarline_65();
    let mut first = FloorPlanBuilder::new();
    let mut second = FloorPlanBuilder::new();
    first.load_template(&template);
    second.load_template(&template);
    first.delete_room(1);
    let isolated = second.plan().room_count() == 4 && template.modules[0].rooms.len() == 4;
    results.push(check(
        "template_isolation",
        isolated,
        format!(
            "second = {} rooms, template = {} rooms",
            second.plan().room_count(),
            template.modules[0].rooms.len()
        ),
    ));

    results
}

// ── 6. Builder scenarios ────────────────────────────────────────────────

fn validate_builder() -> Vec<TestResult> {
    println!("--- Builder Intents ---");
    let mut results = Vec::new();

    // Simple add on an empty plan
    let mut builder = FloorPlanBuilder::new();
    let outcome = builder.add_room(RoomType::Kitchen, AddRoomTarget::FirstAvailable);
    let plan = builder.plan();
    let simple_add_ok = outcome.created_module
        && plan.modules.len() == 1
        && plan.room(outcome.room_id).map(|r| r.position) == Some(Position::ORIGIN)
        && plan.total_sqft == 1040.0
        && plan.estimated_price == 236_000.0;
    results.push(check(
        "simple_add_scenario",
        simple_add_ok,
        format!(
            "sqft = {}, price = {}",
            plan.total_sqft, plan.estimated_price
        ),
    ));

    // Exhausted search falls back to the origin without rejecting the add
    let full_plan = FloorPlan {
        modules: vec![bare_module(
            1,
            16.0,
            16.0,
            vec![probe_room(1, 1, 0.0, 0.0, 16.0, 16.0)],
        )],
        ..FloorPlan::custom()
    };
    let mut builder = FloorPlanBuilder::new();
    builder.load_template(&full_plan);
    let outcome = builder.add_room(RoomType::Office, AddRoomTarget::FirstAvailable);
    let fallback_ok = outcome.placement == PlacementOutcome::FallbackOrigin
        && builder.plan().room_count() == 2;
    results.push(check(
        "exhausted_search_fallback",
        fallback_ok,
        format!("placement = {:?}", outcome.placement),
    ));

    // Unknown ids are no-ops
    let mut builder = FloorPlanBuilder::new();
    builder.load_template(&templates::sugarline_65());
    let before = builder.plan().clone();
    let noop_ok = builder.move_room(999, 20.0, 20.0) == MoveOutcome::RoomNotFound
        && !builder.delete_room(999)
        && builder.plan() == &before;
    results.push(check(
        "unknown_ids_are_noops",
        noop_ok,
        "move and delete of unknown rooms change nothing".into(),
    ));

    results
}

// ── 7. Random intent sweep ──────────────────────────────────────────────

fn random_intent_sweep() -> Vec<TestResult> {
    println!("--- Random Intent Sweep ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(42);
    let mut builder = FloorPlanBuilder::new();

    let mut intents = 0;
    let mut aggregate_violations = 0;
    let mut bounds_violations = 0;

    for step in 0..500 {
        let roll: u8 = rng.gen_range(0..10);
        if roll < 5 {
            let room_type = RoomType::ALL[rng.gen_range(0..RoomType::ALL.len())];
            builder.add_room(room_type, AddRoomTarget::FirstAvailable);
        } else if roll < 8 {
            let ids: Vec<u32> = builder
                .plan()
                .modules
                .iter()
                .flat_map(|m| m.rooms.iter().map(|r| r.id))
                .collect();
            if !ids.is_empty() {
                let id = ids[rng.gen_range(0..ids.len())];
                let dx = rng.gen_range(-200.0f32..200.0);
                let dy = rng.gen_range(-200.0f32..200.0);
                builder.move_room(id, dx, dy);
            }
        } else {
            let ids: Vec<u32> = builder
                .plan()
                .modules
                .iter()
                .flat_map(|m| m.rooms.iter().map(|r| r.id))
                .collect();
            if !ids.is_empty() {
                builder.delete_room(ids[rng.gen_range(0..ids.len())]);
            }
        }
        intents += 1;

        let plan = builder.plan();
        let sqft = total_sqft(&plan.modules);
        if plan.total_sqft != sqft
            || plan.estimated_price != estimated_price(plan.modules.len(), sqft)
        {
            aggregate_violations += 1;
        }
        // Rooms in a fresh custom plan land in synthesized 16×65 modules;
        // every committed room must fit its module (fallback origin included).
        for module in &plan.modules {
            for room in &module.rooms {
                if !fits_within_module(room, module) {
                    if bounds_violations == 0 {
                        println!(
                            "  first violation at step {}: room {} at {:?}",
                            step, room.id, room.position
                        );
                    }
                    bounds_violations += 1;
                }
            }
        }
    }

    results.push(check(
        "sweep_aggregates_consistent",
        aggregate_violations == 0,
        format!(
            "{} violations over {} intents",
            aggregate_violations, intents
        ),
    ));
    results.push(check(
        "sweep_rooms_in_bounds",
        bounds_violations == 0,
        format!("{} out-of-bounds room states", bounds_violations),
    ));

    results
}
