//! Pure floor-plan layout logic for the modular-home builder.
//!
//! This crate contains all layout logic that is independent of any UI
//! framework or backend. Functions take plain data and return results,
//! making them unit-testable and portable across the web canvas, native
//! tools, and any future front-end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`builder`] | Orchestrator: load-template / add-room / move-room / delete-room intents |
//! | [`catalog`] | Room types, standard sizes, display names, library listing |
//! | [`constants`] | Pricing model, default module size, grid and canvas scale |
//! | [`geometry`] | Rectangle overlap, module bounds, grid snapping, clamping |
//! | [`movement`] | Collision-resolving room move with push displacement |
//! | [`placement`] | Collision lookup and grid-based placement search |
//! | [`plan`] | Room / Module / FloorPlan data model |
//! | [`pricing`] | Square footage and estimated price over a plan's modules |
//! | [`templates`] | Default floor-plan templates (Sugarline 65, Twinline 130, Summit Stack) |

pub mod builder;
pub mod catalog;
pub mod constants;
pub mod geometry;
pub mod movement;
pub mod placement;
pub mod plan;
pub mod pricing;
pub mod templates;
