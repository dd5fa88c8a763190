//! Layout constants — pricing model, module defaults, grid and canvas scale.
//!
//! All spatial quantities are in feet. The canvas scale converts the
//! presentation layer's pixel deltas into feet on the way into the engine.

pub mod pricing {
    /// Base price per module (factory construction, transport, set).
    pub const BASE_MODULE_PRICE: f32 = 80_000.0;
    /// Price per square foot for finishes.
    pub const PRICE_PER_SQFT: f32 = 150.0;
}

pub mod modules {
    /// Default module width in feet when a module is synthesized implicitly.
    pub const DEFAULT_WIDTH: f32 = 16.0;
    /// Default module length in feet.
    pub const DEFAULT_LENGTH: f32 = 65.0;
}

pub mod grid {
    /// Placement and drag-snap grid spacing in feet.
    ///
    /// One constant for both code paths: placement search and drag snapping
    /// must agree or rooms drift off the visual grid after a move.
    pub const GRID_FT: f32 = 4.0;
    /// Canvas scale: pixels per foot.
    pub const PX_PER_FOOT: f32 = 4.0;
}
