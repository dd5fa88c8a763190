//! Derived plan metrics — square footage and the estimated price model.
//!
//! Pricing is module-based: square footage sums module footprints, not room
//! footprints, because the factory builds and prices whole boxes whether or
//! not the rooms tile them perfectly.

use crate::constants::pricing::{BASE_MODULE_PRICE, PRICE_PER_SQFT};
use crate::plan::Module;

/// Total square footage: sum of module width × length.
pub fn total_sqft(modules: &[Module]) -> f32 {
    modules.iter().map(|m| m.dimensions.area()).sum()
}

/// Linear price model: a base price per module plus finishes per square foot.
/// No premium tiers, no per-room-type pricing.
pub fn estimated_price(module_count: usize, sqft: f32) -> f32 {
    module_count as f32 * BASE_MODULE_PRICE + sqft * PRICE_PER_SQFT
}
