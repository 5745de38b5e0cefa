//! Stable defaults shared by the filter controls and the clear action.

/// Price-ceiling control default, also the clear-filters reset value.
pub const DEFAULT_MAX_PRICE: f64 = 500.0;

/// Quiet period for the free-text search control.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Cards without a price sort last under price-low.
pub const PRICE_LOW_SENTINEL: f64 = 999_999.0;
