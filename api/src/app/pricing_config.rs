//! Pricing configuration constants
//!
//! Coefficients of the rule-based fallback formula and defaults for the
//! depreciation projector.

/// Base price of a model-year-2000 vehicle with zero age
pub const BASE_PRICE: f64 = 15_000.0;

/// Model year the base price refers to
pub const BASE_MODEL_YEAR: i32 = 2000;

/// Price added per model year after the base year
pub const PER_MODEL_YEAR: f64 = 500.0;

/// Price removed per year of age
pub const PER_YEAR_OF_AGE: f64 = 800.0;

/// Fuel adjustment for electric vehicles
pub const ELECTRIC_BONUS: f64 = 3_000.0;

/// Fuel adjustment for hybrid vehicles
pub const HYBRID_BONUS: f64 = 1_500.0;

/// Fuel adjustment for diesel vehicles (negative)
pub const DIESEL_PENALTY: f64 = -500.0;

/// Adjustment for an automatic gearbox
pub const AUTOMATIC_BONUS: f64 = 500.0;

/// Adjustment for a clean title
pub const CLEAN_TITLE_BONUS: f64 = 1_000.0;

/// Adjustment for a non-clean title (negative)
pub const DIRTY_TITLE_PENALTY: f64 = -2_000.0;

/// Minimum price the fallback formula will return
pub const PRICE_FLOOR: f64 = 5_000.0;

/// Continuous yearly depreciation rate (10% per year)
pub const DEFAULT_YEARLY_RATE: f64 = 0.10;

/// Projection horizon when none is requested
pub const DEFAULT_HORIZON_MONTHS: i32 = 12;
