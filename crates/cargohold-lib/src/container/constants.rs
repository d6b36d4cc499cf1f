//! Loading-rule constants shared by the container variants.

/// Fraction of capacity a liquid container may hold when the cargo is hazardous.
pub const LIQUID_HAZARDOUS_FILL_RATIO: f64 = 0.5;

/// Fraction of capacity a liquid container is filled to before clamping.
pub const LIQUID_SAFE_FILL_RATIO: f64 = 0.9;

/// Fraction of the cargo mass a gas container keeps after being emptied.
/// Residual gas cannot be fully purged.
pub const GAS_RESIDUAL_FRACTION: f64 = 0.05;

/// Lowest required cargo temperature a refrigerated container can hold (°C).
pub const MIN_REFRIGERATION_TEMP_C: f64 = -30.0;

/// Highest required cargo temperature a refrigerated container can hold (°C).
pub const MAX_REFRIGERATION_TEMP_C: f64 = 30.0;
