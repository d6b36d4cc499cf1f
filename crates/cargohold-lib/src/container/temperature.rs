//! Required storage temperatures for refrigerated cargo.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Cargo kinds a refrigerated container accepts, with their required
/// temperature in °C.
pub const REQUIRED_TEMPERATURES: [(&str, f64); 10] = [
    ("bananas", 13.3),
    ("chocolate", 18.0),
    ("fish", 2.0),
    ("meat", -15.0),
    ("ice cream", -18.0),
    ("frozen pizza", -30.0),
    ("cheese", 7.2),
    ("sausage", 5.0),
    ("butter", 20.5),
    ("egg", 19.0),
];

static TEMPERATURE_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| REQUIRED_TEMPERATURES.iter().copied().collect());

/// Look up the required temperature for a cargo kind. Matching is exact.
pub fn required_temperature(kind: &str) -> Option<f64> {
    TEMPERATURE_TABLE.get(kind).copied()
}

/// Cargo kinds known to the table, sorted by name.
pub fn known_cargo_kinds() -> Vec<&'static str> {
    let mut kinds: Vec<&'static str> = TEMPERATURE_TABLE.keys().copied().collect();
    kinds.sort_unstable();
    kinds
}
