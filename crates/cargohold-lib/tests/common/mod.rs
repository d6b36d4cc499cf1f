//! Shared fixtures for cargohold integration tests.

#![allow(dead_code)]

use cargohold_lib::{Cargo, Container, Ship};

/// Tolerance for floating-point mass comparisons.
pub const EPSILON: f64 = 1e-9;

pub fn assert_mass(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected mass {expected}, got {actual}"
    );
}

pub fn cargo(kind: &str, mass: f64) -> Cargo {
    Cargo::new(kind, mass).expect("valid cargo")
}

/// The demo ship: five containers, 5000 total weight.
pub fn demo_ship() -> Ship {
    Ship::new("Ship1", 50.0, 5, 5000.0).expect("valid ship")
}

pub fn liquid_l123() -> Container {
    Container::liquid("L123", 1000.0, 200.0, 5.0).expect("valid liquid container")
}

pub fn gas_g456() -> Container {
    Container::gas("G456", 800.0, 150.0, 3.0).expect("valid gas container")
}

pub fn refrigerated_r789() -> Container {
    Container::refrigerated("R789", 1200.0, 300.0).expect("valid refrigerated container")
}

pub fn basic(serial: &str, capacity: f64, tare: f64) -> Container {
    Container::basic(serial, capacity, tare).expect("valid basic container")
}
