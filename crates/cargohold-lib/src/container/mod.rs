//! Container variants, loading rules, and hazard notification.
//!
//! This module is organized into focused submodules:
//!
//! - [`model`] - The [`Container`] entity and its per-variant `load`/`empty` rules
//! - [`kind`] - Variant tags and per-variant attributes (pressure ratings)
//! - [`hazard`] - The optional hazard notification capability
//! - [`temperature`] - Required temperatures for refrigerated cargo
//! - [`constants`] - Fill ratios and temperature limits
//!
//! # Example
//!
//! ```
//! use cargohold_lib::{Cargo, Container};
//!
//! let mut tank = Container::liquid("L123", 1000.0, 200.0, 5.0).unwrap();
//! let warning = tank.load(&Cargo::new("milk", 950.0).unwrap()).unwrap();
//!
//! assert!(warning.is_some());
//! assert_eq!(tank.current_cargo_mass(), 900.0);
//! ```

pub mod constants;
pub mod hazard;
pub mod kind;
pub mod model;
pub mod temperature;

pub use constants::{
    GAS_RESIDUAL_FRACTION, LIQUID_HAZARDOUS_FILL_RATIO, LIQUID_SAFE_FILL_RATIO,
    MAX_REFRIGERATION_TEMP_C, MIN_REFRIGERATION_TEMP_C,
};
pub use hazard::{HazardAlert, HazardNotifier};
pub use kind::{ContainerKind, ContainerType, GasTank, LiquidTank};
pub use model::{Container, FillWarning};
pub use temperature::{known_cargo_kinds, required_temperature, REQUIRED_TEMPERATURES};
