//! Cargohold library entry points.
//!
//! This crate models cargo containers and the ship that carries them. It
//! enforces per-variant loading rules (capacity limits, hazard thresholds,
//! refrigeration temperatures) and the ship's count and weight limits.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cargo;
pub mod config;
pub mod container;
pub mod error;
pub mod fleet;
pub mod ship;

pub use cargo::{Cargo, HAZARDOUS_KIND};
pub use config::{default_config_path, resolve_ship_config, ShipConfig, SHIP_CONFIG_ENV};
pub use container::{
    Container, ContainerKind, ContainerType, FillWarning, HazardAlert, HazardNotifier,
};
pub use error::{Error, Result};
pub use fleet::{FleetManager, Outcome};
pub use ship::{ContainerSummary, Ship, ShipSummary};
