//! The container entity and its variant-specific loading rules.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cargo::Cargo;
use crate::error::{Error, Result};

use super::constants::{
    GAS_RESIDUAL_FRACTION, LIQUID_HAZARDOUS_FILL_RATIO, LIQUID_SAFE_FILL_RATIO,
    MAX_REFRIGERATION_TEMP_C, MIN_REFRIGERATION_TEMP_C,
};
use super::hazard::HazardNotifier;
use super::kind::{ContainerKind, ContainerType, GasTank, LiquidTank};
use super::temperature::required_temperature;

/// Non-fatal warning raised when a liquid container clamps its fill level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillWarning {
    pub serial_number: String,
    pub requested_mass: f64,
    pub loaded_mass: f64,
}

/// A cargo container. Created empty, mutated only through [`load`](Self::load)
/// and [`empty`](Self::empty).
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    serial_number: String,
    mass_capacity: f64,
    tare_weight: f64,
    current_cargo_mass: f64,
    kind: ContainerKind,
}

impl Container {
    /// Create a container of the given type. Liquid and gas containers
    /// require a pressure rating; it is ignored for the other types.
    pub fn new(
        container_type: ContainerType,
        serial_number: impl Into<String>,
        mass_capacity: f64,
        tare_weight: f64,
        pressure: Option<f64>,
    ) -> Result<Self> {
        let kind = match container_type {
            ContainerType::Basic => ContainerKind::Basic,
            ContainerType::Refrigerated => ContainerKind::Refrigerated,
            ContainerType::Liquid | ContainerType::Gas => {
                let pressure = pressure.ok_or_else(|| Error::InvalidContainer {
                    message: format!("{container_type} containers require a pressure rating"),
                })?;
                if !pressure.is_finite() || pressure < 0.0 {
                    return Err(Error::InvalidContainer {
                        message: "pressure must be finite and non-negative".to_string(),
                    });
                }
                if container_type == ContainerType::Liquid {
                    ContainerKind::Liquid(LiquidTank::new(pressure))
                } else {
                    ContainerKind::Gas(GasTank::new(pressure))
                }
            }
        };

        Self::with_kind(kind, serial_number.into(), mass_capacity, tare_weight)
    }

    pub fn basic(
        serial_number: impl Into<String>,
        mass_capacity: f64,
        tare_weight: f64,
    ) -> Result<Self> {
        Self::new(
            ContainerType::Basic,
            serial_number,
            mass_capacity,
            tare_weight,
            None,
        )
    }

    pub fn liquid(
        serial_number: impl Into<String>,
        mass_capacity: f64,
        tare_weight: f64,
        pressure: f64,
    ) -> Result<Self> {
        Self::new(
            ContainerType::Liquid,
            serial_number,
            mass_capacity,
            tare_weight,
            Some(pressure),
        )
    }

    pub fn gas(
        serial_number: impl Into<String>,
        mass_capacity: f64,
        tare_weight: f64,
        pressure: f64,
    ) -> Result<Self> {
        Self::new(
            ContainerType::Gas,
            serial_number,
            mass_capacity,
            tare_weight,
            Some(pressure),
        )
    }

    pub fn refrigerated(
        serial_number: impl Into<String>,
        mass_capacity: f64,
        tare_weight: f64,
    ) -> Result<Self> {
        Self::new(
            ContainerType::Refrigerated,
            serial_number,
            mass_capacity,
            tare_weight,
            None,
        )
    }

    fn with_kind(
        kind: ContainerKind,
        serial_number: String,
        mass_capacity: f64,
        tare_weight: f64,
    ) -> Result<Self> {
        let serial_number = serial_number.trim().to_string();
        if serial_number.is_empty() {
            return Err(Error::InvalidContainer {
                message: "serial number must not be empty".to_string(),
            });
        }
        if !mass_capacity.is_finite() || mass_capacity <= 0.0 {
            return Err(Error::InvalidContainer {
                message: "mass_capacity must be a finite positive number".to_string(),
            });
        }
        if !tare_weight.is_finite() || tare_weight < 0.0 {
            return Err(Error::InvalidContainer {
                message: "tare_weight must be finite and non-negative".to_string(),
            });
        }

        Ok(Self {
            serial_number,
            mass_capacity,
            tare_weight,
            current_cargo_mass: 0.0,
            kind,
        })
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn mass_capacity(&self) -> f64 {
        self.mass_capacity
    }

    pub fn tare_weight(&self) -> f64 {
        self.tare_weight
    }

    pub fn current_cargo_mass(&self) -> f64 {
        self.current_cargo_mass
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn container_type(&self) -> ContainerType {
        self.kind.container_type()
    }

    pub fn pressure(&self) -> Option<f64> {
        self.kind.pressure()
    }

    /// Cargo mass plus tare weight.
    pub fn gross_weight(&self) -> f64 {
        self.current_cargo_mass + self.tare_weight
    }

    /// Hazard notification capability, present only for liquid and gas containers.
    pub fn hazard_notifier(&self) -> Option<&dyn HazardNotifier> {
        match &self.kind {
            ContainerKind::Liquid(tank) => Some(tank),
            ContainerKind::Gas(tank) => Some(tank),
            ContainerKind::Basic | ContainerKind::Refrigerated => None,
        }
    }

    /// Load cargo, replacing whatever mass the container held before.
    ///
    /// Returns `Ok(Some(_))` when a liquid container accepted the cargo but
    /// clamped the loaded mass to its safe fill level.
    pub fn load(&mut self, cargo: &Cargo) -> Result<Option<FillWarning>> {
        match self.kind {
            ContainerKind::Basic | ContainerKind::Gas(_) => {
                self.ensure_within(cargo, self.mass_capacity)?;
                self.current_cargo_mass = cargo.mass();
                Ok(None)
            }
            ContainerKind::Liquid(_) => self.load_liquid(cargo),
            ContainerKind::Refrigerated => self.load_refrigerated(cargo),
        }
    }

    /// Empty the container. Gas containers keep a residual fraction.
    pub fn empty(&mut self) {
        self.current_cargo_mass = match self.kind {
            ContainerKind::Gas(_) => self.current_cargo_mass * GAS_RESIDUAL_FRACTION,
            _ => 0.0,
        };
    }

    fn load_liquid(&mut self, cargo: &Cargo) -> Result<Option<FillWarning>> {
        if cargo.is_hazardous() {
            self.ensure_within(cargo, self.mass_capacity * LIQUID_HAZARDOUS_FILL_RATIO)?;
            self.current_cargo_mass = cargo.mass();
            return Ok(None);
        }

        let safe_fill = self.mass_capacity * LIQUID_SAFE_FILL_RATIO;
        if cargo.mass() > safe_fill {
            warn!(
                serial_number = %self.serial_number,
                requested = cargo.mass(),
                loaded = safe_fill,
                "liquid container {} is being filled more than 90% of its capacity",
                self.serial_number
            );
            self.current_cargo_mass = safe_fill;
            return Ok(Some(FillWarning {
                serial_number: self.serial_number.clone(),
                requested_mass: cargo.mass(),
                loaded_mass: safe_fill,
            }));
        }

        self.current_cargo_mass = cargo.mass();
        Ok(None)
    }

    // Refrigerated loads are not checked against mass_capacity.
    fn load_refrigerated(&mut self, cargo: &Cargo) -> Result<Option<FillWarning>> {
        let temperature =
            required_temperature(cargo.kind()).ok_or_else(|| Error::UnknownCargoKind {
                kind: cargo.kind().to_string(),
            })?;

        if !(MIN_REFRIGERATION_TEMP_C..=MAX_REFRIGERATION_TEMP_C).contains(&temperature) {
            return Err(Error::TemperatureOutOfRange {
                kind: cargo.kind().to_string(),
                temperature,
            });
        }

        self.current_cargo_mass = cargo.mass();
        Ok(None)
    }

    fn ensure_within(&self, cargo: &Cargo, limit: f64) -> Result<()> {
        if cargo.mass() > limit {
            return Err(Error::OverCapacity {
                serial_number: self.serial_number.clone(),
                cargo_mass: cargo.mass(),
                limit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_container_starts_empty() {
        let container = Container::refrigerated("R789", 1200.0, 300.0).unwrap();
        assert_eq!(container.current_cargo_mass(), 0.0);
        assert_eq!(container.gross_weight(), 300.0);
        assert_eq!(container.pressure(), None);
    }

    #[test]
    fn pressurised_types_require_pressure() {
        let err = Container::new(ContainerType::Gas, "G1", 100.0, 10.0, None)
            .expect_err("gas without pressure");
        match err {
            Error::InvalidContainer { message } => assert!(message.contains("pressure")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_invalid_dimensions() {
        assert!(Container::basic("", 100.0, 10.0).is_err());
        assert!(Container::basic("B1", 0.0, 10.0).is_err());
        assert!(Container::basic("B1", 100.0, -1.0).is_err());
        assert!(Container::liquid("L1", 100.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn serial_number_is_trimmed() {
        let container = Container::basic("  B7 ", 100.0, 10.0).unwrap();
        assert_eq!(container.serial_number(), "B7");
    }

    #[test]
    fn loading_twice_overwrites() {
        let mut container = Container::basic("B1", 100.0, 10.0).unwrap();
        container.load(&Cargo::new("steel", 60.0).unwrap()).unwrap();
        container.load(&Cargo::new("steel", 30.0).unwrap()).unwrap();
        assert_eq!(container.current_cargo_mass(), 30.0);
    }

    #[test]
    fn failed_load_keeps_previous_mass() {
        let mut container = Container::gas("G1", 100.0, 10.0, 3.0).unwrap();
        container.load(&Cargo::new("helium", 40.0).unwrap()).unwrap();
        assert!(container.load(&Cargo::new("helium", 140.0).unwrap()).is_err());
        assert_eq!(container.current_cargo_mass(), 40.0);
    }

    #[test]
    fn hazard_capability_only_on_pressurised_variants() {
        assert!(Container::liquid("L", 1.0, 0.0, 1.0)
            .unwrap()
            .hazard_notifier()
            .is_some());
        assert!(Container::gas("G", 1.0, 0.0, 1.0)
            .unwrap()
            .hazard_notifier()
            .is_some());
        assert!(Container::basic("B", 1.0, 0.0)
            .unwrap()
            .hazard_notifier()
            .is_none());
        assert!(Container::refrigerated("R", 1.0, 0.0)
            .unwrap()
            .hazard_notifier()
            .is_none());
    }
}
