//! Ship container collection and admission checks.

use serde::Serialize;
use tracing::debug;

use crate::config::ShipConfig;
use crate::container::{Container, ContainerType};
use crate::error::{Error, Result};

/// A ship carrying an ordered collection of containers, unique by serial number.
///
/// After every successful mutation the container count stays within
/// `max_container_count`. Admission compares the current gross weight plus the
/// new container's `mass_capacity` against `max_total_weight`; the new
/// container's tare and any refrigerated cargo beyond its capacity are not
/// counted, so the gross weight on board may end up above the limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    name: String,
    max_speed: f64,
    max_container_count: usize,
    max_total_weight: f64,
    containers: Vec<Container>,
}

impl Ship {
    pub fn new(
        name: impl Into<String>,
        max_speed: f64,
        max_container_count: usize,
        max_total_weight: f64,
    ) -> Result<Self> {
        Self::from_config(&ShipConfig {
            name: name.into(),
            max_speed,
            max_container_count,
            max_total_weight,
        })
    }

    pub fn from_config(config: &ShipConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: config.name.trim().to_string(),
            max_speed: config.max_speed,
            max_container_count: config.max_container_count,
            max_total_weight: config.max_total_weight,
            containers: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_container_count(&self) -> usize {
        self.max_container_count
    }

    pub fn max_total_weight(&self) -> f64 {
        self.max_total_weight
    }

    /// Containers on board, in loading order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn container(&self, serial_number: &str) -> Option<&Container> {
        self.containers
            .iter()
            .find(|c| c.serial_number() == serial_number)
    }

    pub fn contains(&self, serial_number: &str) -> bool {
        self.container(serial_number).is_some()
    }

    /// Sum of cargo mass and tare weight over every container on board.
    pub fn total_weight(&self) -> f64 {
        self.containers.iter().map(Container::gross_weight).sum()
    }

    /// Weight headroom left before `max_total_weight` is reached.
    pub fn remaining_weight(&self) -> f64 {
        self.max_total_weight - self.total_weight()
    }

    /// Admit a container onto the ship.
    ///
    /// The weight check counts the new container at its full mass capacity,
    /// not its current cargo mass.
    pub fn load_container(&mut self, container: Container) -> Result<()> {
        if self.contains(container.serial_number()) {
            return Err(Error::DuplicateSerial {
                serial_number: container.serial_number().to_string(),
                ship: self.name.clone(),
            });
        }

        if self.containers.len() >= self.max_container_count {
            return Err(Error::CapacityExceeded {
                ship: self.name.clone(),
                max_container_count: self.max_container_count,
            });
        }

        let projected_weight = self.total_weight() + container.mass_capacity();
        debug!(
            ship = %self.name,
            serial_number = container.serial_number(),
            projected_weight,
            max_total_weight = self.max_total_weight,
            "checking container admission"
        );
        if projected_weight > self.max_total_weight {
            return Err(Error::Overloaded {
                ship: self.name.clone(),
                projected_weight,
                max_total_weight: self.max_total_weight,
            });
        }

        self.containers.push(container);
        Ok(())
    }

    /// Remove a container by serial number, returning it if it was on board.
    /// Unloading an absent container leaves the ship unchanged.
    pub fn unload_container(&mut self, serial_number: &str) -> Option<Container> {
        let index = self
            .containers
            .iter()
            .position(|c| c.serial_number() == serial_number)?;
        Some(self.containers.remove(index))
    }

    pub fn summary(&self) -> ShipSummary {
        ShipSummary {
            name: self.name.clone(),
            max_speed: self.max_speed,
            max_container_count: self.max_container_count,
            max_total_weight: self.max_total_weight,
            total_weight: self.total_weight(),
            containers: self
                .containers
                .iter()
                .map(ContainerSummary::from)
                .collect(),
        }
    }
}

/// Serializable snapshot of a ship and its cargo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipSummary {
    pub name: String,
    pub max_speed: f64,
    pub max_container_count: usize,
    pub max_total_weight: f64,
    pub total_weight: f64,
    pub containers: Vec<ContainerSummary>,
}

/// One row of a [`ShipSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerSummary {
    pub serial_number: String,
    pub container_type: ContainerType,
    pub mass_capacity: f64,
    pub tare_weight: f64,
    pub current_cargo_mass: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

impl From<&Container> for ContainerSummary {
    fn from(container: &Container) -> Self {
        Self {
            serial_number: container.serial_number().to_string(),
            container_type: container.container_type(),
            mass_capacity: container.mass_capacity(),
            tare_weight: container.tare_weight(),
            current_cargo_mass: container.current_cargo_mass(),
            pressure: container.pressure(),
        }
    }
}
