//! Stateless façade that routes load/unload requests to a [`Ship`] and turns
//! every failure into a user-facing [`Outcome`].

use std::fmt;

use serde::Serialize;
use tracing::{error, info};

use crate::cargo::Cargo;
use crate::container::Container;
use crate::error::Error;
use crate::ship::Ship;

/// Result of a façade operation, rendered as a single human-readable line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
    /// Non-fatal notices raised along the way (fill warnings, hazard alerts).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

impl Outcome {
    fn succeeded(message: String) -> Self {
        Self {
            success: true,
            message,
            notices: Vec::new(),
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
            notices: Vec::new(),
        }
    }

    fn with_notices(mut self, notices: Vec<String>) -> Self {
        self.notices = notices;
        self
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Routes container operations to ships. Holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleetManager;

impl FleetManager {
    pub fn new() -> Self {
        Self
    }

    /// Admit an already-prepared container onto the ship.
    pub fn load_container(&self, ship: &mut Ship, container: Container) -> Outcome {
        if let Some(outcome) = reject_duplicate(ship, &container) {
            return outcome;
        }
        admit(ship, container, Vec::new())
    }

    /// Load cargo into the container, then admit the container onto the ship.
    ///
    /// When a hazard-capable container refuses the cargo, its hazard alert is
    /// raised before the failure is reported.
    pub fn load_container_with_cargo(
        &self,
        ship: &mut Ship,
        mut container: Container,
        cargo: &Cargo,
    ) -> Outcome {
        if let Some(outcome) = reject_duplicate(ship, &container) {
            return outcome;
        }

        let mut notices = Vec::new();
        match container.load(cargo) {
            Ok(Some(warning)) => notices.push(format!(
                "Warning: Liquid container {} is being filled more than 90% of its capacity.",
                warning.serial_number
            )),
            Ok(None) => {}
            Err(err) => {
                if let Some(notifier) = container.hazard_notifier() {
                    let alert = notifier.notify_hazard(container.serial_number());
                    notices.push(alert.to_string());
                }
                return failure(&err, container.serial_number()).with_notices(notices);
            }
        }

        admit(ship, container, notices)
    }

    /// Remove a container from the ship by serial number.
    pub fn unload_container(&self, ship: &mut Ship, serial_number: &str) -> Outcome {
        match ship.unload_container(serial_number) {
            Some(container) => {
                info!(
                    ship = ship.name(),
                    serial_number = container.serial_number(),
                    "container unloaded"
                );
                Outcome::succeeded(format!(
                    "Container {} unloaded from ship {} successfully.",
                    container.serial_number(),
                    ship.name()
                ))
            }
            None => Outcome::failed("Container not found on the ship.".to_string()),
        }
    }
}

fn reject_duplicate(ship: &Ship, container: &Container) -> Option<Outcome> {
    if !ship.contains(container.serial_number()) {
        return None;
    }
    let err = Error::DuplicateSerial {
        serial_number: container.serial_number().to_string(),
        ship: ship.name().to_string(),
    };
    Some(failure(&err, container.serial_number()))
}

fn admit(ship: &mut Ship, container: Container, notices: Vec<String>) -> Outcome {
    let serial_number = container.serial_number().to_string();
    match ship.load_container(container) {
        Ok(()) => {
            info!(ship = ship.name(), %serial_number, "container loaded");
            Outcome::succeeded(format!(
                "Container {serial_number} loaded onto ship {} successfully.",
                ship.name()
            ))
            .with_notices(notices)
        }
        Err(err) => failure(&err, &serial_number).with_notices(notices),
    }
}

fn failure(err: &Error, serial_number: &str) -> Outcome {
    error!(%err, serial_number, "container operation failed");
    Outcome::failed(describe(err))
}

/// Render a core failure as the line shown to the operator.
fn describe(err: &Error) -> String {
    match err {
        Error::DuplicateSerial { serial_number, .. } => format!(
            "Error: Container with serial number {serial_number} already exists on the ship."
        ),
        Error::CapacityExceeded { .. } | Error::Overloaded { .. } => {
            format!("Error: {err}. Ship cannot accommodate more containers.")
        }
        Error::OverCapacity { .. }
        | Error::UnknownCargoKind { .. }
        | Error::TemperatureOutOfRange { .. } => {
            format!("Error: {err}. Cargo cannot be loaded into the container.")
        }
        other => format!("Error: {other}"),
    }
}
