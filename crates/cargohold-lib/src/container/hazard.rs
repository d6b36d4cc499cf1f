//! Hazard notification capability for pressurised containers.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::kind::{ContainerType, GasTank, LiquidTank};

/// Hazard alert raised by a hazard-capable container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardAlert {
    pub serial_number: String,
    pub container_type: ContainerType,
}

impl fmt::Display for HazardAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hazardous situation detected in {} container {}",
            self.container_type, self.serial_number
        )
    }
}

/// Capability implemented only by container variants that can report hazards.
///
/// Obtain it through [`Container::hazard_notifier`](super::Container::hazard_notifier).
pub trait HazardNotifier {
    /// Raise a hazard alert for the container with the given serial number.
    fn notify_hazard(&self, serial_number: &str) -> HazardAlert;
}

fn raise(container_type: ContainerType, serial_number: &str) -> HazardAlert {
    let alert = HazardAlert {
        serial_number: serial_number.to_string(),
        container_type,
    };
    warn!(
        serial_number,
        container_type = %container_type,
        "{alert}"
    );
    alert
}

impl HazardNotifier for LiquidTank {
    fn notify_hazard(&self, serial_number: &str) -> HazardAlert {
        raise(ContainerType::Liquid, serial_number)
    }
}

impl HazardNotifier for GasTank {
    fn notify_hazard(&self, serial_number: &str) -> HazardAlert {
        raise(ContainerType::Gas, serial_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_message_names_variant_and_serial() {
        let alert = LiquidTank::new(5.0).notify_hazard("L123");
        assert_eq!(
            alert.to_string(),
            "Hazardous situation detected in liquid container L123"
        );

        let alert = GasTank::new(3.0).notify_hazard("G456");
        assert_eq!(alert.container_type, ContainerType::Gas);
        assert_eq!(alert.serial_number, "G456");
    }
}
