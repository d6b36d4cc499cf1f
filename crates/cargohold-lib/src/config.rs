//! Ship configuration loading and resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Environment variable pointing at a ship configuration file.
pub const SHIP_CONFIG_ENV: &str = "CARGOHOLD_SHIP_CONFIG";

/// File name looked up in the platform configuration directory.
const SHIP_CONFIG_FILENAME: &str = "ship.json";

/// Parameters a [`Ship`](crate::Ship) is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub name: String,
    pub max_speed: f64,
    pub max_container_count: usize,
    pub max_total_weight: f64,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            name: "Ship1".to_string(),
            max_speed: 50.0,
            max_container_count: 5,
            max_total_weight: 5000.0,
        }
    }
}

impl ShipConfig {
    /// Validate the configuration for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidShip {
                message: "ship name must not be empty".to_string(),
            });
        }

        if self.max_container_count == 0 {
            return Err(Error::InvalidShip {
                message: "max_container_count must be at least 1".to_string(),
            });
        }

        let fields = [
            (self.max_speed, "max_speed"),
            (self.max_total_weight, "max_total_weight"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidShip {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| Error::ShipConfig {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let config: ShipConfig = serde_json::from_str(&text).map_err(|err| Error::ShipConfig {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        config.validate()?;
        debug!(path = %path.display(), ship = %config.name, "loaded ship configuration");
        Ok(config)
    }
}

/// Resolve the ship configuration.
///
/// The resolution order is:
/// 1. Explicit `path` argument when provided.
/// 2. `CARGOHOLD_SHIP_CONFIG` environment variable.
/// 3. `ship.json` in the platform-specific config directory, if it exists.
/// 4. [`ShipConfig::default`].
pub fn resolve_ship_config(path: Option<&Path>) -> Result<ShipConfig> {
    if let Some(explicit) = path {
        return ShipConfig::from_path(explicit);
    }

    if let Some(env_path) = env::var_os(SHIP_CONFIG_ENV) {
        return ShipConfig::from_path(Path::new(&env_path));
    }

    if let Some(default) = default_config_path().filter(|p| p.exists()) {
        info!("using ship configuration from {}", default.display());
        return ShipConfig::from_path(&default);
    }

    Ok(ShipConfig::default())
}

/// Platform-specific location of the ship configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "cargohold", "cargohold")
        .map(|dirs| dirs.config_dir().join(SHIP_CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_demo_ship() {
        let config = ShipConfig::default();
        assert_eq!(config.name, "Ship1");
        assert_eq!(config.max_container_count, 5);
        assert_eq!(config.max_total_weight, 5000.0);
        config.validate().expect("default config is valid");
    }

    #[test]
    fn rejects_zero_container_count() {
        let config = ShipConfig {
            max_container_count: 0,
            ..ShipConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidShip { .. })));
    }

    #[test]
    fn rejects_non_finite_weight() {
        let config = ShipConfig {
            max_total_weight: f64::INFINITY,
            ..ShipConfig::default()
        };
        match config.validate() {
            Err(Error::InvalidShip { message }) => assert!(message.contains("max_total_weight")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
