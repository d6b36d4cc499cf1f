use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the cargohold library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Container and ship operations share this enum, so a failure raised while
/// loading cargo reaches ship-level callers without translation.
#[derive(Debug, Error)]
pub enum Error {
    /// Cargo mass exceeds the limit the container variant allows.
    #[error("cargo mass {cargo_mass} exceeds the {limit} limit of container {serial_number}")]
    OverCapacity {
        serial_number: String,
        cargo_mass: f64,
        limit: f64,
    },

    /// Refrigerated container has no temperature entry for the cargo kind.
    #[error("invalid cargo type: {kind}")]
    UnknownCargoKind { kind: String },

    /// Required temperature falls outside the refrigeration range.
    #[error("temperature {temperature} out of range for cargo {kind}")]
    TemperatureOutOfRange { kind: String, temperature: f64 },

    /// A container with the same serial number is already on board.
    #[error("container with serial number {serial_number} already exists on ship {ship}")]
    DuplicateSerial { serial_number: String, ship: String },

    /// The ship already carries its maximum number of containers.
    #[error("ship {ship} is at maximum capacity of {max_container_count} containers")]
    CapacityExceeded {
        ship: String,
        max_container_count: usize,
    },

    /// Admitting the container would exceed the ship's weight limit.
    #[error("ship {ship} is overloaded: {projected_weight} exceeds {max_total_weight}")]
    Overloaded {
        ship: String,
        projected_weight: f64,
        max_total_weight: f64,
    },

    /// Raised when container parameters fail validation.
    #[error("invalid container: {message}")]
    InvalidContainer { message: String },

    /// Raised when cargo parameters fail validation.
    #[error("invalid cargo: {message}")]
    InvalidCargo { message: String },

    /// Raised when ship parameters fail validation.
    #[error("invalid ship: {message}")]
    InvalidShip { message: String },

    /// Raised when a container type tag is not recognised.
    #[error("invalid container type: {tag}")]
    UnknownContainerType { tag: String },

    /// Raised when a serial number does not match any container on board.
    #[error("container {serial_number} not found on ship {ship}")]
    ContainerNotFound { serial_number: String, ship: String },

    /// Raised when a ship configuration file cannot be used.
    #[error("failed to load ship configuration from {path}: {message}")]
    ShipConfig { path: PathBuf, message: String },

    /// Catch-all for failures outside the known taxonomy.
    #[error("{0}")]
    Unexpected(String),
}
