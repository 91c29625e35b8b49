use thiserror::Error;

use crate::serial::SerialNumber;

/// Convenient result alias for the Konship library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant is recoverable: a failed operation leaves containers, ships
/// and the registry exactly as they were before the call.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested cargo mass exceeds the container's allowed ceiling.
    #[error("attempted to overload container {serial}: requested {requested} kg, allowed {allowed} kg")]
    Overload {
        serial: SerialNumber,
        requested: f64,
        allowed: f64,
    },

    /// Cargo mass was negative or not a finite number.
    #[error("invalid cargo mass {mass} for container {serial}; mass must be finite and non-negative")]
    InvalidCargoMass { serial: SerialNumber, mass: f64 },

    /// The ship already carries its maximum number of containers.
    #[error("cannot add more containers to ship {ship}: capacity of {capacity} reached")]
    CapacityExceeded { ship: SerialNumber, capacity: usize },

    /// Loading would push the ship past its weight capacity (enforced policy only).
    #[error("cannot load onto ship {ship}: projected weight {projected} exceeds capacity {capacity}")]
    WeightCapacityExceeded {
        ship: SerialNumber,
        capacity: f64,
        projected: f64,
    },

    /// The container is already carried by a ship.
    #[error("container {container} is already loaded onto ship {ship}")]
    AlreadyLoaded {
        container: SerialNumber,
        ship: SerialNumber,
    },

    /// No ship with the given serial number exists in the registry.
    #[error("container ship not found: {serial}{}", format_suggestions(.suggestions))]
    ShipNotFound {
        serial: String,
        suggestions: Vec<String>,
    },

    /// No container with the given serial number exists in the registry.
    #[error("container not found: {serial}{}", format_suggestions(.suggestions))]
    ContainerNotFound {
        serial: String,
        suggestions: Vec<String>,
    },

    /// Raised when container dimensions or payload fail validation.
    #[error("invalid container data: {message}")]
    ContainerDataValidation { message: String },

    /// Raised when ship parameters fail validation.
    #[error("invalid ship data: {message}")]
    ShipDataValidation { message: String },

    /// Raised when configuration values cannot be parsed.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    /// Returns `true` for lookup failures (unknown ship or container serial).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ShipNotFound { .. } | Error::ContainerNotFound { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
