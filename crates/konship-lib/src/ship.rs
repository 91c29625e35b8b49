//! Container ships and their count capacity.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::container::Container;
use crate::error::{Error, Result};
use crate::serial::SerialNumber;

/// A ship carrying an ordered list of containers.
///
/// The ship refers to containers by serial number; the containers themselves
/// stay in the [`Registry`](crate::Registry). No more than
/// `max_container_capacity` containers are ever loaded at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerShip {
    serial_number: SerialNumber,
    max_speed: f64,
    max_container_capacity: usize,
    max_weight_capacity: f64,
    loaded: Vec<SerialNumber>,
}

impl ContainerShip {
    /// Create an empty ship, validating speed and weight capacity.
    pub fn new(
        serial_number: SerialNumber,
        max_speed: f64,
        max_container_capacity: usize,
        max_weight_capacity: f64,
    ) -> Result<Self> {
        Self::validate_parts(max_speed, max_weight_capacity)?;

        Ok(Self {
            serial_number,
            max_speed,
            max_container_capacity,
            max_weight_capacity,
            loaded: Vec::new(),
        })
    }

    /// Check construction parameters without building a ship.
    pub fn validate_parts(max_speed: f64, max_weight_capacity: f64) -> Result<()> {
        let fields = [
            (max_speed, "max_speed"),
            (max_weight_capacity, "max_weight_capacity"),
        ];
        for (value, field) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::ShipDataValidation {
                    message: format!("{field} must be a finite non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }

    pub fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_container_capacity(&self) -> usize {
        self.max_container_capacity
    }

    pub fn max_weight_capacity(&self) -> f64 {
        self.max_weight_capacity
    }

    /// Serial numbers of the loaded containers, in loading order.
    pub fn loaded(&self) -> &[SerialNumber] {
        &self.loaded
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_full(&self) -> bool {
        self.loaded.len() >= self.max_container_capacity
    }

    pub fn contains(&self, container: &SerialNumber) -> bool {
        self.loaded.contains(container)
    }

    /// Append `container` to the ship.
    ///
    /// Fails with [`Error::AlreadyLoaded`] if the container is already aboard
    /// and with [`Error::CapacityExceeded`] if the ship is full. Weight is not
    /// checked here; see [`WeightPolicy`](crate::WeightPolicy).
    pub fn load_container(&mut self, container: &Container) -> Result<()> {
        let serial = container.serial_number();
        if self.contains(serial) {
            return Err(Error::AlreadyLoaded {
                container: serial.clone(),
                ship: self.serial_number.clone(),
            });
        }
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                ship: self.serial_number.clone(),
                capacity: self.max_container_capacity,
            });
        }

        self.loaded.push(serial.clone());
        debug!(
            ship = %self.serial_number,
            container = %serial,
            loaded = self.loaded.len(),
            "container loaded onto ship"
        );
        Ok(())
    }
}
