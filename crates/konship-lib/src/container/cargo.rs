//! The container entity and its cargo operations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::serial::SerialNumber;

use super::attributes::{ensure_non_negative, Dimensions};
use super::hazard::{overload_message, HazardNotifier};
use super::kind::ContainerKind;

/// A shipping container tracked by serial number.
///
/// Everything except `cargo_mass` is fixed at construction; cargo changes only
/// through [`Container::load_cargo`] and [`Container::empty_cargo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    serial_number: SerialNumber,
    dimensions: Dimensions,
    max_payload: f64,
    cargo_mass: f64,
    kind: ContainerKind,
}

impl Container {
    /// Create an empty container, validating dimensions and payload.
    pub fn new(
        serial_number: SerialNumber,
        dimensions: Dimensions,
        max_payload: f64,
        kind: ContainerKind,
    ) -> Result<Self> {
        Self::validate_parts(&dimensions, max_payload, &kind)?;

        Ok(Self {
            serial_number,
            dimensions,
            max_payload,
            cargo_mass: 0.0,
            kind,
        })
    }

    /// Check construction parameters without building a container.
    pub fn validate_parts(
        dimensions: &Dimensions,
        max_payload: f64,
        kind: &ContainerKind,
    ) -> Result<()> {
        dimensions.validate()?;
        ensure_non_negative(max_payload, "max_payload")?;
        if let ContainerKind::Gas { pressure } = kind {
            ensure_non_negative(*pressure, "pressure")?;
        }
        Ok(())
    }

    pub fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn cargo_mass(&self) -> f64 {
        self.cargo_mass
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    /// Largest cargo mass this container currently accepts.
    pub fn allowed_payload(&self) -> f64 {
        self.kind.allowed_payload(self.max_payload)
    }

    /// Tare weight plus cargo.
    pub fn gross_mass(&self) -> f64 {
        self.dimensions.tare_weight + self.cargo_mass
    }

    /// Set the cargo mass to `mass`, replacing whatever was loaded before.
    ///
    /// A mass above [`allowed_payload`](Self::allowed_payload) is rejected with
    /// [`Error::Overload`]. Liquid and gas containers report the attempt to
    /// `notifier` once before returning the error. A rejected load leaves the
    /// current cargo untouched.
    pub fn load_cargo(&mut self, mass: f64, notifier: &dyn HazardNotifier) -> Result<()> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(Error::InvalidCargoMass {
                serial: self.serial_number.clone(),
                mass,
            });
        }

        let allowed = self.allowed_payload();
        if mass > allowed {
            if self.kind.is_hazard_capable() {
                notifier.notify_hazard(&self.serial_number, &overload_message(&self.serial_number));
            }
            return Err(Error::Overload {
                serial: self.serial_number.clone(),
                requested: mass,
                allowed,
            });
        }

        self.cargo_mass = mass;
        debug!(serial = %self.serial_number, mass, "cargo loaded");
        Ok(())
    }

    /// Empty the container. Gas containers keep a residual share of their cargo.
    pub fn empty_cargo(&mut self) {
        self.cargo_mass = self.kind.residual_mass(self.cargo_mass);
        debug!(serial = %self.serial_number, remaining = self.cargo_mass, "cargo emptied");
    }
}
