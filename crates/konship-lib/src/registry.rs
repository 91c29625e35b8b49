//! Registry of every ship and container known to an operator session.
//!
//! The registry owns the [`SerialIssuer`], so serial numbers are unique within
//! one registry. Ships reference containers by serial; containers stay here
//! whether or not they are loaded, and removing a ship simply frees the
//! containers it carried.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{RegistryConfig, WeightPolicy};
use crate::container::{Container, ContainerKind, Dimensions, HazardNotifier, TracingNotifier};
use crate::error::{Error, Result};
use crate::serial::{SerialIssuer, SerialNumber, SHIP_PREFIX};
use crate::ship::ContainerShip;

/// Maximum number of "did you mean" suggestions attached to lookup errors.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a serial to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Parameters for a new container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub kind: ContainerKind,
    pub dimensions: Dimensions,
    pub max_payload: f64,
}

impl ContainerSpec {
    pub fn new(kind: ContainerKind, dimensions: Dimensions, max_payload: f64) -> Self {
        Self {
            kind,
            dimensions,
            max_payload,
        }
    }

    /// A container of `kind` using the configured default dimensions and payload.
    pub fn with_defaults(kind: ContainerKind, config: &RegistryConfig) -> Self {
        Self::new(kind, config.default_dimensions, config.default_max_payload)
    }
}

/// Parameters for a new container ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipSpec {
    pub max_speed: f64,
    pub max_container_capacity: usize,
    pub max_weight_capacity: f64,
}

impl ShipSpec {
    pub fn new(max_speed: f64, max_container_capacity: usize, max_weight_capacity: f64) -> Self {
        Self {
            max_speed,
            max_container_capacity,
            max_weight_capacity,
        }
    }
}

/// Flat lists of ships and containers with lookup by serial number.
pub struct Registry {
    config: RegistryConfig,
    issuer: SerialIssuer,
    ships: Vec<ContainerShip>,
    containers: Vec<Container>,
    notifier: Box<dyn HazardNotifier>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("issuer", &self.issuer)
            .field("ships", &self.ships)
            .field("containers", &self.containers)
            .finish_non_exhaustive()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl Registry {
    /// Create an empty registry that reports hazards through `tracing`.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            issuer: SerialIssuer::new(),
            ships: Vec::new(),
            containers: Vec::new(),
            notifier: Box::new(TracingNotifier),
        }
    }

    /// Replace the hazard notifier used by [`Registry::load_cargo`].
    pub fn with_notifier<N>(mut self, notifier: N) -> Self
    where
        N: HazardNotifier + 'static,
    {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn issuer(&self) -> &SerialIssuer {
        &self.issuer
    }

    /// All ships in insertion order.
    pub fn ships(&self) -> &[ContainerShip] {
        &self.ships
    }

    /// All containers in insertion order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Build a container from `spec`, issue its serial and register it.
    ///
    /// Parameters are validated before a serial is issued, so rejected specs
    /// do not consume serial numbers.
    pub fn create_container(&mut self, spec: ContainerSpec) -> Result<&Container> {
        Container::validate_parts(&spec.dimensions, spec.max_payload, &spec.kind)?;
        let serial = self.issuer.issue(spec.kind.serial_prefix());
        let container = Container::new(serial, spec.dimensions, spec.max_payload, spec.kind)?;
        info!(
            serial = %container.serial_number(),
            kind = container.kind().type_name(),
            "container created"
        );
        Ok(self.push_container(container))
    }

    /// Build a ship from `spec`, issue its serial and register it.
    pub fn create_ship(&mut self, spec: ShipSpec) -> Result<&ContainerShip> {
        ContainerShip::validate_parts(spec.max_speed, spec.max_weight_capacity)?;
        let serial = self.issuer.issue(SHIP_PREFIX);
        let ship = ContainerShip::new(
            serial,
            spec.max_speed,
            spec.max_container_capacity,
            spec.max_weight_capacity,
        )?;
        info!(
            serial = %ship.serial_number(),
            capacity = ship.max_container_capacity(),
            "container ship created"
        );
        Ok(self.push_ship(ship))
    }

    /// Register a container built elsewhere.
    pub fn add_container(&mut self, container: Container) -> &Container {
        self.push_container(container)
    }

    /// Register a ship built elsewhere.
    pub fn add_ship(&mut self, ship: ContainerShip) -> &ContainerShip {
        self.push_ship(ship)
    }

    /// Remove a ship, returning it. Containers it carried become free to load
    /// onto another ship.
    pub fn remove_ship(&mut self, serial: &str) -> Result<ContainerShip> {
        let index = self.ship_index(serial)?;
        let ship = self.ships.remove(index);
        info!(
            serial = %ship.serial_number(),
            released = ship.loaded_count(),
            "container ship removed"
        );
        Ok(ship)
    }

    pub fn find_ship(&self, serial: &str) -> Result<&ContainerShip> {
        let index = self.ship_index(serial)?;
        Ok(&self.ships[index])
    }

    pub fn find_ship_mut(&mut self, serial: &str) -> Result<&mut ContainerShip> {
        let index = self.ship_index(serial)?;
        Ok(&mut self.ships[index])
    }

    pub fn find_container(&self, serial: &str) -> Result<&Container> {
        let index = self.container_index(serial)?;
        Ok(&self.containers[index])
    }

    pub fn find_container_mut(&mut self, serial: &str) -> Result<&mut Container> {
        let index = self.container_index(serial)?;
        Ok(&mut self.containers[index])
    }

    /// Load `mass` into a container, reporting hazards to the registry's notifier.
    pub fn load_cargo(&mut self, container_serial: &str, mass: f64) -> Result<()> {
        let index = self.container_index(container_serial)?;
        self.containers[index].load_cargo(mass, self.notifier.as_ref())
    }

    pub fn empty_cargo(&mut self, container_serial: &str) -> Result<()> {
        self.find_container_mut(container_serial)?.empty_cargo();
        Ok(())
    }

    /// Load a registered container onto a registered ship.
    ///
    /// Checks run in order: both serials must resolve, the container must not
    /// already be aboard any ship, the ship must have a free slot, and under
    /// [`WeightPolicy::Enforced`] the ship's weight capacity must not be
    /// exceeded. Any failure leaves the registry unchanged.
    pub fn load_onto_ship(&mut self, container_serial: &str, ship_serial: &str) -> Result<()> {
        let container_index = self.container_index(container_serial)?;
        let ship_index = self.ship_index(ship_serial)?;
        let container = &self.containers[container_index];

        if let Some(carrier) = self
            .ships
            .iter()
            .find(|ship| ship.contains(container.serial_number()))
        {
            return Err(Error::AlreadyLoaded {
                container: container.serial_number().clone(),
                ship: carrier.serial_number().clone(),
            });
        }

        let ship = &self.ships[ship_index];
        if ship.is_full() {
            return Err(Error::CapacityExceeded {
                ship: ship.serial_number().clone(),
                capacity: ship.max_container_capacity(),
            });
        }

        let projected = self.loaded_mass(ship) + container.gross_mass();
        let capacity = ship.max_weight_capacity();
        if projected > capacity {
            match self.config.weight_policy {
                WeightPolicy::Enforced => {
                    return Err(Error::WeightCapacityExceeded {
                        ship: ship.serial_number().clone(),
                        capacity,
                        projected,
                    });
                }
                WeightPolicy::Unenforced => {
                    warn!(
                        ship = %ship.serial_number(),
                        container = %container.serial_number(),
                        projected,
                        capacity,
                        "load exceeds ship weight capacity; weight policy is unenforced"
                    );
                }
            }
        }

        let ship = &mut self.ships[ship_index];
        ship.load_container(container)?;
        info!(
            ship = %ship.serial_number(),
            container = %container.serial_number(),
            "container loaded onto ship"
        );
        Ok(())
    }

    /// The ship currently carrying `container_serial`, if any.
    pub fn ship_of(&self, container_serial: &str) -> Option<&ContainerShip> {
        self.ships
            .iter()
            .find(|ship| ship.loaded().iter().any(|s| s == container_serial))
    }

    /// Total gross mass (tare plus cargo) of the containers aboard a ship.
    pub fn ship_cargo_mass(&self, ship_serial: &str) -> Result<f64> {
        let ship = self.find_ship(ship_serial)?;
        Ok(self.loaded_mass(ship))
    }

    /// Containers aboard `ship`, in loading order.
    pub fn containers_on<'a>(
        &'a self,
        ship: &'a ContainerShip,
    ) -> impl Iterator<Item = &'a Container> + 'a {
        ship.loaded()
            .iter()
            .filter_map(move |serial| self.containers.iter().find(|c| c.serial_number() == serial))
    }

    fn loaded_mass(&self, ship: &ContainerShip) -> f64 {
        self.containers_on(ship).map(Container::gross_mass).sum()
    }

    fn push_container(&mut self, container: Container) -> &Container {
        self.containers.push(container);
        &self.containers[self.containers.len() - 1]
    }

    fn push_ship(&mut self, ship: ContainerShip) -> &ContainerShip {
        self.ships.push(ship);
        &self.ships[self.ships.len() - 1]
    }

    fn ship_index(&self, serial: &str) -> Result<usize> {
        let serial = serial.trim();
        self.ships
            .iter()
            .position(|ship| ship.serial_number() == serial)
            .ok_or_else(|| Error::ShipNotFound {
                serial: serial.to_string(),
                suggestions: suggest(serial, self.ships.iter().map(|s| s.serial_number())),
            })
    }

    fn container_index(&self, serial: &str) -> Result<usize> {
        let serial = serial.trim();
        self.containers
            .iter()
            .position(|container| container.serial_number() == serial)
            .ok_or_else(|| Error::ContainerNotFound {
                serial: serial.to_string(),
                suggestions: suggest(serial, self.containers.iter().map(|c| c.serial_number())),
            })
    }
}

/// Known serials most similar to `query`, best match first.
fn suggest<'a, I>(query: &str, candidates: I) -> Vec<String>
where
    I: Iterator<Item = &'a SerialNumber>,
{
    let query = query.to_ascii_uppercase();
    let mut scored: Vec<(f64, &SerialNumber)> = candidates
        .map(|serial| (strsim::jaro_winkler(&query, serial.as_str()), serial))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, serial)| serial.to_string())
        .collect()
}
