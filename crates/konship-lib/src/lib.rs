//! Konship library entry points.
//!
//! This crate models shipping containers and container ships: it issues serial
//! numbers, enforces per-kind cargo limits with hazard notification, and caps
//! how many containers a ship carries. Higher-level consumers (the CLI) should
//! only depend on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod container;
pub mod error;
pub mod registry;
pub mod serial;
pub mod ship;

pub use config::{RegistryConfig, WeightPolicy};
pub use container::{
    Container, ContainerKind, Dimensions, HazardNotice, HazardNotifier, RecordingNotifier,
    TracingNotifier,
};
pub use error::{Error, Result};
pub use registry::{ContainerSpec, Registry, ShipSpec};
pub use serial::{SerialIssuer, SerialNumber};
pub use ship::ContainerShip;
