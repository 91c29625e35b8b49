//! Container data types, per-kind loading rules, and hazard notification.
//!
//! This module is organized into focused submodules:
//!
//! - [`attributes`] - Physical dimensions shared by every container
//! - [`kind`] - The container kinds and their kind-specific parameters
//! - [`cargo`] - The [`Container`] entity with its load/empty behaviour
//! - [`hazard`] - Hazard notification capability and stock notifiers
//! - [`constants`] - Fill and residual ratios used by the loading rules
//!
//! # Example
//!
//! ```
//! use konship_lib::container::{Container, ContainerKind, Dimensions, RecordingNotifier};
//! use konship_lib::SerialIssuer;
//!
//! let issuer = SerialIssuer::new();
//! let kind = ContainerKind::Liquid { hazardous: true };
//! let serial = issuer.issue(kind.serial_prefix());
//! let mut container =
//!     Container::new(serial, Dimensions::new(200.0, 100.0, 200.0), 1000.0, kind).unwrap();
//!
//! let notifier = RecordingNotifier::new();
//! assert!(container.load_cargo(500.0, &notifier).is_ok());
//! assert!(container.load_cargo(501.0, &notifier).is_err());
//! assert_eq!(notifier.len(), 1);
//! assert_eq!(container.cargo_mass(), 500.0);
//! ```

pub mod attributes;
pub mod cargo;
pub mod constants;
pub mod hazard;
pub mod kind;

pub use attributes::Dimensions;
pub use cargo::Container;
pub use constants::{GAS_RESIDUAL_RATIO, LIQUID_HAZARDOUS_FILL_RATIO, LIQUID_SAFE_FILL_RATIO};
pub use hazard::{HazardNotice, HazardNotifier, RecordingNotifier, TracingNotifier};
pub use kind::ContainerKind;
