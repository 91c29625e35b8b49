//! Container kinds and their loading rules.

use serde::{Deserialize, Serialize};

use super::constants::{GAS_RESIDUAL_RATIO, LIQUID_HAZARDOUS_FILL_RATIO, LIQUID_SAFE_FILL_RATIO};

/// The cargo family a container belongs to, with its kind-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContainerKind {
    /// Liquid cargo. Hazardous liquids may only be filled to half capacity.
    Liquid { hazardous: bool },
    /// Pressurised gas. Emptying leaves a residual share behind.
    Gas { pressure: f64 },
    /// Temperature-controlled goods. Product type and temperature are
    /// recorded as-is.
    Refrigerated {
        product_type: String,
        temperature: f64,
    },
}

impl ContainerKind {
    /// Serial prefix for this kind: the first letter of its type name.
    pub fn serial_prefix(&self) -> &'static str {
        match self {
            ContainerKind::Liquid { .. } => "L",
            ContainerKind::Gas { .. } => "G",
            ContainerKind::Refrigerated { .. } => "R",
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ContainerKind::Liquid { .. } => "LiquidContainer",
            ContainerKind::Gas { .. } => "GasContainer",
            ContainerKind::Refrigerated { .. } => "RefrigeratedContainer",
        }
    }

    /// Whether this kind raises a hazard notification on overload.
    pub fn is_hazard_capable(&self) -> bool {
        matches!(
            self,
            ContainerKind::Liquid { .. } | ContainerKind::Gas { .. }
        )
    }

    /// Largest cargo mass accepted for a container with the given `max_payload`.
    pub fn allowed_payload(&self, max_payload: f64) -> f64 {
        match self {
            ContainerKind::Liquid { hazardous: true } => max_payload * LIQUID_HAZARDOUS_FILL_RATIO,
            ContainerKind::Liquid { hazardous: false } => max_payload * LIQUID_SAFE_FILL_RATIO,
            ContainerKind::Gas { .. } | ContainerKind::Refrigerated { .. } => max_payload,
        }
    }

    /// Cargo mass left behind after emptying a container holding `cargo_mass`.
    pub fn residual_mass(&self, cargo_mass: f64) -> f64 {
        match self {
            ContainerKind::Gas { .. } => cargo_mass * GAS_RESIDUAL_RATIO,
            ContainerKind::Liquid { .. } | ContainerKind::Refrigerated { .. } => 0.0,
        }
    }
}
