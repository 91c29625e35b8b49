//! Container command handlers.

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};

use konship_lib::{ContainerKind, ContainerSpec, Dimensions, Registry, RegistryConfig};

use crate::terminal::ColorPalette;

/// Arguments for `add-container`.
#[derive(Args, Debug, Clone)]
pub struct AddContainerArgs {
    #[command(subcommand)]
    pub kind: ContainerKindArg,
}

/// Container kind with its kind-specific parameters.
#[derive(Subcommand, Debug, Clone)]
pub enum ContainerKindArg {
    /// Liquid container.
    Liquid {
        /// Carries hazardous liquid (limits fill to half the payload).
        #[arg(long)]
        hazardous: bool,
        #[command(flatten)]
        dimensions: DimensionArgs,
    },
    /// Gas container.
    Gas {
        /// Gas pressure.
        #[arg(long)]
        pressure: f64,
        #[command(flatten)]
        dimensions: DimensionArgs,
    },
    /// Refrigerated container.
    Refrigerated {
        /// Stored product type, e.g. Bananas.
        #[arg(long)]
        product: String,
        /// Storage temperature.
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        #[command(flatten)]
        dimensions: DimensionArgs,
    },
}

/// Optional overrides for the configured default dimensions.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DimensionArgs {
    #[arg(long)]
    pub height: Option<f64>,
    #[arg(long = "tare-weight")]
    pub tare_weight: Option<f64>,
    #[arg(long)]
    pub depth: Option<f64>,
    #[arg(long = "max-payload")]
    pub max_payload: Option<f64>,
}

impl ContainerKindArg {
    /// Build a container spec, filling unspecified dimensions from `config`.
    pub fn into_spec(self, config: &RegistryConfig) -> ContainerSpec {
        let (kind, overrides) = match self {
            ContainerKindArg::Liquid {
                hazardous,
                dimensions,
            } => (ContainerKind::Liquid { hazardous }, dimensions),
            ContainerKindArg::Gas {
                pressure,
                dimensions,
            } => (ContainerKind::Gas { pressure }, dimensions),
            ContainerKindArg::Refrigerated {
                product,
                temperature,
                dimensions,
            } => (
                ContainerKind::Refrigerated {
                    product_type: product,
                    temperature,
                },
                dimensions,
            ),
        };

        let defaults = config.default_dimensions;
        ContainerSpec::new(
            kind,
            Dimensions::new(
                overrides.height.unwrap_or(defaults.height),
                overrides.tare_weight.unwrap_or(defaults.tare_weight),
                overrides.depth.unwrap_or(defaults.depth),
            ),
            overrides.max_payload.unwrap_or(config.default_max_payload),
        )
    }
}

pub fn handle_add_container(
    registry: &mut Registry,
    args: AddContainerArgs,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<()> {
    let spec = args.kind.into_spec(registry.config());
    let container = registry.create_container(spec)?;
    writeln!(
        out,
        "{}Container {} added.{}",
        palette.success,
        container.serial_number(),
        palette.reset
    )?;
    Ok(())
}

pub fn handle_load_cargo(
    registry: &mut Registry,
    container: &str,
    mass: f64,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<()> {
    registry.load_cargo(container, mass)?;
    writeln!(
        out,
        "{}Loaded {} kg into container {}.{}",
        palette.success,
        mass,
        container.trim(),
        palette.reset
    )?;
    Ok(())
}

pub fn handle_empty_cargo(
    registry: &mut Registry,
    container: &str,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<()> {
    registry.empty_cargo(container)?;
    let remaining = registry.find_container(container)?.cargo_mass();
    writeln!(
        out,
        "{}Container {} emptied; {} kg remaining.{}",
        palette.success,
        container.trim(),
        remaining,
        palette.reset
    )?;
    Ok(())
}
