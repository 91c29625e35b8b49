//! Output formatting for inventory listings.
//!
//! Text output keeps the operator console's line shapes:
//! `Ship KON-S-1 (speed=20, maxContainerNum=2, maxWeight=1000)` and
//! `Container KON-L-1: LiquidContainer, Cargo Mass = 0 kg`. JSON output is a
//! single object with `ships` and `containers` arrays.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use konship_lib::{Container, ContainerKind, ContainerShip, Registry};

use crate::terminal::ColorPalette;

/// Supported output formats for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Serialize)]
pub struct InventoryView<'a> {
    pub ships: Vec<ShipView<'a>>,
    pub containers: Vec<ContainerView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ShipView<'a> {
    pub serial_number: &'a str,
    pub max_speed: f64,
    pub max_container_capacity: usize,
    pub max_weight_capacity: f64,
    pub loaded: Vec<&'a str>,
    pub cargo_mass: f64,
}

#[derive(Debug, Serialize)]
pub struct ContainerView<'a> {
    pub serial_number: &'a str,
    pub type_name: &'static str,
    #[serde(flatten)]
    pub kind: &'a ContainerKind,
    pub height: f64,
    pub tare_weight: f64,
    pub depth: f64,
    pub max_payload: f64,
    pub cargo_mass: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship: Option<&'a str>,
}

impl<'a> InventoryView<'a> {
    pub fn from_registry(registry: &'a Registry) -> Self {
        let ships = registry
            .ships()
            .iter()
            .map(|ship| ShipView {
                serial_number: ship.serial_number().as_str(),
                max_speed: ship.max_speed(),
                max_container_capacity: ship.max_container_capacity(),
                max_weight_capacity: ship.max_weight_capacity(),
                loaded: ship.loaded().iter().map(|s| s.as_str()).collect(),
                cargo_mass: registry.containers_on(ship).map(Container::gross_mass).sum(),
            })
            .collect();

        let containers = registry
            .containers()
            .iter()
            .map(|container| {
                let dims = container.dimensions();
                ContainerView {
                    serial_number: container.serial_number().as_str(),
                    type_name: container.kind().type_name(),
                    kind: container.kind(),
                    height: dims.height,
                    tare_weight: dims.tare_weight,
                    depth: dims.depth,
                    max_payload: container.max_payload(),
                    cargo_mass: container.cargo_mass(),
                    ship: registry
                        .ship_of(container.serial_number().as_str())
                        .map(|s| s.serial_number().as_str()),
                }
            })
            .collect();

        Self { ships, containers }
    }
}

/// Render every ship and container in the registry.
pub fn render_inventory(
    registry: &Registry,
    format: OutputFormat,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let view = InventoryView::from_registry(registry);
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            if registry.ships().is_empty() {
                writeln!(out, "List of container ships: None")?;
            } else {
                writeln!(out, "List of container ships:")?;
                for ship in registry.ships() {
                    writeln!(out, "{}", ship_line(ship, palette))?;
                }
            }

            if registry.containers().is_empty() {
                writeln!(out, "List of containers: None")?;
            } else {
                writeln!(out, "List of containers:")?;
                for container in registry.containers() {
                    let carrier = registry
                        .ship_of(container.serial_number().as_str())
                        .map(ContainerShip::serial_number);
                    let mut line = container_line(container, palette);
                    if let Some(ship) = carrier {
                        line.push_str(&format!(", aboard {ship}"));
                    }
                    writeln!(out, "{line}")?;
                }
            }
        }
    }
    Ok(())
}

/// Render one ship with its loaded containers.
pub fn render_ship(
    registry: &Registry,
    ship: &ContainerShip,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "{}", ship_line(ship, palette))?;
    writeln!(
        out,
        "  Loaded {}/{} containers, {} of {} weight capacity",
        ship.loaded_count(),
        ship.max_container_capacity(),
        registry.containers_on(ship).map(Container::gross_mass).sum::<f64>(),
        ship.max_weight_capacity()
    )?;
    for container in registry.containers_on(ship) {
        writeln!(out, "  {}", container_line(container, palette))?;
    }
    Ok(())
}

pub fn ship_line(ship: &ContainerShip, palette: &ColorPalette) -> String {
    format!(
        "Ship {}{}{} (speed={}, maxContainerNum={}, maxWeight={})",
        palette.emphasis,
        ship.serial_number(),
        palette.reset,
        ship.max_speed(),
        ship.max_container_capacity(),
        ship.max_weight_capacity()
    )
}

pub fn container_line(container: &Container, palette: &ColorPalette) -> String {
    format!(
        "Container {}{}{}: {}, Cargo Mass = {} kg",
        palette.emphasis,
        container.serial_number(),
        palette.reset,
        container.kind().type_name(),
        container.cargo_mass()
    )
}

/// Print the console banner shown at the start of interactive sessions.
pub fn print_banner(palette: &ColorPalette, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{color}+--------------------------------------------------+
|  KONSHIP                                         |
|  >> CONTAINER INVENTORY CONSOLE                  |
+--------------------------------------------------+{reset}
Type 'help' for the list of commands.",
        color = palette.banner,
        reset = palette.reset
    )?;
    Ok(())
}
