//! Ship command handlers.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use konship_lib::{Registry, ShipSpec};

use crate::output::render_ship;
use crate::terminal::ColorPalette;

/// Arguments for `add-ship`.
#[derive(Args, Debug, Clone, Copy)]
pub struct AddShipArgs {
    /// Maximum speed of the ship.
    #[arg(long, allow_negative_numbers = true)]
    pub speed: f64,
    /// Maximum number of containers carried at once.
    #[arg(long = "max-containers")]
    pub max_containers: usize,
    /// Maximum total weight of loaded containers.
    #[arg(long = "max-weight", allow_negative_numbers = true)]
    pub max_weight: f64,
}

impl From<AddShipArgs> for ShipSpec {
    fn from(args: AddShipArgs) -> Self {
        ShipSpec::new(args.speed, args.max_containers, args.max_weight)
    }
}

pub fn handle_add_ship(
    registry: &mut Registry,
    args: AddShipArgs,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<()> {
    let ship = registry.create_ship(args.into())?;
    writeln!(
        out,
        "{}Container ship {} added.{}",
        palette.success,
        ship.serial_number(),
        palette.reset
    )?;
    Ok(())
}

pub fn handle_remove_ship(
    registry: &mut Registry,
    serial: &str,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<()> {
    let ship = registry.remove_ship(serial)?;
    writeln!(
        out,
        "{}Container ship {} removed.{}",
        palette.success,
        ship.serial_number(),
        palette.reset
    )?;
    if ship.loaded_count() > 0 {
        writeln!(
            out,
            "Released {} container(s): {}",
            ship.loaded_count(),
            ship.loaded()
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )?;
    }
    Ok(())
}

pub fn handle_show_ship(
    registry: &Registry,
    serial: &str,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<()> {
    let ship = registry.find_ship(serial)?;
    render_ship(registry, ship, palette, out)
}

pub fn handle_load_container(
    registry: &mut Registry,
    container: &str,
    ship: &str,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<()> {
    registry.load_onto_ship(container, ship)?;
    writeln!(
        out,
        "{}Container {} loaded onto ship {}.{}",
        palette.success,
        container.trim(),
        ship.trim(),
        palette.reset
    )?;
    Ok(())
}
