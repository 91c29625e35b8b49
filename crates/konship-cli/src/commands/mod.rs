// Command handlers for the console session.
//
// Each module handles one family of commands. The session parses a line into
// a `ShellCommand` and `dispatch` routes it to the matching handler.

pub mod containers;
pub mod ships;

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

use konship_lib::Registry;

use crate::output::{render_inventory, OutputFormat};
use crate::terminal::ColorPalette;

pub use containers::{AddContainerArgs, ContainerKindArg, DimensionArgs};
pub use ships::AddShipArgs;

/// One line of console input.
#[derive(Parser, Debug)]
#[command(
    name = "konship",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Container inventory console commands"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// List all container ships and containers.
    #[command(alias = "ls")]
    List {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Add a container ship.
    AddShip(AddShipArgs),
    /// Remove a container ship by serial number.
    RemoveShip {
        /// Serial number of the ship, e.g. KON-S-1.
        serial: String,
    },
    /// Show a ship and the containers aboard it.
    ShowShip {
        /// Serial number of the ship.
        serial: String,
    },
    /// Add a container.
    AddContainer(AddContainerArgs),
    /// Load cargo into a container, replacing its current cargo.
    LoadCargo {
        /// Serial number of the container.
        container: String,
        /// Cargo mass in kilograms.
        #[arg(allow_negative_numbers = true)]
        mass: f64,
    },
    /// Empty a container's cargo.
    EmptyCargo {
        /// Serial number of the container.
        container: String,
    },
    /// Load a container onto a ship.
    Load {
        /// Serial number of the container.
        container: String,
        /// Serial number of the ship.
        ship: String,
    },
    /// Leave the console.
    #[command(alias = "quit")]
    Exit,
}

/// Whether the session keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Execute a parsed command against the registry.
pub fn dispatch(
    command: ShellCommand,
    registry: &mut Registry,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<Flow> {
    match command {
        ShellCommand::List { format } => render_inventory(registry, format, palette, out)?,
        ShellCommand::AddShip(args) => ships::handle_add_ship(registry, args, palette, out)?,
        ShellCommand::RemoveShip { serial } => {
            ships::handle_remove_ship(registry, &serial, palette, out)?
        }
        ShellCommand::ShowShip { serial } => {
            ships::handle_show_ship(registry, &serial, palette, out)?
        }
        ShellCommand::Load { container, ship } => {
            ships::handle_load_container(registry, &container, &ship, palette, out)?
        }
        ShellCommand::AddContainer(args) => {
            containers::handle_add_container(registry, args, palette, out)?
        }
        ShellCommand::LoadCargo { container, mass } => {
            containers::handle_load_cargo(registry, &container, mass, palette, out)?
        }
        ShellCommand::EmptyCargo { container } => {
            containers::handle_empty_cargo(registry, &container, palette, out)?
        }
        ShellCommand::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}
