use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use konship_cli::logging::{init_tracing, LogFormat};
use konship_cli::output::print_banner;
use konship_cli::session::{Session, SessionOptions};
use konship_cli::terminal::ColorPalette;
use konship_lib::{RegistryConfig, WeightPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "konship",
    author,
    version,
    about = "Container and container-ship inventory console",
    after_help = "Commands are read one per line from stdin (or --script). Type 'help' inside the console for the command list."
)]
struct Cli {
    /// Read commands from a file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Reject loads that would exceed a ship's weight capacity.
    #[arg(long)]
    enforce_weight: bool,

    /// Stop at the first failed command and exit with an error.
    #[arg(long)]
    fail_fast: bool,

    /// Disable ANSI colors in output.
    #[arg(long)]
    no_color: bool,

    /// Suppress the banner in interactive sessions.
    #[arg(long)]
    no_logo: bool,

    /// Log output format (logs go to stderr).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let mut config =
        RegistryConfig::from_env().context("failed to read KONSHIP_* configuration")?;
    if cli.enforce_weight {
        config.weight_policy = WeightPolicy::Enforced;
    }

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            let options = SessionOptions {
                interactive: false,
                fail_fast: cli.fail_fast,
            };
            let mut session = Session::new(config, palette, options, out);
            session
                .run(BufReader::new(file))
                .with_context(|| format!("script {} failed", path.display()))
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive && !cli.no_logo {
                print_banner(&palette, &mut out)?;
                out.flush()?;
            }
            let options = SessionOptions {
                interactive,
                fail_fast: cli.fail_fast,
            };
            let mut session = Session::new(config, palette, options, out);
            session.run(stdin.lock())
        }
    }
}
