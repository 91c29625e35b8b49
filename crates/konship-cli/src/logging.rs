//! Tracing initialization for the console.
//!
//! Log events go to stderr so they never interleave with command output on
//! stdout. The level is taken from `RUST_LOG` and defaults to `warn`, which
//! still surfaces hazard notifications and unenforced weight overruns.

use clap::ValueEnum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text logging.
    #[default]
    Text,
    /// JSON structured logging, one object per line.
    Json,
}

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .flatten_event(true),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    };

    // A subscriber installed earlier (e.g. by a test harness) takes precedence.
    let _ = result;
}
