//! Logging initialization for the CLI.
//!
//! Logging is owned by the CLI crate to keep the core library free of it.
//! Uses tracing with optional structured JSON output for machine-readable logs.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber based on configuration.
///
/// # Arguments
/// * `verbosity` - 0 = INFO, 1 = DEBUG, 2+ = TRACE
/// * `json` - If true, output JSON lines to stderr
///
/// JSON output format:
/// ```json
/// {"timestamp":"...","level":"INFO","target":"registry::commands::serve","fields":{"message":"registry listening","addr":"127.0.0.1:8080"}}
/// ```
///
/// # Panics
/// Panics if the subscriber cannot be initialized (e.g., called twice).
pub fn init(verbosity: u8, json: bool) {
    let subscriber = tracing_subscriber::registry().with(env_filter(verbosity));

    if json {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

/// Build the filter: `RUST_LOG` (default `warn`) plus the verbosity level for
/// the `registry` binary's own events.
fn env_filter(verbosity: u8) -> EnvFilter {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"))
        .add_directive(format!("registry={level}").parse().unwrap())
}
