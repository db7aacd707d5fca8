#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]

mod commands;
mod logging;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use registry_core::config::{DEFAULT_HOST, DEFAULT_PACKAGES_DIR, DEFAULT_PORT};
use registry_core::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "registry")]
#[command(author, version, about = "A read-only package registry serving category listings", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted logs on stderr
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding one sub-directory per package version
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "REGISTRY_PACKAGES_DIR",
        default_value = DEFAULT_PACKAGES_DIR
    )]
    packages_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Serve the registry over HTTP
    Serve {
        /// Host to bind to
        #[arg(long, env = "REGISTRY_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(long, short = 'p', env = "REGISTRY_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Print the category listing as JSON
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new(cli.packages_dir.clone())
        .with_verbosity(cli.verbose)
        .with_json_logs(cli.json);

    logging::init(config.verbosity, config.json_logs);

    match cli.command {
        Some(Commands::Version) | None => commands::version::run(),
        Some(Commands::Categories) => {
            let span = tracing::info_span!("categories", cmd = "categories");
            let _guard = span.enter();
            commands::categories::run(&config)
        }
        Some(Commands::Serve { host, port }) => {
            let config = config.with_listen(host, port);
            let rt = tokio::runtime::Runtime::new().into_diagnostic()?;
            rt.block_on(commands::serve::run(config))
        }
    }
}
