//! schema-sync CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use schema_sync::cli::Cli;
use schema_sync::registry::HttpGateway;
use schema_sync::sync::SyncRunner;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG, `--quiet` to ERROR
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool, quiet: bool) {
    let filter = if debug {
        EnvFilter::new("schema_sync=debug")
    } else if quiet {
        EnvFilter::new("schema_sync=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("schema_sync=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> schema_sync::Result<()> {
    let config = cli.into_config();
    let gateway = HttpGateway::new(&config.endpoint, &config.project)?;
    let runner = SyncRunner::new(config, gateway);
    runner.run()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.quiet);

    tracing::debug!("schema-sync starting with args: {:?}", cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
