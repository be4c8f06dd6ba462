//! CLI command implementations
//!
//! The binary has one job: build the state, hand it to the HTTP server,
//! and run the server on a tokio runtime.

use std::sync::Arc;

use crate::http_server::{AppState, HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            host,
            port,
            no_seed,
        } => serve(host, port, no_seed),
    }
}

/// Start the HTTP server
pub fn serve(host: String, port: u16, no_seed: bool) -> CliResult<()> {
    let config = HttpServerConfig {
        host,
        port,
        cors_origins: Vec::new(),
    };

    let state = if no_seed {
        Arc::new(AppState::new())
    } else {
        Arc::new(AppState::seeded())
    };

    let server = HttpServer::with_state(config, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}
