//! CLI argument definitions using clap
//!
//! Commands:
//! - campusdb serve [--host <host>] [--port <port>] [--no-seed]

use clap::{Parser, Subcommand};

/// campusdb - an in-memory university records service
#[derive(Parser, Debug)]
#[command(name = "campusdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 3001)]
        port: u16,

        /// Start with an empty registry instead of the start-up dataset
        #[arg(long)]
        no_seed: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
