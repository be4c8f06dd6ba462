//! CLI module for campusdb
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server over a fresh (seeded) registry

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
