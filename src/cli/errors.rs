//! CLI error types.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime construction or server bind/serve failure
    #[error("Boot failed: {0}")]
    BootFailed(String),
}

impl CliError {
    /// Boot failure with context
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }
}
