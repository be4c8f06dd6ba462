//! Registry error types.
//!
//! Only a direct update against a missing id errors. Reads and traversals
//! degrade to absent/empty results instead, because stale relationship
//! links are expected rather than exceptional.

use thiserror::Error;

use super::types::EntityKind;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The addressed identifier has no record behind it.
    #[error("{0} not found")]
    NotFound(EntityKind),
}
