//! Shared handler state.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::observability::{Logger, Severity};
use crate::registry::{seed, Registry};

use super::errors::ApiError;

/// The registry behind every route, guarded by one global lock.
///
/// The store itself has no internal synchronization, so the lock is the
/// serialization point the host owes it. Handlers hold a guard only for
/// the duration of a single store call.
pub struct AppState {
    registry: RwLock<Registry>,
}

impl AppState {
    /// State over an empty registry.
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(Registry::new()),
        }
    }

    /// State over a registry populated with the start-up dataset.
    pub fn seeded() -> Self {
        let mut registry = Registry::new();
        seed(&mut registry).expect("seed updates address records it just created");
        Logger::log(Severity::Info, "seed_loaded", &[]);
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Acquire the registry for reading.
    pub fn registry(&self) -> Result<RwLockReadGuard<'_, Registry>, ApiError> {
        self.registry.read().map_err(|_| {
            Logger::log_stderr(Severity::Error, "registry_lock_poisoned", &[]);
            ApiError::Internal
        })
    }

    /// Acquire the registry for writing.
    pub fn registry_mut(&self) -> Result<RwLockWriteGuard<'_, Registry>, ApiError> {
        self.registry.write().map_err(|_| {
            Logger::log_stderr(Severity::Error, "registry_lock_poisoned", &[]);
            ApiError::Internal
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
