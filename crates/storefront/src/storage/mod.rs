//! Key/value storage the shop state is persisted into.
//!
//! Modelled on browser local storage: string values under string keys,
//! synchronous access, no transactions. The store treats every failure here
//! as non-fatal.
//!
//! # Backends
//!
//! - [`FileStorage`] - one JSON file per key under a data directory
//! - [`MemoryStorage`] - in-process map, for tests and ephemeral runs

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying medium failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored payload could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key cannot be used by this backend.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Synchronous string key/value storage.
pub trait StorageBackend: Send + Sync + std::fmt::Debug {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored there.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid key or a failed read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid key or a failed write.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid key or a failed delete.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Keys become file names, so only `[A-Za-z0-9_-]` is accepted.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
