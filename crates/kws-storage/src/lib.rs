//! Storage backend abstraction for the KWS site.
//!
//! This crate defines the [`StorageBackend`] trait, a pure key-value storage
//! interface that knows nothing about products, posts, or submissions. The
//! submissions log in `kws-core` serializes its records to JSON and hands the
//! bytes to a backend under a single well-known key.
//!
//! Two implementations are provided:
//!
//! - [`FileBackend`]: production default, one file per key in a directory
//! - [`MemoryBackend`]: in-memory, for tests and throwaway deployments

mod error;
mod file_backend;
mod memory;

pub use error::StorageError;
pub use file_backend::FileBackend;
pub use memory::MemoryBackend;

/// A pluggable key-value storage backend.
///
/// Keys are UTF-8 strings (e.g. `kws-submissions`). Values are opaque byte
/// arrays; callers decide the encoding. Each key holds one whole document
/// that is read and replaced as a unit.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync + 'static {
    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the underlying backend fails.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store a key-value pair, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the underlying backend fails.
    async fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}
