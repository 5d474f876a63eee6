//! In-memory storage backend.
//!
//! Nothing survives a restart, so this is what tests use and what
//! `KWS_STORAGE=memory` selects.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{StorageBackend, StorageError};

/// Documents kept in a process-local map.
///
/// Cloning shares the map, so a clone observes every write made through the
/// original. Stored values are immutable `Arc<[u8]>` snapshots; a `put`
/// swaps the snapshot rather than editing it in place.
///
/// # Examples
///
/// ```
/// # use kws_storage::{MemoryBackend, StorageBackend};
/// # #[tokio::main]
/// # async fn main() {
/// let backend = MemoryBackend::new();
/// backend.put("kws-submissions", b"[]").await.unwrap();
/// let val = backend.get("kws-submissions").await.unwrap();
/// assert_eq!(val, Some(b"[]".to_vec()));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    documents: Arc<RwLock<HashMap<String, Arc<[u8]>>>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        // The read guard is released before the bytes are copied.
        let snapshot = self.documents.read().await.get(key).map(Arc::clone);
        Ok(snapshot.map(|bytes| bytes.to_vec()))
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let snapshot: Arc<[u8]> = Arc::from(value);
        self.documents.write().await.insert(key.to_owned(), snapshot);
        Ok(())
    }
}
