//! Persisted log of contact, inquiry and callback submissions.
//!
//! The whole list lives under a single storage key as a JSON array, newest
//! first, with timestamps as RFC 3339 strings. It is read once at startup and
//! rewritten in full after every addition.
//!
//! Storage failures never reach the visitor: a failed read starts the log
//! empty and a failed write keeps the new record in memory. Both are logged.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use kws_storage::StorageBackend;

use crate::error::SubmissionError;
use crate::ids::IdGenerator;
use crate::model::{Submission, SubmissionDraft};

/// Storage key holding the serialized submissions list.
pub const SUBMISSIONS_KEY: &str = "kws-submissions";

/// In-memory submissions list mirrored to a storage backend.
pub struct SubmissionLog {
    storage: Arc<dyn StorageBackend>,
    ids: IdGenerator,
    entries: RwLock<Vec<Submission>>,
}

impl SubmissionLog {
    /// Rehydrate the log from storage.
    ///
    /// A missing key is an empty log. An unreadable or corrupt value is
    /// logged and also treated as empty.
    pub async fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let entries = match read_stored(storage.as_ref()).await {
            Ok(entries) => {
                info!(count = entries.len(), "submissions loaded");
                entries
            }
            Err(e) => {
                warn!(error = %e, "failed to load submissions from storage, starting empty");
                Vec::new()
            }
        };

        Self {
            storage,
            ids: IdGenerator::new(),
            entries: RwLock::new(entries),
        }
    }

    /// Record a new submission at the front of the list and persist the list.
    pub async fn add(&self, draft: SubmissionDraft) -> Submission {
        let submission = draft.into_submission(self.ids.next_submission_id(), Utc::now());

        // Hold the write lock across the save so stored snapshots land in order.
        let mut entries = self.entries.write().await;
        entries.insert(0, submission.clone());

        if let Err(e) = write_stored(self.storage.as_ref(), &entries).await {
            error!(error = %e, id = %submission.id, "failed to save submissions to storage");
        }

        info!(id = %submission.id, kind = ?submission.kind, "submission recorded");
        submission
    }

    /// All submissions, newest first.
    pub async fn list(&self) -> Vec<Submission> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl std::fmt::Debug for SubmissionLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionLog").finish_non_exhaustive()
    }
}

/// Read and decode the stored list. A missing key yields an empty list.
///
/// # Errors
///
/// - [`SubmissionError::Storage`] if the backend read fails.
/// - [`SubmissionError::Serialization`] if the stored JSON is malformed.
pub async fn read_stored(storage: &dyn StorageBackend) -> Result<Vec<Submission>, SubmissionError> {
    let Some(bytes) = storage.get(SUBMISSIONS_KEY).await? else {
        return Ok(Vec::new());
    };
    serde_json::from_slice(&bytes).map_err(|e| SubmissionError::Serialization {
        reason: e.to_string(),
    })
}

/// Encode and store the full list.
///
/// # Errors
///
/// - [`SubmissionError::Serialization`] if encoding fails.
/// - [`SubmissionError::Storage`] if the backend write fails.
pub async fn write_stored(
    storage: &dyn StorageBackend,
    entries: &[Submission],
) -> Result<(), SubmissionError> {
    let bytes = serde_json::to_vec(entries).map_err(|e| SubmissionError::Serialization {
        reason: e.to_string(),
    })?;
    storage.put(SUBMISSIONS_KEY, &bytes).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::SubmissionKind;
    use kws_storage::{MemoryBackend, StorageError};

    /// Backend whose every operation fails.
    struct BrokenBackend;

    #[async_trait::async_trait]
    impl StorageBackend for BrokenBackend {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Err(StorageError::Read {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            })
        }
        async fn put(&self, key: &str, _value: &[u8]) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            })
        }
    }

    fn contact(name: &str) -> SubmissionDraft {
        SubmissionDraft {
            kind: SubmissionKind::Contact,
            name: name.to_owned(),
            email: Some("a@example.com".to_owned()),
            subject: Some("Quote".to_owned()),
            message: Some("Need a thresher".to_owned()),
            product_name: None,
            phone: None,
            preferred_time: None,
        }
    }

    #[tokio::test]
    async fn empty_storage_loads_empty_log() {
        let log = SubmissionLog::load(Arc::new(MemoryBackend::new())).await;
        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn add_prepends_and_persists() {
        let storage = Arc::new(MemoryBackend::new());
        let log = SubmissionLog::load(storage.clone()).await;

        let first = log.add(contact("Aisha")).await;
        let second = log.add(contact("David")).await;

        assert!(first.id.starts_with("sub_"));
        assert_ne!(first.id, second.id);

        let listed = log.list().await;
        assert_eq!(listed[0].name, "David");
        assert_eq!(listed[1].name, "Aisha");

        let stored = read_stored(storage.as_ref()).await.unwrap();
        assert_eq!(stored, listed);
    }

    #[tokio::test]
    async fn reload_restores_list_and_timestamps() {
        let storage = Arc::new(MemoryBackend::new());
        let log = SubmissionLog::load(storage.clone()).await;
        let written = log.add(contact("Aisha")).await;

        let reloaded = SubmissionLog::load(storage).await;
        let entries = reloaded.list().await;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], written);
        assert_eq!(entries[0].timestamp, written.timestamp);
    }

    #[tokio::test]
    async fn timestamps_are_stored_as_strings() {
        let storage = Arc::new(MemoryBackend::new());
        let log = SubmissionLog::load(storage.clone()).await;
        log.add(contact("Aisha")).await;

        let raw = storage.get(SUBMISSIONS_KEY).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert!(json[0]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn corrupt_value_loads_as_empty() {
        let storage = Arc::new(MemoryBackend::new());
        storage.put(SUBMISSIONS_KEY, b"{not json").await.unwrap();

        let log = SubmissionLog::load(storage).await;
        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn read_failure_loads_as_empty() {
        let log = SubmissionLog::load(Arc::new(BrokenBackend)).await;
        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn write_failure_keeps_submission_in_memory() {
        let log = SubmissionLog::load(Arc::new(BrokenBackend)).await;
        log.add(contact("Aisha")).await;
        assert_eq!(log.len().await, 1);
    }
}
