//! File-per-key storage backend. The production default.
//!
//! Each key maps to one file inside the data directory. File names are the
//! hex encoding of the key bytes, so any UTF-8 key is a valid file name.
//!
//! Writes go to a `.tmp` sibling first and are renamed over the target, so a
//! crash mid-write leaves the previous value intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{StorageBackend, StorageError};

/// Suffix for in-flight writes.
const TMP_SUFFIX: &str = ".tmp";

/// A storage backend that keeps one file per key in a directory.
///
/// # Examples
///
/// ```no_run
/// # use kws_storage::FileBackend;
/// # #[tokio::main]
/// # async fn main() {
/// let backend = FileBackend::open("./data").await.unwrap();
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open (and create if missing) a data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the directory cannot be created.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref();
        tokio::fs::create_dir_all(root)
            .await
            .map_err(|e| StorageError::Open {
                path: root.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(path = %root.display(), "file storage opened");

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Return the data directory of this backend.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    fn file_for(&self, key: &str) -> PathBuf {
        self.root.join(hex::encode(key.as_bytes()))
    }
}

#[async_trait::async_trait]
impl StorageBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match tokio::fs::read(self.file_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_owned(),
                reason: e.to_string(),
            }),
        }
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let target = self.file_for(key);
        let mut tmp = target.clone().into_os_string();
        tmp.push(TMP_SUFFIX);
        let tmp = PathBuf::from(tmp);

        let write_err = |e: std::io::Error| StorageError::Write {
            key: key.to_owned(),
            reason: e.to_string(),
        };

        tokio::fs::write(&tmp, value).await.map_err(write_err)?;
        tokio::fs::rename(&tmp, &target).await.map_err(write_err)
    }
}
