//! DocumentBackend trait and the filesystem-backed store
//!
//! Documents live as plain files in a single flat directory, one file per
//! name. Writes go to a temporary file first and are renamed into place, so
//! a concurrent read sees either the complete old content or the complete
//! new content, never a partial file.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use tokio::sync::Mutex as AsyncMutex;

use crate::error::{StoreError, StoreResult};

/// Storage abstraction for the document API.
///
/// Both operations are atomic lookup-or-write steps with no intermediate
/// state. A `put` for an existing name overwrites unconditionally
/// (last-write-wins, no versioning).
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Store `content` under `name`, creating or replacing the document.
    async fn put(&self, name: &str, content: Bytes) -> StoreResult<()>;

    /// Return the full content stored under `name`.
    async fn get(&self, name: &str) -> StoreResult<Bytes>;
}

/// Validate a client-supplied document name.
///
/// Names map verbatim to filesystem entries, so anything that is not a
/// single path component is rejected before any disk access: empty names,
/// `.`/`..`, and names containing separators or NUL bytes.
pub fn validate_name(name: &str) -> StoreResult<&str> {
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    if name == "." || name == ".." {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// Filesystem-backed document store rooted at a single flat directory.
pub struct FsDocumentStore {
    root: PathBuf,
    /// Per-name write locks. Concurrent puts of the same name serialize
    /// here; puts of distinct names proceed independently. Reads take no
    /// lock since publication is rename-based.
    write_locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl FsDocumentStore {
    /// Create a store rooted at `root`, creating the directory if absent.
    pub fn new(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;

        tracing::info!(storage_dir = %root.display(), "document store opened");

        Ok(Self {
            root,
            write_locks: Mutex::new(HashMap::new()),
        })
    }

    /// The directory documents are stored in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write_lock(&self, name: &str) -> Arc<AsyncMutex<()>> {
        let mut locks = self.write_locks.lock();
        locks.entry(name.to_string()).or_default().clone()
    }
}

#[async_trait]
impl DocumentBackend for FsDocumentStore {
    async fn put(&self, name: &str, content: Bytes) -> StoreResult<()> {
        let name = validate_name(name)?;

        let lock = self.write_lock(name);
        let _guard = lock.lock().await;

        let root = self.root.clone();
        let dest = self.root.join(name);
        let size = content.len();

        // Blocking section: write the full content to a uniquely named
        // temp file in the storage directory, then rename over the
        // destination. Rename within one directory is atomic.
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&root)?;
            tmp.write_all(&content)?;
            tmp.flush()?;
            tmp.as_file().sync_all()?;
            tmp.persist(&dest).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Io(std::io::Error::other(e)))??;

        tracing::debug!(name, size, "document stored");
        Ok(())
    }

    async fn get(&self, name: &str) -> StoreResult<Bytes> {
        let name = validate_name(name)?;

        let path = self.root.join(name);
        match tokio::fs::read(&path).await {
            Ok(content) => Ok(Bytes::from(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
