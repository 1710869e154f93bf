//! File-backed storage backend.
//!
//! Each key is stored as `<root>/<key>.json`. A write goes to a temporary
//! file in the same directory and is renamed over the key file, so readers
//! see either the old or the new document, never a partial one. Writers to
//! the same key are serialized through an exclusive lock on `<root>/.<key>.lock`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tempfile::NamedTempFile;
use tokio::fs;

use super::{validate_key, KeyValueStore, StorageError};

/// Durable store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open the store in the configured storage directory
    pub fn from_config() -> anyhow::Result<Self> {
        Ok(Self::new(crate::config::storage_dir()?))
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    pub fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    /// Path of the lock file guarding writes to `key`.
    ///
    /// Keys never start with '.', so this cannot collide with a key file.
    fn lock_path(&self, key: &str) -> PathBuf {
        self.root.join(format!(".{}.lock", key))
    }
}

/// Atomically replace `path` with `value` while holding the key's write lock
fn write_atomic(root: &Path, lock_path: &Path, path: &Path, value: &str) -> Result<(), StorageError> {
    let lock = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(lock_path)?;
    FileExt::lock_exclusive(&lock)?;

    let mut temp = NamedTempFile::new_in(root)?;
    temp.write_all(value.as_bytes())?;
    temp.flush()?;
    temp.as_file().sync_data()?;
    temp.persist(path).map_err(|e| e.error)?;

    // Lock is released when the handle drops
    Ok(())
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        let lock_path = self.lock_path(key);
        fs::create_dir_all(&self.root).await?;

        let root = self.root.clone();
        let value = value.to_string();
        tokio::task::spawn_blocking(move || write_atomic(&root, &lock_path, &path, &value))
            .await
            .map_err(|e| StorageError::Unavailable(format!("write task failed: {}", e)))?
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
