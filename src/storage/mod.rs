//! Durable key-value storage for site content.
//!
//! The content store persists each collection as a JSON string under a
//! fixed key. Any backend that can get, set and remove string values by key
//! can serve as the durable store.
//!
//! # Storage Layout
//!
//! ```text
//! ~/.showcase/
//! └── storage/                          # FileStore root
//!     ├── alfred-portfolio-items.json
//!     ├── alfred-skill-categories.json
//!     └── alfred-experience-items.json
//! ```

pub mod file;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the portfolio item collection
pub const PORTFOLIO_KEY: &str = "alfred-portfolio-items";

/// Key holding the skill category collection
pub const SKILLS_KEY: &str = "alfred-skill-categories";

/// Key holding the experience item collection
pub const EXPERIENCE_KEY: &str = "alfred-experience-items";

/// All content keys, in load order
pub const CONTENT_KEYS: [&str; 3] = [PORTFOLIO_KEY, SKILLS_KEY, EXPERIENCE_KEY];

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-valued key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Human-readable backend name (for logs)
    fn name(&self) -> &str;

    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reject keys that cannot be used safely as file names
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
