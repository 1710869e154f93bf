//! showcase - bilingual portfolio content manager
//!
//! Holds the editable content of a personal portfolio site (portfolio
//! items, skill categories, experience entries), persists it to a durable
//! key-value store, and provides the typewriter text reveal and UI string
//! translation used to present it.
//!
//! # Architecture
//!
//! - Content lives in memory and is written through to storage after every
//!   mutation, once the initial load has completed
//! - Each collection falls back to built-in defaults on its own when its
//!   stored value is missing or unreadable
//! - Storage failures are logged, never surfaced to the caller
//!
//! # Modules
//!
//! - `storage`: Key-value backends (memory, file)
//! - `core`: ContentStore, Typewriter and reveal sessions
//! - `domain`: Data structures (PortfolioItem, SkillCategory, Locale)
//! - `i18n`: UI string translation
//! - `admin`: Demo admin gate
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Render the site in German
//! showcase show --locale de
//!
//! # Add a portfolio item
//! showcase --password admin123 portfolio add --title-en "Poster" --image /poster.png
//!
//! # Play a typewriter reveal
//! showcase type "Hello, Vienna" --speed-ms 80
//! ```

pub mod admin;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod i18n;
pub mod storage;

// Re-export main types at crate root for convenience
pub use admin::AdminGate;
pub use core::{ContentStore, RevealEvent, RevealHandle, Typewriter};
pub use domain::{ExperienceItem, ItemId, Locale, LocalizedText, PortfolioDraft, PortfolioItem, SkillCategory};
pub use i18n::Translator;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
