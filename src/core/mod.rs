//! Core content and reveal logic.
//!
//! This module contains:
//! - ContentStore: Editable site content with durable persistence
//! - Typewriter: Pure reveal arithmetic (visible characters over time)
//! - Reveal: Timer-driven reveal sessions with cancellation

pub mod content_store;
pub mod reveal;
pub mod typewriter;

// Re-export commonly used types
pub use content_store::{ContentSnapshot, ContentStore, LoadReport, LoadSource, SNAPSHOT_VERSION};
pub use reveal::{RevealEvent, RevealHandle};
pub use typewriter::{visible_chars, RevealState, Typewriter, TypewriterError};
