//! Domain types for the showcase site.
//!
//! This module contains the core data structures:
//! - Content: portfolio items, skill categories, experience entries
//! - Locale: supported languages and language-keyed text
//! - Defaults: the built-in content set

pub mod content;
pub mod defaults;
pub mod locale;

// Re-export commonly used types
pub use content::{ExperienceItem, ItemId, PortfolioDraft, PortfolioItem, SkillCategory};
pub use locale::{Locale, LocalizedText};
