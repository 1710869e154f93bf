//! Records shown on the site: portfolio items, skill categories and
//! experience entries.
//!
//! The JSON shape of these types is the storage format, so field names
//! follow the stored documents (`videoUrl`, not `video_url`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::locale::LocalizedText;

/// Stable record identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier that has never been issued before
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    /// Unique within the portfolio collection
    pub id: ItemId,

    pub title: LocalizedText,

    pub description: LocalizedText,

    /// Path or URI of the preview image
    pub image: String,

    /// External project link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Playable video; shown instead of following `link` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl PortfolioItem {
    /// Build a record from a draft under the given id
    pub fn from_draft(id: ItemId, draft: PortfolioDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image: draft.image,
            link: draft.link,
            video_url: draft.video_url,
        }
    }

    /// The editable fields of this record
    pub fn to_draft(&self) -> PortfolioDraft {
        PortfolioDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            link: self.link.clone(),
            video_url: self.video_url.clone(),
        }
    }
}

/// Portfolio item fields without an id; input of add and update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDraft {
    pub title: LocalizedText,

    pub description: LocalizedText,

    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl PortfolioDraft {
    /// Create a draft with the required fields
    pub fn new(title: LocalizedText, description: LocalizedText, image: impl Into<String>) -> Self {
        Self {
            title,
            description,
            image: image.into(),
            link: None,
            video_url: None,
        }
    }

    /// Set the external link. Empty strings clear it.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = non_empty(link.into());
        self
    }

    /// Set the video URL. Empty strings clear it.
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = non_empty(url.into());
        self
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// A group of related skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: ItemId,

    /// Glyph shown next to the title
    pub icon: String,

    pub title: LocalizedText,

    /// Skill names in display order
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A position or project in the experience timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: ItemId,

    pub title: LocalizedText,

    /// Free-form display period, e.g. "2021-Present"
    pub period: String,
}
