//! Content management subcommands.
//!
//! Listing is open to everyone; anything that writes requires the admin
//! password.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::de::DeserializeOwned;

use super::{open_store, require_admin};
use crate::domain::{ExperienceItem, ItemId, Locale, PortfolioDraft, SkillCategory};

/// Portfolio subcommands
#[derive(Subcommand, Debug)]
pub enum PortfolioCommands {
    /// List portfolio items
    List,

    /// Add a portfolio item
    Add {
        #[command(flatten)]
        fields: PortfolioFields,
    },

    /// Update fields of an existing portfolio item
    Update {
        /// Item ID
        id: String,

        #[command(flatten)]
        fields: PortfolioFields,
    },

    /// Delete a portfolio item
    Delete {
        /// Item ID
        id: String,
    },
}

/// Subcommands for collections edited as a whole
#[derive(Subcommand, Debug)]
pub enum CollectionCommands {
    /// List entries
    List,

    /// Replace the collection with a JSON array from a file
    Replace {
        /// JSON file holding the new collection
        #[arg(short, long)]
        file: PathBuf,
    },
}

/// Editable portfolio fields. Omitted fields keep their current value.
#[derive(Args, Debug, Default)]
pub struct PortfolioFields {
    /// English title
    #[arg(long)]
    pub title_en: Option<String>,

    /// German title
    #[arg(long)]
    pub title_de: Option<String>,

    /// English description
    #[arg(long)]
    pub description_en: Option<String>,

    /// German description
    #[arg(long)]
    pub description_de: Option<String>,

    /// Preview image path or URL
    #[arg(long)]
    pub image: Option<String>,

    /// External link (empty string clears it)
    #[arg(long)]
    pub link: Option<String>,

    /// Video URL (empty string clears it)
    #[arg(long)]
    pub video_url: Option<String>,
}

impl PortfolioFields {
    /// Apply the given fields on top of `draft`
    pub fn apply(self, mut draft: PortfolioDraft) -> PortfolioDraft {
        if let Some(title) = self.title_en {
            draft.title.set(Locale::En, title);
        }
        if let Some(title) = self.title_de {
            draft.title.set(Locale::De, title);
        }
        if let Some(description) = self.description_en {
            draft.description.set(Locale::En, description);
        }
        if let Some(description) = self.description_de {
            draft.description.set(Locale::De, description);
        }
        if let Some(image) = self.image {
            draft.image = image;
        }
        if let Some(link) = self.link {
            draft = draft.with_link(link);
        }
        if let Some(url) = self.video_url {
            draft = draft.with_video_url(url);
        }
        draft
    }
}

/// Execute portfolio subcommands
pub async fn execute_portfolio(command: PortfolioCommands, password: Option<&str>) -> Result<()> {
    match command {
        PortfolioCommands::List => list_portfolio().await,
        PortfolioCommands::Add { fields } => {
            let mut gate = require_admin(password)?;
            if fields.title_en.is_none() || fields.image.is_none() {
                anyhow::bail!("--title-en and --image are required to add an item");
            }

            let mut store = open_store().await?;
            let id = store
                .add_portfolio_item(fields.apply(PortfolioDraft::default()))
                .await;
            gate.logout();

            println!("Added portfolio item {}", id);
            Ok(())
        }
        PortfolioCommands::Update { id, fields } => {
            let mut gate = require_admin(password)?;
            let id = ItemId::new(id);

            let mut store = open_store().await?;
            let Some(existing) = store.portfolio_item(&id) else {
                anyhow::bail!("Portfolio item not found: {}", id);
            };
            let draft = fields.apply(existing.to_draft());
            store.update_portfolio_item(&id, draft).await;
            gate.logout();

            println!("Updated portfolio item {}", id);
            Ok(())
        }
        PortfolioCommands::Delete { id } => {
            let mut gate = require_admin(password)?;
            let id = ItemId::new(id);

            let mut store = open_store().await?;
            let removed = store.delete_portfolio_item(&id).await;
            gate.logout();

            if removed {
                println!("Deleted portfolio item {}", id);
            } else {
                println!("No portfolio item {} (nothing to delete)", id);
            }
            Ok(())
        }
    }
}

async fn list_portfolio() -> Result<()> {
    let store = open_store().await?;
    let items = store.portfolio_items();

    if items.is_empty() {
        println!("No portfolio items");
        return Ok(());
    }

    println!("{:<38} {:<36} {:<36} {:<6}", "ID", "TITLE (EN)", "TITLE (DE)", "VIDEO");
    println!("{}", "-".repeat(118));

    for item in items {
        println!(
            "{:<38} {:<36} {:<36} {:<6}",
            item.id,
            truncate(&item.title.en, 34),
            truncate(&item.title.de, 34),
            if item.video_url.is_some() { "yes" } else { "-" }
        );
    }

    Ok(())
}

/// Execute skill category subcommands
pub async fn execute_skills(command: CollectionCommands, password: Option<&str>) -> Result<()> {
    match command {
        CollectionCommands::List => {
            let store = open_store().await?;
            for category in store.skill_categories() {
                println!("[{}] {} {} / {}", category.id, category.icon, category.title.en, category.title.de);
                println!("    {}", category.skills.join(", "));
            }
            Ok(())
        }
        CollectionCommands::Replace { file } => {
            let mut gate = require_admin(password)?;
            let categories: Vec<SkillCategory> = read_json(&file).await?;

            let mut store = open_store().await?;
            let count = categories.len();
            store.replace_skill_categories(categories).await;
            gate.logout();

            println!("Replaced skill categories ({} entries)", count);
            Ok(())
        }
    }
}

/// Execute experience subcommands
pub async fn execute_experience(command: CollectionCommands, password: Option<&str>) -> Result<()> {
    match command {
        CollectionCommands::List => {
            let store = open_store().await?;
            for item in store.experience_items() {
                println!("[{}] {:<14} {}", item.id, item.period, item.title.en);
            }
            Ok(())
        }
        CollectionCommands::Replace { file } => {
            let mut gate = require_admin(password)?;
            let items: Vec<ExperienceItem> = read_json(&file).await?;

            let mut store = open_store().await?;
            let count = items.len();
            store.replace_experience_items(items).await;
            gate.logout();

            println!("Replaced experience entries ({} entries)", count);
            Ok(())
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Shorten text to at most `max` characters for table output
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
