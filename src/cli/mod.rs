//! Command-line interface for showcase.
//!
//! Renders the site content, manages it behind the admin gate, and plays
//! typewriter reveals in the terminal.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::admin::AdminGate;
use crate::core::{ContentSnapshot, ContentStore, RevealEvent};
use crate::domain::Locale;
use crate::i18n::{self, Translator};
use crate::storage::FileStore;

pub mod content;

/// showcase - bilingual portfolio content manager
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Admin password for management commands
    #[arg(long, global = true, env = "SHOWCASE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the site content as text
    Show {
        /// Display language (defaults to the configured locale)
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,
    },

    /// Manage portfolio items
    Portfolio {
        #[command(subcommand)]
        command: content::PortfolioCommands,
    },

    /// Manage skill categories
    Skills {
        #[command(subcommand)]
        command: content::CollectionCommands,
    },

    /// Manage experience entries
    Experience {
        #[command(subcommand)]
        command: content::CollectionCommands,
    },

    /// Restore the built-in content and clear stored data
    Reset,

    /// Write all content as a JSON snapshot
    Export {
        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all content from a JSON snapshot
    Import {
        /// Snapshot file produced by `export`
        file: PathBuf,
    },

    /// Play a typewriter reveal of some text
    Type {
        /// Text to reveal
        text: String,

        /// Pause before the first character (ms)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Time per character (ms)
        #[arg(long)]
        speed_ms: Option<u64>,
    },

    /// Look up a UI string
    Translate {
        /// Translation key (e.g. "hero.title")
        key: Option<String>,

        /// Display language (defaults to the configured locale)
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Display language for CLI (maps to Locale)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LocaleArg {
    /// English
    En,

    /// German
    De,
}

impl From<LocaleArg> for Locale {
    fn from(l: LocaleArg) -> Self {
        match l {
            LocaleArg::En => Locale::En,
            LocaleArg::De => Locale::De,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let password = self.password;

        match self.command {
            Commands::Show { locale } => show_site(locale).await,
            Commands::Portfolio { command } => {
                content::execute_portfolio(command, password.as_deref()).await
            }
            Commands::Skills { command } => {
                content::execute_skills(command, password.as_deref()).await
            }
            Commands::Experience { command } => {
                content::execute_experience(command, password.as_deref()).await
            }
            Commands::Reset => reset_content(password.as_deref()).await,
            Commands::Export { output } => export_content(output).await,
            Commands::Import { file } => import_content(&file, password.as_deref()).await,
            Commands::Type {
                text,
                delay_ms,
                speed_ms,
            } => type_text(text, delay_ms, speed_ms).await,
            Commands::Translate { key, locale } => translate(key.as_deref(), locale),
            Commands::Config => show_config(),
        }
    }
}

/// Open the content store on the configured storage directory
pub(crate) async fn open_store() -> Result<ContentStore<FileStore>> {
    let storage = FileStore::from_config()?;
    tracing::debug!("Using storage at {}", storage.root().display());
    Ok(ContentStore::open(storage).await)
}

/// Authenticate against the admin gate, or refuse the command
pub(crate) fn require_admin(password: Option<&str>) -> Result<AdminGate> {
    let mut gate = AdminGate::from_config()?;

    let Some(password) = password else {
        anyhow::bail!("This command requires the admin password (--password or SHOWCASE_PASSWORD)");
    };
    if !gate.login(password) {
        anyhow::bail!("Invalid password");
    }

    Ok(gate)
}

fn resolve_locale(locale: Option<LocaleArg>) -> Result<Locale> {
    match locale {
        Some(l) => Ok(l.into()),
        None => Ok(crate::config::config()?.default_locale),
    }
}

/// Render all sections in one language
async fn show_site(locale: Option<LocaleArg>) -> Result<()> {
    let locale = resolve_locale(locale)?;
    let t = Translator::new(locale);
    let store = open_store().await?;

    println!("{}", t.t("hero.title"));
    println!("{}", t.t("hero.subtitle"));

    println!("\n## {}\n", t.t("about.title"));
    println!("{}", t.t("about.text"));

    println!("\n## {}\n", t.t("skills.title"));
    for category in store.skill_categories() {
        println!("{} {}", category.icon, category.title.get(locale));
        println!("   {}", category.skills.join(", "));
    }

    println!("\n## {}\n", t.t("portfolio.title"));
    for item in store.portfolio_items() {
        println!("- {}", item.title.get(locale));
        println!("  {}", item.description.get(locale));
        if let Some(video) = &item.video_url {
            println!("  ▶ {}", video);
        } else if let Some(link) = &item.link {
            println!("  → {}", link);
        }
    }

    println!("\n## {}\n", t.t("experience.title"));
    for item in store.experience_items() {
        println!("{:<14} {}", item.period, item.title.get(locale));
    }

    println!("\n## {}", t.t("contact.title"));

    Ok(())
}

/// Reset all content to defaults
async fn reset_content(password: Option<&str>) -> Result<()> {
    let mut gate = require_admin(password)?;
    let mut store = open_store().await?;

    store.reset_to_default().await;
    gate.logout();

    println!(
        "Content reset: {} portfolio items, {} skill categories, {} experience entries",
        store.portfolio_items().len(),
        store.skill_categories().len(),
        store.experience_items().len()
    );

    Ok(())
}

/// Export a snapshot of all content
async fn export_content(output: Option<PathBuf>) -> Result<()> {
    let store = open_store().await?;
    let json = serde_json::to_string_pretty(&store.snapshot())?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
            eprintln!("Exported content to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Replace all content with a snapshot
async fn import_content(file: &Path, password: Option<&str>) -> Result<()> {
    let mut gate = require_admin(password)?;

    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read snapshot: {}", file.display()))?;
    let snapshot: ContentSnapshot =
        serde_json::from_str(&raw).context("Failed to parse snapshot JSON")?;

    let mut store = open_store().await?;
    store.restore(snapshot).await;
    gate.logout();

    println!(
        "Imported {} portfolio items, {} skill categories, {} experience entries",
        store.portfolio_items().len(),
        store.skill_categories().len(),
        store.experience_items().len()
    );

    Ok(())
}

/// Reveal text in the terminal until done or Ctrl+C
async fn type_text(text: String, delay_ms: Option<u64>, speed_ms: Option<u64>) -> Result<()> {
    let mut settings = crate::config::config()?.typewriter;
    if let Some(delay) = delay_ms {
        settings.delay_ms = delay;
    }
    if let Some(speed) = speed_ms {
        settings.speed_ms = speed;
    }

    let mut handle = settings.typewriter(text)?.start();
    let mut shown = 0;
    let mut stdout = std::io::stdout();

    loop {
        tokio::select! {
            event = handle.next() => match event {
                Some(RevealEvent::Tick { prefix, .. }) => {
                    print!("{}", &prefix[shown..]);
                    stdout.flush()?;
                    shown = prefix.len();
                }
                Some(RevealEvent::Complete) | None => {
                    println!();
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                handle.cancel();
                println!();
                break;
            }
        }
    }

    Ok(())
}

/// Print one translation, or every key when none is given
fn translate(key: Option<&str>, locale: Option<LocaleArg>) -> Result<()> {
    let locale = resolve_locale(locale)?;
    let t = Translator::new(locale);

    match key {
        Some(key) => println!("{}", t.t(key)),
        None => {
            for key in i18n::keys(locale) {
                println!("{:<24} {}", key, t.t(key));
            }
        }
    }

    Ok(())
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let config = crate::config::config()?;

    println!("Home:           {}", config.home.display());
    println!("Storage:        {}", config.storage.display());
    match &config.config_file {
        Some(path) => println!("Config file:    {}", path.display()),
        None => println!("Config file:    (none, using defaults)"),
    }
    println!("Default locale: {}", config.default_locale);
    println!(
        "Typewriter:     delay {}ms, {}ms per character",
        config.typewriter.delay_ms, config.typewriter.speed_ms
    );

    Ok(())
}
