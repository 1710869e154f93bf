//! Configuration for showcase.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SHOWCASE_HOME, SHOWCASE_STORAGE, SHOWCASE_ADMIN_PASSWORD)
//! 2. Config file (.showcase/config.yaml)
//! 3. Defaults (~/.showcase)
//!
//! Config file discovery:
//! - Searches current directory and parents for .showcase/config.yaml
//! - Paths in config file are relative to the .showcase/ directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::admin::DEFAULT_ADMIN_PASSWORD;
use crate::core::typewriter::{Typewriter, TypewriterError};
use crate::domain::Locale;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const ENV_HOME: &str = "SHOWCASE_HOME";
pub const ENV_STORAGE: &str = "SHOWCASE_STORAGE";
pub const ENV_ADMIN_PASSWORD: &str = "SHOWCASE_ADMIN_PASSWORD";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub site: Option<SiteConfig>,
    #[serde(default)]
    pub typewriter: Option<TypewriterConfig>,
    #[serde(default)]
    pub admin: Option<AdminConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to .showcase/)
    pub home: Option<String>,
    /// Content storage directory (relative to .showcase/)
    pub storage: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub default_locale: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypewriterConfig {
    pub delay_ms: Option<u64>,
    pub speed_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub password: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to showcase home
    pub home: PathBuf,
    /// Directory holding the stored content keys
    pub storage: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Language used when none is requested
    pub default_locale: Locale,
    /// Typewriter timing
    pub typewriter: TypewriterSettings,
    /// Demo admin gate password (plaintext)
    pub admin_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterSettings {
    pub delay_ms: u64,
    pub speed_ms: u64,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            speed_ms: 50,
        }
    }
}

impl TypewriterSettings {
    /// Build a typewriter for `text` with these timings
    pub fn typewriter(&self, text: impl Into<String>) -> Result<Typewriter, TypewriterError> {
        Typewriter::new(text)
            .with_delay(Duration::from_millis(self.delay_ms))
            .with_speed(Duration::from_millis(self.speed_ms))
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".showcase").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Merge config file values, environment and defaults
fn resolve_config(
    config_path: Option<&Path>,
    file: Option<ConfigFile>,
    env: &dyn Fn(&str) -> Option<String>,
    default_home: PathBuf,
) -> Result<ResolvedConfig> {
    let showcase_dir = config_path
        .and_then(Path::parent)
        .unwrap_or(Path::new("."));
    let paths = file.as_ref().map(|f| f.paths.clone()).unwrap_or_default();

    let home = match (env(ENV_HOME), paths.home.as_deref()) {
        (Some(env_home), _) => PathBuf::from(env_home),
        (None, Some(home)) => resolve_path(showcase_dir, home),
        (None, None) => default_home,
    };

    let storage = match (env(ENV_STORAGE), paths.storage.as_deref()) {
        (Some(env_storage), _) => PathBuf::from(env_storage),
        (None, Some(storage)) => resolve_path(showcase_dir, storage),
        (None, None) => home.join("storage"),
    };

    let default_locale = match file
        .as_ref()
        .and_then(|f| f.site.as_ref())
        .and_then(|s| s.default_locale.as_deref())
    {
        Some(tag) => tag
            .parse::<Locale>()
            .context("Invalid site.default_locale")?,
        None => Locale::default(),
    };

    let defaults = TypewriterSettings::default();
    let typewriter_config = file.as_ref().and_then(|f| f.typewriter.as_ref());
    let typewriter = TypewriterSettings {
        delay_ms: typewriter_config
            .and_then(|t| t.delay_ms)
            .unwrap_or(defaults.delay_ms),
        speed_ms: typewriter_config
            .and_then(|t| t.speed_ms)
            .unwrap_or(defaults.speed_ms),
    };
    if typewriter.speed_ms == 0 {
        anyhow::bail!("typewriter.speed_ms must be greater than zero");
    }

    let admin_password = env(ENV_ADMIN_PASSWORD)
        .or_else(|| {
            file.as_ref()
                .and_then(|f| f.admin.as_ref())
                .and_then(|a| a.password.clone())
        })
        .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());

    Ok(ResolvedConfig {
        home,
        storage,
        config_file: config_path.map(Path::to_path_buf),
        default_locale,
        typewriter,
        admin_password,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".showcase");

    let config_file = find_config_file();
    let file = match config_file {
        Some(ref path) => Some(load_config_file(path)?),
        None => None,
    };

    let env = |key: &str| std::env::var(key).ok();
    resolve_config(config_file.as_deref(), file, &env, default_home)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Get the content storage directory
pub fn storage_dir() -> Result<PathBuf> {
    Ok(config()?.storage.clone())
}
