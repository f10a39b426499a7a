//! Site configuration.
//!
//! # Responsibility
//! - Describe where page data lives and how pages are laid out.
//! - Load overrides from an optional TOML file.
//!
//! # Invariants
//! - Every field has a default; an empty file is a valid config.
//! - Page sizes are positive and the reveal threshold lies in `0.0..=1.0`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dom::reveal::DEFAULT_REVEAL_THRESHOLD;

pub const DEFAULT_NEWS_PATH: &str = "data/news.json";
pub const DEFAULT_MURAL_PATH: &str = "data/mural.json";
pub const DEFAULT_NEWS_PAGE_SIZE: usize = 6;
pub const DEFAULT_MURAL_PAGE_SIZE: usize = 9;
pub const DEFAULT_LATEST_COUNT: usize = 3;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Layout and data locations for both pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory the static documents are served from.
    pub data_root: PathBuf,
    /// Site-relative path of the news list.
    pub news_path: String,
    /// Site-relative path of the wall-note list.
    pub mural_path: String,
    pub news_page_size: usize,
    pub mural_page_size: usize,
    /// Number of cards in the home page "latest news" strip.
    pub latest_count: usize,
    pub reveal_threshold: f64,
    /// `trace|debug|info|warn|error`; build-mode default when unset.
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files; stderr when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("."),
            news_path: DEFAULT_NEWS_PATH.to_string(),
            mural_path: DEFAULT_MURAL_PATH.to_string(),
            news_page_size: DEFAULT_NEWS_PAGE_SIZE,
            mural_page_size: DEFAULT_MURAL_PAGE_SIZE,
            latest_count: DEFAULT_LATEST_COUNT,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            log_level: None,
            log_dir: None,
        }
    }
}

impl SiteConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.news_page_size == 0 {
            return Err(ConfigError::Invalid("news_page_size must be > 0".to_string()));
        }
        if self.mural_page_size == 0 {
            return Err(ConfigError::Invalid("mural_page_size must be > 0".to_string()));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Invalid(format!(
                "reveal_threshold must be within 0.0..=1.0, got {}",
                self.reveal_threshold
            )));
        }
        if self.news_path.trim().is_empty() || self.mural_path.trim().is_empty() {
            return Err(ConfigError::Invalid("data paths cannot be empty".to_string()));
        }
        Ok(())
    }
}
