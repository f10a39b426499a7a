//! Page data loading with safe fallbacks.
//!
//! # Responsibility
//! - Fetch and decode the news and wall-note documents once per page load.
//! - Replace any failure with a safe default and log it.
//!
//! # Invariants
//! - No retry, caching or cancellation.
//! - `load_*` functions never return an error; `fetch_json` does.
//! - News falls back to an empty list; wall notes to `WallNote::fallback()`.

mod source;

pub use source::{DataSource, DirSource, MemorySource};

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

use log::{error, info};
use serde::de::DeserializeOwned;

use crate::model::news::NewsItem;
use crate::model::wall_note::WallNote;

pub type LoadResult<T> = Result<T, LoadError>;

/// Failure while fetching or decoding a static document.
#[derive(Debug)]
pub enum LoadError {
    /// Path is empty or escapes the source root.
    InvalidPath(String),
    NotFound(String),
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Stable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPath(_) => "invalid_path",
            Self::NotFound(_) => "not_found",
            Self::Io { .. } => "io_failed",
            Self::Parse { .. } => "parse_failed",
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath(path) => write!(f, "invalid document path `{path}`"),
            Self::NotFound(path) => write!(f, "document not found: {path}"),
            Self::Io { path, source } => write!(f, "failed to read `{path}`: {source}"),
            Self::Parse { path, source } => write!(f, "failed to parse `{path}`: {source}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidPath(_) | Self::NotFound(_) => None,
        }
    }
}

/// Fetches `path` from `source` and decodes it as JSON.
pub fn fetch_json<T: DeserializeOwned>(source: &dyn DataSource, path: &str) -> LoadResult<T> {
    let body = source.fetch(path)?;
    serde_json::from_str(&body).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Loads the news list, or an empty list on failure.
pub fn load_news(source: &dyn DataSource, path: &str) -> Vec<NewsItem> {
    load_or_else(source, path, "news", Vec::new)
        .into_iter()
        .map(NewsItem::with_derived_excerpt)
        .collect()
}

/// Loads the wall-note list, or the single fallback note on failure.
pub fn load_wall_notes(source: &dyn DataSource, path: &str) -> Vec<WallNote> {
    load_or_else(source, path, "mural", || vec![WallNote::fallback()])
}

fn load_or_else<T, F>(source: &dyn DataSource, path: &str, dataset: &str, fallback: F) -> Vec<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    let started_at = Instant::now();
    match fetch_json::<Vec<T>>(source, path) {
        Ok(items) => {
            info!(
                "event=data_load module=loader status=ok dataset={} path={} items={} duration_ms={}",
                dataset,
                path,
                items.len(),
                started_at.elapsed().as_millis()
            );
            items
        }
        Err(err) => {
            let items = fallback();
            error!(
                "event=data_load module=loader status=error dataset={} path={} error_code={} fallback_items={} error={}",
                dataset,
                path,
                err.code(),
                items.len(),
                err
            );
            items
        }
    }
}
