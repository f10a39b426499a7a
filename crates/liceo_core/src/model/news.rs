//! News item model.
//!
//! # Responsibility
//! - Decode one entry of `news.json`.
//! - Derive a card excerpt when the document omits one.
//!
//! # Invariants
//! - `images` keeps document order; the first image is the card thumbnail.
//! - `date` is stored verbatim; `published_at()` is the only parser.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::id_from_string_or_number;

const EXCERPT_MAX_CHARS: usize = 140;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// One published news entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    /// Short card summary. Derived from `message` when absent.
    #[serde(default)]
    pub excerpt: String,
    /// Full body shown in the detail modal.
    #[serde(default)]
    pub message: String,
    /// Raw publication date (`YYYY-MM-DD` or RFC 3339).
    pub date: String,
    #[serde(default)]
    pub category: String,
    /// Ordered image references.
    #[serde(default)]
    pub images: Vec<String>,
}

impl NewsItem {
    /// Parses `date` into a sortable timestamp.
    ///
    /// Returns `None` when the value is neither RFC 3339 nor a plain date.
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_site_date(&self.date)
    }

    /// Returns the thumbnail reference, if the item has any image.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Fills an empty `excerpt` from `message`.
    pub fn with_derived_excerpt(mut self) -> Self {
        if self.excerpt.trim().is_empty() {
            self.excerpt = derive_excerpt(&self.message);
        }
        self
    }
}

/// Parses the date formats used by the site's JSON documents.
pub fn parse_site_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Builds a plain-text excerpt: tags stripped, whitespace collapsed,
/// truncated with an ellipsis.
pub fn derive_excerpt(message: &str) -> String {
    let without_tags = HTML_TAG_RE.replace_all(message, " ");
    let collapsed = WHITESPACE_RE.replace_all(&without_tags, " ");
    let trimmed = collapsed.trim();
    if trimmed.chars().count() <= EXCERPT_MAX_CHARS {
        return trimmed.to_string();
    }
    let mut excerpt: String = trimmed.chars().take(EXCERPT_MAX_CHARS).collect();
    excerpt.truncate(excerpt.trim_end().len());
    excerpt.push('…');
    excerpt
}

#[cfg(test)]
mod tests {
    use super::{derive_excerpt, parse_site_date};

    #[test]
    fn parse_site_date_accepts_plain_and_rfc3339() {
        let plain = parse_site_date("2025-07-01").expect("plain date parses");
        let full = parse_site_date("2025-07-01T10:00:00Z").expect("rfc3339 parses");
        assert!(full > plain);
        assert!(parse_site_date("ayer").is_none());
    }

    #[test]
    fn derive_excerpt_strips_markup_and_truncates() {
        let short = derive_excerpt("<p>Hola\n\n  mundo</p>");
        assert_eq!(short, "Hola mundo");

        let long = derive_excerpt(&"palabra ".repeat(40));
        assert!(long.ends_with('…'));
        assert!(long.chars().count() <= 141);
    }
}
