//! Wall note (bulletin board) model.
//!
//! # Invariants
//! - Wire names are `cat` and `createdAt`; `category` is accepted on input.
//! - `created_at` is stored verbatim and parsed on demand.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::id_from_string_or_number;
use super::news::parse_site_date;

/// One short announcement pinned to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallNote {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(rename = "cat", alias = "category", default)]
    pub category: String,
    /// Pinned notes always list before unpinned ones.
    #[serde(default)]
    pub pinned: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl WallNote {
    pub fn created_at_parsed(&self) -> Option<NaiveDateTime> {
        parse_site_date(&self.created_at)
    }

    /// Record substituted when the board document cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            id: "a1".to_string(),
            title: "Reunión de Apoderados".to_string(),
            body: "Jueves 19:00 en sala de clases.".to_string(),
            category: "Comunicados".to_string(),
            pinned: true,
            created_at: "2025-07-01T10:00:00Z".to_string(),
        }
    }
}
