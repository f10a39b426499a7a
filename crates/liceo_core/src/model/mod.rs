//! Domain records loaded from the site's static JSON documents.
//!
//! # Responsibility
//! - Define the wire shape of news items and wall notes.
//! - Provide parsed views over raw date fields for sorting and display.
//!
//! # Invariants
//! - Records are immutable after load; a page view owns one batch.
//! - Identity is the `id` field only; there are no cross-record links.

pub mod news;
pub mod wall_note;

use serde::{Deserialize, Deserializer};

/// Accepts an identifier written either as a JSON string or a JSON number.
pub(crate) fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(value) => value,
        RawId::Int(value) => value.to_string(),
        RawId::Float(value) => value.to_string(),
    })
}
