use chrono::Datelike;

use crate::model::news::parse_site_date;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long Spanish date for news cards: `1 de julio de 2025`.
///
/// Unparseable input is returned unchanged.
pub fn format_news_date(raw: &str) -> String {
    match parse_site_date(raw) {
        Some(parsed) => {
            let month = MONTHS_ES[parsed.month0() as usize];
            format!("{} de {} de {}", parsed.day(), month, parsed.year())
        }
        None => raw.to_string(),
    }
}

/// Short numeric date for wall notes: `01-07-2025`.
pub fn format_note_date(raw: &str) -> String {
    match parse_site_date(raw) {
        Some(parsed) => parsed.format("%d-%m-%Y").to_string(),
        None => raw.to_string(),
    }
}
