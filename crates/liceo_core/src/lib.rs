//! Core logic for the liceo site's news list and wall-note board.
//! Loads static JSON, filters/sorts/paginates in memory and renders into a
//! document model.

pub mod config;
pub mod dom;
pub mod loader;
pub mod logging;
pub mod model;
pub mod page;
pub mod render;
pub mod view;

pub use config::{ConfigError, ConfigResult, SiteConfig};
pub use dom::reveal::{IntersectionEntry, RevealObserver};
pub use dom::{Document, Element, NodeId};
pub use loader::{
    fetch_json, load_news, load_wall_notes, DataSource, DirSource, LoadError, LoadResult,
    MemorySource,
};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::news::NewsItem;
pub use model::wall_note::WallNote;
pub use page::{HomePage, NewsPage, PageContext};
pub use view::{paginate, CategoryFilter, PageSlice, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
