//! Page controllers.
//!
//! # Responsibility
//! - Route user input to view-state changes and re-renders.
//! - Own the loaded batch for one page view.
//!
//! # Invariants
//! - Control flow is always: input -> mutate state -> paginate -> render ->
//!   re-observe.
//! - The document and observer are explicit (`PageContext`), never global.

mod home_page;
mod news_page;
mod skeleton;

pub use home_page::HomePage;
pub use news_page::NewsPage;

use crate::dom::reveal::{IntersectionEntry, RevealObserver};
use crate::dom::scroll::update_parallax;
use crate::dom::{Document, NodeId};

/// Document plus the single reveal observer attached to it.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub doc: Document,
    pub observer: RevealObserver,
}

impl PageContext {
    pub fn new(doc: Document, reveal_threshold: f64) -> Self {
        Self {
            doc,
            observer: RevealObserver::new(reveal_threshold),
        }
    }

    /// Context over the news page markup.
    pub fn news_page(reveal_threshold: f64) -> Self {
        Self::new(Document::news_page(), reveal_threshold)
    }

    /// Context over the home page markup.
    pub fn home_page(reveal_threshold: f64) -> Self {
        Self::new(Document::home_page(), reveal_threshold)
    }

    /// Delivers intersection entries; returns the number of reveals.
    pub fn intersect(&mut self, entries: &[IntersectionEntry]) -> usize {
        self.observer.handle(&mut self.doc, entries)
    }

    /// Delivers a scroll tick to the parallax images.
    pub fn scroll<F>(&mut self, viewport_height: f64, rect_top: F) -> usize
    where
        F: FnMut(NodeId) -> Option<f64>,
    {
        update_parallax(&mut self.doc, viewport_height, rect_top)
    }

    /// HTML of the element with markup `id`, if present.
    pub fn html_of(&self, dom_id: &str) -> Option<String> {
        self.doc
            .get_element_by_id(dom_id)
            .map(|node| self.doc.outer_html(node))
    }
}
