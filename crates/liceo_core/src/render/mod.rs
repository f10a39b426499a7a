//! HTML renderers for the fixed page containers.
//!
//! # Responsibility
//! - Clear a container and rebuild its children from a page of items.
//! - Keep pagination controls and placeholders in sync with the page.
//! - Re-attach the reveal observer after every rebuild.
//!
//! # Invariants
//! - Every interpolated value is HTML-escaped.
//! - A missing container makes the renderer a silent no-op.

pub mod detail;
pub mod format;
pub mod mural;
pub mod news;

use crate::dom::{Document, NodeId};

pub use detail::{close_news_detail, open_news_detail};
pub use mural::render_wall_notes;
pub use news::{render_latest_news, render_news_grid, DetailBinding};

/// Creates `<tag class="...">` and appends it to `parent`.
pub(crate) fn append_element(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    classes: &str,
) -> Option<NodeId> {
    let node = doc.create_element(tag);
    if let Some(element) = doc.element_mut(node) {
        element.add_classes(classes);
    }
    doc.append_child(parent, node).then_some(node)
}

/// Sets a raw placeholder message inside `container`.
pub(crate) fn render_placeholder(doc: &mut Document, container: NodeId, classes: &str, message: &str) {
    doc.set_inner_html(
        container,
        format!(
            "<div class=\"{classes}\">{}</div>",
            crate::dom::escape_html(message)
        ),
    );
}
