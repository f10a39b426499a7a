//! Wall-note board renderer.

use log::debug;

use crate::dom::reveal::RevealObserver;
use crate::dom::{escape_html, Document};
use crate::model::wall_note::WallNote;
use crate::render::format::format_note_date;
use crate::render::{append_element, render_placeholder};
use crate::view::PageSlice;

pub const MURAL_SECTION_ID: &str = "mural";
pub const MURAL_GRID_ID: &str = "muralGrid";
pub const MURAL_PAGINATION_ID: &str = "muralPagination";
pub const MURAL_PAGE_INFO_ID: &str = "muralPageInfo";
pub const MURAL_PREV_BUTTON_ID: &str = "muralPrevBtn";
pub const MURAL_NEXT_BUTTON_ID: &str = "muralNextBtn";
pub const NO_NOTES_MESSAGE: &str = "No hay comunicados disponibles";

const TILT_STEP_DEG: f64 = 0.6;

/// Small per-card tilt cycling through five positions.
pub fn note_rotation(idx: usize) -> f64 {
    ((idx % 5) as f64 - 2.0) * TILT_STEP_DEG
}

/// Rebuilds `#muralGrid` and its pagination from one page of notes.
pub fn render_wall_notes(
    doc: &mut Document,
    observer: &mut RevealObserver,
    page: &PageSlice<'_, WallNote>,
) {
    let Some(grid) = doc.get_element_by_id(MURAL_GRID_ID) else {
        return;
    };
    doc.clear(grid);

    if page.is_empty() {
        render_placeholder(doc, grid, "text-center text-muted py-4", NO_NOTES_MESSAGE);
        update_mural_pagination(doc, page);
        return;
    }

    for (idx, note) in page.items.iter().enumerate() {
        let classes = if note.pinned {
            "note note-pinned reveal"
        } else {
            "note reveal"
        };
        let Some(article) = append_element(doc, grid, "article", classes) else {
            continue;
        };
        if let Some(element) = doc.element_mut(article) {
            element.set_style("--r", format!("{}deg", note_rotation(idx)));
            element.set_attr("aria-label", note.title.as_str());
        }
        doc.set_inner_html(article, note_markup(note));
    }

    observer.observe_reveal_elements(doc);
    update_mural_pagination(doc, page);
    debug!(
        "event=render module=render status=ok view=mural page={} total_pages={} items={}",
        page.page,
        page.total_pages,
        page.items.len()
    );
}

fn note_markup(note: &WallNote) -> String {
    let pinned_badge = if note.pinned {
        r#"<span class="badge bg-info-subtle text-dark border"><i class="bi bi-pin-angle-fill"></i> Destacado</span>"#
    } else {
        ""
    };
    format!(
        r#"<div class="d-flex align-items-center justify-content-between mb-2"><div><span class="badge bg-warning-subtle text-dark border">{category}</span>{pinned_badge}</div><small class="text-muted">{date}</small></div><h3 class="h6 mt-1 mb-1">{title}</h3><p class="small mb-2">{body}</p>"#,
        category = escape_html(&note.category),
        date = escape_html(&format_note_date(&note.created_at)),
        title = escape_html(&note.title),
        body = escape_html(&note.body),
    )
}

fn update_mural_pagination(doc: &mut Document, page: &PageSlice<'_, WallNote>) {
    let single_page = page.is_empty() || page.total_pages <= 1;
    match doc.by_id_mut(MURAL_PAGINATION_ID) {
        Some(pagination) if single_page => pagination.set_hidden(true),
        Some(pagination) => pagination.show_as("flex"),
        None => return,
    }
    if single_page {
        return;
    }

    if let Some(info) = doc.get_element_by_id(MURAL_PAGE_INFO_ID) {
        doc.set_text(info, format!("Página {} de {}", page.page, page.total_pages));
    }
    if let Some(prev) = doc.by_id_mut(MURAL_PREV_BUTTON_ID) {
        prev.set_disabled(!page.has_prev());
    }
    if let Some(next) = doc.by_id_mut(MURAL_NEXT_BUTTON_ID) {
        next.set_disabled(!page.has_next());
    }
}
