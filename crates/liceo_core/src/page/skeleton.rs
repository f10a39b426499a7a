//! Static markup the controllers render into.

use crate::dom::reveal::REVEAL_CLASS;
use crate::dom::scroll::PARALLAX_CLASS;
use crate::dom::{Document, NodeId};
use crate::render::append_element;
use crate::render::detail::{
    GALLERY_CAROUSEL_ID, GALLERY_INDICATORS_ID, GALLERY_INNER_ID, NEWS_META_ID, NEWS_MODAL_ID,
    NEWS_TITLE_ID,
};
use crate::render::mural::{
    MURAL_GRID_ID, MURAL_NEXT_BUTTON_ID, MURAL_PAGE_INFO_ID, MURAL_PAGINATION_ID,
    MURAL_PREV_BUTTON_ID, MURAL_SECTION_ID,
};
use crate::render::news::{
    LATEST_NEWS_ID, NEWS_GRID_ID, NEWS_PAGINATION_ID, NEXT_BUTTON_ID, PAGE_INFO_ID,
    PREV_BUTTON_ID,
};

impl Document {
    /// `noticias.html`: grid, pagination and the detail modal.
    pub fn news_page() -> Self {
        let mut doc = Self::new();
        let root = doc.root();
        if let Some(main) = append_element(&mut doc, root, "main", "container py-4") {
            if let Some(grid) = doc.create_with_id(main, "div", NEWS_GRID_ID) {
                add_classes(&mut doc, grid, "row g-4");
            }
            if let Some(pagination) = doc.create_with_id(main, "nav", NEWS_PAGINATION_ID) {
                add_classes(&mut doc, pagination, "d-flex justify-content-center gap-2 mt-4");
                append_button(&mut doc, pagination, PREV_BUTTON_ID, "Anterior");
                doc.create_with_id(pagination, "span", PAGE_INFO_ID);
                append_button(&mut doc, pagination, NEXT_BUTTON_ID, "Siguiente");
            }
        }

        if let Some(modal) = doc.create_with_id(root, "div", NEWS_MODAL_ID) {
            add_classes(&mut doc, modal, "modal fade");
            if let Some(element) = doc.element_mut(modal) {
                element.set_hidden(true);
            }
            doc.create_with_id(modal, "h5", NEWS_TITLE_ID);
            doc.create_with_id(modal, "div", NEWS_META_ID);
            if let Some(carousel) = doc.create_with_id(modal, "div", GALLERY_CAROUSEL_ID) {
                add_classes(&mut doc, carousel, "carousel slide");
                if let Some(indicators) = doc.create_with_id(carousel, "div", GALLERY_INDICATORS_ID)
                {
                    add_classes(&mut doc, indicators, "carousel-indicators");
                }
                if let Some(inner) = doc.create_with_id(carousel, "div", GALLERY_INNER_ID) {
                    add_classes(&mut doc, inner, "carousel-inner");
                }
            }
        }
        doc
    }

    /// `index.html`: hero, latest news strip and the wall-note board.
    pub fn home_page() -> Self {
        let mut doc = Self::new();
        let root = doc.root();
        if let Some(hero) = append_element(&mut doc, root, "header", "hero") {
            if let Some(image) = append_element(&mut doc, hero, "img", PARALLAX_CLASS) {
                if let Some(element) = doc.element_mut(image) {
                    element.set_attr("src", "./img/hero.jpg");
                    element.set_attr("alt", "Liceo");
                }
            }
        }
        if let Some(about) = append_element(&mut doc, root, "section", REVEAL_CLASS) {
            doc.set_inner_html(about, "<h2>Nuestro liceo</h2>");
        }
        if let Some(latest) = doc.create_with_id(root, "div", LATEST_NEWS_ID) {
            add_classes(&mut doc, latest, "row g-4");
        }
        if let Some(section) = doc.create_with_id(root, "section", MURAL_SECTION_ID) {
            if let Some(grid) = doc.create_with_id(section, "div", MURAL_GRID_ID) {
                add_classes(&mut doc, grid, "mural-grid");
            }
            if let Some(pagination) = doc.create_with_id(section, "nav", MURAL_PAGINATION_ID) {
                add_classes(&mut doc, pagination, "justify-content-center gap-2 mt-3");
                if let Some(element) = doc.element_mut(pagination) {
                    element.set_hidden(true);
                }
                append_button(&mut doc, pagination, MURAL_PREV_BUTTON_ID, "Anterior");
                doc.create_with_id(pagination, "span", MURAL_PAGE_INFO_ID);
                append_button(&mut doc, pagination, MURAL_NEXT_BUTTON_ID, "Siguiente");
            }
        }
        doc
    }
}

fn add_classes(doc: &mut Document, node: NodeId, classes: &str) {
    if let Some(element) = doc.element_mut(node) {
        element.add_classes(classes);
    }
}

fn append_button(doc: &mut Document, parent: NodeId, dom_id: &str, label: &str) {
    if let Some(button) = doc.create_with_id(parent, "button", dom_id) {
        add_classes(doc, button, "btn btn-outline-secondary btn-sm");
        doc.set_text(button, label);
    }
}
