//! News detail modal with image carousel.

use crate::dom::{escape_html, Document};
use crate::model::news::NewsItem;
use crate::render::append_element;
use crate::render::format::format_news_date;

pub const NEWS_MODAL_ID: &str = "newsModal";
pub const NEWS_TITLE_ID: &str = "newsTitle";
pub const NEWS_META_ID: &str = "newsMeta";
pub const GALLERY_CAROUSEL_ID: &str = "galleryCarousel";
pub const GALLERY_INNER_ID: &str = "galleryInner";
pub const GALLERY_INDICATORS_ID: &str = "galleryIndicators";

/// Fills the modal from `item` and shows it.
///
/// Returns `false` when the modal markup is missing.
pub fn open_news_detail(doc: &mut Document, item: &NewsItem) -> bool {
    let (Some(title), Some(meta), Some(inner), Some(indicators)) = (
        doc.get_element_by_id(NEWS_TITLE_ID),
        doc.get_element_by_id(NEWS_META_ID),
        doc.get_element_by_id(GALLERY_INNER_ID),
        doc.get_element_by_id(GALLERY_INDICATORS_ID),
    ) else {
        return false;
    };

    doc.set_text(title, item.title.as_str());
    doc.set_inner_html(
        meta,
        format!(
            r#"<p class="mb-2"><i class="bi bi-calendar3 me-2"></i><strong>Fecha:</strong> {date}</p><p class="mb-3 lead">{message}</p><hr class="my-3"><p class="small text-muted mb-2"><i class="bi bi-images me-2"></i><strong>Galería de imágenes ({count})</strong></p>"#,
            date = escape_html(&format_news_date(&item.date)),
            message = escape_html(&item.message),
            count = item.images.len(),
        ),
    );

    doc.clear(inner);
    doc.clear(indicators);
    for (idx, src) in item.images.iter().enumerate() {
        let classes = if idx == 0 {
            "carousel-item active"
        } else {
            "carousel-item"
        };
        if let Some(slide) = append_element(doc, inner, "div", classes) {
            doc.set_inner_html(
                slide,
                format!(
                    r#"<img class="d-block w-100" style="max-height:500px;object-fit:contain;background:#f8f9fa" src="{src}" alt="{title} - Imagen {n}">"#,
                    src = escape_html(src),
                    title = escape_html(&item.title),
                    n = idx + 1,
                ),
            );
        }

        let indicator_classes = if idx == 0 { "active" } else { "" };
        if let Some(indicator) = append_element(doc, indicators, "button", indicator_classes) {
            if let Some(element) = doc.element_mut(indicator) {
                element.set_attr("type", "button");
                element.set_attr("data-bs-target", format!("#{GALLERY_CAROUSEL_ID}"));
                element.set_attr("data-bs-slide-to", idx.to_string());
                element.set_attr("aria-label", format!("Imagen {}", idx + 1));
                if idx == 0 {
                    element.set_attr("aria-current", "true");
                }
            }
        }
    }

    if let Some(modal) = doc.by_id_mut(NEWS_MODAL_ID) {
        modal.add_class("show");
        modal.set_hidden(false);
    }
    true
}

/// Hides the modal.
pub fn close_news_detail(doc: &mut Document) {
    if let Some(modal) = doc.by_id_mut(NEWS_MODAL_ID) {
        modal.remove_class("show");
        modal.set_hidden(true);
    }
}
