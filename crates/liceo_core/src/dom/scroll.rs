//! Scroll-driven parallax for hero images.

use super::{Document, NodeId};

/// Class marking images that drift with scroll position.
pub const PARALLAX_CLASS: &str = "parallax-img";

const FALLBACK_VIEWPORT_HEIGHT: f64 = 800.0;
const MAX_OFFSET_PX: f64 = 12.0;

/// Vertical offset in pixels for an element whose top edge sits at
/// `rect_top` inside a viewport of `viewport_height`.
pub fn parallax_offset(rect_top: f64, viewport_height: f64) -> f64 {
    let height = if viewport_height > 0.0 {
        viewport_height
    } else {
        FALLBACK_VIEWPORT_HEIGHT
    };
    let progress = (1.0 - rect_top / height).clamp(0.0, 1.0);
    progress * MAX_OFFSET_PX
}

/// Updates the transform of every parallax image.
///
/// `rect_top` reports the current top edge of an element, or `None` when
/// its layout is unknown; such elements are left untouched.
pub fn update_parallax<F>(doc: &mut Document, viewport_height: f64, mut rect_top: F) -> usize
where
    F: FnMut(NodeId) -> Option<f64>,
{
    let mut updated = 0;
    for node in doc.query_class(PARALLAX_CLASS) {
        let Some(top) = rect_top(node) else {
            continue;
        };
        let offset = parallax_offset(top, viewport_height);
        if let Some(element) = doc.element_mut(node) {
            element.set_style("transform", format!("translateY({offset}px) scale(1.02)"));
            updated += 1;
        }
    }
    updated
}
