//! News grid and "latest news" renderers.

use log::debug;

use crate::dom::reveal::RevealObserver;
use crate::dom::{escape_html, Document, NodeId};
use crate::model::news::NewsItem;
use crate::render::format::format_news_date;
use crate::render::{append_element, render_placeholder};
use crate::view::PageSlice;

pub const NEWS_GRID_ID: &str = "newsGrid";
pub const NEWS_PAGINATION_ID: &str = "newsPagination";
pub const PAGE_INFO_ID: &str = "pageInfo";
pub const PREV_BUTTON_ID: &str = "prevBtn";
pub const NEXT_BUTTON_ID: &str = "nextBtn";
pub const LATEST_NEWS_ID: &str = "latestNews";
pub const NO_NEWS_MESSAGE: &str = "No hay noticias disponibles";

const CARD_COLUMN_CLASSES: &str = "col-12 col-sm-6 col-lg-4 reveal";
const STAGGER_MS: usize = 60;

/// A "Ver detalle" button and the news id it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailBinding {
    pub node: NodeId,
    pub news_id: String,
}

/// Rebuilds `#newsGrid` from one page of news.
///
/// Returns the detail buttons created, so the caller can route clicks.
pub fn render_news_grid(
    doc: &mut Document,
    observer: &mut RevealObserver,
    page: &PageSlice<'_, NewsItem>,
) -> Vec<DetailBinding> {
    let Some(grid) = doc.get_element_by_id(NEWS_GRID_ID) else {
        return Vec::new();
    };
    doc.clear(grid);

    if page.items.is_empty() {
        render_placeholder(doc, grid, "col-12 text-center text-muted py-5", NO_NEWS_MESSAGE);
        update_news_pagination(doc, page);
        return Vec::new();
    }

    let mut bindings = Vec::with_capacity(page.items.len());
    for (idx, item) in page.items.iter().enumerate() {
        if let Some(binding) = append_news_card(doc, grid, idx, item) {
            bindings.push(binding);
        }
    }

    update_news_pagination(doc, page);
    observer.observe_reveal_elements(doc);
    debug!(
        "event=render module=render status=ok view=news_grid page={} total_pages={} items={}",
        page.page,
        page.total_pages,
        page.items.len()
    );
    bindings
}

/// Rebuilds `#latestNews` with the newest items linking to the news page.
pub fn render_latest_news(doc: &mut Document, observer: &mut RevealObserver, latest: &[&NewsItem]) {
    let Some(container) = doc.get_element_by_id(LATEST_NEWS_ID) else {
        return;
    };
    doc.clear(container);

    if latest.is_empty() {
        render_placeholder(doc, container, "col-12 text-center text-muted", NO_NEWS_MESSAGE);
        return;
    }

    for (idx, item) in latest.iter().enumerate() {
        let Some(column) = append_element(doc, container, "div", CARD_COLUMN_CLASSES) else {
            continue;
        };
        if let Some(element) = doc.element_mut(column) {
            element.set_style("transition-delay", format!("{}ms", idx * STAGGER_MS));
        }
        doc.set_inner_html(
            column,
            format!(
                r#"<article class="card h-100 card-hover" role="article">{thumb}<div class="card-body"><p class="text-muted small mb-1">{date}</p><h3 class="h6">{title}</h3><p class="small text-secondary">{excerpt}</p><a href="./noticias.html#{id}" class="btn btn-sm btn-primary-liceo">Ver detalle</a></div></article>"#,
                thumb = thumbnail_markup(item),
                date = escape_html(&format_news_date(&item.date)),
                title = escape_html(&item.title),
                excerpt = escape_html(&item.excerpt),
                id = escape_html(&item.id),
            ),
        );
    }

    observer.observe_reveal_elements(doc);
}

fn append_news_card(
    doc: &mut Document,
    grid: NodeId,
    idx: usize,
    item: &NewsItem,
) -> Option<DetailBinding> {
    let column = append_element(doc, grid, "div", CARD_COLUMN_CLASSES)?;
    if let Some(element) = doc.element_mut(column) {
        element.set_style("transition-delay", format!("{}ms", idx * STAGGER_MS));
    }

    let article = append_element(doc, column, "article", "card h-100 card-hover")?;
    if let Some(src) = item.thumbnail() {
        let image = append_element(doc, article, "img", "thumb")?;
        if let Some(element) = doc.element_mut(image) {
            element.set_attr("src", src);
            element.set_attr("alt", item.title.as_str());
        }
    }

    let body = append_element(doc, article, "div", "card-body")?;
    doc.set_inner_html(
        body,
        format!(
            r#"<span class="badge badge-liceo small">{category}</span><p class="text-muted small mb-1">{date}</p><h3 class="h6">{title}</h3><p class="small text-secondary">{excerpt}</p>"#,
            category = escape_html(&item.category),
            date = escape_html(&format_news_date(&item.date)),
            title = escape_html(&item.title),
            excerpt = escape_html(&item.excerpt),
        ),
    );

    let button = append_element(doc, body, "button", "btn btn-sm btn-primary-liceo")?;
    doc.set_text(button, "Ver detalle");
    if let Some(element) = doc.element_mut(button) {
        element.set_attr("data-id", item.id.as_str());
    }

    Some(DetailBinding {
        node: button,
        news_id: item.id.clone(),
    })
}

fn update_news_pagination(doc: &mut Document, page: &PageSlice<'_, NewsItem>) {
    if let Some(pagination) = doc.by_id_mut(NEWS_PAGINATION_ID) {
        pagination.set_hidden(page.is_empty());
    }
    if page.is_empty() {
        return;
    }

    if let Some(info) = doc.get_element_by_id(PAGE_INFO_ID) {
        doc.set_text(info, format!("{} / {}", page.page, page.total_pages));
    }
    if let Some(prev) = doc.by_id_mut(PREV_BUTTON_ID) {
        prev.set_disabled(!page.has_prev());
    }
    if let Some(next) = doc.by_id_mut(NEXT_BUTTON_ID) {
        next.set_disabled(!page.has_next());
    }
}

fn thumbnail_markup(item: &NewsItem) -> String {
    match item.thumbnail() {
        Some(src) => format!(
            r#"<img class="thumb" src="{}" alt="{}">"#,
            escape_html(src),
            escape_html(&item.title)
        ),
        None => String::new(),
    }
}
