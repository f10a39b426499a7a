use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::model::news::NewsItem;
use crate::model::wall_note::WallNote;
use crate::view::state::ViewState;

/// Records that can be filtered by a category select.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for NewsItem {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for WallNote {
    fn category(&self) -> &str {
        &self.category
    }
}

/// One page of a filtered, sorted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    /// Items on the current page, in display order.
    pub items: Vec<&'a T>,
    /// Effective page after clamping.
    pub page: usize,
    /// Always >= 1, even for an empty list.
    pub total_pages: usize,
    /// Number of items that passed the filter.
    pub total_items: usize,
}

impl<T> PageSlice<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Page count for `len` items, never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Filters by the state's category, orders with `order`, and slices the
/// current page.
///
/// A page past the end is clamped to the last valid page and written back
/// into `state`.
pub fn paginate<'a, T, F>(items: &'a [T], state: &mut ViewState, mut order: F) -> PageSlice<'a, T>
where
    T: Categorized,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut filtered: Vec<&T> = items
        .iter()
        .filter(|item| state.category().matches(item.category()))
        .collect();
    filtered.sort_by(|a, b| order(a, b));

    let total_items = filtered.len();
    let total_pages = total_pages(total_items, state.page_size());
    state.clamp_page(total_pages);

    let start = (state.page() - 1) * state.page_size();
    let end = (start + state.page_size()).min(total_items);
    let items = if start < end {
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    PageSlice {
        items,
        page: state.page(),
        total_pages,
        total_items,
    }
}

/// Newest first; unparseable dates last.
pub fn news_order(a: &NewsItem, b: &NewsItem) -> Ordering {
    newest_first(a.published_at(), b.published_at())
}

/// Pinned first, then newest first.
pub fn wall_note_order(a: &WallNote, b: &WallNote) -> Ordering {
    b.pinned
        .cmp(&a.pinned)
        .then_with(|| newest_first(a.created_at_parsed(), b.created_at_parsed()))
}

/// Returns all news sorted newest first.
pub fn sort_news(items: &[NewsItem]) -> Vec<&NewsItem> {
    let mut sorted: Vec<&NewsItem> = items.iter().collect();
    sorted.sort_by(|a, b| news_order(a, b));
    sorted
}

/// Returns all wall notes in board order.
pub fn sort_wall_notes(items: &[WallNote]) -> Vec<&WallNote> {
    let mut sorted: Vec<&WallNote> = items.iter().collect();
    sorted.sort_by(|a, b| wall_note_order(a, b));
    sorted
}

fn newest_first(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::total_pages;

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
    }
}
