use liceo_core::view::{news_order, paginate, sort_news, sort_wall_notes, wall_note_order};
use liceo_core::{CategoryFilter, NewsItem, ViewState, WallNote};

fn news(id: usize, date: &str, category: &str) -> NewsItem {
    NewsItem {
        id: format!("n{id}"),
        title: format!("Noticia {id}"),
        excerpt: String::new(),
        message: String::new(),
        date: date.to_string(),
        category: category.to_string(),
        images: Vec::new(),
    }
}

fn note(id: &str, pinned: bool, created_at: &str, category: &str) -> WallNote {
    WallNote {
        id: id.to_string(),
        title: id.to_uppercase(),
        body: String::new(),
        category: category.to_string(),
        pinned,
        created_at: created_at.to_string(),
    }
}

fn thirteen_news() -> Vec<NewsItem> {
    (1..=13)
        .map(|day| news(day, &format!("2025-03-{day:02}"), "Eventos"))
        .collect()
}

#[test]
fn page_three_of_thirteen_items_with_size_six_has_one_item() {
    let items = thirteen_news();
    let mut state = ViewState::new(6);
    state.next_page();
    state.next_page();

    let page = paginate(&items, &mut state, news_order);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "n1");
}

#[test]
fn page_past_the_end_clamps_after_filter_change() {
    let mut items = thirteen_news();
    items.push(news(99, "2025-04-01", "Deportes"));
    let mut state = ViewState::new(6);
    state.next_page();
    state.next_page();
    assert_eq!(state.page(), 3);

    // set_category resets to 1; force an out-of-range page afterwards.
    state.set_category(CategoryFilter::Only("Deportes".to_string()));
    state.next_page();
    state.next_page();
    let page = paginate(&items, &mut state, news_order);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 1);
    assert_eq!(state.page(), 1);
    assert_eq!(page.items.len(), 1);
}

#[test]
fn news_sort_is_strictly_descending_by_date() {
    let items = vec![
        news(1, "2024-01-05", "A"),
        news(2, "2025-06-30", "A"),
        news(3, "2024-11-11T09:00:00Z", "A"),
        news(4, "2023-02-01", "A"),
    ];
    let sorted = sort_news(&items);
    let dates: Vec<_> = sorted.iter().map(|item| item.published_at()).collect();
    for pair in dates.windows(2) {
        assert!(pair[0] > pair[1], "not descending: {pair:?}");
    }
}

#[test]
fn unparseable_news_dates_sort_last() {
    let items = vec![news(1, "sin fecha", "A"), news(2, "2020-01-01", "A")];
    let sorted = sort_news(&items);
    assert_eq!(sorted[0].id, "n2");
    assert_eq!(sorted[1].id, "n1");
}

#[test]
fn pinned_notes_sort_before_newer_unpinned_notes() {
    let notes = vec![
        note("fresh", false, "2025-09-01T12:00:00Z", "Comunicados"),
        note("old-pin", true, "2023-01-01T00:00:00Z", "Comunicados"),
        note("older", false, "2024-01-01T00:00:00Z", "Comunicados"),
        note("new-pin", true, "2025-01-01T00:00:00Z", "Eventos"),
    ];
    let sorted: Vec<&str> = sort_wall_notes(&notes)
        .into_iter()
        .map(|note| note.id.as_str())
        .collect();
    assert_eq!(sorted, vec!["new-pin", "old-pin", "fresh", "older"]);
}

#[test]
fn category_filter_is_exact_and_all_passes_through() {
    let notes = vec![
        note("a", false, "2025-01-01T00:00:00Z", "Comunicados"),
        note("b", false, "2025-01-02T00:00:00Z", "comunicados"),
        note("c", false, "2025-01-03T00:00:00Z", "Eventos"),
    ];

    let mut state = ViewState::new(9);
    state.set_category(CategoryFilter::from_select_value("Comunicados"));
    let page = paginate(&notes, &mut state, wall_note_order);
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].id, "a");

    state.set_category(CategoryFilter::from_select_value("all"));
    let page = paginate(&notes, &mut state, wall_note_order);
    assert_eq!(page.total_items, 3);
}

#[test]
fn empty_list_has_one_page_and_no_items() {
    let items: Vec<NewsItem> = Vec::new();
    let mut state = ViewState::new(6);
    let page = paginate(&items, &mut state, news_order);
    assert!(page.is_empty());
    assert_eq!(page.total_pages, 1);
    assert!(!page.has_prev());
    assert!(!page.has_next());
}
