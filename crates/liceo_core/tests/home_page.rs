use liceo_core::render::mural::{
    MURAL_GRID_ID, MURAL_NEXT_BUTTON_ID, MURAL_PAGE_INFO_ID, MURAL_PAGINATION_ID,
    MURAL_PREV_BUTTON_ID, MURAL_SECTION_ID, NO_NOTES_MESSAGE,
};
use liceo_core::render::news::{LATEST_NEWS_ID, NO_NEWS_MESSAGE};
use liceo_core::{HomePage, MemorySource, PageContext, SiteConfig};

fn mural_json(count: usize) -> String {
    let notes: Vec<String> = (1..=count)
        .map(|idx| {
            let category = if idx % 3 == 0 { "Eventos" } else { "Comunicados" };
            let pinned = idx == 1;
            format!(
                r#"{{"id":"m{idx}","title":"Aviso {idx}","body":"Texto {idx}","cat":"{category}","pinned":{pinned},"createdAt":"2025-06-{idx:02}T08:00:00Z"}}"#
            )
        })
        .collect();
    format!("[{}]", notes.join(","))
}

fn news_json() -> String {
    let items: Vec<String> = ["2025-01-10", "2025-03-02", "2024-12-31", "2025-02-14"]
        .iter()
        .enumerate()
        .map(|(idx, date)| {
            format!(
                r#"{{"id":"n{idx}","title":"Titular {idx}","excerpt":"","message":"Mensaje {idx}","date":"{date}","category":"Eventos","images":["img/{idx}.jpg"]}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

fn ready_home(notes: usize) -> (HomePage, PageContext) {
    let source = MemorySource::new()
        .with_document("data/news.json", news_json())
        .with_document("data/mural.json", mural_json(notes));
    let config = SiteConfig::default();
    let mut ctx = PageContext::home_page(config.reveal_threshold);
    let mut home = HomePage::from_config(&config);
    home.ready(&source, &mut ctx);
    (home, ctx)
}

fn grid_len(ctx: &PageContext) -> usize {
    let grid = ctx.doc.get_element_by_id(MURAL_GRID_ID).expect("container should exist");
    ctx.doc.element(grid).expect("node should be attached").children().len()
}

#[test]
fn latest_news_shows_three_newest_with_links() {
    let (_home, ctx) = ready_home(3);
    let latest = ctx.doc.get_element_by_id(LATEST_NEWS_ID).expect("container should exist");
    assert_eq!(ctx.doc.element(latest).expect("node should be attached").children().len(), 3);

    let html = ctx.html_of(LATEST_NEWS_ID).expect("container should render");
    let first = html.find("Titular 1").expect("text should be rendered");
    let second = html.find("Titular 3").expect("text should be rendered");
    let third = html.find("Titular 0").expect("text should be rendered");
    assert!(first < second && second < third);
    assert!(!html.contains("Titular 2"));
    assert!(html.contains("./noticias.html#n1"));
    assert!(html.contains("Mensaje 1"));
}

#[test]
fn mural_pins_first_and_paginates_by_nine() {
    let (home, ctx) = ready_home(20);
    assert_eq!(grid_len(&ctx), 9);
    assert_eq!(home.mural_state().page(), 1);

    let html = ctx.html_of(MURAL_GRID_ID).expect("container should render");
    let pinned = html.find("Aviso 1<").expect("text should be rendered");
    let newest = html.find("Aviso 20").expect("text should be rendered");
    assert!(pinned < newest);
    assert!(html.contains("note-pinned"));
    assert!(html.contains("Destacado"));
    assert!(html.contains("--r:-1.2deg"));

    let pagination = ctx.doc.by_id(MURAL_PAGINATION_ID).expect("element should exist");
    assert_eq!(pagination.style("display"), Some("flex"));
    assert_eq!(
        ctx.doc.by_id(MURAL_PAGE_INFO_ID).expect("element should exist").text(),
        Some("Página 1 de 3")
    );
    assert!(ctx.doc.by_id(MURAL_PREV_BUTTON_ID).expect("element should exist").is_disabled());
}

#[test]
fn mural_paging_stays_in_bounds_and_requests_scroll() {
    let (mut home, mut ctx) = ready_home(20);
    assert!(!home.mural_prev(&mut ctx));
    assert!(ctx.doc.take_scroll_requests().is_empty());

    assert!(home.mural_next(&mut ctx));
    assert!(home.mural_next(&mut ctx));
    assert!(!home.mural_next(&mut ctx));
    assert_eq!(home.mural_state().page(), 3);
    assert_eq!(grid_len(&ctx), 2);
    assert!(ctx.doc.by_id(MURAL_NEXT_BUTTON_ID).expect("element should exist").is_disabled());
    assert_eq!(
        ctx.doc.take_scroll_requests(),
        vec![MURAL_SECTION_ID.to_string(), MURAL_SECTION_ID.to_string()]
    );

    assert!(home.mural_prev(&mut ctx));
    assert_eq!(home.mural_state().page(), 2);
}

#[test]
fn single_page_board_hides_pagination() {
    let (mut home, mut ctx) = ready_home(20);
    home.change_mural_filter("Eventos", &mut ctx);
    assert_eq!(home.mural_state().page(), 1);
    assert_eq!(grid_len(&ctx), 6);
    assert!(ctx.doc.by_id(MURAL_PAGINATION_ID).expect("element should exist").is_hidden());
    assert!(!home.mural_next(&mut ctx));
    assert!(ctx.doc.take_scroll_requests().is_empty());
}

#[test]
fn board_bounds_follow_the_active_filter() {
    let (mut home, mut ctx) = ready_home(20);
    assert!(home.mural_next(&mut ctx));
    assert_eq!(home.mural_state().page(), 2);

    home.change_mural_filter("Eventos", &mut ctx);
    assert_eq!(home.mural_state().page(), 1);
    assert!(!home.mural_next(&mut ctx));

    home.change_mural_filter("all", &mut ctx);
    assert!(home.mural_next(&mut ctx));
    assert_eq!(home.mural_state().page(), 2);
}

#[test]
fn empty_board_filter_shows_placeholder() {
    let (mut home, mut ctx) = ready_home(5);
    home.change_mural_filter("Deportes", &mut ctx);
    assert!(ctx
        .html_of(MURAL_GRID_ID)
        .expect("container should render")
        .contains(NO_NOTES_MESSAGE));
    assert!(ctx.doc.by_id(MURAL_PAGINATION_ID).expect("element should exist").is_hidden());
    assert!(!home.mural_next(&mut ctx));
}

#[test]
fn failed_loads_use_fallbacks() {
    let source = MemorySource::new();
    let mut ctx = PageContext::home_page(0.2);
    let mut home = HomePage::new("data/news.json", "data/mural.json", 9, 3);
    home.ready(&source, &mut ctx);

    assert!(ctx
        .html_of(LATEST_NEWS_ID)
        .expect("container should render")
        .contains(NO_NEWS_MESSAGE));
    assert_eq!(home.notes().len(), 1);
    let html = ctx.html_of(MURAL_GRID_ID).expect("container should render");
    assert!(html.contains("Reunión de Apoderados"));
    assert!(html.contains("01-07-2025"));
    assert!(ctx.doc.by_id(MURAL_PAGINATION_ID).expect("element should exist").is_hidden());
}
