use liceo_core::dom::reveal::{REVEAL_CLASS, VISIBLE_CLASS};
use liceo_core::dom::scroll::PARALLAX_CLASS;
use liceo_core::render::mural::MURAL_GRID_ID;
use liceo_core::{HomePage, IntersectionEntry, MemorySource, PageContext};

fn board_json(count: usize) -> String {
    let notes: Vec<String> = (1..=count)
        .map(|idx| {
            format!(
                r#"{{"id":"r{idx}","title":"Nota {idx}","body":"","cat":"General","pinned":false,"createdAt":"2025-02-{idx:02}T00:00:00Z"}}"#
            )
        })
        .collect();
    format!("[{}]", notes.join(","))
}

fn ready(count: usize) -> (HomePage, PageContext) {
    let source = MemorySource::new().with_document("data/mural.json", board_json(count));
    let mut ctx = PageContext::home_page(0.2);
    let mut home = HomePage::new("data/news.json", "data/mural.json", 9, 3);
    home.ready(&source, &mut ctx);
    (home, ctx)
}

fn board_nodes(ctx: &PageContext) -> Vec<liceo_core::NodeId> {
    let grid = ctx.doc.get_element_by_id(MURAL_GRID_ID).expect("container should exist");
    ctx.doc.element(grid).expect("node should be attached").children().to_vec()
}

#[test]
fn rendered_cards_and_static_sections_are_observed() {
    let (_home, ctx) = ready(4);
    let reveal_nodes = ctx.doc.query_class(REVEAL_CLASS);
    // static intro section + four board cards
    assert_eq!(reveal_nodes.len(), 5);
    for node in reveal_nodes {
        assert!(ctx.observer.is_observing(node));
    }
}

#[test]
fn crossing_threshold_reveals_permanently() {
    let (_home, mut ctx) = ready(2);
    let cards = board_nodes(&ctx);

    let below = ctx.intersect(&[IntersectionEntry::visible(cards[0], 0.1)]);
    assert_eq!(below, 0);
    assert!(!ctx.doc.element(cards[0]).expect("node should be attached").has_class(VISIBLE_CLASS));

    let crossed = ctx.intersect(&[IntersectionEntry::visible(cards[0], 0.25)]);
    assert_eq!(crossed, 1);
    assert!(!ctx.observer.is_observing(cards[0]));

    let left = ctx.intersect(&[IntersectionEntry {
        target: cards[0],
        ratio: 0.0,
        is_intersecting: false,
    }]);
    assert_eq!(left, 0);
    assert!(ctx.doc.element(cards[0]).expect("node should be attached").has_class(VISIBLE_CLASS));
}

#[test]
fn rerender_observes_new_cards_and_drops_removed_ones() {
    let (mut home, mut ctx) = ready(12);
    let first_page = board_nodes(&ctx);
    assert_eq!(first_page.len(), 9);

    assert!(home.mural_next(&mut ctx));
    let second_page = board_nodes(&ctx);
    assert_eq!(second_page.len(), 3);

    for node in &first_page {
        assert!(!ctx.observer.is_observing(*node));
    }
    for node in &second_page {
        assert!(ctx.observer.is_observing(*node));
    }
    // intro section + second page cards
    assert_eq!(ctx.observer.observed_count(), 4);

    assert_eq!(ctx.intersect(&[IntersectionEntry::visible(first_page[0], 1.0)]), 0);
}

#[test]
fn scroll_moves_parallax_images() {
    let (_home, mut ctx) = ready(1);
    let images = ctx.doc.query_class(PARALLAX_CLASS);
    assert_eq!(images.len(), 1);

    let updated = ctx.scroll(800.0, |_| Some(400.0));
    assert_eq!(updated, 1);
    let image = ctx.doc.element(images[0]).expect("node should be attached");
    assert_eq!(
        image.style("transform"),
        Some("translateY(6px) scale(1.02)")
    );

    assert_eq!(ctx.scroll(800.0, |_| None), 0);
}
