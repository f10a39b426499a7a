//! `index.html` controller: latest news strip and the wall-note board.
//!
//! # Invariants
//! - Board paging only moves within `1..=total_pages`; out-of-range
//!   requests are ignored.
//! - Each successful board move scrolls back to the board anchor.

use log::{debug, info};

use crate::config::SiteConfig;
use crate::loader::{load_news, load_wall_notes, DataSource};
use crate::model::news::NewsItem;
use crate::model::wall_note::WallNote;
use crate::page::PageContext;
use crate::render::mural::MURAL_SECTION_ID;
use crate::render::{render_latest_news, render_wall_notes};
use crate::view::{paginate, sort_news, wall_note_order, CategoryFilter, ViewState};

pub struct HomePage {
    news_path: String,
    mural_path: String,
    latest_count: usize,
    news: Vec<NewsItem>,
    notes: Vec<WallNote>,
    mural: ViewState,
    /// Page count of the last rendered board slice.
    mural_total_pages: usize,
}

impl HomePage {
    pub fn new(
        news_path: impl Into<String>,
        mural_path: impl Into<String>,
        mural_page_size: usize,
        latest_count: usize,
    ) -> Self {
        Self {
            news_path: news_path.into(),
            mural_path: mural_path.into(),
            latest_count,
            news: Vec::new(),
            notes: Vec::new(),
            mural: ViewState::new(mural_page_size),
            mural_total_pages: 1,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            config.news_path.clone(),
            config.mural_path.clone(),
            config.mural_page_size,
            config.latest_count,
        )
    }

    pub fn mural_state(&self) -> &ViewState {
        &self.mural
    }

    pub fn notes(&self) -> &[WallNote] {
        &self.notes
    }

    /// DOM-ready: loads both documents and renders both sections.
    pub fn ready(&mut self, source: &dyn DataSource, ctx: &mut PageContext) {
        ctx.observer.observe_reveal_elements(&ctx.doc);

        self.news = load_news(source, &self.news_path);
        self.render_latest(ctx);

        self.notes = load_wall_notes(source, &self.mural_path);
        self.render_notes(ctx);

        info!(
            "event=page_ready module=page status=ok page=home news={} notes={}",
            self.news.len(),
            self.notes.len()
        );
    }

    pub fn render_latest(&self, ctx: &mut PageContext) {
        let latest: Vec<&NewsItem> = sort_news(&self.news)
            .into_iter()
            .take(self.latest_count)
            .collect();
        render_latest_news(&mut ctx.doc, &mut ctx.observer, &latest);
    }

    pub fn render_notes(&mut self, ctx: &mut PageContext) {
        let page = paginate(&self.notes, &mut self.mural, wall_note_order);
        self.mural_total_pages = page.total_pages;
        render_wall_notes(&mut ctx.doc, &mut ctx.observer, &page);
    }

    /// Board filter `<select>` changed.
    pub fn change_mural_filter(&mut self, value: &str, ctx: &mut PageContext) {
        self.mural
            .set_category(CategoryFilter::from_select_value(value));
        debug!(
            "event=filter_change module=page status=ok page=home category={}",
            self.mural.category()
        );
        self.render_notes(ctx);
    }

    /// Returns `true` when the board moved forward.
    pub fn mural_next(&mut self, ctx: &mut PageContext) -> bool {
        if self.mural.page() >= self.mural_total_pages {
            return false;
        }
        self.mural.next_page();
        self.render_notes(ctx);
        ctx.doc.scroll_into_view(MURAL_SECTION_ID);
        true
    }

    /// Returns `true` when the board moved back.
    pub fn mural_prev(&mut self, ctx: &mut PageContext) -> bool {
        if self.mural.page() <= 1 {
            return false;
        }
        self.mural.prev_page();
        self.render_notes(ctx);
        ctx.doc.scroll_into_view(MURAL_SECTION_ID);
        true
    }
}
