//! `noticias.html` controller.
//!
//! # Invariants
//! - Starts on page 1 with the `Todas` filter.
//! - "Next" is unbounded; rendering clamps the page back into range.
//! - Detail buttons are re-bound on every render.

use std::collections::HashMap;

use log::{debug, info};

use crate::config::SiteConfig;
use crate::dom::NodeId;
use crate::loader::{load_news, DataSource};
use crate::model::news::NewsItem;
use crate::page::PageContext;
use crate::render::{close_news_detail, open_news_detail, render_news_grid};
use crate::view::{news_order, paginate, CategoryFilter, ViewState};

const INITIAL_CATEGORY: &str = "Todas";

pub struct NewsPage {
    news_path: String,
    news: Vec<NewsItem>,
    state: ViewState,
    bindings: HashMap<NodeId, String>,
}

impl NewsPage {
    pub fn new(news_path: impl Into<String>, page_size: usize) -> Self {
        let mut state = ViewState::new(page_size);
        state.set_category(CategoryFilter::from_select_value(INITIAL_CATEGORY));
        Self {
            news_path: news_path.into(),
            news: Vec::new(),
            state,
            bindings: HashMap::new(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.news_path.clone(), config.news_page_size)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    /// DOM-ready: loads the news document and renders the first page.
    pub fn ready(&mut self, source: &dyn DataSource, ctx: &mut PageContext) {
        self.news = load_news(source, &self.news_path);
        info!(
            "event=page_ready module=page status=ok page=news items={}",
            self.news.len()
        );
        self.render(ctx);
    }

    /// Re-runs filter/sort/paginate and rebuilds the grid.
    pub fn render(&mut self, ctx: &mut PageContext) {
        let page = paginate(&self.news, &mut self.state, news_order);
        let bindings = render_news_grid(&mut ctx.doc, &mut ctx.observer, &page);
        self.bindings = bindings
            .into_iter()
            .map(|binding| (binding.node, binding.news_id))
            .collect();
    }

    /// Category `<select>` changed.
    pub fn change_category(&mut self, value: &str, ctx: &mut PageContext) {
        self.state
            .set_category(CategoryFilter::from_select_value(value));
        debug!(
            "event=filter_change module=page status=ok page=news category={}",
            self.state.category()
        );
        self.render(ctx);
    }

    /// Renders `page` directly; pages past the end land on the last page.
    pub fn go_to_page(&mut self, page: usize, ctx: &mut PageContext) {
        self.state.go_to_page(page);
        self.render(ctx);
    }

    pub fn prev_page(&mut self, ctx: &mut PageContext) {
        self.state.prev_page();
        self.render(ctx);
    }

    pub fn next_page(&mut self, ctx: &mut PageContext) {
        self.state.next_page();
        self.render(ctx);
    }

    /// Click on a rendered element; opens the detail when it is a bound
    /// "Ver detalle" button.
    pub fn click(&self, node: NodeId, ctx: &mut PageContext) -> bool {
        match self.bindings.get(&node) {
            Some(news_id) => self.open_detail(news_id, ctx),
            None => false,
        }
    }

    /// Opens the modal for `news_id`. Unknown ids are ignored.
    pub fn open_detail(&self, news_id: &str, ctx: &mut PageContext) -> bool {
        match self.news.iter().find(|item| item.id == news_id) {
            Some(item) => open_news_detail(&mut ctx.doc, item),
            None => false,
        }
    }

    /// Opens the detail named by a URL fragment such as `#n42`.
    pub fn open_from_fragment(&self, fragment: &str, ctx: &mut PageContext) -> bool {
        let news_id = fragment.trim().trim_start_matches('#');
        if news_id.is_empty() {
            return false;
        }
        self.open_detail(news_id, ctx)
    }

    pub fn close_detail(&self, ctx: &mut PageContext) {
        close_news_detail(&mut ctx.doc);
    }
}
