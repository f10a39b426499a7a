//! View-state and the pure filter/sort/paginate pipeline.
//!
//! # Responsibility
//! - Hold the user-driven `{page, page_size, category}` record.
//! - Turn a loaded batch plus view-state into one page of items.
//!
//! # Invariants
//! - `page` is always >= 1 and never exceeds the last valid page after
//!   `paginate` runs.
//! - Changing the category resets `page` to 1.

pub mod paginate;
pub mod state;

pub use paginate::{
    news_order, paginate, sort_news, sort_wall_notes, total_pages, wall_note_order, Categorized,
    PageSlice,
};
pub use state::{CategoryFilter, ViewState};
