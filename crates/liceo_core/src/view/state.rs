use std::fmt::{Display, Formatter};

/// Labels the page markup uses for "no filter".
const ALL_LABELS: &[&str] = &["all", "Todas"];

/// Active category filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    /// Exact, case-sensitive category match.
    Only(String),
}

impl CategoryFilter {
    /// Interprets the value of a category `<select>`.
    ///
    /// `all`, `Todas` and blank values mean no filtering. Any other value
    /// is kept verbatim, surrounding whitespace included.
    pub fn from_select_value(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || ALL_LABELS.contains(&trimmed) {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == category,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(value) => write!(f, "{value}"),
        }
    }
}

/// Mutable page/filter record owned by one page controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    page: usize,
    page_size: usize,
    category: CategoryFilter,
}

impl ViewState {
    /// Creates state on page 1 with no filter.
    ///
    /// A zero `page_size` is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            category: CategoryFilter::All,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Switches the filter and returns to page 1.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    /// Moves forward one page without bounds checking; `paginate` clamps.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Jumps straight to `page` (raised to 1); `paginate` clamps the upper
    /// bound.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Moves back one page, stopping at 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub(crate) fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryFilter, ViewState};

    #[test]
    fn select_values_for_all_are_pass_through() {
        assert_eq!(CategoryFilter::from_select_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_select_value("Todas"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_select_value("Deportes"),
            CategoryFilter::Only("Deportes".to_string())
        );
    }

    #[test]
    fn set_category_resets_page() {
        let mut state = ViewState::new(6);
        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 3);

        state.set_category(CategoryFilter::Only("Eventos".to_string()));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn category_values_are_not_trimmed() {
        let filter = CategoryFilter::from_select_value(" Eventos ");
        assert_eq!(filter, CategoryFilter::Only(" Eventos ".to_string()));
        assert!(!filter.matches("Eventos"));
        assert_eq!(CategoryFilter::from_select_value("  "), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_select_value(" Todas "), CategoryFilter::All);
    }

    #[test]
    fn go_to_page_raises_zero_to_one() {
        let mut state = ViewState::new(6);
        state.go_to_page(0);
        assert_eq!(state.page(), 1);
        state.go_to_page(usize::MAX);
        assert_eq!(state.page(), usize::MAX);
    }

    #[test]
    fn prev_page_never_goes_below_one() {
        let mut state = ViewState::new(6);
        state.prev_page();
        assert_eq!(state.page(), 1);
    }
}
