use std::time::{Duration, Instant};

use genzet_query::{build_result_page, Listable, QueryState, ResultPage, SearchInput, SortDirection, SortField};

/// A fully loaded collection paged client-side. Query changes never refetch.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Vec<T>,
    query: QueryState,
    search: SearchInput,
}

impl<T: Listable + Clone> ListView<T> {
    pub fn new(items: Vec<T>, page_size: usize, debounce: Duration) -> Self {
        Self { items, query: QueryState::with_page_size(page_size), search: SearchInput::new(debounce) }
    }

    pub fn items(&self) -> &[T] { &self.items }

    pub fn query(&self) -> &QueryState { &self.query }

    pub fn search(&self) -> &SearchInput { &self.search }

    /// Swap in a refetched collection, keeping the query.
    pub fn replace(&mut self, items: Vec<T>) { self.items = items; }

    /// Record a keystroke. The query only sees it after `tick` passes the quiet period.
    pub fn set_search_input(&mut self, raw: &str, now: Instant) { self.search.edit(raw, now); }

    /// Apply a settled search edit. True when the query changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(text) => {
                let text = text.to_string();
                self.query.set_search_text(&text)
            }
            None => false,
        }
    }

    pub fn set_category(&mut self, category_id: Option<&str>) -> bool { self.query.set_category(category_id) }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) -> bool { self.query.set_sort(field, direction) }

    pub fn set_page(&mut self, page: usize) { self.query.set_page(page) }

    pub fn set_page_size(&mut self, page_size: usize) -> bool { self.query.set_page_size(page_size) }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.query.clear_filters();
    }

    pub fn page(&self) -> ResultPage<T> { build_result_page(&self.items, &self.query) }
}
