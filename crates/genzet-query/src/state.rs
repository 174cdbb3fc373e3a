use genzet_core::types::{SortDirection, SortField};

/// Everything that decides which slice of a collection is shown.
///
/// The setters for search text, category, sort and page size return to the
/// first page when they change something; `set_page` is the only way to move
/// between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub category_id: Option<String>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self { Self::with_page_size(10) }
}

impl QueryState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            category_id: None,
            sort_field: SortField::CreatedAt,
            sort_direction: SortDirection::Desc,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Copy with `page` and `page_size` clamped to at least 1 and a blank category dropped.
    pub fn normalized(&self) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.max(1),
            category_id: self.category_id.clone().filter(|c| !c.trim().is_empty()),
            ..self.clone()
        }
    }

    pub fn set_search_text(&mut self, text: &str) -> bool {
        if self.search_text == text { return false; }
        self.search_text = text.to_string();
        self.page = 1;
        true
    }

    pub fn set_category(&mut self, category_id: Option<&str>) -> bool {
        let category_id = category_id.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string);
        if self.category_id == category_id { return false; }
        self.category_id = category_id;
        self.page = 1;
        true
    }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) -> bool {
        if self.sort_field == field && self.sort_direction == direction { return false; }
        self.sort_field = field;
        self.sort_direction = direction;
        self.page = 1;
        true
    }

    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let page_size = page_size.max(1);
        if self.page_size == page_size { return false; }
        self.page_size = page_size;
        self.page = 1;
        true
    }

    pub fn set_page(&mut self, page: usize) { self.page = page.max(1); }

    pub fn clear_filters(&mut self) {
        self.search_text.clear();
        self.category_id = None;
        self.page = 1;
    }
}
