use std::cmp::Reverse;

use genzet_core::types::{SortDirection, SortField};

use crate::listable::Listable;
use crate::page::ResultPage;
use crate::state::QueryState;

/// Keep items matching the trimmed `search_text` on any search field
/// (case-insensitive substring) and, when given, equal on `category_id`.
/// Blank search text or category means "no filter".
pub fn filter<'a, T: Listable>(items: &'a [T], search_text: &str, category_id: Option<&str>) -> Vec<&'a T> {
    let needle = search_text.trim().to_lowercase();
    let category_id = category_id.map(str::trim).filter(|c| !c.is_empty());
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.search_fields().iter().any(|field| field.to_lowercase().contains(&needle))
        })
        .filter(|item| match category_id {
            Some(wanted) => item.category_id() == Some(wanted),
            None => true,
        })
        .collect()
}

/// Order in place by `field`. Ties keep their input order.
pub fn sort<T: Listable>(items: &mut [T], field: SortField, direction: SortDirection) {
    match direction {
        SortDirection::Asc => items.sort_by_cached_key(|item| item.sort_key(field)),
        SortDirection::Desc => items.sort_by_cached_key(|item| Reverse(item.sort_key(field))),
    }
}

/// Slice `[(page-1)*page_size, page*page_size)`; a page past the end is empty.
pub fn paginate<T: Clone>(ordered: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let start = (page - 1).saturating_mul(page_size);
    if start >= ordered.len() { return Vec::new(); }
    let end = start.saturating_add(page_size).min(ordered.len());
    ordered[start..end].to_vec()
}

/// Filter, sort and paginate `items` for `query`. Never mutates or refetches.
pub fn build_result_page<T: Listable + Clone>(items: &[T], query: &QueryState) -> ResultPage<T> {
    let q = query.normalized();
    let mut matched = filter(items, &q.search_text, q.category_id.as_deref());
    sort(&mut matched, q.sort_field, q.sort_direction);
    let total_matched = matched.len();
    let page_items: Vec<T> = paginate(&matched, q.page, q.page_size).into_iter().cloned().collect();
    let page = ResultPage::new(page_items, total_matched, q.page, q.page_size);
    tracing::debug!(
        search = %q.search_text,
        category = ?q.category_id,
        sort = q.sort_field.as_str(),
        order = q.sort_direction.as_str(),
        total = items.len(),
        matched = page.total_matched,
        pages = page.total_pages,
        shown = page.items.len(),
        "list query applied"
    );
    page
}
