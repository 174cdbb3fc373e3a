use std::borrow::Cow;

use genzet_core::text::{strip_html, timestamp_millis};
use genzet_core::types::{Article, Category, SortField};

/// Comparable sort key. Text keys are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Millis(i64),
    Text(String),
}

impl SortKey {
    fn text(s: &str) -> Self { SortKey::Text(s.to_lowercase()) }

    /// Unparseable timestamps sort as the earliest instant.
    fn millis(ts: &str) -> Self { SortKey::Millis(timestamp_millis(ts).unwrap_or(i64::MIN)) }
}

/// Field accessors the list pipeline needs from an entity.
pub trait Listable {
    fn id(&self) -> &str;
    /// Fields matched (case-insensitively, as substrings) by free-text search.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
    /// Value compared for equality by the category filter.
    fn category_id(&self) -> Option<&str>;
    fn sort_key(&self, field: SortField) -> SortKey;
}

impl<T: Listable + ?Sized> Listable for &T {
    fn id(&self) -> &str { (**self).id() }
    fn search_fields(&self) -> Vec<Cow<'_, str>> { (**self).search_fields() }
    fn category_id(&self) -> Option<&str> { (**self).category_id() }
    fn sort_key(&self, field: SortField) -> SortKey { (**self).sort_key(field) }
}

/// Articles search title, markup-free content, category name and author username.
impl Listable for Article {
    fn id(&self) -> &str { &self.id }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.title.as_str()), Cow::Owned(strip_html(&self.content))];
        if let Some(name) = self.category_name() { fields.push(Cow::Borrowed(name)); }
        if let Some(author) = self.author_name() { fields.push(Cow::Borrowed(author)); }
        fields
    }

    fn category_id(&self) -> Option<&str> { Some(self.category_id.as_str()) }

    fn sort_key(&self, field: SortField) -> SortKey {
        match field {
            SortField::CreatedAt => SortKey::millis(&self.created_at),
            SortField::UpdatedAt => SortKey::millis(&self.updated_at),
            SortField::Title => SortKey::text(&self.title),
            SortField::Category => SortKey::text(self.category_name().unwrap_or("")),
        }
    }
}

/// Categories search name, id and owner id. A category "belongs" to its own id,
/// and both text sort fields order by name.
impl Listable for Category {
    fn id(&self) -> &str { &self.id }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str()), Cow::Borrowed(self.id.as_str()), Cow::Borrowed(self.user_id.as_str())]
    }

    fn category_id(&self) -> Option<&str> { Some(self.id.as_str()) }

    fn sort_key(&self, field: SortField) -> SortKey {
        match field {
            SortField::CreatedAt => SortKey::millis(&self.created_at),
            SortField::UpdatedAt => SortKey::millis(&self.updated_at),
            SortField::Title | SortField::Category => SortKey::text(&self.name),
        }
    }
}
