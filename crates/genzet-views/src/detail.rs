use std::collections::BTreeSet;

use genzet_core::config::Settings;
use genzet_core::text::reading_time_minutes;
use genzet_core::traits::BlogApi;
use genzet_core::types::{Article, ArticleQuery};
use genzet_core::Error;

use crate::route::Route;

pub const NOT_FOUND_MESSAGE: &str = "The article you're looking for doesn't exist or has been removed.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load article. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleDetail {
    Found { article: Article, reading_minutes: usize, related: Vec<Article> },
    NotFound { message: String, back: Route },
}

impl ArticleDetail {
    fn not_found(message: &str) -> Self {
        ArticleDetail::NotFound { message: message.to_string(), back: Route::Reader }
    }
}

/// Load one article for reading, with up to `listing.related_count` related articles.
pub async fn load_article_detail<A: BlogApi>(api: &A, id: &str, settings: &Settings) -> ArticleDetail {
    let article = match api.get_article(id).await {
        Ok(article) => article,
        Err(Error::NotFound(_)) => return ArticleDetail::not_found(NOT_FOUND_MESSAGE),
        Err(e) => {
            tracing::warn!(%id, error = %e, "article load failed");
            return ArticleDetail::not_found(LOAD_FAILED_MESSAGE);
        }
    };
    let reading_minutes = reading_time_minutes(&article.content);
    let related = match api.list_articles(&ArticleQuery::with_limit(settings.listing.related_fetch_limit)).await {
        Ok(list) => select_related(&list.data, &article, settings.listing.related_count),
        Err(e) => {
            tracing::warn!(%id, error = %e, "related articles unavailable");
            Vec::new()
        }
    };
    ArticleDetail::Found { article, reading_minutes, related }
}

/// Articles sharing `current`'s category name, excluding `current`, in input order.
///
/// Matching is by name, so two categories with the same name are merged.
pub fn select_related(candidates: &[Article], current: &Article, count: usize) -> Vec<Article> {
    let Some(name) = current.category_name() else { return Vec::new() };
    let same_name: Vec<&Article> = candidates.iter().filter(|a| a.category_name() == Some(name)).collect();
    let ids: BTreeSet<&str> = same_name.iter().map(|a| a.category_id.as_str()).collect();
    if ids.len() > 1 {
        tracing::warn!(category = %name, ids = ?ids, "several categories share this name; related articles mix them");
    }
    same_name.into_iter().filter(|a| a.id != current.id).take(count).cloned().collect()
}
