use std::time::Instant;

use genzet_core::config::Settings;
use genzet_core::traits::{BlogApi, SessionProvider};
use genzet_core::types::{Article, ArticleList, ArticleQuery, Category, Profile};
use genzet_core::Result;
use genzet_query::{QueryState, ResultPage, SearchInput, SortDirection, SortField};

use crate::error::ViewResult;
use crate::guard::authorize;

/// A request issued by the reader. Only the most recently issued ticket may
/// update the view; older responses are dropped when they arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    pub query: ArticleQuery,
}

/// Article grid for any signed-in session, paginated by the server.
pub struct ReaderView<'a, A> {
    api: &'a A,
    profile: Profile,
    categories: Vec<Category>,
    query: QueryState,
    search: SearchInput,
    page: ResultPage<Article>,
    issued: u64,
}

impl<'a, A: BlogApi> ReaderView<'a, A> {
    pub async fn load<S: SessionProvider>(api: &'a A, session: &S, settings: &Settings) -> ViewResult<Self> {
        let profile = authorize(api, session, None).await?;
        let categories = api.list_categories(Some(settings.listing.fetch_all_limit)).await?.data;
        let page_size = settings.listing.reader_page_size;
        let mut view = Self {
            api,
            profile,
            categories,
            query: QueryState::with_page_size(page_size),
            search: SearchInput::new(settings.search_debounce()),
            page: ResultPage::empty(1, page_size),
            issued: 0,
        };
        view.refresh().await?;
        Ok(view)
    }

    pub fn profile(&self) -> &Profile { &self.profile }

    pub fn categories(&self) -> &[Category] { &self.categories }

    pub fn query(&self) -> &QueryState { &self.query }

    pub fn search(&self) -> &SearchInput { &self.search }

    pub fn page(&self) -> &ResultPage<Article> { &self.page }

    /// Request parameters for the current query state.
    pub fn article_query(&self) -> ArticleQuery {
        let q = self.query.normalized();
        ArticleQuery {
            page: Some(q.page),
            limit: Some(q.page_size),
            title: Some(q.search_text).filter(|t| !t.trim().is_empty()),
            category_id: q.category_id,
            sort_by: Some(q.sort_field),
            sort_order: Some(q.sort_direction),
        }
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket { seq: self.issued, query: self.article_query() }
    }

    /// Apply a response. Returns false when the ticket was superseded; its
    /// result, error or not, is then ignored.
    pub fn apply(&mut self, ticket: &FetchTicket, result: Result<ArticleList>) -> ViewResult<bool> {
        if ticket.seq != self.issued {
            tracing::warn!(seq = ticket.seq, latest = self.issued, "stale article response discarded");
            return Ok(false);
        }
        let list = result?;
        let page = if list.page > 0 { list.page } else { ticket.query.page.unwrap_or(1) };
        let limit = if list.limit > 0 { list.limit } else { self.query.page_size };
        tracing::debug!(page, limit, total = list.total, shown = list.data.len(), "reader page loaded");
        self.page = ResultPage::new(list.data, list.total, page, limit);
        Ok(true)
    }

    pub async fn refresh(&mut self) -> ViewResult<()> {
        let ticket = self.begin_fetch();
        let result = self.api.list_articles(&ticket.query).await;
        self.apply(&ticket, result).map(|_| ())
    }

    pub fn set_search_input(&mut self, raw: &str, now: Instant) { self.search.edit(raw, now); }

    /// Settle a pending search edit. True when the grid needs a refresh.
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

    pub fn set_page(&mut self, page: usize) -> bool {
        let before = self.query.page;
        self.query.set_page(page);
        self.query.page != before
    }

    pub fn clear_filters(&mut self) -> bool {
        let before = self.query.clone();
        self.search.clear();
        self.query.clear_filters();
        self.query != before
    }
}
