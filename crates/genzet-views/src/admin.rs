//! Admin tables for articles and categories.
//!
//! Both views load the whole collection once (`listing.fetch_all_limit`) and
//! page it client-side through `ListView`. Mutations refetch on success.

use std::ops::{Deref, DerefMut};

use genzet_core::config::Settings;
use genzet_core::traits::{BlogApi, SessionProvider};
use genzet_core::types::{Article, ArticleQuery, Category, Profile, Role};
use genzet_core::Error;

use crate::error::{ViewError, ViewResult};
use crate::forms::{ArticleChanges, ArticleForm, CategoryForm, FormErrors, FormMode};
use crate::guard::{authorize, require_token, session_expired};
use crate::list::ListView;

const UNKNOWN_CATEGORY: &str = "Unknown Category";

fn mutation_error<S: SessionProvider>(session: &S, err: Error, map: impl FnOnce(&Error) -> FormErrors) -> ViewError {
    match err {
        Error::Unauthenticated => session_expired(session),
        other => {
            tracing::warn!(error = %other, "mutation rejected");
            ViewError::Form(map(&other))
        }
    }
}

fn delete_error<S: SessionProvider>(session: &S, err: Error) -> ViewError {
    match err {
        Error::Unauthenticated => session_expired(session),
        other => other.into(),
    }
}

pub struct AdminArticlesView<'a, A, S> {
    api: &'a A,
    session: &'a S,
    profile: Profile,
    list: ListView<Article>,
    categories: Vec<Category>,
    fetch_limit: usize,
}

impl<'a, A: BlogApi, S: SessionProvider> AdminArticlesView<'a, A, S> {
    pub async fn load(api: &'a A, session: &'a S, settings: &Settings) -> ViewResult<Self> {
        let profile = authorize(api, session, Some(Role::Admin)).await?;
        let fetch_limit = settings.listing.fetch_all_limit;
        let list = ListView::new(Vec::new(), settings.listing.admin_page_size, settings.search_debounce());
        let mut view = Self { api, session, profile, list, categories: Vec::new(), fetch_limit };
        view.refresh().await?;
        Ok(view)
    }

    pub fn profile(&self) -> &Profile { &self.profile }

    pub fn categories(&self) -> &[Category] { &self.categories }

    pub fn category_name(&self, id: &str) -> &str {
        self.categories.iter().find(|c| c.id == id).map(|c| c.name.as_str()).unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Refetch articles and categories; the query state is kept.
    pub async fn refresh(&mut self) -> ViewResult<()> {
        let articles = self.api.list_articles(&ArticleQuery::with_limit(self.fetch_limit)).await?;
        let categories = self.api.list_categories(Some(self.fetch_limit)).await?;
        tracing::debug!(articles = articles.data.len(), total = articles.total, categories = categories.data.len(), "admin articles loaded");
        self.list.replace(articles.data);
        self.categories = categories.data;
        Ok(())
    }

    pub async fn create(&mut self, form: &ArticleForm) -> ViewResult<()> {
        form.validate().map_err(ViewError::Form)?;
        let token = require_token(self.session)?;
        self.api
            .create_article(&token, &form.payload())
            .await
            .map_err(|e| mutation_error(self.session, e, |e| ArticleForm::map_error(FormMode::Create, e)))?;
        tracing::info!(title = %form.title, "article created");
        self.refresh().await
    }

    pub async fn update(&mut self, id: &str, form: &ArticleForm) -> ViewResult<()> {
        form.validate().map_err(ViewError::Form)?;
        let token = require_token(self.session)?;
        self.api
            .update_article(&token, id, &form.payload())
            .await
            .map_err(|e| mutation_error(self.session, e, |e| ArticleForm::map_error(FormMode::Update, e)))?;
        tracing::info!(%id, "article updated");
        self.refresh().await
    }

    /// Form prefilled from the stored article, for the edit screen.
    pub async fn edit_form(&self, id: &str) -> ViewResult<ArticleForm> {
        let article = self.api.get_article(id).await?;
        Ok(ArticleForm::from(&article))
    }

    /// Update only the given fields; the rest keep their stored values.
    pub async fn update_with(&mut self, id: &str, changes: ArticleChanges) -> ViewResult<()> {
        let form = changes.apply_to(self.edit_form(id).await?);
        self.update(id, &form).await
    }

    pub async fn delete(&mut self, id: &str) -> ViewResult<()> {
        let token = require_token(self.session)?;
        self.api.delete_article(&token, id).await.map_err(|e| delete_error(self.session, e))?;
        tracing::info!(%id, "article deleted");
        self.refresh().await
    }
}

impl<A, S> Deref for AdminArticlesView<'_, A, S> {
    type Target = ListView<Article>;
    fn deref(&self) -> &Self::Target { &self.list }
}

impl<A, S> DerefMut for AdminArticlesView<'_, A, S> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.list }
}

pub struct AdminCategoriesView<'a, A, S> {
    api: &'a A,
    session: &'a S,
    profile: Profile,
    list: ListView<Category>,
    fetch_limit: usize,
}

impl<'a, A: BlogApi, S: SessionProvider> AdminCategoriesView<'a, A, S> {
    pub async fn load(api: &'a A, session: &'a S, settings: &Settings) -> ViewResult<Self> {
        let profile = authorize(api, session, Some(Role::Admin)).await?;
        let list = ListView::new(Vec::new(), settings.listing.admin_page_size, settings.search_debounce());
        let mut view = Self { api, session, profile, list, fetch_limit: settings.listing.fetch_all_limit };
        view.refresh().await?;
        Ok(view)
    }

    pub fn profile(&self) -> &Profile { &self.profile }

    pub async fn refresh(&mut self) -> ViewResult<()> {
        let categories = self.api.list_categories(Some(self.fetch_limit)).await?;
        tracing::debug!(categories = categories.data.len(), total = categories.total_data, "admin categories loaded");
        self.list.replace(categories.data);
        Ok(())
    }

    pub async fn create(&mut self, form: &CategoryForm) -> ViewResult<()> {
        form.validate().map_err(ViewError::Form)?;
        let token = require_token(self.session)?;
        self.api
            .create_category(&token, &form.payload())
            .await
            .map_err(|e| mutation_error(self.session, e, |e| CategoryForm::map_error(FormMode::Create, e)))?;
        tracing::info!(name = %form.name, "category created");
        self.refresh().await
    }

    pub async fn update(&mut self, id: &str, form: &CategoryForm) -> ViewResult<()> {
        form.validate().map_err(ViewError::Form)?;
        let token = require_token(self.session)?;
        self.api
            .update_category(&token, id, &form.payload())
            .await
            .map_err(|e| mutation_error(self.session, e, |e| CategoryForm::map_error(FormMode::Update, e)))?;
        tracing::info!(%id, "category updated");
        self.refresh().await
    }

    pub async fn edit_form(&self, id: &str) -> ViewResult<CategoryForm> {
        let category = self.api.get_category(id).await?;
        Ok(CategoryForm::from(&category))
    }

    pub async fn delete(&mut self, id: &str) -> ViewResult<()> {
        let token = require_token(self.session)?;
        self.api.delete_category(&token, id).await.map_err(|e| delete_error(self.session, e))?;
        tracing::info!(%id, "category deleted");
        self.refresh().await
    }
}

impl<A, S> Deref for AdminCategoriesView<'_, A, S> {
    type Target = ListView<Category>;
    fn deref(&self) -> &Self::Target { &self.list }
}

impl<A, S> DerefMut for AdminCategoriesView<'_, A, S> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.list }
}
