use std::future::Future;

use crate::error::Result;
use crate::types::{
    Article, ArticleList, ArticlePayload, ArticleQuery, Category, CategoryList, CategoryPayload,
    LoginResponse, Profile, Role,
};

/// The remote blog API. Mutations take the bearer token explicitly.
pub trait BlogApi: Send + Sync {
    fn login(&self, username: &str, password: &str) -> impl Future<Output = Result<LoginResponse>> + Send;
    fn register(&self, username: &str, password: &str, role: Role) -> impl Future<Output = Result<()>> + Send;
    fn profile(&self, token: &str) -> impl Future<Output = Result<Profile>> + Send;

    fn list_articles(&self, query: &ArticleQuery) -> impl Future<Output = Result<ArticleList>> + Send;
    fn get_article(&self, id: &str) -> impl Future<Output = Result<Article>> + Send;
    fn create_article(&self, token: &str, payload: &ArticlePayload) -> impl Future<Output = Result<()>> + Send;
    fn update_article(&self, token: &str, id: &str, payload: &ArticlePayload) -> impl Future<Output = Result<()>> + Send;
    fn delete_article(&self, token: &str, id: &str) -> impl Future<Output = Result<()>> + Send;

    fn list_categories(&self, limit: Option<usize>) -> impl Future<Output = Result<CategoryList>> + Send;
    fn get_category(&self, id: &str) -> impl Future<Output = Result<Category>> + Send;
    fn create_category(&self, token: &str, payload: &CategoryPayload) -> impl Future<Output = Result<()>> + Send;
    fn update_category(&self, token: &str, id: &str, payload: &CategoryPayload) -> impl Future<Output = Result<()>> + Send;
    fn delete_category(&self, token: &str, id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Where a session's token and role live between runs.
pub trait SessionProvider: Send + Sync {
    fn token(&self) -> Option<String>;
    fn role(&self) -> Option<Role>;
    fn store(&self, token: &str, role: Role) -> Result<()>;
    fn clear(&self) -> Result<()>;
}
