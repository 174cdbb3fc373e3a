use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use genzet_core::config::Settings;
use genzet_core::traits::BlogApi;
use genzet_core::types::{
    Article, ArticleList, ArticlePayload, ArticleQuery, Category, CategoryList, CategoryPayload, LoginRequest,
    LoginResponse, Profile, RegisterRequest, Role,
};
use genzet_core::{Error, Result};

/// `BlogApi` over HTTP. One client per process; reqwest pools connections.
#[derive(Clone)]
pub struct HttpBlogApi {
    client: Client,
    base_url: String,
}

/// Error bodies seen from the API: `{"message": ...}` or `{"error": ...}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpBlogApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.api.base_url, settings.api_timeout())
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.execute(request).await?;
        serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
    }

    async fn send_empty(&self, request: RequestBuilder) -> Result<()> {
        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await.map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await.map_err(|e| Error::Transport(e.to_string()))?;
        if status.is_success() {
            tracing::debug!(%status, path = %url, bytes = body.len(), "api response");
            return Ok(body);
        }
        let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.error)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
        tracing::debug!(%status, path = %url, %message, "api error");
        Err(Error::from_status(status.as_u16(), message))
    }
}

impl BlogApi for HttpBlogApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest { username: username.to_string(), password: password.to_string() };
        self.send(self.client.post(self.url("/auth/login")).json(&body)).await
    }

    async fn register(&self, username: &str, password: &str, role: Role) -> Result<()> {
        let body = RegisterRequest { username: username.to_string(), password: password.to_string(), role };
        self.send_empty(self.client.post(self.url("/auth/register")).json(&body)).await
    }

    async fn profile(&self, token: &str) -> Result<Profile> {
        self.send(self.client.get(self.url("/auth/profile")).bearer_auth(token)).await
    }

    async fn list_articles(&self, query: &ArticleQuery) -> Result<ArticleList> {
        self.send(self.client.get(self.url("/articles")).query(&query.to_pairs())).await
    }

    async fn get_article(&self, id: &str) -> Result<Article> {
        self.send(self.client.get(self.url(&format!("/articles/{}", id)))).await
    }

    async fn create_article(&self, token: &str, payload: &ArticlePayload) -> Result<()> {
        self.send_empty(self.client.post(self.url("/articles")).bearer_auth(token).json(payload)).await
    }

    async fn update_article(&self, token: &str, id: &str, payload: &ArticlePayload) -> Result<()> {
        let url = self.url(&format!("/articles/{}", id));
        self.send_empty(self.client.put(url).bearer_auth(token).json(payload)).await
    }

    async fn delete_article(&self, token: &str, id: &str) -> Result<()> {
        let url = self.url(&format!("/articles/{}", id));
        self.send_empty(self.client.delete(url).bearer_auth(token)).await
    }

    async fn list_categories(&self, limit: Option<usize>) -> Result<CategoryList> {
        let mut request = self.client.get(self.url("/categories"));
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit.to_string())]);
        }
        self.send(request).await
    }

    async fn get_category(&self, id: &str) -> Result<Category> {
        self.send(self.client.get(self.url(&format!("/categories/{}", id)))).await
    }

    async fn create_category(&self, token: &str, payload: &CategoryPayload) -> Result<()> {
        self.send_empty(self.client.post(self.url("/categories")).bearer_auth(token).json(payload)).await
    }

    async fn update_category(&self, token: &str, id: &str, payload: &CategoryPayload) -> Result<()> {
        let url = self.url(&format!("/categories/{}", id));
        self.send_empty(self.client.put(url).bearer_auth(token).json(payload)).await
    }

    async fn delete_category(&self, token: &str, id: &str) -> Result<()> {
        let url = self.url(&format!("/categories/{}", id));
        self.send_empty(self.client.delete(url).bearer_auth(token)).await
    }
}
