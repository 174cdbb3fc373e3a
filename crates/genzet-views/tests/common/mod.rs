#![allow(dead_code)]

use std::sync::Mutex;

use genzet_core::config::Settings;
use genzet_core::traits::BlogApi;
use genzet_core::types::{
    Article, ArticleList, ArticlePayload, ArticleQuery, Author, Category, CategoryList, CategoryPayload,
    LoginResponse, Profile, Role,
};
use genzet_core::{Error, Result};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const USER_TOKEN: &str = "user-token";

pub fn category(id: &str, name: &str, created_at: &str) -> Category {
    Category {
        id: id.to_string(),
        user_id: "u-admin".to_string(),
        name: name.to_string(),
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
    }
}

pub fn article(id: &str, title: &str, category: &Category, created_at: &str) -> Article {
    Article {
        id: id.to_string(),
        user_id: "u-admin".to_string(),
        category_id: category.id.clone(),
        title: title.to_string(),
        content: format!("<p>{} body text</p>", title),
        image_url: None,
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
        category: Some(category.clone()),
        user: Some(Author { id: "u-admin".to_string(), username: "editor".to_string(), role: None }),
    }
}

#[derive(Default)]
struct State {
    articles: Vec<Article>,
    categories: Vec<Category>,
    /// Status the next mutation fails with.
    fail_next: Option<(u16, String)>,
    calls: Vec<String>,
    next_id: u32,
}

/// In-memory `BlogApi`. Tokens are fixed: `ADMIN_TOKEN` and `USER_TOKEN`.
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<State>,
}

impl FakeApi {
    pub fn new(categories: Vec<Category>, articles: Vec<Article>) -> Self {
        Self { state: Mutex::new(State { articles, categories, ..State::default() }) }
    }

    /// Six articles in two categories, created a day apart.
    pub fn seeded() -> Self {
        let tech = category("c-tech", "Technology", "2024-01-01T00:00:00Z");
        let life = category("c-life", "Lifestyle", "2024-01-02T00:00:00Z");
        let articles = (1..=6)
            .map(|i| {
                let cat = if i % 2 == 0 { &life } else { &tech };
                article(&format!("a{}", i), &format!("Article number {}", i), cat, &format!("2024-02-0{}T10:00:00Z", i))
            })
            .collect();
        Self::new(vec![tech, life], articles)
    }

    pub fn fail_next(&self, status: u16, message: &str) {
        self.state.lock().unwrap().fail_next = Some((status, message.to_string()));
    }

    pub fn calls(&self) -> Vec<String> { self.state.lock().unwrap().calls.clone() }

    pub fn article_count(&self) -> usize { self.state.lock().unwrap().articles.len() }

    pub fn stored_article(&self, id: &str) -> Option<Article> {
        self.state.lock().unwrap().articles.iter().find(|a| a.id == id).cloned()
    }

    pub fn category_names(&self) -> Vec<String> {
        self.state.lock().unwrap().categories.iter().map(|c| c.name.clone()).collect()
    }

    fn record(&self, call: String) { self.state.lock().unwrap().calls.push(call); }

    fn check(&self, token: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some((status, message)) = state.fail_next.take() {
            return Err(Error::from_status(status, message));
        }
        if token != ADMIN_TOKEN { return Err(Error::Unauthenticated); }
        Ok(())
    }
}

fn profile(role: Role) -> Profile {
    let username = match role {
        Role::Admin => "admin",
        Role::User => "reader",
    };
    Profile { id: format!("u-{}", username), username: username.to_string(), role, created_at: None, updated_at: None }
}

impl BlogApi for FakeApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        self.record(format!("login {}", username));
        match (username, password) {
            ("admin", "secret") => Ok(LoginResponse { token: ADMIN_TOKEN.to_string(), role: Role::Admin }),
            ("reader", "secret") => Ok(LoginResponse { token: USER_TOKEN.to_string(), role: Role::User }),
            ("bad name", _) => Err(Error::BadRequest("username".to_string())),
            ("offline", _) => Err(Error::Transport("connection refused".to_string())),
            _ => Err(Error::Unauthenticated),
        }
    }

    async fn register(&self, username: &str, _password: &str, role: Role) -> Result<()> {
        self.record(format!("register {} {}", username, role));
        if username == "admin" { return Err(Error::Conflict("Username already exists".to_string())); }
        Ok(())
    }

    async fn profile(&self, token: &str) -> Result<Profile> {
        self.record("profile".to_string());
        match token {
            ADMIN_TOKEN => Ok(profile(Role::Admin)),
            USER_TOKEN => Ok(profile(Role::User)),
            "broken" => Err(Error::Api { status: 500, message: "boom".to_string() }),
            _ => Err(Error::Unauthenticated),
        }
    }

    async fn list_articles(&self, query: &ArticleQuery) -> Result<ArticleList> {
        self.record(format!("list_articles {:?}", query.to_pairs()));
        let state = self.state.lock().unwrap();
        let title = query.title.as_deref().unwrap_or("").to_lowercase();
        let mut matched: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&title))
            .filter(|a| query.category_id.as_deref().map_or(true, |c| a.category_id == c))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(10).max(1);
        let total = matched.len();
        let data = matched.into_iter().skip((page - 1) * limit).take(limit).collect();
        Ok(ArticleList { data, total, page, limit })
    }

    async fn get_article(&self, id: &str) -> Result<Article> {
        self.record(format!("get_article {}", id));
        if id == "explode" { return Err(Error::Transport("reset".to_string())); }
        let state = self.state.lock().unwrap();
        state.articles.iter().find(|a| a.id == id).cloned().ok_or_else(|| Error::NotFound("Article not found".to_string()))
    }

    async fn create_article(&self, token: &str, payload: &ArticlePayload) -> Result<()> {
        self.check(token)?;
        self.record(format!("create_article {}", payload.title));
        let mut state = self.state.lock().unwrap();
        let Some(cat) = state.categories.iter().find(|c| c.id == payload.category_id).cloned() else {
            return Err(Error::NotFound("Category not found".to_string()));
        };
        state.next_id += 1;
        let mut created = article(&format!("new{}", state.next_id), &payload.title, &cat, "2024-03-01T00:00:00Z");
        created.content = payload.content.clone();
        state.articles.push(created);
        Ok(())
    }

    async fn update_article(&self, token: &str, id: &str, payload: &ArticlePayload) -> Result<()> {
        self.check(token)?;
        self.record(format!("update_article {}", id));
        let mut state = self.state.lock().unwrap();
        let target = state.articles.iter_mut().find(|a| a.id == id).ok_or_else(|| Error::NotFound(id.to_string()))?;
        target.title = payload.title.clone();
        target.content = payload.content.clone();
        target.category_id = payload.category_id.clone();
        target.image_url = payload.image_url.clone();
        Ok(())
    }

    async fn delete_article(&self, token: &str, id: &str) -> Result<()> {
        self.check(token)?;
        self.record(format!("delete_article {}", id));
        self.state.lock().unwrap().articles.retain(|a| a.id != id);
        Ok(())
    }

    async fn list_categories(&self, limit: Option<usize>) -> Result<CategoryList> {
        self.record(format!("list_categories {:?}", limit));
        let state = self.state.lock().unwrap();
        let total = state.categories.len();
        Ok(CategoryList { data: state.categories.clone(), total_data: total, current_page: 1, total_pages: 1 })
    }

    async fn get_category(&self, id: &str) -> Result<Category> {
        self.record(format!("get_category {}", id));
        let state = self.state.lock().unwrap();
        state.categories.iter().find(|c| c.id == id).cloned().ok_or_else(|| Error::NotFound("Category not found".to_string()))
    }

    async fn create_category(&self, token: &str, payload: &CategoryPayload) -> Result<()> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        if state.categories.iter().any(|c| c.name.eq_ignore_ascii_case(&payload.name)) {
            return Err(Error::Conflict("Category already exists".to_string()));
        }
        state.next_id += 1;
        let id = format!("c-new{}", state.next_id);
        state.categories.push(category(&id, &payload.name, "2024-03-01T00:00:00Z"));
        Ok(())
    }

    async fn update_category(&self, token: &str, id: &str, payload: &CategoryPayload) -> Result<()> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        let target = state.categories.iter_mut().find(|c| c.id == id).ok_or_else(|| Error::NotFound(id.to_string()))?;
        target.name = payload.name.clone();
        Ok(())
    }

    async fn delete_category(&self, token: &str, id: &str) -> Result<()> {
        self.check(token)?;
        self.state.lock().unwrap().categories.retain(|c| c.id != id);
        Ok(())
    }
}

pub fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.listing.admin_page_size = 4;
    settings.listing.reader_page_size = 4;
    settings
}
