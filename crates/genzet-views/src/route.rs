use std::fmt;

use genzet_core::types::{ArticleId, Role};

/// Where the front end should go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    AdminArticles,
    AdminCategories,
    Reader,
    Article(ArticleId),
}

impl Route {
    /// Landing view for a freshly authenticated session.
    pub fn landing(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminArticles,
            Role::User => Route::Reader,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => f.write_str("/login"),
            Route::Register => f.write_str("/register"),
            Route::AdminArticles => f.write_str("/admin"),
            Route::AdminCategories => f.write_str("/admin/categories"),
            Route::Reader => f.write_str("/user"),
            Route::Article(id) => write!(f, "/user/{}", id),
        }
    }
}
