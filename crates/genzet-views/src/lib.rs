//! genzet-views
//!
//! UI-agnostic view models for the blog client. Each view owns its loaded
//! collection and query state, talks to the remote API through `BlogApi`, and
//! reads credentials through an injected `SessionProvider`.
//!
//! Pagination strategy per view:
//! - `AdminArticlesView`, `AdminCategoriesView`: whole collection fetched once, paged client-side.
//! - `ReaderView`: one server request per page.
pub mod admin;
pub mod auth;
pub mod detail;
pub mod error;
pub mod forms;
pub mod guard;
pub mod list;
pub mod reader;
pub mod route;

pub use admin::{AdminArticlesView, AdminCategoriesView};
pub use detail::{load_article_detail, ArticleDetail};
pub use error::{ViewError, ViewResult};
pub use forms::{ArticleChanges, ArticleForm, CategoryForm, FormErrors, FormMode, LoginForm, RegisterForm};
pub use guard::authorize;
pub use list::ListView;
pub use reader::{FetchTicket, ReaderView};
pub use route::Route;
