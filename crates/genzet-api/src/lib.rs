//! genzet-api
//!
//! Concrete collaborators for the views: `HttpBlogApi` talks to the remote
//! blog REST API over reqwest, and the `session` module keeps the bearer
//! token and role either in memory or in a JSON file.
pub mod client;
pub mod session;

pub use client::HttpBlogApi;
pub use session::{FileSession, MemorySession};
