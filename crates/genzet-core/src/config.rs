//! Typed settings for the blog client.
//!
//! Uses Figment to merge built-in defaults, `config.toml`, `config.<env>.toml`
//! and `APP_*` env vars. Provides helpers to expand `~` and `${VAR}` and to
//! resolve relative paths against the directory the config came from.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub session: SessionSettings,
    pub listing: ListingSettings,
    /// Directory the config files were read from; relative paths resolve against it.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSettings {
    /// Page size of the admin article and category tables.
    pub admin_page_size: usize,
    /// Page size of the reader's server-paginated article grid.
    pub reader_page_size: usize,
    /// `limit` used when a view loads a whole collection for client-side paging.
    pub fetch_all_limit: usize,
    pub related_fetch_limit: usize,
    pub related_count: usize,
    pub search_debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: "https://test-fe.mysellerpintar.com/api".to_string(),
                timeout_secs: 30,
            },
            session: SessionSettings { path: "~/.genzet/session.json".to_string() },
            listing: ListingSettings {
                admin_page_size: 10,
                reader_page_size: 9,
                fetch_all_limit: 1000,
                related_fetch_limit: 100,
                related_count: 3,
                search_debounce_ms: 400,
            },
            base_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Load from the working directory, picking the overlay from `RUST_ENV` (default `dev`).
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_from(Path::new("."), &env_name)
    }

    /// Merge defaults, `config.toml`, `config.<env>.toml` and `APP_*` env vars.
    ///
    /// Nested keys use a double underscore: `APP_API__BASE_URL`.
    pub fn load_from(dir: &Path, env_name: &str) -> Result<Self> {
        let overlay = match env_name {
            "dev" | "development" => Some("config.dev.toml"),
            "prod" | "production" => Some("config.prod.toml"),
            "test" | "testing" => Some("config.test.toml"),
            _ => None,
        };
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(resolve_with_base(dir, "config.toml")));
        if let Some(file) = overlay {
            figment = figment.merge(Toml::file(resolve_with_base(dir, file)));
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let mut settings: Settings = figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        settings.base_dir = dir.to_path_buf();
        settings.validate()?;
        tracing::debug!(env = env_name, base_url = %settings.api.base_url, "settings loaded");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::InvalidConfig(format!("api.base_url must be an http(s) URL, got '{}'", url)));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::InvalidConfig("api.timeout_secs must be positive".into()));
        }
        let l = &self.listing;
        for (key, value) in [
            ("listing.admin_page_size", l.admin_page_size),
            ("listing.reader_page_size", l.reader_page_size),
            ("listing.fetch_all_limit", l.fetch_all_limit),
            ("listing.related_fetch_limit", l.related_fetch_limit),
        ] {
            if value == 0 {
                return Err(Error::InvalidConfig(format!("{} must be at least 1", key)));
            }
        }
        if self.session.path.trim().is_empty() {
            return Err(Error::InvalidConfig("session.path must not be empty".into()));
        }
        Ok(())
    }

    pub fn api_timeout(&self) -> Duration { Duration::from_secs(self.api.timeout_secs) }

    pub fn search_debounce(&self) -> Duration { Duration::from_millis(self.listing.search_debounce_ms) }

    pub fn session_path(&self) -> PathBuf { resolve_with_base(&self.base_dir, &self.session.path) }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
