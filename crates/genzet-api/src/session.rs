//! `SessionProvider` implementations.
//!
//! `FileSession` persists `{token, role}` as JSON so a login survives between
//! CLI runs; `MemorySession` is process-local.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use genzet_core::traits::SessionProvider;
use genzet_core::types::{Role, Session};
use genzet_core::{Error, Result};

fn lock(m: &Mutex<Session>) -> MutexGuard<'_, Session> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
pub struct MemorySession {
    inner: Mutex<Session>,
}

impl MemorySession {
    pub fn new() -> Self { Self::default() }

    pub fn with(token: &str, role: Role) -> Self {
        Self { inner: Mutex::new(Session { token: Some(token.to_string()), role: Some(role) }) }
    }

    pub fn snapshot(&self) -> Session { lock(&self.inner).clone() }
}

impl SessionProvider for MemorySession {
    fn token(&self) -> Option<String> { lock(&self.inner).token.clone() }
    fn role(&self) -> Option<Role> { lock(&self.inner).role }

    fn store(&self, token: &str, role: Role) -> Result<()> {
        *lock(&self.inner) = Session { token: Some(token.to_string()), role: Some(role) };
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *lock(&self.inner) = Session::default();
        Ok(())
    }
}

/// Session backed by a JSON file. The file is read once on open and rewritten on every change.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    cached: Mutex<Session>,
}

impl FileSession {
    /// A missing, empty or undecodable file opens signed out; the next
    /// `store` or `clear` replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let session = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => Session::default(),
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "unreadable session file, treating as signed out");
                Session::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Session::default(),
            Err(e) => return Err(Error::Session(format!("{}: {}", path.display(), e))),
        };
        Ok(Self { path, cached: Mutex::new(session) })
    }

    pub fn path(&self) -> &Path { &self.path }

    fn persist(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::Session(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(session).map_err(|e| Error::Session(e.to_string()))?;
        let staging = self.path.with_extension("json.tmp");
        let io_err = |e: std::io::Error| Error::Session(format!("{}: {}", self.path.display(), e));
        write_private(&staging, raw.as_bytes()).map_err(io_err)?;
        fs::rename(&staging, &self.path).map_err(io_err)
    }
}

/// Write `bytes` to a fresh file readable by the owner only (on unix).
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => return Err(e),
        _ => {}
    }
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

impl SessionProvider for FileSession {
    fn token(&self) -> Option<String> { lock(&self.cached).token.clone() }
    fn role(&self) -> Option<Role> { lock(&self.cached).role }

    fn store(&self, token: &str, role: Role) -> Result<()> {
        let session = Session { token: Some(token.to_string()), role: Some(role) };
        self.persist(&session)?;
        *lock(&self.cached) = session;
        tracing::debug!(path = %self.path.display(), %role, "session stored");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(Error::Session(format!("{}: {}", self.path.display(), e))),
        }
        *lock(&self.cached) = Session::default();
        tracing::debug!(path = %self.path.display(), "session cleared");
        Ok(())
    }
}
