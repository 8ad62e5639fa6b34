use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use log::warn;
use thiserror::Error;

use super::session_model::Session;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session storage: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Persistence seam for the session snapshot.
///
/// Malformed or missing stored data loads as `None` ("not logged in"); only
/// genuine storage failures are errors.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// JSON-file-backed store, one file per device profile.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSessionStore { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // Treat a corrupt snapshot as logged out rather than wedging
                // the entry screen.
                warn!("discarding malformed session file {:?}: {}", self.path, e);
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and the mock backend.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        Ok(self.inner.lock().unwrap_or_else(|p| p.into_inner()).clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.inner.lock().unwrap_or_else(|p| p.into_inner()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.lock().unwrap_or_else(|p| p.into_inner()) = None;
        Ok(())
    }
}
