//! # Session Store
//!
//! Where the server-issued session token and username are persisted. The
//! store is injected into the [`crate::transport::ApiClient`] rather than
//! read from ambient global state, so it can be replaced per test or per
//! embedding.
//!
//! - [`MemorySessionStore`]: process-local, for tests and embedders
//! - [`FileSessionStore`]: a small JSON file holding `authToken` and
//!   `username`, cleared on logout

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::errors::SessionError;

/// Persisted token and username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    /// Opaque session token
    pub auth_token: String,
    /// Logged-in username
    #[serde(default)]
    pub username: String,
}

/// Provider of the persisted session.
pub trait SessionStore: Send + Sync {
    /// Current token, if one is held.
    fn token(&self) -> Option<String>;

    /// Username saved alongside the token.
    fn username(&self) -> Option<String>;

    /// Persist a newly issued session.
    fn save(&self, token: &str, username: &str) -> Result<(), SessionError>;

    /// Forget the session.
    fn clear(&self) -> Result<(), SessionError>;
}

// ─── In-memory ───────────────────────────────────────────────

/// Session store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<StoredSession>>,
}

impl MemorySessionStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts logged in.
    pub fn with_session(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Some(StoredSession {
                auth_token: token.into(),
                username: username.into(),
            })),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.auth_token.clone())
    }

    fn username(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.username.clone())
    }

    fn save(&self, token: &str, username: &str) -> Result<(), SessionError> {
        *self.inner.write() = Some(StoredSession {
            auth_token: token.to_string(),
            username: username.to_string(),
        });
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.inner.write() = None;
        Ok(())
    }
}

// ─── File-backed ─────────────────────────────────────────────

/// Session store persisted as JSON at a fixed path.
///
/// The file is read once on open and cached; writes go to disk first and
/// then update the cache.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    cached: RwLock<Option<StoredSession>>,
}

impl FileSessionStore {
    /// Open the store at `path`. A missing file means logged out.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let cached = read_session(&path)?;
        Ok(Self {
            path,
            cached: RwLock::new(cached),
        })
    }

    /// Location of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_session(path: &Path) -> Result<Option<StoredSession>, SessionError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SessionError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let session: StoredSession =
        serde_json::from_str(&raw).map_err(|source| SessionError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    if session.auth_token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(session))
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.cached.read().as_ref().map(|s| s.auth_token.clone())
    }

    fn username(&self) -> Option<String> {
        self.cached.read().as_ref().map(|s| s.username.clone())
    }

    fn save(&self, token: &str, username: &str) -> Result<(), SessionError> {
        let session = StoredSession {
            auth_token: token.to_string(),
            username: username.to_string(),
        };
        let io_error = |source: std::io::Error| SessionError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let raw = serde_json::to_string_pretty(&session).map_err(|source| {
            SessionError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, raw).map_err(io_error)?;

        *self.cached.write() = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.cached.write() = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_cycle() {
        let store = MemorySessionStore::new();
        assert_eq!(store.token(), None);

        store.save("t-1", "alice").unwrap();
        assert_eq!(store.token().as_deref(), Some("t-1"));
        assert_eq!(store.username().as_deref(), Some("alice"));

        store.clear().unwrap();
        assert_eq!(store.token(), None);
        assert_eq!(store.username(), None);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileSessionStore::open(&path).unwrap();
        assert_eq!(store.token(), None);
        store.save("t-2", "bob").unwrap();

        let reopened = FileSessionStore::open(&path).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("t-2"));
        assert_eq!(reopened.username().as_deref(), Some("bob"));

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("authToken"));
    }

    #[test]
    fn test_file_store_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path).unwrap();
        store.save("t-3", "carol").unwrap();
        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(store.token(), None);

        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FileSessionStore::open(&path),
            Err(SessionError::Malformed { .. })
        ));
    }
}
