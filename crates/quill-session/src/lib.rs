//! Access token persistence for Quill.
//!
//! The admin session survives restarts by keeping the bearer token in a
//! store. The [`TokenStore`] trait decouples session logic from where the
//! token lives.
//!
//! # Implementations
//!
//! - [`MemoryTokenStore`]: In-process store (tests, one-off sessions)
//! - [`FileTokenStore`]: Single file on disk
//!
//! # Example
//!
//! ```
//! use quill_session::{MemoryTokenStore, TokenStore};
//!
//! let store = MemoryTokenStore::new();
//! store.save("eyJhbGciOi...").unwrap();
//! assert_eq!(store.load().as_deref(), Some("eyJhbGciOi..."));
//! store.clear().unwrap();
//! assert_eq!(store.load(), None);
//! ```

mod file;

use std::sync::{Arc, Mutex};

pub use file::FileTokenStore;

/// Token storage error.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// I/O error while writing or removing the token.
    #[error("token storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent storage for a single access token.
pub trait TokenStore: Send + Sync {
    /// Read the stored token.
    ///
    /// Returns `None` when nothing usable is stored. Read failures are
    /// treated as "no token" since the caller can always log in again.
    fn load(&self) -> Option<String>;

    /// Store `token`, replacing any previous one.
    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the stored token. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), SessionError>;
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), SessionError> {
        (**self).clear()
    }
}

/// In-memory [`TokenStore`].
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_owned())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
        Ok(())
    }
}
