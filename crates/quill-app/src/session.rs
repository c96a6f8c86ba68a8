//! Admin session lifecycle.
//!
//! A [`Session`] wraps a [`TokenStore`] and tracks whether the stored token
//! is currently accepted by the backend. It starts unauthenticated; the
//! token is only trusted after [`restore`](Session::restore) verified it or
//! [`login`](Session::login) obtained a fresh one.

use quill_api::{BlogApi, LoginRequest};
use quill_session::TokenStore;
use tracing::{info, warn};

use crate::error::AppError;

/// Authentication state backed by a persistent token store.
pub struct Session {
    store: Box<dyn TokenStore>,
    token: Option<String>,
    username: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        Self {
            store,
            token: None,
            username: None,
        }
    }

    /// Verify the stored token against the backend.
    ///
    /// A token the backend does not accept is removed from the store.
    /// Returns whether the session is authenticated afterwards.
    pub fn restore<A: BlogApi + ?Sized>(&mut self, api: &A) -> bool {
        let Some(token) = self.store.load() else {
            return false;
        };

        match api.verify(&token) {
            Ok(identity) => {
                info!("Restored session for {}", identity.username);
                self.username = Some(identity.username);
                self.token = Some(token);
                true
            }
            Err(e) => {
                warn!("Stored token rejected: {e}");
                self.token = None;
                self.username = None;
                if let Err(e) = self.store.clear() {
                    warn!("Failed to clear stored token: {e}");
                }
                false
            }
        }
    }

    /// Exchange credentials for a token and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] when the backend rejects the
    /// credentials, [`AppError::Api`] for other backend failures and
    /// [`AppError::Session`] when the token cannot be stored.
    pub fn login<A: BlogApi + ?Sized>(
        &mut self,
        api: &A,
        request: &LoginRequest,
    ) -> Result<(), AppError> {
        let token = api.login(request).map_err(|e| {
            if e.is_unauthorized() {
                AppError::InvalidCredentials
            } else {
                AppError::Api(e)
            }
        })?;

        self.store.save(&token.access_token)?;
        info!("Logged in as {}", request.username);
        self.username = Some(request.username.clone());
        self.token = Some(token.access_token);
        Ok(())
    }

    /// Forget the token, locally and in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Session`] when the stored token cannot be removed.
    /// The session is unauthenticated either way.
    pub fn logout(&mut self) -> Result<(), AppError> {
        self.token = None;
        if let Some(username) = self.username.take() {
            info!("Logged out {username}");
        }
        self.store.clear()?;
        Ok(())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Name of the logged-in user.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Bearer token for mutating calls.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] when nobody is logged in.
    pub fn require_token(&self) -> Result<&str, AppError> {
        self.token.as_deref().ok_or(AppError::NotAuthenticated)
    }
}
