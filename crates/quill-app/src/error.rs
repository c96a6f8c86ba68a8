//! Error types for the view controller.

use quill_api::ApiError;
use quill_session::SessionError;

/// Error returned by controller actions.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Token could not be persisted or removed.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Login rejected by the backend.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Form input is incomplete.
    #[error("{0}")]
    Validation(String),
    /// Action requires a logged-in session.
    #[error("Not logged in")]
    NotAuthenticated,
    /// No post with this ID.
    #[error("Post not found: {0}")]
    PostNotFound(String),
}
