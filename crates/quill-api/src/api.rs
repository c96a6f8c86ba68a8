//! The blog backend contract.

use crate::error::ApiError;
use crate::types::{
    AccessToken, Category, CategoryDraft, Identity, LoginRequest, Post, PostDraft, PostPatch,
};

/// Operations offered by the blog backend.
///
/// Read operations are public. Mutating operations take the bearer token
/// issued by [`login`](Self::login).
pub trait BlogApi {
    /// `POST /api/auth/login`
    fn login(&self, request: &LoginRequest) -> Result<AccessToken, ApiError>;

    /// `GET /api/auth/verify`
    fn verify(&self, token: &str) -> Result<Identity, ApiError>;

    /// `GET /api/posts`, newest first. With `published_only` drafts are omitted.
    fn list_posts(&self, published_only: bool) -> Result<Vec<Post>, ApiError>;

    /// `GET /api/posts/{id}`
    fn get_post(&self, id: &str) -> Result<Post, ApiError>;

    /// `POST /api/posts`
    fn create_post(&self, token: &str, draft: &PostDraft) -> Result<Post, ApiError>;

    /// `PUT /api/posts/{id}`
    fn update_post(&self, token: &str, id: &str, patch: &PostPatch) -> Result<Post, ApiError>;

    /// `DELETE /api/posts/{id}`
    fn delete_post(&self, token: &str, id: &str) -> Result<(), ApiError>;

    /// `GET /api/categories`
    fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// `POST /api/categories`
    fn create_category(&self, token: &str, draft: &CategoryDraft) -> Result<Category, ApiError>;
}
