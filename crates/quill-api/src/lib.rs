//! REST client for the Quill blog backend.
//!
//! The backend exposes posts, categories and bearer-token authentication
//! under `/api`. This crate provides:
//!
//! - [`BlogApi`] trait describing the backend contract
//! - [`ApiClient`] blocking HTTP implementation on `ureq`
//! - [`MockApi`] in-memory implementation for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use quill_api::{ApiClient, BlogApi};
//!
//! let client = ApiClient::new("http://localhost:8001");
//! for post in client.list_posts(true)? {
//!     println!("{}: {}", post.id, post.title);
//! }
//! # Ok::<(), quill_api::ApiError>(())
//! ```

mod api;
mod client;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod types;

pub use api::BlogApi;
pub use client::ApiClient;
pub use error::ApiError;
#[cfg(feature = "mock")]
pub use mock::MockApi;
pub use types::{
    AccessToken, Category, CategoryDraft, Identity, LoginRequest, Post, PostDraft, PostPatch,
};
