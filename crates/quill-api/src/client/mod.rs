//! Blog REST API client.
//!
//! Provides a sync HTTP client for the blog backend with bearer-token
//! authentication on mutating calls.

mod auth;
mod categories;
mod posts;

use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::de::DeserializeOwned;
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::api::BlogApi;
use crate::error::ApiError;
use crate::types::{
    AccessToken, Category, CategoryDraft, Identity, LoginRequest, Post, PostDraft, PostPatch,
};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Characters escaped inside a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Blog REST API client.
pub struct ApiClient {
    agent: Agent,
    base_url: String,
}

impl ApiClient {
    /// Create a client with the default timeout.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a client with a global per-request timeout.
    ///
    /// # Arguments
    /// * `base_url` - Backend base URL, without the `/api` suffix
    /// * `timeout` - Timeout covering connect, send and receive
    #[must_use]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/api", self.base_url)
    }

    /// URL of a single post.
    fn post_url(&self, id: &str) -> String {
        format!(
            "{}/posts/{}",
            self.api_url(),
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }
}

/// Value of the `Authorization` header for a bearer token.
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fail on error status, otherwise hand back the body.
fn check_status(response: Response<Body>) -> Result<Body, ApiError> {
    let status = response.status().as_u16();
    let mut body = response.into_body();

    if status >= 400 {
        let error_body = body
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(ApiError::HttpResponse {
            status,
            body: error_body,
        });
    }

    Ok(body)
}

/// Check the status and decode a JSON body.
fn read_json<T: DeserializeOwned>(response: Response<Body>) -> Result<T, ApiError> {
    let mut body = check_status(response)?;
    Ok(body.read_json()?)
}

impl BlogApi for ApiClient {
    fn login(&self, request: &LoginRequest) -> Result<AccessToken, ApiError> {
        self.login(request)
    }

    fn verify(&self, token: &str) -> Result<Identity, ApiError> {
        self.verify(token)
    }

    fn list_posts(&self, published_only: bool) -> Result<Vec<Post>, ApiError> {
        self.list_posts(published_only)
    }

    fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        self.get_post(id)
    }

    fn create_post(&self, token: &str, draft: &PostDraft) -> Result<Post, ApiError> {
        self.create_post(token, draft)
    }

    fn update_post(&self, token: &str, id: &str, patch: &PostPatch) -> Result<Post, ApiError> {
        self.update_post(token, id, patch)
    }

    fn delete_post(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.delete_post(token, id)
    }

    fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.list_categories()
    }

    fn create_category(&self, token: &str, draft: &CategoryDraft) -> Result<Category, ApiError> {
        self.create_category(token, draft)
    }
}
