//! Mock blog backend for testing.
//!
//! Provides [`MockApi`] for unit testing without a running server.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::api::BlogApi;
use crate::error::ApiError;
use crate::types::{
    AccessToken, Category, CategoryDraft, Identity, LoginRequest, Post, PostDraft, PostPatch,
};

/// Length of excerpts the backend derives from content.
const DERIVED_EXCERPT_LENGTH: usize = 150;

/// In-memory stand-in for the blog backend.
///
/// Mirrors the backend's observable behavior: bearer-token checks on mutating
/// calls, `published_only` filtering, newest-first ordering, 404 for unknown
/// IDs and excerpt derivation when a post is saved without one. Every call is
/// recorded as `"METHOD /path"` and can be inspected with [`calls`](Self::calls).
///
/// # Example
///
/// ```
/// use quill_api::{BlogApi, LoginRequest, MockApi};
///
/// let api = MockApi::new().with_user("admin", "secret");
/// let token = api
///     .login(&LoginRequest { username: "admin".into(), password: "secret".into() })
///     .unwrap();
/// assert_eq!(api.verify(&token.access_token).unwrap().username, "admin");
/// ```
#[derive(Debug, Default)]
pub struct MockApi {
    state: RwLock<MockState>,
    calls: RwLock<Vec<String>>,
}

#[derive(Debug, Default)]
struct MockState {
    users: HashMap<String, String>,
    tokens: HashMap<String, String>,
    posts: Vec<Post>,
    categories: Vec<Category>,
    next_id: u64,
    offline: bool,
}

impl MockState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    /// Deterministic clock: one minute per tick from 2024-01-01.
    fn tick(&mut self) -> NaiveDateTime {
        self.next_id += 1;
        epoch() + Duration::minutes(i64::try_from(self.next_id).unwrap_or(i64::MAX))
    }

    fn authorize(&self, token: &str) -> Result<&str, ApiError> {
        self.tokens
            .get(token)
            .map(String::as_str)
            .ok_or_else(|| error(401, "Invalid token"))
    }

    fn ensure_online(&self) -> Result<(), ApiError> {
        if self.offline {
            return Err(error(503, "Service unavailable"));
        }
        Ok(())
    }
}

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn error(status: u16, detail: &str) -> ApiError {
    ApiError::HttpResponse {
        status,
        body: serde_json::json!({ "detail": detail }).to_string(),
    }
}

fn derive_excerpt(content: &str) -> Option<String> {
    Some(quill_renderer::excerpt(content, DERIVED_EXCERPT_LENGTH)).filter(|e| !e.is_empty())
}

impl MockApi {
    /// Create a new empty mock backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user that can log in.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_user(self, username: &str, password: &str) -> Self {
        self.state
            .write()
            .unwrap()
            .users
            .insert(username.to_owned(), password.to_owned());
        self
    }

    /// Pre-issue a token for `username`, as if they had logged in earlier.
    #[must_use]
    pub fn with_token(self, token: &str, username: &str) -> Self {
        self.state
            .write()
            .unwrap()
            .tokens
            .insert(token.to_owned(), username.to_owned());
        self
    }

    /// Add an existing post.
    #[must_use]
    pub fn with_post(self, post: Post) -> Self {
        self.state.write().unwrap().posts.push(post);
        self
    }

    /// Add an existing category with the given name.
    #[must_use]
    pub fn with_category(self, name: &str, description: &str) -> Self {
        {
            let mut state = self.state.write().unwrap();
            let id = state.next_id("category");
            state.categories.push(Category {
                id,
                name: name.to_owned(),
                description: description.to_owned(),
                created_at: Some(epoch()),
            });
        }
        self
    }

    /// Make every subsequent call fail with 503, or recover.
    pub fn set_offline(&self, offline: bool) {
        self.state.write().unwrap().offline = offline;
    }

    /// Revoke a token, e.g. to simulate expiry.
    pub fn revoke_token(&self, token: &str) {
        self.state.write().unwrap().tokens.remove(token);
    }

    /// Calls made so far, as `"METHOD /path"`.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Current posts, in insertion order, including drafts.
    #[must_use]
    pub fn stored_posts(&self) -> Vec<Post> {
        self.state.read().unwrap().posts.clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.write().unwrap().push(call.into());
    }
}

impl BlogApi for MockApi {
    fn login(&self, request: &LoginRequest) -> Result<AccessToken, ApiError> {
        self.record("POST /api/auth/login");
        let mut state = self.state.write().unwrap();
        state.ensure_online()?;

        if state.users.get(&request.username) != Some(&request.password) {
            return Err(error(401, "Invalid credentials"));
        }
        let token = state.next_id("mock-token");
        state
            .tokens
            .insert(token.clone(), request.username.clone());
        Ok(AccessToken {
            access_token: token,
            token_type: "bearer".to_owned(),
        })
    }

    fn verify(&self, token: &str) -> Result<Identity, ApiError> {
        self.record("GET /api/auth/verify");
        let state = self.state.read().unwrap();
        state.ensure_online()?;

        let username = state.authorize(token)?;
        Ok(Identity {
            username: username.to_owned(),
            authenticated: true,
        })
    }

    fn list_posts(&self, published_only: bool) -> Result<Vec<Post>, ApiError> {
        self.record("GET /api/posts");
        let state = self.state.read().unwrap();
        state.ensure_online()?;

        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| !published_only || p.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        self.record(format!("GET /api/posts/{id}"));
        let state = self.state.read().unwrap();
        state.ensure_online()?;

        state
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| error(404, "Post not found"))
    }

    fn create_post(&self, token: &str, draft: &PostDraft) -> Result<Post, ApiError> {
        self.record("POST /api/posts");
        let mut state = self.state.write().unwrap();
        state.ensure_online()?;
        state.authorize(token)?;

        let excerpt = if draft.excerpt.is_empty() {
            derive_excerpt(&draft.content)
        } else {
            Some(draft.excerpt.clone())
        };
        let id = state.next_id("post");
        let now = state.tick();
        let post = Post {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            excerpt,
            category: draft.category.clone(),
            image_url: Some(draft.image_url.clone()).filter(|u| !u.is_empty()),
            published: draft.published,
            created_at: now,
            updated_at: Some(now),
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    fn update_post(&self, token: &str, id: &str, patch: &PostPatch) -> Result<Post, ApiError> {
        self.record(format!("PUT /api/posts/{id}"));
        let mut state = self.state.write().unwrap();
        state.ensure_online()?;
        state.authorize(token)?;

        let now = state.tick();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| error(404, "Post not found"))?;

        if let Some(title) = &patch.title {
            post.title.clone_from(title);
        }
        if let Some(excerpt) = &patch.excerpt {
            post.excerpt = Some(excerpt.clone()).filter(|e| !e.is_empty());
        }
        if let Some(category) = &patch.category {
            post.category.clone_from(category);
        }
        if let Some(image_url) = &patch.image_url {
            post.image_url = Some(image_url.clone()).filter(|u| !u.is_empty());
        }
        if let Some(published) = patch.published {
            post.published = published;
        }
        // New content always replaces the excerpt
        if let Some(content) = patch.content.as_ref().filter(|c| !c.is_empty()) {
            post.content.clone_from(content);
            post.excerpt = derive_excerpt(content);
        }
        post.updated_at = Some(now);

        Ok(post.clone())
    }

    fn delete_post(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/posts/{id}"));
        let mut state = self.state.write().unwrap();
        state.ensure_online()?;
        state.authorize(token)?;

        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(error(404, "Post not found"));
        }
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record("GET /api/categories");
        let state = self.state.read().unwrap();
        state.ensure_online()?;
        Ok(state.categories.clone())
    }

    fn create_category(&self, token: &str, draft: &CategoryDraft) -> Result<Category, ApiError> {
        self.record("POST /api/categories");
        let mut state = self.state.write().unwrap();
        state.ensure_online()?;
        state.authorize(token)?;

        if state.categories.iter().any(|c| c.name == draft.name) {
            return Err(error(400, "Category already exists"));
        }
        let id = state.next_id("category");
        let created_at = state.tick();
        let category = Category {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            created_at: Some(created_at),
        };
        state.categories.push(category.clone());
        Ok(category)
    }
}
