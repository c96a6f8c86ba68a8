//! Post operations for the blog API.

use tracing::info;

use super::{ApiClient, bearer, check_status, read_json};
use crate::error::ApiError;
use crate::types::{Post, PostDraft, PostPatch};

impl ApiClient {
    /// List posts, newest first.
    pub fn list_posts(&self, published_only: bool) -> Result<Vec<Post>, ApiError> {
        let url = format!("{}/posts", self.api_url());

        let response = self
            .agent
            .get(&url)
            .query("published_only", if published_only { "true" } else { "false" })
            .header("Accept", "application/json")
            .call()?;

        let posts: Vec<Post> = read_json(response)?;
        info!("Fetched {} posts", posts.len());
        Ok(posts)
    }

    /// Get a single post by ID.
    pub fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        let response = self
            .agent
            .get(&self.post_url(id))
            .header("Accept", "application/json")
            .call()?;

        read_json(response)
    }

    /// Create a post.
    pub fn create_post(&self, token: &str, draft: &PostDraft) -> Result<Post, ApiError> {
        let url = format!("{}/posts", self.api_url());

        info!("Creating post \"{}\"", draft.title);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &bearer(token))
            .header("Accept", "application/json")
            .send_json(draft)?;

        let post: Post = read_json(response)?;
        info!("Created post {}", post.id);
        Ok(post)
    }

    /// Update the given fields of a post.
    pub fn update_post(&self, token: &str, id: &str, patch: &PostPatch) -> Result<Post, ApiError> {
        info!("Updating post {}", id);

        let response = self
            .agent
            .put(&self.post_url(id))
            .header("Authorization", &bearer(token))
            .header("Accept", "application/json")
            .send_json(patch)?;

        read_json(response)
    }

    /// Delete a post.
    pub fn delete_post(&self, token: &str, id: &str) -> Result<(), ApiError> {
        info!("Deleting post {}", id);

        let response = self
            .agent
            .delete(&self.post_url(id))
            .header("Authorization", &bearer(token))
            .call()?;

        check_status(response)?;
        Ok(())
    }
}
