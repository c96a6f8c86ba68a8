//! Category operations for the blog API.

use tracing::info;

use super::{ApiClient, bearer, read_json};
use crate::error::ApiError;
use crate::types::{Category, CategoryDraft};

impl ApiClient {
    /// List all categories.
    pub fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}/categories", self.api_url());

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let categories: Vec<Category> = read_json(response)?;
        info!("Fetched {} categories", categories.len());
        Ok(categories)
    }

    /// Create a category.
    pub fn create_category(
        &self,
        token: &str,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError> {
        let url = format!("{}/categories", self.api_url());

        info!("Creating category \"{}\"", draft.name);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &bearer(token))
            .header("Accept", "application/json")
            .send_json(draft)?;

        read_json(response)
    }
}
