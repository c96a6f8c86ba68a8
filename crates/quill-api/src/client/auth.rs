//! Authentication operations for the blog API.

use tracing::{debug, info};

use super::{ApiClient, bearer, read_json};
use crate::error::ApiError;
use crate::types::{AccessToken, Identity, LoginRequest};

impl ApiClient {
    /// Exchange credentials for a bearer token.
    pub fn login(&self, request: &LoginRequest) -> Result<AccessToken, ApiError> {
        let url = format!("{}/auth/login", self.api_url());

        info!("Logging in as {}", request.username);

        let response = self
            .agent
            .post(&url)
            .header("Accept", "application/json")
            .send_json(request)?;

        read_json(response)
    }

    /// Check that a token is still accepted and return whose it is.
    pub fn verify(&self, token: &str) -> Result<Identity, ApiError> {
        let url = format!("{}/auth/verify", self.api_url());

        debug!("Verifying access token");

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &bearer(token))
            .header("Accept", "application/json")
            .call()?;

        read_json(response)
    }
}
