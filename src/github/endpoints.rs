// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use serde::de::DeserializeOwned;

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Repository, UserProfile};

/// Repositories requested per page. Only the first page is fetched, so
/// accounts with more public repositories than this undercount.
pub const REPOS_PER_PAGE: u32 = 100;

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, username: &str) -> Result<UserProfile> {
        let response = self.get(&format!("/users/{}", username)).await?;
        parse_body(response).await
    }

    /// Get a user's public repositories (first page only).
    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let per_page = REPOS_PER_PAGE.to_string();
        let params = [("per_page", per_page.as_str()), ("type", "public")];
        let response = self
            .get_with_params(&format!("/users/{}/repos", username), &params)
            .await?;
        parse_body(response).await
    }
}

/// Read the body as text and parse it separately, so a malformed payload
/// surfaces as a JSON error rather than a transport error.
async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
