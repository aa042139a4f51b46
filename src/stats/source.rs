// Source seam for the stats widget.
// Abstracts the two fetches so tests can substitute an in-memory source.

use crate::error::Result;
use crate::github::GitHubClient;
use crate::github::types::{Repository, UserProfile};

/// Provider of the two resources a statistics record is computed from.
#[allow(async_fn_in_trait)]
pub trait StatsSource {
    /// Fetch the user's profile resource.
    async fn fetch_user_profile(&self, username: &str) -> Result<UserProfile>;

    /// Fetch the user's repository list (first page, public only).
    async fn fetch_repository_list(&self, username: &str) -> Result<Vec<Repository>>;
}

impl StatsSource for GitHubClient {
    async fn fetch_user_profile(&self, username: &str) -> Result<UserProfile> {
        self.get_user(username).await
    }

    async fn fetch_repository_list(&self, username: &str) -> Result<Vec<Repository>> {
        self.get_user_repos(username).await
    }
}
