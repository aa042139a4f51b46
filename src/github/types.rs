// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use serde::{Deserialize, Serialize};

/// GitHub user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

/// GitHub repository, reduced to the fields the stats pipeline reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    /// True when the repository is a copy of another repository.
    #[serde(default)]
    pub fork: bool,
}
