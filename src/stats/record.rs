// Aggregate statistics record.
// The value type produced by the stats widget and consumed by the display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::github::types::{Repository, UserProfile};

/// Project count shown when the API is unreachable.
pub const FALLBACK_PROJECT_COUNT: u64 = 10;

/// Aggregate repository statistics for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Total public repositories reported by the profile.
    pub total_repos: u64,
    /// Repositories that are not forks.
    pub original_projects: u64,
    /// Repositories that are forks.
    pub forked_repos: u64,
    pub followers: u64,
    pub following: u64,
    /// When this record was computed.
    pub last_updated: DateTime<Utc>,
    /// True when this is a fallback record produced after a fetch failure.
    pub is_error: bool,
    /// The triggering failure's message, present only on fallback records.
    pub error_message: Option<String>,
}

impl StatsRecord {
    /// Combine the profile and repository list into a statistics record.
    pub fn from_parts(profile: &UserProfile, repos: &[Repository]) -> Self {
        let original_projects = repos.iter().filter(|repo| !repo.fork).count() as u64;
        let forked_repos = repos.len() as u64 - original_projects;

        Self {
            total_repos: profile.public_repos,
            original_projects,
            forked_repos,
            followers: profile.followers,
            following: profile.following,
            last_updated: Utc::now(),
            is_error: false,
            error_message: None,
        }
    }

    /// Fixed estimate substituted when either fetch fails.
    pub fn fallback(message: impl Into<String>) -> Self {
        Self {
            total_repos: FALLBACK_PROJECT_COUNT,
            original_projects: FALLBACK_PROJECT_COUNT,
            forked_repos: 0,
            followers: 0,
            following: 0,
            last_updated: Utc::now(),
            is_error: true,
            error_message: Some(message.into()),
        }
    }
}
