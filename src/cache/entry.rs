// Cache entry with TTL checking.
// Pairs a value with the time it was stored; serializes as the on-disk
// snapshot shape.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached value plus the timestamp at which it was stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached value.
    pub value: T,
    /// When the value was stored.
    pub cached_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Create an entry stamped with the current time.
    pub fn new(value: T) -> Self {
        Self {
            value,
            cached_at: Utc::now(),
        }
    }

    /// Check if this entry has outlived the TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed > ttl
    }

    /// Check if this entry is still fresh (not expired).
    pub fn is_valid(&self, ttl: Duration) -> bool {
        !self.is_expired(ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_is_valid() {
        let entry = CacheEntry::new("stats");

        assert!(entry.is_valid(Duration::from_secs(120)));
        assert!(!entry.is_expired(Duration::from_secs(120)));
    }

    #[test]
    fn aged_entry_expires() {
        let mut entry = CacheEntry::new("stats");

        // Set cached_at to the past
        entry.cached_at = Utc::now() - chrono::Duration::seconds(600);

        assert!(entry.is_expired(Duration::from_secs(120)));
        assert!(!entry.is_valid(Duration::from_secs(120)));
    }
}
