// Stats cache and fetch widget.
// Owns the cache slot and the fetch-combine-store sequence.

use std::time::Duration;

use tokio::sync::Mutex;

use crate::cache::CacheEntry;

use super::record::StatsRecord;
use super::source::StatsSource;

/// How long a fetched record stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(120);

/// Fetches aggregate statistics for one user and caches the result.
///
/// `get_statistics` never fails: fetch errors are folded into a fallback
/// record with `is_error` set, so callers always receive a usable value and
/// distinguish live from estimated data by inspecting the flag.
pub struct StatsWidget<S> {
    username: String,
    source: S,
    ttl: Duration,
    cache: Mutex<Option<CacheEntry<StatsRecord>>>,
}

impl<S: StatsSource> StatsWidget<S> {
    /// Create a widget for `username` with the default TTL.
    pub fn new(username: impl Into<String>, source: S) -> Self {
        Self::with_ttl(username, source, CACHE_TTL)
    }

    /// Create a widget with an explicit TTL.
    pub fn with_ttl(username: impl Into<String>, source: S, ttl: Duration) -> Self {
        Self {
            username: username.into(),
            source,
            ttl,
            cache: Mutex::new(None),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check whether the cache holds a record younger than the TTL.
    pub async fn is_cache_valid(&self) -> bool {
        self.cache
            .lock()
            .await
            .as_ref()
            .is_some_and(|entry| entry.is_valid(self.ttl))
    }

    /// Install a previously stored entry, e.g. a snapshot read from disk.
    /// Freshness is still checked against the TTL on the next call.
    pub async fn prime(&self, entry: CacheEntry<StatsRecord>) {
        *self.cache.lock().await = Some(entry);
    }

    /// Export the current cache entry.
    pub async fn cache_entry(&self) -> Option<CacheEntry<StatsRecord>> {
        self.cache.lock().await.clone()
    }

    /// Return statistics for the user, from cache when fresh.
    ///
    /// Both resources are fetched concurrently with fail-fast semantics: the
    /// first failure aborts the combination and produces the fallback record,
    /// which is cached like a success. The lock is held across the fetch, so
    /// overlapping calls serialize and the later caller is served the record
    /// the earlier one stored.
    pub async fn get_statistics(&self, force_refresh: bool) -> StatsRecord {
        let mut slot = self.cache.lock().await;

        if !force_refresh {
            if let Some(entry) = slot.as_ref() {
                if entry.is_valid(self.ttl) {
                    return entry.value.clone();
                }
            }
        }

        let record = match tokio::try_join!(
            self.source.fetch_user_profile(&self.username),
            self.source.fetch_repository_list(&self.username),
        ) {
            Ok((profile, repos)) => StatsRecord::from_parts(&profile, &repos),
            Err(err) => StatsRecord::fallback(err.to_string()),
        };

        *slot = Some(CacheEntry::new(record.clone()));
        record
    }

    /// Discard the cache unconditionally, then refetch.
    pub async fn force_refresh(&self) -> StatsRecord {
        self.cache.lock().await.take();
        self.get_statistics(true).await
    }
}
