use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::board::UnprocessedCompanyJobs;

/// Search results stay fresh for this long.
pub const SEARCH_CACHE_TTL_HOURS: i64 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub data: Vec<UnprocessedCompanyJobs>,
    pub timestamp: DateTime<Utc>,
}

/// Raw provider results keyed by search fingerprint.
///
/// Unbounded and session-scoped. Expiry is lazy: stale entries are ignored by
/// `lookup` and overwritten by the next `store` for the same key, never swept.
#[derive(Debug)]
pub struct SearchCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            ttl: Duration::hours(SEARCH_CACHE_TTL_HOURS),
        }
    }

    /// Returns the entry for `key` only if `now - timestamp < ttl`.
    pub fn lookup(&self, key: &str, now: DateTime<Utc>) -> Option<&CacheEntry> {
        self.entries
            .get(key)
            .filter(|entry| now.signed_duration_since(entry.timestamp) < self.ttl)
    }

    /// Unconditional upsert.
    pub fn store(&mut self, key: String, data: Vec<UnprocessedCompanyJobs>, timestamp: DateTime<Utc>) {
        self.entries.insert(key, CacheEntry { data, timestamp });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
