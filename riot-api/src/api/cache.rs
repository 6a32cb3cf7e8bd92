// Short lived response cache, one bucket per endpoint family so each can carry
// its own lifetime.
use std::time::Duration;

use bytes::Bytes;
use moka::sync::Cache;

const SIZE: u64 = 1000;
const DEFAULT_TTL_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheBucket {
    /// Display name to puuid lookups.
    Summoner,
    /// Match id listings.
    MatchIds,
    /// Full match details.
    Match,
}

/// Time to live of each bucket. A zero duration disables the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    pub summoner: Duration,
    pub match_ids: Duration,
    pub match_detail: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        let ttl = Duration::from_millis(DEFAULT_TTL_MS);
        Self {
            summoner: ttl,
            match_ids: ttl,
            match_detail: ttl,
        }
    }
}

impl CacheTtls {
    pub fn disabled() -> Self {
        Self {
            summoner: Duration::ZERO,
            match_ids: Duration::ZERO,
            match_detail: Duration::ZERO,
        }
    }
}

#[derive(Debug)]
pub struct ResponseCache {
    summoner: Option<Cache<String, Bytes>>,
    match_ids: Option<Cache<String, Bytes>>,
    match_detail: Option<Cache<String, Bytes>>,
}

impl ResponseCache {
    pub fn new(ttls: CacheTtls) -> Self {
        Self {
            summoner: build(ttls.summoner),
            match_ids: build(ttls.match_ids),
            match_detail: build(ttls.match_detail),
        }
    }

    fn bucket(&self, bucket: CacheBucket) -> Option<&Cache<String, Bytes>> {
        match bucket {
            CacheBucket::Summoner => self.summoner.as_ref(),
            CacheBucket::MatchIds => self.match_ids.as_ref(),
            CacheBucket::Match => self.match_detail.as_ref(),
        }
    }

    pub fn get(&self, bucket: CacheBucket, key: &str) -> Option<Bytes> {
        self.bucket(bucket)?.get(key)
    }

    pub fn insert(&self, bucket: CacheBucket, key: String, body: Bytes) {
        if let Some(cache) = self.bucket(bucket) {
            cache.insert(key, body);
        }
    }
}

fn build(ttl: Duration) -> Option<Cache<String, Bytes>> {
    if ttl.is_zero() {
        return None;
    }

    Some(
        Cache::builder()
            .max_capacity(SIZE)
            .time_to_live(ttl)
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_are_independent() {
        let cache = ResponseCache::new(CacheTtls::default());
        cache.insert(CacheBucket::Match, "/m/1".into(), Bytes::from_static(b"{}"));

        assert_eq!(
            cache.get(CacheBucket::Match, "/m/1"),
            Some(Bytes::from_static(b"{}"))
        );
        assert_eq!(cache.get(CacheBucket::MatchIds, "/m/1"), None);
    }

    #[test]
    fn zero_ttl_disables_bucket() {
        let cache = ResponseCache::new(CacheTtls {
            match_ids: Duration::ZERO,
            ..Default::default()
        });
        cache.insert(CacheBucket::MatchIds, "/ids".into(), Bytes::from_static(b"[]"));
        cache.insert(CacheBucket::Summoner, "/s".into(), Bytes::from_static(b"{}"));

        assert_eq!(cache.get(CacheBucket::MatchIds, "/ids"), None);
        assert!(cache.get(CacheBucket::Summoner, "/s").is_some());
    }
}
