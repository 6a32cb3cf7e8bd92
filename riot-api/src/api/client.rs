use std::{num::NonZeroU32, sync::Arc, time::Duration};

use bytes::Bytes;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::types::{RiotApiError, RiotApiResponse};

use super::{
    cache::{CacheBucket, CacheTtls, ResponseCache},
    metrics::RequestMetrics,
};

/// Tunables of the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub rate_limit_per_minute: NonZeroU32,
    pub rate_limit_burst: NonZeroU32,
    pub cache_ttls: CacheTtls,
    /// Upper bound of one HTTP exchange, rate limiter wait excluded.
    pub request_timeout: Duration,
    /// Send every request to this origin instead of the Riot hosts.
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rate_limit_per_minute: nonzero!(100_u32),
            rate_limit_burst: nonzero!(20_u32),
            cache_ttls: CacheTtls::default(),
            request_timeout: Duration::from_secs(10),
            base_url: None,
        }
    }
}

#[derive(Debug)]
pub struct ApiClientBase {
    client: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    /// Riot API Key
    key: String,
    cache: ResponseCache,
    request_timeout: Duration,
    base_url: Option<String>,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClientBase {
    pub fn new(api_key: String, config: ClientConfig) -> Self {
        let q = Quota::per_minute(config.rate_limit_per_minute)
            .allow_burst(config.rate_limit_burst);

        Self {
            client: reqwest::Client::new(),
            limiter: RateLimiter::direct(q),
            key: api_key,
            cache: ResponseCache::new(config.cache_ttls),
            request_timeout: config.request_timeout,
            base_url: config
                .base_url
                .map(|url| url.trim_end_matches('/').to_string()),
            metrics: RequestMetrics::new("riot"),
        }
    }

    /// Full URL of `path` on the given Riot host.
    pub fn url(&self, host: &str, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}{}", base, path),
            None => format!("https://{}{}", host, path),
        }
    }

    /// Raw GET returning the body of a successful response.
    ///
    /// Successful bodies are kept in the cache bucket of the call for its
    /// lifetime, failures are never cached.
    pub async fn request(&self, url: String, bucket: CacheBucket) -> RiotApiResponse<Bytes> {
        if let Some(body) = self.cache.get(bucket, &url) {
            tracing::trace!("[RIOT::CLIENT] cache hit {}", url);
            self.metrics.inc_cache_hit();
            return Ok(body);
        }

        // Ensure we do not enforce the RIOT API rate limits before doing any request
        self.limiter.until_ready().await;
        self.metrics.inc();

        // The timeout only starts once the limiter granted a slot.
        let body = tokio::time::timeout(self.request_timeout, self.fetch(&url))
            .await
            .map_err(|_| RiotApiError::TimedOut(self.request_timeout))??;

        self.cache.insert(bucket, url, body.clone());
        Ok(body)
    }

    async fn fetch(&self, url: &str) -> RiotApiResponse<Bytes> {
        let res = self
            .client
            .get(url)
            .header("X-Riot-Token", &self.key)
            .send()
            .await?;
        match res.status() {
            StatusCode::OK => Ok(res.bytes().await?),
            status => Err(RiotApiError::Status(status)),
        }
    }

    pub async fn request_json<T: DeserializeOwned>(
        &self,
        url: String,
        bucket: CacheBucket,
    ) -> RiotApiResponse<T> {
        let raw = self.request(url, bucket).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_targets_riot_host_by_default() {
        let client = ApiClientBase::new("KEY".into(), ClientConfig::default());
        assert_eq!(
            client.url("europe.api.riotgames.com", "/lol/match/v5/matches/EUW1_1"),
            "https://europe.api.riotgames.com/lol/match/v5/matches/EUW1_1"
        );
    }

    #[test]
    fn url_uses_base_override() {
        let client = ApiClientBase::new(
            "KEY".into(),
            ClientConfig {
                base_url: Some("http://127.0.0.1:8080/".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            client.url("europe.api.riotgames.com", "/lol/match/v5/matches/EUW1_1"),
            "http://127.0.0.1:8080/lol/match/v5/matches/EUW1_1"
        );
    }

    #[tokio::test]
    async fn request_propagates_reqwest_error() {
        let client = ApiClientBase::new("RGAPI-INVALID-KEY".into(), ClientConfig::default());

        let bad_url = "ht!tp://invalid-url".to_string(); // incorrect schema

        let res = client.request(bad_url, CacheBucket::Match).await;

        assert!(matches!(res, Err(RiotApiError::Reqwest(_))));
        assert_eq!(client.metrics.requests(), 1);
    }
}
