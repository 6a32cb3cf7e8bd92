use std::env;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Duration;

use deathrecap_riot_api::{CacheTtls, ClientConfig};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub bind_address: String,
    pub riot_rate_limit_per_minute: NonZeroU32,
    pub riot_rate_limit_burst: NonZeroU32,
    pub cache_ttls: CacheTtls,
    pub riot_request_timeout: Duration,
    pub metrics_log_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
        const DEFAULT_RIOT_RATE_LIMIT_PER_MINUTE: u32 = 100;
        const DEFAULT_RIOT_RATE_LIMIT_BURST: u32 = 20;
        const DEFAULT_CACHE_TTL_MS: u64 = 5000;
        const DEFAULT_RIOT_REQUEST_TIMEOUT_SECS: u64 = 10;
        const DEFAULT_METRICS_LOG_INTERVAL_SECS: u64 = 60;

        let riot_api_key = env::var("RIOT_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.into());

        let riot_rate_limit_per_minute = non_zero_var(
            "RIOT_RATE_LIMIT_PER_MINUTE",
            DEFAULT_RIOT_RATE_LIMIT_PER_MINUTE,
        );
        let riot_rate_limit_burst =
            non_zero_var("RIOT_RATE_LIMIT_BURST", DEFAULT_RIOT_RATE_LIMIT_BURST);

        let cache_ttls = CacheTtls {
            summoner: Duration::from_millis(parsed_var(
                "SUMMONER_CACHE_TTL_MS",
                DEFAULT_CACHE_TTL_MS,
            )),
            match_ids: Duration::from_millis(parsed_var(
                "MATCH_IDS_CACHE_TTL_MS",
                DEFAULT_CACHE_TTL_MS,
            )),
            match_detail: Duration::from_millis(parsed_var(
                "MATCH_CACHE_TTL_MS",
                DEFAULT_CACHE_TTL_MS,
            )),
        };

        let riot_request_timeout = Duration::from_secs(
            parsed_var(
                "RIOT_REQUEST_TIMEOUT_SECS",
                DEFAULT_RIOT_REQUEST_TIMEOUT_SECS,
            )
            .max(1),
        );
        let metrics_log_interval = Duration::from_secs(
            parsed_var(
                "METRICS_LOG_INTERVAL_SECS",
                DEFAULT_METRICS_LOG_INTERVAL_SECS,
            )
            .max(1),
        );

        Ok(Self {
            riot_api_key,
            bind_address,
            riot_rate_limit_per_minute,
            riot_rate_limit_burst,
            cache_ttls,
            riot_request_timeout,
            metrics_log_interval,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            rate_limit_per_minute: self.riot_rate_limit_per_minute,
            rate_limit_burst: self.riot_rate_limit_burst,
            cache_ttls: self.cache_ttls,
            request_timeout: self.riot_request_timeout,
            base_url: None,
        }
    }
}

fn parsed_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn non_zero_var(name: &str, default: u32) -> NonZeroU32 {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .and_then(NonZeroU32::new)
        .unwrap_or_else(|| NonZeroU32::new(default).unwrap_or(NonZeroU32::MIN))
}
