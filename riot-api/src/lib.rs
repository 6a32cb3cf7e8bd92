//! Riot API client used by the stats pipeline.
//!
//! The library offers typed wrappers around the summoner, account and match
//! endpoints, with client side rate limiting and short lived response caching.

pub mod api;
pub mod types;

pub use api::{
    cache::{CacheBucket, CacheTtls},
    client::ClientConfig,
    lol::RiotApiClient,
};
