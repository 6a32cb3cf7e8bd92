use async_trait::async_trait;
use deathrecap_shared::{
    Cluster, Region,
    lol_match::Match,
    traits::api::{ApiError, MatchApi, SummonerApi},
};
use std::time::Duration;
use urlencoding::encode;

use crate::types::RiotApiError;

use super::{
    cache::CacheBucket,
    client::{ApiClientBase, ClientConfig},
    metrics::RequestMetrics,
};

pub mod account_v1;
pub mod match_v5;
pub mod summoner_v4;

use account_v1::AccountDto;
use match_v5::MatchDto;
use summoner_v4::SummonerDto;

/// High level client implementing every LoL API the stats pipeline consumes.
#[derive(Debug)]
pub struct RiotApiClient(ApiClientBase);

impl RiotApiClient {
    /// Create a new API client using the provided key and default tunables.
    pub fn new(api_key: String) -> Self {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: String, config: ClientConfig) -> Self {
        Self(ApiClientBase::new(api_key, config))
    }

    pub fn metrics(&self) -> &RequestMetrics {
        &self.0.metrics
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self, every: Duration) {
        let metrics = self.0.metrics.clone();
        tokio::spawn(async move { metrics.log_loop(every).await });
    }

    /// Summoner-v4 lookup by plain summoner name, on the platform host.
    pub async fn get_summoner_by_name(
        &self,
        summoner_name: &str,
        region: Region,
    ) -> Result<SummonerDto, RiotApiError> {
        tracing::trace!(
            "[RIOT::CLIENT] get_summoner_by_name {} in {:?}",
            summoner_name,
            region
        );

        let url = self.0.url(
            &region.to_endpoint(),
            &format!(
                "/lol/summoner/v4/summoners/by-name/{}",
                encode(summoner_name)
            ),
        );

        self.0.request_json(url, CacheBucket::Summoner).await
    }

    /// Account-v1 lookup by Riot ID, on the cluster host of `region`.
    pub async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
        region: Region,
    ) -> Result<AccountDto, RiotApiError> {
        tracing::trace!(
            "[RIOT::CLIENT] get_account_by_riot_id {}#{}",
            game_name,
            tag_line
        );

        let url = self.0.url(
            &region.cluster().to_endpoint(),
            &format!(
                "/riot/account/v1/accounts/by-riot-id/{}/{}",
                encode(game_name),
                encode(tag_line)
            ),
        );

        self.0.request_json(url, CacheBucket::Summoner).await
    }
}

#[async_trait]
impl SummonerApi for RiotApiClient {
    async fn get_puuid_by_name(&self, name: &str, region: Region) -> Result<String, ApiError> {
        let puuid = match name.split_once('#') {
            Some((game_name, tag_line)) => {
                self.get_account_by_riot_id(game_name, tag_line, region)
                    .await?
                    .puuid
            }
            None => self.get_summoner_by_name(name, region).await?.puuid,
        };

        Ok(puuid)
    }
}

#[async_trait]
impl MatchApi for RiotApiClient {
    async fn get_match_ids(&self, puuid: &str, cluster: Cluster) -> Result<Vec<String>, ApiError> {
        tracing::trace!("[MATCH-V5 API] get_match_ids {} in {:?}", puuid, cluster);

        let url = self.0.url(
            &cluster.to_endpoint(),
            &format!("/lol/match/v5/matches/by-puuid/{}/ids", encode(puuid)),
        );

        let ids: Vec<String> = self.0.request_json(url, CacheBucket::MatchIds).await?;
        Ok(ids)
    }

    async fn get_match(&self, match_id: &str, cluster: Cluster) -> Result<Match, ApiError> {
        tracing::trace!("[MATCH-V5 API] get_match {} in {:?}", match_id, cluster);

        let url = self.0.url(
            &cluster.to_endpoint(),
            &format!("/lol/match/v5/matches/{}", encode(match_id)),
        );

        let dto: MatchDto = self.0.request_json(url, CacheBucket::Match).await?;
        Ok(dto.into())
    }
}
