//! Death and damage stats aggregation.
//!
//! Resolves the cluster of a region, fetches every requested match
//! concurrently and keeps the projection of the ones that succeed. No failure
//! is propagated past the public operations of [`StatsPipeline`]: a failed
//! lookup degrades to `None`, an empty list, or one missing record.
//!
//! Hung requests are bounded by the Riot client, whose timeout starts once
//! its rate limiter granted a slot. Waiting for a slot never drops a match.

use std::{sync::Arc, time::Instant};

use deathrecap_riot_api::types::RiotApiError;
use deathrecap_shared::{
    Cluster, ClusterTable, DeathStats, Region,
    traits::api::{ApiError, MatchApi, StatsApi, SummonerApi},
};
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, instrument, warn};

use crate::metrics::{Stage, StageMetrics};

/// Result of a stats aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregation {
    /// The region has no cluster, nothing was fetched.
    Unresolvable,
    /// Records of every match that could be fetched and contained the player,
    /// in completion order.
    Collected(Vec<DeathStats>),
}

impl Aggregation {
    pub fn into_option(self) -> Option<Vec<DeathStats>> {
        match self {
            Aggregation::Unresolvable => None,
            Aggregation::Collected(stats) => Some(stats),
        }
    }
}

enum MatchOutcome {
    Stats(DeathStats),
    Absent,
    Failed,
    TimedOut,
}

pub struct StatsPipeline {
    api: Arc<dyn StatsApi>,
    clusters: Arc<ClusterTable>,
    metrics: Arc<StageMetrics>,
}

impl StatsPipeline {
    pub fn new(api: Arc<dyn StatsApi>, metrics: Arc<StageMetrics>) -> Self {
        Self {
            api,
            clusters: ClusterTable::standard(),
            metrics,
        }
    }

    pub fn with_clusters(mut self, clusters: Arc<ClusterTable>) -> Self {
        self.clusters = clusters;
        self
    }

    pub fn metrics(&self) -> &Arc<StageMetrics> {
        &self.metrics
    }

    /// Resolve a display name into the player puuid.
    #[instrument(skip(self), fields(region = %region))]
    pub async fn summoner_id(&self, name: &str, region: Region) -> Option<String> {
        let started = Instant::now();
        let result = self.api.get_puuid_by_name(name, region).await;
        self.metrics.record(Stage::SummonerLookup, started.elapsed(), result.is_ok());

        match result {
            Ok(puuid) => Some(puuid),
            Err(e) => {
                warn!(error = %e, "📈 ⚠️ Player lookup failed");
                None
            }
        }
    }

    /// List the match ids of a player, in upstream order.
    #[instrument(skip(self), fields(region = %region))]
    pub async fn match_ids(&self, puuid: &str, region: Region) -> Vec<String> {
        let Some(cluster) = self.clusters.resolve(region) else {
            warn!("📈 ❌ No cluster for region, cannot list matches");
            return Vec::new();
        };

        let started = Instant::now();
        let result = self.api.get_match_ids(puuid, cluster).await;
        self.metrics.record(Stage::MatchListing, started.elapsed(), result.is_ok());

        result.unwrap_or_else(|e| {
            warn!(error = %e, %cluster, "📈 ⚠️ Match listing failed");
            Vec::new()
        })
    }

    /// Fetch every match concurrently and collect the stats of `puuid`.
    ///
    /// All fetches are driven on the calling task and awaited before
    /// returning, whatever their outcome.
    #[instrument(skip(self, match_ids), fields(region = %region, requested = match_ids.len()))]
    pub async fn matches(
        &self,
        puuid: &str,
        region: Region,
        match_ids: Vec<String>,
    ) -> Aggregation {
        let started = Instant::now();

        let Some(cluster) = self.clusters.resolve(region) else {
            warn!("📈 ❌ No cluster for region, cannot aggregate");
            self.metrics.record(Stage::Aggregation, started.elapsed(), false);
            return Aggregation::Unresolvable;
        };

        let requested = match_ids.len();
        let mut pending: FuturesUnordered<_> = match_ids
            .into_iter()
            .map(|match_id| self.match_stats(match_id, puuid, cluster))
            .collect();

        let mut stats = Vec::with_capacity(requested);
        let (mut absent, mut failed, mut timed_out) = (0_usize, 0_usize, 0_usize);

        while let Some(outcome) = pending.next().await {
            match outcome {
                MatchOutcome::Stats(record) => stats.push(record),
                MatchOutcome::Absent => absent += 1,
                MatchOutcome::Failed => failed += 1,
                MatchOutcome::TimedOut => timed_out += 1,
            }
        }

        info!(
            requested,
            collected = stats.len(),
            absent,
            failed,
            timed_out,
            %cluster,
            "📈 ✅ Match stats aggregated"
        );
        self.metrics.record(Stage::Aggregation, started.elapsed(), true);

        Aggregation::Collected(stats)
    }

    async fn match_stats(&self, match_id: String, puuid: &str, cluster: Cluster) -> MatchOutcome {
        let started = Instant::now();
        let result = self.api.get_match(&match_id, cluster).await;
        self.metrics.record(Stage::MatchFetch, started.elapsed(), result.is_ok());

        match result {
            Ok(game) => match DeathStats::extract(match_id, &game, puuid) {
                Some(record) => MatchOutcome::Stats(record),
                None => {
                    debug!("📈 Player is not a participant of the match");
                    MatchOutcome::Absent
                }
            },
            Err(e) if is_timeout(&e) => {
                warn!(match_id = %match_id, error = %e, "📈 ⚠️ Match fetch timed out");
                MatchOutcome::TimedOut
            }
            Err(e) => {
                warn!(match_id = %match_id, error = %e, "📈 ⚠️ Match fetch failed");
                MatchOutcome::Failed
            }
        }
    }

}

fn is_timeout(error: &ApiError) -> bool {
    matches!(
        error.downcast_ref::<RiotApiError>(),
        Some(RiotApiError::TimedOut(_))
    )
}
