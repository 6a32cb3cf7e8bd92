use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::{Instrument, info_span};

/// Pipeline stages reported by [`StageMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SummonerLookup,
    MatchListing,
    MatchFetch,
    Aggregation,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::SummonerLookup,
        Stage::MatchListing,
        Stage::MatchFetch,
        Stage::Aggregation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::SummonerLookup => "summoner_lookup",
            Stage::MatchListing => "match_listing",
            Stage::MatchFetch => "match_fetch",
            Stage::Aggregation => "aggregation",
        }
    }

    fn index(&self) -> usize {
        match self {
            Stage::SummonerLookup => 0,
            Stage::MatchListing => 1,
            Stage::MatchFetch => 2,
            Stage::Aggregation => 3,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
struct StageCounters {
    calls: AtomicU64,
    failures: AtomicU64,
    elapsed_micros: AtomicU64,
}

/// Point in time copy of one stage counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageSnapshot {
    pub calls: u64,
    pub failures: u64,
    pub elapsed: Duration,
}

impl StageSnapshot {
    pub fn average(&self) -> Duration {
        if self.calls == 0 {
            return Duration::ZERO;
        }
        self.elapsed / u32::try_from(self.calls).unwrap_or(u32::MAX)
    }

    /// Average in whole milliseconds, saturating at `u64::MAX`.
    pub fn average_millis(&self) -> u64 {
        u64::try_from(self.average().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Call counter and cumulative timer per pipeline stage.
#[derive(Debug, Default)]
pub struct StageMetrics {
    stages: [StageCounters; 4],
}

impl StageMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn record(&self, stage: Stage, elapsed: Duration, ok: bool) {
        let counters = &self.stages[stage.index()];
        counters.calls.fetch_add(1, Ordering::Relaxed);
        if !ok {
            counters.failures.fetch_add(1, Ordering::Relaxed);
        }
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        counters.elapsed_micros.fetch_add(micros, Ordering::Relaxed);
    }

    pub fn snapshot(&self, stage: Stage) -> StageSnapshot {
        let counters = &self.stages[stage.index()];
        StageSnapshot {
            calls: counters.calls.load(Ordering::Relaxed),
            failures: counters.failures.load(Ordering::Relaxed),
            elapsed: Duration::from_micros(counters.elapsed_micros.load(Ordering::Relaxed)),
        }
    }

    pub async fn log_loop(self: Arc<Self>, every: Duration) {
        let mut interval = tokio::time::interval(every);
        interval.tick().await;
        loop {
            let span = info_span!("📊 ", client = "pipeline");
            async {
                interval.tick().await;
                for stage in Stage::ALL {
                    let snapshot = self.snapshot(stage);
                    tracing::info!(
                        stage = %stage,
                        calls = snapshot.calls,
                        failures = snapshot.failures,
                        avg_ms = snapshot.average_millis(),
                        "stage metrics"
                    );
                }
            }
            .instrument(span)
            .await
        }
    }
}
