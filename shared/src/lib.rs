//! Types shared between the Riot API client and the stats pipeline.

pub mod death_stats;
pub mod errors;
pub mod lol_match;
pub mod region;
pub mod traits;

pub use death_stats::DeathStats;
pub use region::{Cluster, ClusterTable, Region};
