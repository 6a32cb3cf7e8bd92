pub mod api {
    use std::{error::Error as ErrorT, fmt::Debug};

    use async_trait::async_trait;

    use crate::{Cluster, Region, lol_match::Match};

    pub type ApiError = Box<dyn ErrorT + Send + Sync + 'static>;

    /// Resolve a display name into the stable player identifier.
    #[async_trait]
    pub trait SummonerApi: Send + Sync + Debug {
        /// `name` is either a plain summoner name or a `gameName#tagLine` Riot ID.
        async fn get_puuid_by_name(&self, name: &str, region: Region) -> Result<String, ApiError>;
    }

    /// Riot Match-v5 API as consumed by the stats pipeline.
    #[async_trait]
    pub trait MatchApi: Send + Sync + Debug {
        async fn get_match_ids(&self, puuid: &str, cluster: Cluster)
        -> Result<Vec<String>, ApiError>;

        async fn get_match(&self, match_id: &str, cluster: Cluster) -> Result<Match, ApiError>;
    }

    /// Every API the stats pipeline depends on.
    pub trait StatsApi: SummonerApi + MatchApi {}

    impl<T: SummonerApi + MatchApi> StatsApi for T {}
}
