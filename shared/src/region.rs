use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, LazyLock},
};

use serde::{Deserialize, Serialize};

use crate::errors::RegionError;

/// Platform routing values a player account can be registered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    NA1,
    BR1,
    LA1,
    LA2,
    KR,
    JP1,
    EUN1,
    EUW1,
    RU,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::NA1,
        Region::BR1,
        Region::LA1,
        Region::LA2,
        Region::KR,
        Region::JP1,
        Region::EUN1,
        Region::EUW1,
        Region::RU,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NA1 => "na1",
            Self::BR1 => "br1",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::KR => "kr",
            Self::JP1 => "jp1",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
            Self::RU => "ru",
        }
    }

    pub fn to_endpoint(&self) -> String {
        format!("{}.api.riotgames.com", self.as_str())
    }

    /// Cluster hosting the regional data of this platform.
    pub fn cluster(&self) -> Cluster {
        match self {
            Self::NA1 | Self::BR1 | Self::LA1 | Self::LA2 => Cluster::Americas,
            Self::KR | Self::JP1 => Cluster::Asia,
            Self::EUN1 | Self::EUW1 | Self::RU => Cluster::Europe,
        }
    }
}

impl FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NA" | "NA1" => Ok(Self::NA1),
            "BR" | "BR1" => Ok(Self::BR1),
            "LAN" | "LA1" => Ok(Self::LA1),
            "LAS" | "LA2" => Ok(Self::LA2),
            "KR" => Ok(Self::KR),
            "JP" | "JP1" => Ok(Self::JP1),
            "EUNE" | "EUNE1" | "EUN1" => Ok(Self::EUN1),
            "EUW" | "EUW1" => Ok(Self::EUW1),
            "RU" => Ok(Self::RU),
            _ => Err(RegionError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for Region {
    type Error = RegionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.as_str().to_string()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Regional routing values hosting Match-v5 and Account-v1 data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    Americas,
    Asia,
    Europe,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
        }
    }

    pub fn to_endpoint(&self) -> String {
        format!("{}.api.riotgames.com", self.as_str())
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

static STANDARD_TABLE: LazyLock<Arc<ClusterTable>> = LazyLock::new(|| {
    Arc::new(ClusterTable::from_entries(
        Region::ALL.map(|region| (region, region.cluster())),
    ))
});

/// Immutable region to cluster lookup.
///
/// The standard table is built once per process. A region missing from a
/// table is a resolution failure, there is no fallback cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterTable(HashMap<Region, Cluster>);

impl ClusterTable {
    pub fn standard() -> Arc<ClusterTable> {
        STANDARD_TABLE.clone()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (Region, Cluster)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn resolve(&self, region: Region) -> Option<Cluster> {
        self.0.get(&region).copied()
    }

}
