pub mod cache;
pub mod client;
pub mod lol;
pub mod metrics;

pub mod types {
    pub use super::lol::account_v1::AccountDto;
    pub use super::lol::match_v5::{InfoDto, MatchDto, ParticipantDto};
    pub use super::lol::summoner_v4::SummonerDto;
}
