use deathrecap_shared::lol_match::{Match, MatchParticipant};
use serde::Deserialize;

/// Representation of the match data response.
///
/// Only the statistical subset read by the stats projection is modeled.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub info: InfoDto,
}

impl From<MatchDto> for Match {
    fn from(value: MatchDto) -> Self {
        Self {
            participants: value
                .info
                .participants
                .into_iter()
                .map(|participant| participant.into())
                .collect(),
            game_creation: value.info.game_creation,
            game_type: value.info.game_type,
            game_mode: value.info.game_mode,
        }
    }
}

/// Representation of the match info data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    pub participants: Vec<ParticipantDto>,
    pub game_creation: Option<i64>,
    pub game_type: Option<String>,
    pub game_mode: Option<String>,
}

/// Representation of the participant data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub total_time_spent_dead: Option<i64>,
    #[serde(rename = "totalTimeCCDealt")]
    pub total_time_cc_dealt: Option<i64>,
    pub time_played: Option<i64>,
    pub longest_time_spent_living: Option<i64>,
    pub deaths: Option<i64>,
    pub total_damage_taken: Option<i64>,
    pub total_damage_dealt_to_champions: Option<i64>,
}

impl From<ParticipantDto> for MatchParticipant {
    fn from(value: ParticipantDto) -> Self {
        Self {
            puuid: value.puuid,
            total_time_spent_dead: value.total_time_spent_dead,
            total_time_cc_dealt: value.total_time_cc_dealt,
            time_played: value.time_played,
            longest_time_spent_living: value.longest_time_spent_living,
            deaths: value.deaths,
            total_damage_taken: value.total_damage_taken,
            total_damage_dealt_to_champions: value.total_damage_dealt_to_champions,
        }
    }
}
