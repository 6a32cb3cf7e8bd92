use serde::{Deserialize, Serialize};

use crate::lol_match::Match;

/// Death and damage figures of one player in one match.
///
/// Every figure stays optional: a field missing from the source participant is
/// omitted from the serialized record instead of being reported as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time_spent_dead: Option<i64>,
    #[serde(rename = "totalTimeCCDealt", skip_serializing_if = "Option::is_none")]
    pub total_time_cc_dealt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_played: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_time_spent_living: Option<i64>,
    pub match_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaths: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_taken: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_dealt: Option<i64>,
    /// Match creation timestamp in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_mode: Option<String>,
}

impl DeathStats {
    /// Project the participant identified by `puuid` out of `match_data`.
    ///
    /// Returns `None` when the player did not take part in the match.
    pub fn extract(match_id: impl Into<String>, match_data: &Match, puuid: &str) -> Option<Self> {
        let player = match_data.participant(puuid)?;

        Some(Self {
            total_time_spent_dead: player.total_time_spent_dead,
            total_time_cc_dealt: player.total_time_cc_dealt,
            time_played: player.time_played,
            longest_time_spent_living: player.longest_time_spent_living,
            match_id: match_id.into(),
            deaths: player.deaths,
            damage_taken: player.total_damage_taken,
            damage_dealt: player.total_damage_dealt_to_champions,
            date: match_data.game_creation,
            game_type: match_data.game_type.clone(),
            game_mode: match_data.game_mode.clone(),
        })
    }
}
