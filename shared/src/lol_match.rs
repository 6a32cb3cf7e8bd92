/// Match detail reduced to the fields the stats projection reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Match {
    pub participants: Vec<MatchParticipant>,
    pub game_creation: Option<i64>,
    pub game_type: Option<String>,
    pub game_mode: Option<String>,
}

impl Match {
    pub fn participant(&self, puuid: &str) -> Option<&MatchParticipant> {
        self.participants.iter().find(|p| p.puuid == puuid)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchParticipant {
    pub puuid: String,
    pub total_time_spent_dead: Option<i64>,
    pub total_time_cc_dealt: Option<i64>,
    pub time_played: Option<i64>,
    pub longest_time_spent_living: Option<i64>,
    pub deaths: Option<i64>,
    pub total_damage_taken: Option<i64>,
    pub total_damage_dealt_to_champions: Option<i64>,
}
