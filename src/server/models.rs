use deathrecap_shared::Region;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct SummonerIdQuery {
    pub username: String,
    pub region: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchIdsQuery {
    pub player_id: String,
    pub region: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesRequest {
    pub player_id: String,
    pub region: String,
    #[serde(default)]
    pub match_ids: Vec<String>,
}

/// Reject blank identifiers and return the trimmed value.
pub fn non_empty<'a>(field: &str, value: &'a str) -> AppResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(value)
}

pub fn parse_region(value: &str) -> AppResult<Region> {
    value.parse().map_err(|_| {
        let known: Vec<String> = Region::ALL.iter().map(Region::to_string).collect();
        AppError::validation(format!(
            "region must be one of {}, got {:?}",
            known.join(", "),
            value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_trims_and_rejects_blank() {
        assert_eq!(non_empty("username", "  Faker ").unwrap(), "Faker");
        assert!(matches!(
            non_empty("username", "   "),
            Err(AppError::Validation(message)) if message == "username must not be empty"
        ));
    }

    #[test]
    fn parse_region_lists_known_codes_on_error() {
        assert_eq!(parse_region("kr").unwrap(), Region::KR);

        let Err(AppError::Validation(message)) = parse_region("OC1") else {
            panic!("expected a validation error");
        };
        assert!(message.contains("NA1"));
        assert!(message.contains("\"OC1\""));
    }
}
