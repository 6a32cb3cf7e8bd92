use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use deathrecap_shared::DeathStats;
use serde_json::{Value, json};

use crate::error::AppResult;

use super::{
    AppState,
    models::{MatchIdsQuery, MatchesRequest, SummonerIdQuery, non_empty, parse_region},
};

pub async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn summoner_id(
    State(state): State<AppState>,
    query: Result<Query<SummonerIdQuery>, QueryRejection>,
) -> AppResult<Json<Option<String>>> {
    let Query(query) = query?;
    let username = non_empty("username", &query.username)?;
    let region = parse_region(&query.region)?;

    Ok(Json(state.pipeline.summoner_id(username, region).await))
}

pub async fn match_ids(
    State(state): State<AppState>,
    query: Result<Query<MatchIdsQuery>, QueryRejection>,
) -> AppResult<Json<Vec<String>>> {
    let Query(query) = query?;
    let player_id = non_empty("playerId", &query.player_id)?;
    let region = parse_region(&query.region)?;

    Ok(Json(state.pipeline.match_ids(player_id, region).await))
}

pub async fn matches(
    State(state): State<AppState>,
    payload: Result<Json<MatchesRequest>, JsonRejection>,
) -> AppResult<Json<Option<Vec<DeathStats>>>> {
    let Json(payload) = payload?;
    let MatchesRequest {
        player_id,
        region,
        match_ids,
    } = payload;
    let player_id = non_empty("playerId", &player_id)?;
    let region = parse_region(&region)?;

    let aggregation = state.pipeline.matches(player_id, region, match_ids).await;

    Ok(Json(aggregation.into_option()))
}
