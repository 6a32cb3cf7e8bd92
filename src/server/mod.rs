//! HTTP surface exposing the stats pipeline operations.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::pipeline::StatsPipeline;

mod handlers;
pub mod models;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<StatsPipeline>,
}

impl AppState {
    pub fn new(pipeline: Arc<StatsPipeline>) -> Self {
        Self { pipeline }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::healthcheck))
        .route("/summoner-id", get(handlers::summoner_id))
        .route("/match-ids", get(handlers::match_ids))
        .route("/matches", post(handlers::matches))
        .with_state(state)
}
