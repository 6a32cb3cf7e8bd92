use std::sync::Arc;

use deathrecap::{
    build_router,
    config::Config,
    error::AppError,
    logging,
    metrics::StageMetrics,
    pipeline::StatsPipeline,
    server::AppState,
};
use deathrecap_riot_api::RiotApiClient;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logging::init();

    info!("💀 Starting...");

    let config = Config::from_env()?;

    let api = RiotApiClient::with_config(config.riot_api_key.clone(), config.client_config());
    api.start_metrics_logging(config.metrics_log_interval);

    let metrics = StageMetrics::new();
    tokio::spawn(metrics.clone().log_loop(config.metrics_log_interval));

    let pipeline = StatsPipeline::new(Arc::new(api), metrics);

    let app = build_router(AppState::new(Arc::new(pipeline)));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "💀 Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("💀 Stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "unable to install Ctrl+C signal handler");
        std::future::pending::<()>().await;
    }
}
