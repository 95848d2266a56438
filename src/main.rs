mod model;
mod server;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, logging, router, scheduler::battery_check,
    service::battery::TracingBatteryAudit, startup, state::AppState,
};

/// Largest accepted request body, sized for medication image uploads.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let _logging_guard = logging::init_logging(&config.log_dir)?;

    let db = startup::connect_to_database(&config).await?;
    let images = startup::setup_image_store(&config).await?;

    let mut scheduler = battery_check::start_scheduler(
        db.clone(),
        Arc::new(TracingBatteryAudit),
        config.check_battery_interval,
    )
    .await?;

    let app = router::router(&config.static_dir)
        .with_state(AppState::new(db, images))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, shutting down battery check scheduler");

    scheduler.shutdown().await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
