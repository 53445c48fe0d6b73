use std::sync::Arc;

use ops_console::api;
use ops_console::config::{self, LogFormat};
use ops_console::error::AppError;
use ops_console::insights::gemini::GeminiClient;
use ops_console::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = config::Config::from_env()?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false);
    match config.log_format {
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let generator = Arc::new(GeminiClient::new(&config)?);
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; insight requests will return fallback text");
    }

    let state = Arc::new(AppState::bootstrap(&config, generator)?);
    tracing::info!(
        orders = state.orders.len(),
        drivers = state.drivers.len(),
        seeded = config.seed_mock_data,
        "console state ready"
    );

    let app = api::rest::router(state);

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(http_port = config.http_port, "http server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::Internal(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
