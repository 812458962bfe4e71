//! Wardstat API Server
//!
//! Read-only HTTP API serving ward-wise aggregates, percentage shares,
//! chart payloads and narrative summaries for every loaded indicator
//! dataset. The service is stateless and can be horizontally scaled.

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use wardstat::config::Config;
use wardstat::core::http::start_server;
use wardstat::logging;
use wardstat::store::DatasetStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    info!("Starting Wardstat API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);

    // Datasets load once; a malformed file or empty category set stops
    // the server here instead of surfacing as broken pages later.
    let store = match DatasetStore::load_dir(&config.data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!(error = %e, data_dir = %config.data_dir.display(), "failed to load datasets");
            return Err(e.into());
        }
    };
    info!(datasets = store.len(), "dataset store ready");

    let default_locale = config.default_locale;
    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, store, default_locale).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
