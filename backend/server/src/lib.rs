//! JSON service for the job board.
//!
//!
//!
//! # Flow
//! - On start, the sheet is fetched once and parsed into jobs
//! - A failed fetch is not fatal, the board is served empty and `/status` carries the error
//! - `POST /refresh` fetches again, one fetch at a time
//! - Filter state lives only in the `filters` query parameter, the server keeps none
//!
//!
//!
//! # Routes
//! - `GET /jobs?filters=...`: visible jobs, every filter with its count, canonical location
//! - `POST /filters/toggle?filters=...` with `{ "name": ... }`: same view after flipping one filter
//! - `GET /counts`: jobs per tech area
//! - `GET /status`, `POST /refresh`: fetch state and freshness
//! - `GET /livez`, `GET /healthz`: probes
//!
//!
//!
//! # Setup
//!
//! Point at a sheet.
//! ```sh
//! export SPREADSHEET_ID=... SPREADSHEET_RANGE='Jobs!A1:E500'
//! echo "$API_KEY" > /run/secrets/SPREADSHEET_API_KEY
//! ```
//!
//! Run with logs.
//! ```sh
//! RUST_LOG=info cargo run -p jobboard
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use error::AppError;
use routes::{
    counts_handler, healthz, jobs_handler, livez, refresh_handler, status_handler, toggle_handler,
};
use state::AppState;

pub async fn start_server() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config).await;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/jobs", get(jobs_handler))
        .route("/filters/toggle", post(toggle_handler))
        .route("/counts", get(counts_handler))
        .route("/status", get(status_handler))
        .route("/refresh", post(refresh_handler))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            return std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                return std::future::pending::<()>().await;
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
