use std::sync::Arc;

use axum::{
    Json,
    extract::{RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
};
use board::{
    counts::{TechAreaCounts, count_jobs_by_tech_area},
    filters::toggle_filter,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    error::AppError,
    state::AppState,
    utils::{BoardView, StatusView, board_location, build_status, build_view, current_filters},
};

#[derive(Deserialize)]
pub struct Toggle {
    name: String,
}

pub async fn jobs_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<BoardView>, AppError> {
    let sheet = state.sheet.read().await;
    let location = board_location(query.as_deref())?;

    let filters = current_filters(&sheet.jobs, &location);

    Ok(Json(build_view(&sheet.jobs, &filters, location)))
}

pub async fn toggle_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
    Json(payload): Json<Toggle>,
) -> Result<Json<BoardView>, AppError> {
    let sheet = state.sheet.read().await;
    let location = board_location(query.as_deref())?;

    let filters = current_filters(&sheet.jobs, &location);
    let toggled =
        toggle_filter(&filters, &payload.name).ok_or(AppError::UnknownFilter(payload.name))?;

    let view = build_view(&sheet.jobs, &toggled, location);
    debug!("Toggled filter, location is now {}", view.location);

    Ok(Json(view))
}

pub async fn counts_handler(State(state): State<Arc<AppState>>) -> Json<TechAreaCounts> {
    let sheet = state.sheet.read().await;

    Json(count_jobs_by_tech_area(&sheet.jobs))
}

pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusView> {
    let sheet = state.sheet.read().await;

    Json(build_status(&sheet, Utc::now()))
}

pub async fn refresh_handler(State(state): State<Arc<AppState>>) -> Json<StatusView> {
    info!("Refresh requested");
    state.refresh().await;

    let sheet = state.sheet.read().await;
    Json(build_status(&sheet, Utc::now()))
}

pub async fn livez() -> impl IntoResponse {
    StatusCode::OK
}

pub async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let sheet = state.sheet.read().await;

    match &sheet.fetch.error {
        Some(e) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response(),
        None => StatusCode::OK.into_response(),
    }
}
