//! Save/load routes - round-trips through the remote character store
//!
//! A store failure surfaces as 502 and nothing else: the in-memory sheet is
//! never rolled back or blocked by a failed round-trip.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::dto::{LoadReportDto, SheetViewDto};
use crate::application::services::SheetService;
use crate::infrastructure::state::AppState;

/// Push the current sheet to the store
pub async fn save_character(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SheetViewDto>, (StatusCode, String)> {
    let view = state
        .sheet_service
        .save()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(Json(view))
}

/// Pull the stored sheet and apply whatever fields it carries
pub async fn load_character(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LoadReportDto>, (StatusCode, String)> {
    let report = state
        .sheet_service
        .load()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(Json(report))
}
