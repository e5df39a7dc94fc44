//! Sheet API routes
//!
//! Unknown attribute or skill names are rejected here with 404. Everything
//! past this boundary only ever sees identifiers from the rule tables.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{AdjustRequestDto, SheetViewDto};
use crate::application::services::SheetService;
use crate::domain::value_objects::{skill_by_name, Attribute};
use crate::infrastructure::state::AppState;

/// Current sheet: pools, scores, modifiers, eligibility and skill totals
pub async fn get_sheet(State(state): State<Arc<AppState>>) -> Json<SheetViewDto> {
    Json(state.sheet_service.sheet_view().await)
}

/// Apply a delta to an attribute score
pub async fn adjust_attribute(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<AdjustRequestDto>,
) -> Result<Json<SheetViewDto>, (StatusCode, String)> {
    let attribute = Attribute::from_name(&name)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Unknown attribute: {name}")))?;

    Ok(Json(
        state
            .sheet_service
            .adjust_attribute(attribute, req.delta)
            .await,
    ))
}

/// Apply a delta to a skill's invested points
pub async fn adjust_skill(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<AdjustRequestDto>,
) -> Result<Json<SheetViewDto>, (StatusCode, String)> {
    let skill = skill_by_name(&name)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Unknown skill: {name}")))?;

    Ok(Json(state.sheet_service.adjust_skill(skill, req.delta).await))
}
