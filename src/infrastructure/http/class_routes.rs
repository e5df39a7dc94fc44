//! Class API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{AttributesDto, ClassRequirementsDto, ClassViewDto};
use crate::application::services::SheetService;
use crate::domain::value_objects::class_by_name;
use crate::infrastructure::state::AppState;

/// Every class in the rule table with its current eligibility
pub async fn list_classes(State(state): State<Arc<AppState>>) -> Json<Vec<ClassViewDto>> {
    Json(state.sheet_service.class_eligibility().await)
}

/// Full per-attribute minimums for one class
pub async fn get_class_requirements(
    Path(name): Path<String>,
) -> Result<Json<ClassRequirementsDto>, (StatusCode, String)> {
    let class = class_by_name(&name)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Unknown class: {name}")))?;

    Ok(Json(ClassRequirementsDto {
        name: class.name,
        requirements: AttributesDto::from(&class.requirements),
    }))
}
