//! HTTP REST API routes

mod class_routes;
mod sheet_routes;
mod store_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Sheet routes
        .route("/api/sheet", get(sheet_routes::get_sheet))
        .route(
            "/api/sheet/attributes/{name}/adjust",
            post(sheet_routes::adjust_attribute),
        )
        .route(
            "/api/sheet/skills/{name}/adjust",
            post(sheet_routes::adjust_skill),
        )
        // Class routes
        .route("/api/classes", get(class_routes::list_classes))
        .route(
            "/api/classes/{name}/requirements",
            get(class_routes::get_class_requirements),
        )
        // Store round-trips
        .route("/api/sheet/save", post(store_routes::save_character))
        .route("/api/sheet/load", post(store_routes::load_character))
}
