pub mod plants;

use std::sync::Arc;

use axum::{Json, Router, routing::get};

use crate::service::PlantService;

/// Shared application state.
pub type AppState = Arc<PlantService>;

/// Greeting returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to GreenAR API (CSV Data Source)";

/// Build the plants API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(plants::routes())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": WELCOME_MESSAGE }))
}
