//! Route registration: module routes, system endpoints, CORS.

use std::sync::Arc;

use axum::http::{Method, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router, middleware};
use greenar_core::ServiceError;
use plants::service::PlantService;

use crate::cors::{self, CorsPolicy};

/// Build the complete router with all routes.
pub fn build_router(
    plants: Arc<PlantService>,
    module_routes: Vec<(&str, Router)>,
    cors_policy: Arc<CorsPolicy>,
) -> Router {
    let system_routes = Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .with_state(plants);

    let mut app = Router::new().merge(system_routes);
    for (name, router) in module_routes {
        tracing::debug!("Mounting {} routes", name);
        app = app.merge(router);
    }

    app.fallback(not_found)
        .layer(middleware::from_fn_with_state(cors_policy, cors::cors_middleware))
}

async fn health(
    axum::extract::State(plants): axum::extract::State<Arc<PlantService>>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "plants": plants.count(),
    }))
}

async fn version() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "greenard",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found(method: Method, uri: Uri) -> ServiceError {
    ServiceError::NotFound(format!("no route for {} {}", method, uri.path()))
}
