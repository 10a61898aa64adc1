use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use super::AppState;
use crate::model::{PlantLookup, PlantRecord};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/plants", get(list_plants))
        .route("/plants/{city}", get(plants_by_city))
        .route("/plant/{name}", get(plant_by_name))
}

#[derive(Debug, Deserialize)]
struct RegionQuery {
    region: Option<String>,
}

async fn list_plants(
    State(svc): State<AppState>,
    Query(q): Query<RegionQuery>,
) -> Json<Vec<PlantRecord>> {
    Json(svc.list_plants(q.region.as_deref()))
}

async fn plants_by_city(
    State(svc): State<AppState>,
    Path(city): Path<String>,
) -> Json<Vec<PlantRecord>> {
    Json(svc.plants_by_city(&city))
}

async fn plant_by_name(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> Json<PlantLookup> {
    Json(svc.plant_by_name(&name).into())
}
