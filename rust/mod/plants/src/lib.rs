pub mod api;
pub mod city;
pub mod loader;
pub mod model;
pub mod service;
pub mod slug;

use std::sync::Arc;

use axum::Router;
use greenar_core::Module;

use service::PlantService;

/// Plants module: the read-only plant catalogue.
pub struct PlantsModule {
    service: Arc<PlantService>,
}

impl PlantsModule {
    pub fn new(service: PlantService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Shared handle to the query service, for system endpoints.
    pub fn service(&self) -> Arc<PlantService> {
        self.service.clone()
    }
}

impl Module for PlantsModule {
    fn name(&self) -> &str {
        "plants"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
