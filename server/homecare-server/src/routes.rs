use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{diseases, health, history},
    server::HomecareServer,
};

/// Create health check routes
pub fn health_routes() -> Router<HomecareServer> {
    Router::new().route("/health", get(health::health_check))
}

/// Disease prediction and catalog routes
pub fn disease_routes() -> Router<HomecareServer> {
    Router::new()
        .route("/diseases", get(diseases::list_diseases))
        .route("/diseases/predict", post(diseases::predict))
        .route("/diseases/search", get(diseases::search_diseases))
        .route("/diseases/:disease_id", get(diseases::get_disease))
        .route("/organs", get(diseases::list_organs))
        .route("/organs/:organ_system/diseases", get(diseases::diseases_by_organ))
}

pub fn history_routes() -> Router<HomecareServer> {
    Router::new().route("/medical-history", get(history::list_medical_history))
}

/// Create all API routes
pub fn create_routes() -> Router<HomecareServer> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", disease_routes().merge(history_routes()))
}
