use axum::{extract::State, response::Json};
use serde::Serialize;
use std::collections::HashMap;

use crate::server::HomecareServer;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime: u64,
    pub checks: HashMap<String, String>,
}

/// Liveness plus a reference-store probe; a failing store reports "degraded"
pub async fn health_check(State(server): State<HomecareServer>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();

    let database_ok = server.catalog.ping().await;
    checks.insert(
        "database".to_string(),
        if database_ok { "healthy" } else { "unavailable" }.to_string(),
    );
    checks.insert(
        "keyword_model".to_string(),
        format!("{} diseases", server.engine.model().len()),
    );

    Json(HealthResponse {
        status: if database_ok { "healthy" } else { "degraded" }.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: server.uptime_secs(),
        checks,
    })
}
