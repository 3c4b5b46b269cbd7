//! HomeCare+ Server - symptom prediction and disease reference API
//!
//! Wraps the [`symptom_engine`] prediction engine and the [`database_layer`]
//! stores in an axum router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use config::{Environment, ServerConfig};
pub use error::*;
pub use server::HomecareServer;

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: HomecareServer) -> Router {
    let cors = middleware::create_cors_layer(&server.config.frontend_url);

    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
