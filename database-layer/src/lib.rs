//! Persistence for the HomeCare+ symptom engine
//!
//! Provides the disease reference catalog, the organ catalog and the medical
//! history store, each as a trait with a PostgreSQL and an in-memory
//! implementation:
//!
//! - [`DiseaseCatalog`] with [`PostgresDiseaseCatalog`] and [`InMemoryDiseaseCatalog`]
//! - [`symptom_engine::HistoryRecorder`] with [`PostgresHistoryRepository`] and
//!   [`InMemoryHistoryRepository`]
//!
//! [`CatalogReference`] plugs a catalog into the prediction engine as its
//! reference store.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use database_layer::{CatalogReference, DatabaseConfig, DatabasePool, PostgresDiseaseCatalog};
//! use symptom_engine::{KeywordModel, PredictionEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = DatabasePool::new(&DatabaseConfig::from_env()?).await?;
//!     pool.migrate().await?;
//!
//!     let catalog = Arc::new(PostgresDiseaseCatalog::new(pool.pool().clone()));
//!     catalog.seed_if_empty().await?;
//!
//!     let engine = PredictionEngine::new(
//!         Arc::new(KeywordModel::builtin()),
//!         Arc::new(CatalogReference::new(catalog)),
//!     );
//!     let outcome = engine.predict("wheezing and chest tightness").await?;
//!     println!("{} matches", outcome.total_matches);
//!     Ok(())
//! }
//! ```

pub mod connection;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;

pub use connection::DatabasePool;
pub use error::{DatabaseError, DatabaseResult};
pub use models::{DiseaseRecord, Organ};
pub use repository::postgres::{PostgresDiseaseCatalog, PostgresHistoryRepository};
pub use repository::{
    CatalogReference, DiseaseCatalog, InMemoryDiseaseCatalog, InMemoryHistoryRepository, SEARCH_LIMIT,
};

use std::time::Duration;

/// Database configuration structure
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            ..Self::default()
        }
    }

    /// Read `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::ConfigurationError`] when `DATABASE_URL` is unset
    /// or `DATABASE_MAX_CONNECTIONS` is not a number.
    pub fn from_env() -> DatabaseResult<Self> {
        let connection_string = std::env::var("DATABASE_URL")
            .map_err(|_| DatabaseError::ConfigurationError("DATABASE_URL is not set".to_string()))?;

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.parse().map_err(|_| {
                DatabaseError::ConfigurationError(format!("invalid DATABASE_MAX_CONNECTIONS: {value}"))
            })?,
            Err(_) => Self::default().max_connections,
        };

        Ok(Self {
            connection_string,
            max_connections,
            ..Self::default()
        })
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: "postgresql://localhost:5432/homecare".to_string(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}
