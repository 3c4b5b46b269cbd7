use database_layer::{
    CatalogReference, DatabasePool, DiseaseCatalog, InMemoryDiseaseCatalog, InMemoryHistoryRepository,
    PostgresDiseaseCatalog, PostgresHistoryRepository,
};
use error_common::{HomecareError, Result};
use std::sync::Arc;
use std::time::Instant;
use symptom_engine::{HistoryRecorder, KeywordModel, PredictionEngine};
use tracing::info;

use crate::config::ServerConfig;

/// Shared HomeCare+ server state
#[derive(Clone)]
pub struct HomecareServer {
    pub config: ServerConfig,
    pub engine: Arc<PredictionEngine>,
    pub catalog: Arc<dyn DiseaseCatalog>,
    pub history: Arc<dyn HistoryRecorder>,
    pub started_at: Instant,
}

impl HomecareServer {
    /// Wire the engine to `catalog` as its reference store
    pub fn from_parts(
        config: ServerConfig,
        model: KeywordModel,
        catalog: Arc<dyn DiseaseCatalog>,
        history: Arc<dyn HistoryRecorder>,
    ) -> Self {
        let reference = Arc::new(CatalogReference::new(catalog.clone()));
        let engine = PredictionEngine::new(Arc::new(model), reference).with_config(config.engine);

        info!(
            diseases = engine.model().len(),
            max_predictions = config.engine.max_predictions,
            "Prediction engine ready"
        );

        Self {
            config,
            engine: Arc::new(engine),
            catalog,
            history,
            started_at: Instant::now(),
        }
    }

    /// Server backed by the seeded in-memory catalog and an empty history
    pub fn new_in_memory(config: ServerConfig, model: KeywordModel) -> Self {
        Self::from_parts(
            config,
            model,
            Arc::new(InMemoryDiseaseCatalog::seeded()),
            Arc::new(InMemoryHistoryRepository::new()),
        )
    }

    /// Server backed by PostgreSQL; migrates and seeds an empty catalog
    ///
    /// # Errors
    ///
    /// Returns [`HomecareError::MigrationError`] when migrations fail and
    /// [`HomecareError::DatabaseError`] when seeding fails.
    pub async fn new_with_pool(config: ServerConfig, model: KeywordModel, pool: &DatabasePool) -> Result<Self> {
        pool.migrate()
            .await
            .map_err(|e| HomecareError::MigrationError(e.to_string()))?;

        let catalog = PostgresDiseaseCatalog::new(pool.pool().clone());
        catalog
            .seed_if_empty()
            .await
            .map_err(|e| HomecareError::DatabaseError(e.to_string()))?;

        Ok(Self::from_parts(
            config,
            model,
            Arc::new(catalog),
            Arc::new(PostgresHistoryRepository::new(pool.pool().clone())),
        ))
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
