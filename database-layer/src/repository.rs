//! Disease catalog and medical history repositories
//!
//! Each store has an in-memory implementation for development and tests and a
//! PostgreSQL implementation in [`postgres`].

pub mod postgres;

use crate::{error::DatabaseResult, models::*, seed};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use symptom_engine::{
    DiseaseReference, HistoryEntry, HistoryError, HistoryRecorder, LookupError, MedicalHistoryRecord,
    ReferenceRecord,
};

/// Search results are capped at this many rows
pub const SEARCH_LIMIT: usize = 20;

/// Read access to disease reference data and the organ catalog
#[async_trait]
pub trait DiseaseCatalog: Send + Sync {
    /// All diseases ordered by name
    async fn list_diseases(&self) -> DatabaseResult<Vec<DiseaseRecord>>;

    async fn get_disease(&self, disease_id: i64) -> DatabaseResult<Option<DiseaseRecord>>;

    /// Exact name match
    async fn get_disease_by_name(&self, name: &str) -> DatabaseResult<Option<DiseaseRecord>>;

    /// Case-insensitive contains over name, symptoms and organ system
    async fn search_diseases(&self, query: &str) -> DatabaseResult<Vec<DiseaseRecord>>;

    async fn diseases_by_organ(&self, organ_system: &str) -> DatabaseResult<Vec<DiseaseRecord>>;

    /// All organs ordered by organ name
    async fn list_organs(&self) -> DatabaseResult<Vec<Organ>>;

    /// Lowest-id disease whose name contains `key`, ignoring case
    async fn find_by_approximate_name(&self, key: &str) -> DatabaseResult<Option<DiseaseRecord>>;

    /// Whether the backing store answers
    async fn ping(&self) -> bool;
}

/// Exposes a [`DiseaseCatalog`] as the engine's reference store
#[derive(Clone)]
pub struct CatalogReference {
    catalog: Arc<dyn DiseaseCatalog>,
}

impl CatalogReference {
    pub fn new(catalog: Arc<dyn DiseaseCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl DiseaseReference for CatalogReference {
    async fn find_by_approximate_name(&self, key: &str) -> Result<Option<ReferenceRecord>, LookupError> {
        self.catalog
            .find_by_approximate_name(key)
            .await
            .map_err(LookupError::from)
    }
}

/// In-memory disease catalog
pub struct InMemoryDiseaseCatalog {
    diseases: Vec<DiseaseRecord>,
    organs: Vec<Organ>,
}

impl InMemoryDiseaseCatalog {
    pub fn new(mut diseases: Vec<DiseaseRecord>, mut organs: Vec<Organ>) -> Self {
        diseases.sort_by_key(|d| d.disease_id);
        organs.sort_by(|a, b| a.organ_name.cmp(&b.organ_name));
        Self { diseases, organs }
    }

    /// Catalog holding the reference records for the built-in diseases
    pub fn seeded() -> Self {
        Self::new(seed::reference_records(), seed::organs())
    }

    fn sorted_by_name<'a>(records: impl Iterator<Item = &'a DiseaseRecord>) -> Vec<DiseaseRecord> {
        let mut found: Vec<DiseaseRecord> = records.cloned().collect();
        found.sort_by(|a, b| a.disease_name.cmp(&b.disease_name));
        found
    }
}

impl Default for InMemoryDiseaseCatalog {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

fn contains_ignore_case(field: Option<&String>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

#[async_trait]
impl DiseaseCatalog for InMemoryDiseaseCatalog {
    async fn list_diseases(&self) -> DatabaseResult<Vec<DiseaseRecord>> {
        Ok(Self::sorted_by_name(self.diseases.iter()))
    }

    async fn get_disease(&self, disease_id: i64) -> DatabaseResult<Option<DiseaseRecord>> {
        Ok(self.diseases.iter().find(|d| d.disease_id == disease_id).cloned())
    }

    async fn get_disease_by_name(&self, name: &str) -> DatabaseResult<Option<DiseaseRecord>> {
        Ok(self.diseases.iter().find(|d| d.disease_name == name).cloned())
    }

    async fn search_diseases(&self, query: &str) -> DatabaseResult<Vec<DiseaseRecord>> {
        let needle = query.to_lowercase();
        let mut found = Self::sorted_by_name(self.diseases.iter().filter(|d| {
            d.disease_name.to_lowercase().contains(&needle)
                || contains_ignore_case(d.symptoms.as_ref(), &needle)
                || contains_ignore_case(d.organ_system.as_ref(), &needle)
        }));
        found.truncate(SEARCH_LIMIT);
        Ok(found)
    }

    async fn diseases_by_organ(&self, organ_system: &str) -> DatabaseResult<Vec<DiseaseRecord>> {
        Ok(Self::sorted_by_name(
            self.diseases
                .iter()
                .filter(|d| d.organ_system.as_deref() == Some(organ_system)),
        ))
    }

    async fn list_organs(&self) -> DatabaseResult<Vec<Organ>> {
        Ok(self.organs.clone())
    }

    async fn find_by_approximate_name(&self, key: &str) -> DatabaseResult<Option<DiseaseRecord>> {
        Ok(self.diseases.iter().find(|d| d.name_contains(key)).cloned())
    }

    async fn ping(&self) -> bool {
        true
    }
}

/// In-memory medical history store
pub struct InMemoryHistoryRepository {
    records: Arc<DashMap<i64, MedicalHistoryRecord>>,
    next_id: AtomicI64,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRecorder for InMemoryHistoryRepository {
    async fn record(&self, entry: HistoryEntry) -> Result<MedicalHistoryRecord, HistoryError> {
        let history_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = MedicalHistoryRecord {
            history_id,
            user_id: entry.user_id,
            symptoms: entry.symptoms,
            predicted_disease: entry.predicted_disease,
            confidence_score: entry.confidence_score,
            notes: entry.notes,
            consultation_date: Utc::now(),
        };
        self.records.insert(history_id, record.clone());
        Ok(record)
    }

    async fn list_for_user(&self, user_id: &str, limit: u32) -> Result<Vec<MedicalHistoryRecord>, HistoryError> {
        let mut records: Vec<MedicalHistoryRecord> = self
            .records
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();

        // ids break ties between records written within the same instant
        records.sort_by(|a, b| {
            b.consultation_date
                .cmp(&a.consultation_date)
                .then(b.history_id.cmp(&a.history_id))
        });
        records.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(records)
    }
}
