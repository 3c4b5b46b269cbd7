//! Medical history contract
//!
//! The engine never writes history itself. Callers build a [`HistoryEntry`]
//! from the top prediction and hand it to a [`HistoryRecorder`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::PredictionResult;
use crate::error::HistoryError;

/// Default page size for history listings
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// A consultation about to be persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub user_id: String,
    pub symptoms: String,
    pub predicted_disease: String,
    pub confidence_score: u8,
    pub notes: String,
}

impl HistoryEntry {
    /// Entry for the top prediction; the disease name comes from the joined
    /// reference record
    pub fn from_top_prediction(
        user_id: impl Into<String>,
        symptoms: impl Into<String>,
        top: &PredictionResult,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            symptoms: symptoms.into(),
            predicted_disease: top.reference.disease_name.clone(),
            confidence_score: top.candidate.confidence,
            notes: format!(
                "Matched symptoms: {}",
                top.candidate.matched_keywords.join(", ")
            ),
        }
    }
}

/// A stored consultation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistoryRecord {
    pub history_id: i64,
    pub user_id: String,
    pub symptoms: String,
    pub predicted_disease: String,
    pub confidence_score: u8,
    pub notes: String,
    pub consultation_date: DateTime<Utc>,
}

#[async_trait]
pub trait HistoryRecorder: Send + Sync {
    async fn record(&self, entry: HistoryEntry) -> Result<MedicalHistoryRecord, HistoryError>;

    /// Newest first, at most `limit` records
    async fn list_for_user(&self, user_id: &str, limit: u32) -> Result<Vec<MedicalHistoryRecord>, HistoryError>;
}
