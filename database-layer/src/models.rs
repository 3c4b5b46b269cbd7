// Database models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use symptom_engine::{MedicalHistoryRecord, ReferenceRecord};

use crate::error::{DatabaseError, DatabaseResult};

/// Rows of the `diseases` table are the engine's reference records
pub type DiseaseRecord = ReferenceRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Organ {
    pub organ_id: i64,
    pub organ_name: String,
    pub organ_system: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct MedicalHistoryRow {
    pub history_id: i64,
    pub user_id: String,
    pub symptoms: String,
    pub predicted_disease: String,
    pub confidence_score: i16,
    pub notes: Option<String>,
    pub consultation_date: DateTime<Utc>,
}

impl TryFrom<MedicalHistoryRow> for MedicalHistoryRecord {
    type Error = DatabaseError;

    fn try_from(row: MedicalHistoryRow) -> DatabaseResult<Self> {
        let confidence_score = u8::try_from(row.confidence_score).map_err(|_| {
            DatabaseError::QueryFailed(format!(
                "confidence_score {} out of range for history {}",
                row.confidence_score, row.history_id
            ))
        })?;

        Ok(MedicalHistoryRecord {
            history_id: row.history_id,
            user_id: row.user_id,
            symptoms: row.symptoms,
            predicted_disease: row.predicted_disease,
            confidence_score,
            notes: row.notes.unwrap_or_default(),
            consultation_date: row.consultation_date,
        })
    }
}

/// Escape `%`, `_` and `\` so user text is matched literally inside LIKE
pub(crate) fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
