//! PostgreSQL-backed catalog and history repositories

use crate::{
    error::{DatabaseError, DatabaseResult},
    models::*,
    repository::{DiseaseCatalog, SEARCH_LIMIT},
    seed,
};
use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use symptom_engine::{HistoryEntry, HistoryError, HistoryRecorder, MedicalHistoryRecord};
use tracing::{debug, info};

const DISEASE_COLUMNS: &str = "disease_id, disease_name, organ_system, severity_level, description, \
     symptoms, causes, transmission, precautions, treatment, medicines, prevalence_in_india";

fn disease_from_row(row: &PgRow) -> DatabaseResult<DiseaseRecord> {
    Ok(DiseaseRecord {
        disease_id: row.try_get("disease_id")?,
        disease_name: row.try_get("disease_name")?,
        organ_system: row.try_get("organ_system")?,
        severity_level: row.try_get("severity_level")?,
        description: row.try_get("description")?,
        symptoms: row.try_get("symptoms")?,
        causes: row.try_get("causes")?,
        transmission: row.try_get("transmission")?,
        precautions: row.try_get("precautions")?,
        treatment: row.try_get("treatment")?,
        medicines: row.try_get("medicines")?,
        prevalence_in_india: row.try_get("prevalence_in_india")?,
    })
}

fn diseases_from_rows(rows: &[PgRow]) -> DatabaseResult<Vec<DiseaseRecord>> {
    rows.iter().map(disease_from_row).collect()
}

/// PostgreSQL disease catalog
pub struct PostgresDiseaseCatalog {
    pool: PgPool,
}

impl PostgresDiseaseCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the built-in reference data when the `diseases` table is empty.
    /// Returns whether anything was inserted.
    ///
    /// # Errors
    ///
    /// Fails when the count or any insert fails; the transaction is rolled back.
    pub async fn seed_if_empty(&self) -> DatabaseResult<bool> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM diseases")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            debug!(existing, "Disease catalog already populated");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;

        for record in seed::reference_records() {
            sqlx::query(
                r#"
                INSERT INTO diseases (
                    disease_name, organ_system, severity_level, description, symptoms,
                    causes, transmission, precautions, treatment, medicines, prevalence_in_india
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(&record.disease_name)
            .bind(&record.organ_system)
            .bind(&record.severity_level)
            .bind(&record.description)
            .bind(&record.symptoms)
            .bind(&record.causes)
            .bind(&record.transmission)
            .bind(&record.precautions)
            .bind(&record.treatment)
            .bind(&record.medicines)
            .bind(&record.prevalence_in_india)
            .execute(&mut *tx)
            .await?;
        }

        for organ in seed::organs() {
            sqlx::query(
                "INSERT INTO organs (organ_name, organ_system, description) VALUES ($1, $2, $3) \
                 ON CONFLICT (organ_name) DO NOTHING",
            )
            .bind(&organ.organ_name)
            .bind(&organ.organ_system)
            .bind(&organ.description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!("Seeded disease catalog with built-in reference data");
        Ok(true)
    }
}

#[async_trait]
impl DiseaseCatalog for PostgresDiseaseCatalog {
    async fn list_diseases(&self) -> DatabaseResult<Vec<DiseaseRecord>> {
        let rows = sqlx::query(&format!("SELECT {DISEASE_COLUMNS} FROM diseases ORDER BY disease_name"))
            .fetch_all(&self.pool)
            .await?;
        diseases_from_rows(&rows)
    }

    async fn get_disease(&self, disease_id: i64) -> DatabaseResult<Option<DiseaseRecord>> {
        let row = sqlx::query(&format!("SELECT {DISEASE_COLUMNS} FROM diseases WHERE disease_id = $1"))
            .bind(disease_id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(disease_from_row).transpose()
    }

    async fn get_disease_by_name(&self, name: &str) -> DatabaseResult<Option<DiseaseRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {DISEASE_COLUMNS} FROM diseases WHERE disease_name = $1 ORDER BY disease_id LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(disease_from_row).transpose()
    }

    async fn search_diseases(&self, query: &str) -> DatabaseResult<Vec<DiseaseRecord>> {
        let pattern = contains_pattern(&query.to_lowercase());
        let limit = i64::try_from(SEARCH_LIMIT)
            .map_err(|e| DatabaseError::ConfigurationError(e.to_string()))?;

        let rows = sqlx::query(&format!(
            r#"
            SELECT {DISEASE_COLUMNS} FROM diseases
            WHERE LOWER(disease_name) LIKE $1
               OR LOWER(COALESCE(symptoms, '')) LIKE $1
               OR LOWER(COALESCE(organ_system, '')) LIKE $1
            ORDER BY disease_name
            LIMIT $2
            "#
        ))
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        diseases_from_rows(&rows)
    }

    async fn diseases_by_organ(&self, organ_system: &str) -> DatabaseResult<Vec<DiseaseRecord>> {
        let rows = sqlx::query(&format!(
            "SELECT {DISEASE_COLUMNS} FROM diseases WHERE organ_system = $1 ORDER BY disease_name"
        ))
        .bind(organ_system)
        .fetch_all(&self.pool)
        .await?;
        diseases_from_rows(&rows)
    }

    async fn list_organs(&self) -> DatabaseResult<Vec<Organ>> {
        let organs = sqlx::query_as::<_, Organ>(
            "SELECT organ_id, organ_name, organ_system, description FROM organs ORDER BY organ_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(organs)
    }

    async fn find_by_approximate_name(&self, key: &str) -> DatabaseResult<Option<DiseaseRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {DISEASE_COLUMNS} FROM diseases WHERE LOWER(disease_name) LIKE $1 \
             ORDER BY disease_id LIMIT 1"
        ))
        .bind(contains_pattern(&key.to_lowercase()))
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(disease_from_row).transpose()
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await.is_ok()
    }
}

/// PostgreSQL medical history store
pub struct PostgresHistoryRepository {
    pool: PgPool,
}

impl PostgresHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRecorder for PostgresHistoryRepository {
    async fn record(&self, entry: HistoryEntry) -> Result<MedicalHistoryRecord, HistoryError> {
        let row = sqlx::query_as::<_, MedicalHistoryRow>(
            r#"
            INSERT INTO medical_history (user_id, symptoms, predicted_disease, confidence_score, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING history_id, user_id, symptoms, predicted_disease, confidence_score, notes, consultation_date
            "#,
        )
        .bind(&entry.user_id)
        .bind(&entry.symptoms)
        .bind(&entry.predicted_disease)
        .bind(i16::from(entry.confidence_score))
        .bind(&entry.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        debug!(history_id = row.history_id, "Recorded consultation");
        Ok(MedicalHistoryRecord::try_from(row)?)
    }

    async fn list_for_user(&self, user_id: &str, limit: u32) -> Result<Vec<MedicalHistoryRecord>, HistoryError> {
        let rows = sqlx::query_as::<_, MedicalHistoryRow>(
            r#"
            SELECT history_id, user_id, symptoms, predicted_disease, confidence_score, notes, consultation_date
            FROM medical_history
            WHERE user_id = $1
            ORDER BY consultation_date DESC, history_id DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        let records = rows
            .into_iter()
            .map(MedicalHistoryRecord::try_from)
            .collect::<DatabaseResult<Vec<_>>>()?;
        Ok(records)
    }
}
