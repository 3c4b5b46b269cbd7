use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use database_layer::{DiseaseRecord, Organ};
use serde::{Deserialize, Serialize};
use symptom_engine::{HistoryEntry, PredictionOutcome};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::middleware::CallerIdentity;
use crate::server::HomecareServer;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub symptoms: String,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: PredictionOutcome,
}

#[derive(Debug, Serialize)]
pub struct DiseaseListResponse {
    pub success: bool,
    pub count: usize,
    pub diseases: Vec<DiseaseRecord>,
}

impl DiseaseListResponse {
    fn new(diseases: Vec<DiseaseRecord>) -> Self {
        Self {
            success: true,
            count: diseases.len(),
            diseases,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiseaseResponse {
    pub success: bool,
    pub disease: DiseaseRecord,
}

#[derive(Debug, Serialize)]
pub struct OrganListResponse {
    pub success: bool,
    pub organs: Vec<Organ>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Predict diseases from free-text symptoms and record the top prediction
/// for identified callers
pub async fn predict(
    State(server): State<HomecareServer>,
    caller: Option<CallerIdentity>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> ApiResult<Json<PredictResponse>> {
    let Json(request) = payload.map_err(ApiError::from)?;

    let symptoms = request.symptoms.trim();
    if symptoms.is_empty() {
        return Err(ApiError::validation("Please describe your symptoms"));
    }

    let outcome = server.engine.predict(symptoms).await?;

    let user_id = request
        .user_id
        .filter(|id| !id.trim().is_empty())
        .or(caller.map(|c| c.user_id));

    if let (Some(user_id), Some(top)) = (user_id, outcome.top()) {
        let entry = HistoryEntry::from_top_prediction(user_id, symptoms, top);
        match server.history.record(entry).await {
            Ok(record) => info!(history_id = record.history_id, "Consultation recorded"),
            Err(e) => warn!(error = %e, "Failed to record consultation"),
        }
    }

    Ok(Json(PredictResponse {
        success: true,
        outcome,
    }))
}

pub async fn list_diseases(State(server): State<HomecareServer>) -> ApiResult<Json<DiseaseListResponse>> {
    let diseases = server.catalog.list_diseases().await?;
    Ok(Json(DiseaseListResponse::new(diseases)))
}

pub async fn get_disease(
    State(server): State<HomecareServer>,
    disease_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DiseaseResponse>> {
    let Path(disease_id) = disease_id.map_err(ApiError::from)?;

    let disease = server
        .catalog
        .get_disease(disease_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Disease"))?;

    Ok(Json(DiseaseResponse {
        success: true,
        disease,
    }))
}

pub async fn search_diseases(
    State(server): State<HomecareServer>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<DiseaseListResponse>> {
    let Query(params) = params.map_err(ApiError::from)?;
    let query = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::validation("Search query is required"))?;

    let diseases = server.catalog.search_diseases(query).await?;
    Ok(Json(DiseaseListResponse::new(diseases)))
}

pub async fn list_organs(State(server): State<HomecareServer>) -> ApiResult<Json<OrganListResponse>> {
    let organs = server.catalog.list_organs().await?;
    Ok(Json(OrganListResponse { success: true, organs }))
}

pub async fn diseases_by_organ(
    State(server): State<HomecareServer>,
    organ_system: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DiseaseListResponse>> {
    let Path(organ_system) = organ_system.map_err(ApiError::from)?;
    let diseases = server.catalog.diseases_by_organ(&organ_system).await?;
    Ok(Json(DiseaseListResponse::new(diseases)))
}
