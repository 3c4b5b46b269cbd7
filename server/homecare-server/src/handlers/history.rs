use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use symptom_engine::{MedicalHistoryRecord, DEFAULT_HISTORY_LIMIT};

use crate::error::{ApiError, ApiResult};
use crate::middleware::CallerIdentity;
use crate::server::HomecareServer;

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<MedicalHistoryRecord>,
}

/// The caller's consultations, newest first
pub async fn list_medical_history(
    State(server): State<HomecareServer>,
    caller: CallerIdentity,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> ApiResult<Json<HistoryResponse>> {
    let Query(params) = params.map_err(ApiError::from)?;
    let limit = params
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, DEFAULT_HISTORY_LIMIT);

    let history = server.history.list_for_user(&caller.user_id, limit).await?;

    Ok(Json(HistoryResponse { success: true, history }))
}
