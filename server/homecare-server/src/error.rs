use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use database_layer::DatabaseError;
use error_common::codes;
use serde::{Deserialize, Serialize};
use symptom_engine::{EngineError, HistoryError};
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

/// Standard API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    /// Unique error ID for tracking
    pub error_id: String,
    pub error_type: String,
    /// Stable code from `error_common::codes`
    pub error_code: String,
    /// Human-readable error message
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Suggested actions for resolving the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Authentication error: {message}")]
    Authentication { message: String },

    #[error("Resource not found: {resource_type}")]
    NotFound { resource_type: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Authentication { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Database(db_err) if db_err.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::History(HistoryError::Unavailable(_)) | ApiError::ServiceUnavailable { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Database(_) | ApiError::History(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::Authentication { .. } => "authentication_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::Database(_) | ApiError::History(_) => "database_error",
            ApiError::ServiceUnavailable { .. } => "service_unavailable",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => codes::validation::MISSING_REQUIRED_FIELD,
            ApiError::BadRequest { .. } => codes::validation::INVALID_FORMAT,
            ApiError::Authentication { .. } => codes::authentication::MISSING_IDENTITY,
            ApiError::NotFound { .. } => codes::validation::INVALID_INPUT,
            ApiError::Database(_) | ApiError::History(_) if self.status_code() == StatusCode::SERVICE_UNAVAILABLE => {
                codes::database::CONNECTION_FAILED
            }
            ApiError::Database(DatabaseError::MigrationError(_)) => codes::database::MIGRATION_FAILED,
            ApiError::Database(_) | ApiError::History(_) => codes::database::QUERY_FAILED,
            ApiError::ServiceUnavailable { .. } => codes::prediction::REFERENCE_UNAVAILABLE,
        }
    }

    /// Get suggested actions for resolving the error
    pub fn suggestions(&self) -> Option<Vec<String>> {
        match self {
            ApiError::Validation { .. } => Some(vec![
                "Describe your symptoms in a few words, e.g. \"fever and headache\"".to_string(),
            ]),
            ApiError::Authentication { .. } => Some(vec![
                "Sign in again; the X-User-Id header is set by the auth gateway".to_string(),
            ]),
            ApiError::ServiceUnavailable { .. } => Some(vec![
                "Try again in a few moments".to_string(),
                "Contact support if the issue persists".to_string(),
            ]),
            _ => None,
        }
    }

    /// Message safe to show to clients; store errors are not echoed verbatim
    fn public_message(&self) -> String {
        match self {
            ApiError::Database(_) | ApiError::History(_) => {
                if self.status_code() == StatusCode::SERVICE_UNAVAILABLE {
                    "The disease database is temporarily unavailable.".to_string()
                } else {
                    "Database operation failed. Please try again.".to_string()
                }
            }
            _ => self.to_string(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::ServiceUnavailable {
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        // Log the error with correlation ID
        if status_code.is_server_error() {
            error!(
                error_id = %error_id,
                error_type = %self.error_type(),
                status_code = status_code.as_u16(),
                error = %self,
                "API error occurred"
            );
        } else {
            warn!(
                error_id = %error_id,
                error_type = %self.error_type(),
                status_code = status_code.as_u16(),
                error = %self,
                "Request rejected"
            );
        }

        let error_response = ApiErrorResponse {
            success: false,
            error_id,
            error_type: self.error_type().to_string(),
            error_code: self.error_code().to_string(),
            message: self.public_message(),
            timestamp: chrono::Utc::now(),
            suggestions: self.suggestions(),
        };

        (status_code, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use symptom_engine::LookupError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::validation("blank").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::authentication("missing").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::not_found("Disease").status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_reference_outage_is_service_unavailable() {
        let err = ApiError::from(EngineError::ReferenceUnavailable(LookupError::Unavailable(
            "connection refused".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), codes::prediction::REFERENCE_UNAVAILABLE);
    }

    #[test]
    fn test_database_errors_hide_details() {
        let err = ApiError::from(DatabaseError::QueryFailed("relation \"diseases\" does not exist".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.public_message().contains("relation"));

        let err = ApiError::from(DatabaseError::MigrationError("checksum mismatch".to_string()));
        assert_eq!(err.error_code(), codes::database::MIGRATION_FAILED);

        let err = ApiError::from(DatabaseError::ConnectionFailed("refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), codes::database::CONNECTION_FAILED);
    }
}
