use thiserror::Error;

use crate::codes;

/// Process-level error shared by every HomeCare+ crate
#[derive(Error, Debug)]
pub enum HomecareError {
    /// Network communication errors (bind, connect)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server runtime errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Schema migrations could not be applied
    #[error("Migration error: {0}")]
    MigrationError(String),

    /// Keyword model could not be built or loaded
    #[error("Keyword model error: {0}")]
    ModelError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HomecareError {
    /// Stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            HomecareError::NetworkError(_) => codes::system::NETWORK,
            HomecareError::ServerError(_) => codes::system::SERVER,
            HomecareError::DatabaseError(_) => codes::database::QUERY_FAILED,
            HomecareError::MigrationError(_) => codes::database::MIGRATION_FAILED,
            HomecareError::ModelError(_) => codes::prediction::INVALID_KEYWORD_MODEL,
            HomecareError::ConfigError(_) => codes::system::CONFIGURATION,
            HomecareError::Other(_) => codes::system::INTERNAL,
        }
    }

    /// Short machine-readable category
    pub fn error_type(&self) -> &'static str {
        match self {
            HomecareError::NetworkError(_) => "network_error",
            HomecareError::ServerError(_) => "server_error",
            HomecareError::DatabaseError(_) => "database_error",
            HomecareError::MigrationError(_) => "migration_error",
            HomecareError::ModelError(_) => "model_error",
            HomecareError::ConfigError(_) => "configuration_error",
            HomecareError::Other(_) => "internal_error",
        }
    }
}

/// Result type alias for HomeCare+ operations
pub type Result<T> = std::result::Result<T, HomecareError>;

/// Async logging function for errors
pub async fn log_error(context: &str, error: &HomecareError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error_type = error.error_type(),
        error = %error,
        "HomeCare+ error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_category() {
        let err = HomecareError::ConfigError("missing DATABASE_URL".to_string());
        assert_eq!(err.code(), "SYS_9001");
        assert_eq!(err.error_type(), "configuration_error");

        let err = HomecareError::ModelError("duplicate disease 'dengue'".to_string());
        assert_eq!(err.code(), "PREDICT_5001");

        let err = HomecareError::MigrationError("checksum mismatch".to_string());
        assert_eq!(err.code(), codes::database::MIGRATION_FAILED);
        assert_eq!(err.error_type(), "migration_error");
    }

    #[test]
    fn test_anyhow_is_wrapped_transparently() {
        let err: HomecareError = anyhow::anyhow!("socket closed").into();
        assert_eq!(err.to_string(), "socket closed");
        assert_eq!(err.error_type(), "internal_error");
    }

    #[tokio::test]
    async fn test_log_error_does_not_panic_without_subscriber() {
        let err = HomecareError::NetworkError("bind failed".to_string());
        log_error("startup", &err).await;
    }
}
