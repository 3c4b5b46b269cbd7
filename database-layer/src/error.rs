use symptom_engine::{HistoryError, LookupError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// True when the store itself is unreachable rather than a query failing
    pub fn is_unavailable(&self) -> bool {
        match self {
            DatabaseError::ConnectionFailed(_) => true,
            DatabaseError::SqlxError(err) => matches!(
                err,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_)
            ),
            _ => false,
        }
    }
}

impl From<DatabaseError> for LookupError {
    fn from(err: DatabaseError) -> Self {
        if err.is_unavailable() {
            LookupError::Unavailable(err.to_string())
        } else {
            LookupError::Query(err.to_string())
        }
    }
}

impl From<DatabaseError> for HistoryError {
    fn from(err: DatabaseError) -> Self {
        if err.is_unavailable() {
            HistoryError::Unavailable(err.to_string())
        } else {
            HistoryError::Query(err.to_string())
        }
    }
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
