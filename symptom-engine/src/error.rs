use thiserror::Error;

/// Problems found while building a [`KeywordModel`](crate::KeywordModel)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Disease key cannot be empty")]
    EmptyDiseaseKey,

    #[error("Duplicate disease key: {0}")]
    DuplicateDiseaseKey(String),

    #[error("Disease '{0}' declares no keywords")]
    NoKeywords(String),

    #[error("Disease '{disease}' has an empty keyword")]
    EmptyKeyword { disease: String },

    #[error("Disease '{disease}' declares zero weight for '{keyword}'")]
    ZeroWeight { disease: String, keyword: String },

    #[error("Failed to read keyword model: {0}")]
    Io(String),

    #[error("Failed to parse keyword model: {0}")]
    Parse(String),
}

/// Failure of the disease reference store for a single lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Reference store unavailable: {0}")]
    Unavailable(String),

    #[error("Reference query failed: {0}")]
    Query(String),
}

/// Failure of the medical history store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History store unavailable: {0}")]
    Unavailable(String),

    #[error("History query failed: {0}")]
    Query(String),
}

/// Errors surfaced by [`PredictionEngine::predict`](crate::PredictionEngine::predict)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Every reference lookup of the call failed with a store error
    #[error("Disease reference store unavailable: {0}")]
    ReferenceUnavailable(#[source] LookupError),
}

pub type ModelResult<T> = Result<T, ModelError>;
