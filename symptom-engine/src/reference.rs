use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Descriptive disease metadata joined onto a prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub disease_id: i64,
    pub disease_name: String,
    pub organ_system: Option<String>,
    pub severity_level: Option<String>,
    pub description: Option<String>,
    pub symptoms: Option<String>,
    pub causes: Option<String>,
    pub transmission: Option<String>,
    pub precautions: Option<String>,
    pub treatment: Option<String>,
    pub medicines: Option<String>,
    pub prevalence_in_india: Option<String>,
}

impl ReferenceRecord {
    /// Record with only an id and a name; every other field empty
    pub fn named(disease_id: i64, disease_name: impl Into<String>) -> Self {
        Self {
            disease_id,
            disease_name: disease_name.into(),
            organ_system: None,
            severity_level: None,
            description: None,
            symptoms: None,
            causes: None,
            transmission: None,
            precautions: None,
            treatment: None,
            medicines: None,
            prevalence_in_india: None,
        }
    }

    /// Case-insensitive "name contains key" test used by in-memory stores
    pub fn name_contains(&self, key: &str) -> bool {
        self.disease_name
            .to_lowercase()
            .contains(&key.to_lowercase())
    }
}

/// Reference store consulted for the top-ranked candidates
#[async_trait]
pub trait DiseaseReference: Send + Sync {
    /// First record whose name contains `key`, ignoring case
    async fn find_by_approximate_name(&self, key: &str) -> Result<Option<ReferenceRecord>, LookupError>;
}
