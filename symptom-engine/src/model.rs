//! Symptom keyword model
//!
//! A [`KeywordModel`] is the immutable table of [`KeywordProfile`]s the
//! engine scores against. It is built once at startup, either from the
//! built-in table or from a YAML/JSON file, and shared by reference.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{info, warn};

use crate::builtin;
use crate::error::{ModelError, ModelResult};

/// Keyword list and explicit weights for one disease
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordProfile {
    /// Lowercase canonical disease name
    #[serde(rename = "disease")]
    pub disease_key: String,
    /// Phrases searched for, in scan order
    pub keywords: Vec<String>,
    /// Explicit weights; keywords not listed weigh 1
    #[serde(default, alias = "weight")]
    pub weights: BTreeMap<String, u32>,
}

impl KeywordProfile {
    pub fn new(
        disease_key: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
        weights: impl IntoIterator<Item = (impl Into<String>, u32)>,
    ) -> Self {
        Self {
            disease_key: disease_key.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            weights: weights.into_iter().map(|(k, w)| (k.into(), w)).collect(),
        }
    }

    /// Weight contributed by a matched keyword
    pub fn weight_of(&self, keyword: &str) -> u32 {
        self.weights.get(keyword).copied().unwrap_or(1)
    }

    /// Sum of the explicitly declared weights.
    ///
    /// Unweighted keywords never count here even though they add 1 to the raw
    /// score when matched, so confidence can exceed 100% before clamping.
    pub fn max_possible_score(&self) -> u32 {
        self.weights.values().fold(0u32, |acc, w| acc.saturating_add(*w))
    }

    /// Weight keys that do not appear in the keyword list
    pub fn orphan_weights(&self) -> Vec<&str> {
        self.weights
            .keys()
            .filter(|k| !self.keywords.iter().any(|kw| kw == *k))
            .map(String::as_str)
            .collect()
    }

    fn normalized(self) -> Self {
        Self {
            disease_key: self.disease_key.trim().to_lowercase(),
            keywords: self.keywords.iter().map(|k| k.to_lowercase()).collect(),
            weights: self
                .weights
                .into_iter()
                .map(|(k, w)| (k.to_lowercase(), w))
                .collect(),
        }
    }
}

/// Non-fatal integrity problem in a loaded model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityWarning {
    pub disease_key: String,
    pub keyword: String,
}

impl std::fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "weight declared for '{}' which is not a keyword of '{}'",
            self.keyword, self.disease_key
        )
    }
}

/// Immutable, validated table of keyword profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordModel {
    profiles: Vec<KeywordProfile>,
}

impl KeywordModel {
    /// Build a model, lowercasing keys and keywords and rejecting structural
    /// problems. Weights for keywords outside the list are kept and only
    /// reported through [`KeywordModel::integrity_warnings`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] on an empty or duplicate disease key, a profile
    /// without keywords, an empty keyword, or a zero weight.
    pub fn new(profiles: Vec<KeywordProfile>) -> ModelResult<Self> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(profiles.len());

        for profile in profiles.into_iter().map(KeywordProfile::normalized) {
            if profile.disease_key.is_empty() {
                return Err(ModelError::EmptyDiseaseKey);
            }
            if !seen.insert(profile.disease_key.clone()) {
                return Err(ModelError::DuplicateDiseaseKey(profile.disease_key));
            }
            if profile.keywords.is_empty() {
                return Err(ModelError::NoKeywords(profile.disease_key));
            }
            if profile.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ModelError::EmptyKeyword {
                    disease: profile.disease_key,
                });
            }
            if let Some((keyword, _)) = profile.weights.iter().find(|(_, w)| **w == 0) {
                return Err(ModelError::ZeroWeight {
                    disease: profile.disease_key.clone(),
                    keyword: keyword.clone(),
                });
            }
            normalized.push(profile);
        }

        let model = Self { profiles: normalized };
        model.log_integrity_warnings();
        Ok(model)
    }

    /// The thirteen-disease table the service ships with
    pub fn builtin() -> Self {
        let model = Self {
            profiles: builtin::profiles(),
        };
        model.log_integrity_warnings();
        model
    }

    /// Parse a model from YAML (a list of `{disease, keywords, weights}`)
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] for malformed YAML and any validation
    /// error from [`KeywordModel::new`].
    pub fn from_yaml_str(source: &str) -> ModelResult<Self> {
        let profiles: Vec<KeywordProfile> =
            serde_yaml::from_str(source).map_err(|e| ModelError::Parse(e.to_string()))?;
        Self::new(profiles)
    }

    /// Parse a model from JSON with the same shape as the YAML form
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] for malformed JSON and any validation
    /// error from [`KeywordModel::new`].
    pub fn from_json_str(source: &str) -> ModelResult<Self> {
        let profiles: Vec<KeywordProfile> =
            serde_json::from_str(source).map_err(|e| ModelError::Parse(e.to_string()))?;
        Self::new(profiles)
    }

    /// Load a model file; `.json` files are read as JSON, anything else as YAML
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Io`] if the file cannot be read, otherwise the
    /// errors of the matching parser.
    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Io(format!("{}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let model = if is_json {
            Self::from_json_str(&source)?
        } else {
            Self::from_yaml_str(&source)?
        };

        info!(
            path = %path.display(),
            diseases = model.len(),
            "Keyword model loaded"
        );
        Ok(model)
    }

    /// Profiles in declaration order
    pub fn profiles(&self) -> &[KeywordProfile] {
        &self.profiles
    }

    pub fn get(&self, disease_key: &str) -> Option<&KeywordProfile> {
        self.profiles.iter().find(|p| p.disease_key == disease_key)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn integrity_warnings(&self) -> Vec<IntegrityWarning> {
        self.profiles
            .iter()
            .flat_map(|p| {
                p.orphan_weights().into_iter().map(|keyword| IntegrityWarning {
                    disease_key: p.disease_key.clone(),
                    keyword: keyword.to_string(),
                })
            })
            .collect()
    }

    fn log_integrity_warnings(&self) {
        for warning in self.integrity_warnings() {
            warn!(
                disease_key = %warning.disease_key,
                keyword = %warning.keyword,
                "Keyword model integrity: {}", warning
            );
        }
    }
}
