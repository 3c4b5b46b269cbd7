use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::error::{EngineError, LookupError};
use crate::model::KeywordModel;
use crate::reference::{DiseaseReference, ReferenceRecord};
use crate::scoring::{score_text, ScoredCandidate};

/// Advisory text returned with every prediction
pub const DISCLAIMER: &str =
    "This is an AI-based prediction. Please consult a healthcare professional for accurate diagnosis.";

/// Engine tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// How many ranked candidates are joined and returned
    pub max_predictions: usize,
    /// Per-lookup deadline; a timeout counts as "not found"
    pub lookup_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_predictions: 3,
            lookup_timeout: Duration::from_secs(2),
        }
    }
}

/// A scored candidate joined with its reference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(flatten)]
    pub candidate: ScoredCandidate,
    pub reference: ReferenceRecord,
}

/// Result of one `predict` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutcome {
    pub predictions: Vec<PredictionResult>,
    /// Every nonzero candidate, before truncation and the reference join
    pub total_matches: usize,
    pub disclaimer: String,
}

impl PredictionOutcome {
    pub fn top(&self) -> Option<&PredictionResult> {
        self.predictions.first()
    }
}

enum JoinOutcome {
    Joined(PredictionResult),
    NotFound,
    TimedOut,
    Failed(LookupError),
}

/// Symptom-to-disease prediction engine.
///
/// Holds no mutable state; one instance is shared by all requests.
pub struct PredictionEngine {
    model: Arc<KeywordModel>,
    reference: Arc<dyn DiseaseReference>,
    config: EngineConfig,
}

impl PredictionEngine {
    pub fn new(model: Arc<KeywordModel>, reference: Arc<dyn DiseaseReference>) -> Self {
        Self {
            model,
            reference,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn model(&self) -> &KeywordModel {
        &self.model
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// All ranked candidates without the reference join
    pub fn score(&self, symptom_text: &str) -> Vec<ScoredCandidate> {
        score_text(&self.model, symptom_text)
    }

    /// Score `symptom_text`, join the top candidates with the reference store
    /// and drop those that cannot be joined.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReferenceUnavailable`] only when the store was
    /// unreachable for every attempted lookup. Missing records, timeouts and
    /// per-row query failures never fail the call.
    #[instrument(skip(self, symptom_text), fields(symptom_len = symptom_text.len()))]
    pub async fn predict(&self, symptom_text: &str) -> Result<PredictionOutcome, EngineError> {
        let candidates = self.score(symptom_text);
        let total_matches = candidates.len();

        let joins = join_all(
            candidates
                .into_iter()
                .take(self.config.max_predictions)
                .map(|candidate| self.join(candidate)),
        )
        .await;

        let attempted = joins.len();
        let mut unreachable = 0usize;
        let mut last_error = None;
        let mut predictions = Vec::with_capacity(attempted);

        for outcome in joins {
            match outcome {
                JoinOutcome::Joined(result) => predictions.push(result),
                JoinOutcome::NotFound | JoinOutcome::TimedOut => {}
                // a failed query on one row only costs that candidate
                JoinOutcome::Failed(LookupError::Query(_)) => {}
                JoinOutcome::Failed(err @ LookupError::Unavailable(_)) => {
                    unreachable += 1;
                    last_error = Some(err);
                }
            }
        }

        if unreachable == attempted {
            if let Some(err) = last_error {
                warn!(attempted, error = %err, "Reference store unreachable for every lookup");
                return Err(EngineError::ReferenceUnavailable(err));
            }
        }

        info!(
            total_matches,
            returned = predictions.len(),
            dropped = attempted - predictions.len(),
            "Prediction completed"
        );

        Ok(PredictionOutcome {
            predictions,
            total_matches,
            disclaimer: DISCLAIMER.to_string(),
        })
    }

    async fn join(&self, candidate: ScoredCandidate) -> JoinOutcome {
        let lookup = self.reference.find_by_approximate_name(&candidate.disease_key);

        let looked_up = tokio::time::timeout(self.config.lookup_timeout, lookup).await;

        match looked_up {
            Ok(Ok(Some(reference))) => JoinOutcome::Joined(PredictionResult { candidate, reference }),
            Ok(Ok(None)) => {
                debug!(disease_key = %candidate.disease_key, "No reference record, dropping candidate");
                JoinOutcome::NotFound
            }
            Ok(Err(err)) => {
                warn!(
                    disease_key = %candidate.disease_key,
                    error = %err,
                    "Reference lookup failed, dropping candidate"
                );
                JoinOutcome::Failed(err)
            }
            Err(_) => {
                warn!(
                    disease_key = %candidate.disease_key,
                    timeout = ?self.config.lookup_timeout,
                    "Reference lookup timed out, dropping candidate"
                );
                JoinOutcome::TimedOut
            }
        }
    }
}

impl std::fmt::Debug for PredictionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionEngine")
            .field("diseases", &self.model.len())
            .field("config", &self.config)
            .finish()
    }
}
