//! Rule-based symptom matcher for the HomeCare+ engine
//!
//! Free-text symptoms are scored against a weighted keyword model, scores are
//! normalized into bounded confidence percentages, and the best candidates
//! are joined with a disease reference store.
//!
//! # Scoring
//!
//! 1. The input is lowercased; every keyword is tested as a substring.
//! 2. Matched keywords add their weight (1 when unweighted) to the disease's
//!    raw score.
//! 3. `confidence = round(min(raw / max(declared_weight_sum, 1) * 100, 95))`.
//! 4. Candidates are ranked by raw score (stable) and the top three are
//!    joined; candidates without a reference record are dropped.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use symptom_engine::{KeywordModel, PredictionEngine, DiseaseReference};
//!
//! async fn run(reference: Arc<dyn DiseaseReference>) -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = PredictionEngine::new(Arc::new(KeywordModel::builtin()), reference);
//!
//!     let outcome = engine.predict("I have high fever and joint pain").await?;
//!     for prediction in &outcome.predictions {
//!         println!(
//!             "{} ({}%): {:?}",
//!             prediction.reference.disease_name,
//!             prediction.candidate.confidence,
//!             prediction.candidate.matched_keywords,
//!         );
//!     }
//!     println!("{}", outcome.disclaimer);
//!     Ok(())
//! }
//! ```
//!
//! This is not a diagnostic tool: there is no language understanding and no
//! medical accuracy guarantee.

mod builtin;
pub mod engine;
pub mod error;
pub mod history;
pub mod model;
pub mod reference;
pub mod scoring;

pub use engine::*;
pub use error::*;
pub use history::*;
pub use model::*;
pub use reference::*;
pub use scoring::*;
