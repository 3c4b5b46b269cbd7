//! Keyword scoring and confidence normalization
//!
//! Matching is a plain substring test of each keyword against the lowercased
//! input. There is no tokenization: multi-word keywords must appear
//! contiguously and short keywords also match inside longer words
//! ("cough" matches "coughing at night").

use serde::{Deserialize, Serialize};

use crate::model::{KeywordModel, KeywordProfile};

/// Confidence is capped so a match never claims certainty
pub const MAX_CONFIDENCE: u8 = 95;

/// A disease with a nonzero match score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub disease_key: String,
    pub confidence: u8,
    pub matched_keywords: Vec<String>,
    pub raw_score: u32,
}

/// `round(min(raw / max(max_possible, 1) * 100, 95))`
pub fn confidence(raw_score: u32, max_possible_score: u32) -> u8 {
    let denominator = f64::from(max_possible_score.max(1));
    let percent = (f64::from(raw_score) / denominator * 100.0).min(f64::from(MAX_CONFIDENCE));

    // bounded to 0..=95 above
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = percent.round() as u8;
    rounded
}

/// Score one profile against already-lowercased text
pub fn score_profile(profile: &KeywordProfile, normalized_text: &str) -> Option<ScoredCandidate> {
    let mut raw_score = 0u32;
    let mut matched_keywords = Vec::new();

    for keyword in &profile.keywords {
        if normalized_text.contains(keyword.as_str()) {
            raw_score = raw_score.saturating_add(profile.weight_of(keyword));
            matched_keywords.push(keyword.clone());
        }
    }

    if raw_score == 0 {
        return None;
    }

    Some(ScoredCandidate {
        disease_key: profile.disease_key.clone(),
        confidence: confidence(raw_score, profile.max_possible_score()),
        matched_keywords,
        raw_score,
    })
}

/// All candidates for `symptom_text`, ranked by raw score descending.
/// Ties keep model declaration order.
pub fn score_text(model: &KeywordModel, symptom_text: &str) -> Vec<ScoredCandidate> {
    let normalized = symptom_text.to_lowercase();

    let mut candidates: Vec<ScoredCandidate> = model
        .profiles()
        .iter()
        .filter_map(|profile| score_profile(profile, &normalized))
        .collect();

    // stable
    candidates.sort_by(|a, b| b.raw_score.cmp(&a.raw_score));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn keys(candidates: &[ScoredCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.disease_key.as_str()).collect()
    }

    #[test]
    fn test_dengue_example() {
        let model = KeywordModel::builtin();
        let candidates = score_text(&model, "I have high fever and joint pain");

        let dengue = candidates.first().unwrap();
        assert_eq!(dengue.disease_key, "dengue");
        assert_eq!(dengue.matched_keywords, vec!["high fever", "joint pain"]);
        assert_eq!(dengue.raw_score, 5);
        assert_eq!(dengue.confidence, 50);
    }

    #[test]
    fn test_substring_matching_reaches_other_profiles() {
        let model = KeywordModel::builtin();
        let candidates = score_text(&model, "I have high fever and joint pain");

        // "fever" is found inside "high fever"
        assert_eq!(
            keys(&candidates),
            vec![
                "dengue",
                "chikungunya",
                "pneumonia",
                "tuberculosis",
                "hepatitis",
                "gastroenteritis"
            ]
        );
        let chikungunya = candidates.get(1).unwrap();
        assert_eq!(chikungunya.raw_score, 3);
        assert_eq!(chikungunya.confidence, 33);
    }

    #[test]
    fn test_no_keywords_no_candidates() {
        let model = KeywordModel::builtin();
        assert!(score_text(&model, "I feel great today").is_empty());
        assert!(score_text(&model, "").is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let model = KeywordModel::builtin();
        let upper = score_text(&model, "WHEEZING and Shortness Of Breath");
        let asthma = upper.first().unwrap();
        assert_eq!(asthma.disease_key, "asthma");
        assert_eq!(asthma.raw_score, 7);
        assert_eq!(asthma.confidence, 78);
    }

    #[test]
    fn test_ties_keep_model_order() {
        let model = KeywordModel::builtin();
        let candidates = score_text(&model, "bad headache");
        assert_eq!(
            keys(&candidates),
            vec!["dengue", "typhoid", "malaria", "hypertension", "chikungunya"]
        );
        assert!(candidates.iter().all(|c| c.raw_score == 1));
    }

    #[test]
    fn test_orphan_weight_inflates_denominator() {
        let model = KeywordModel::builtin();
        let candidates = score_text(&model, "severe headache");
        let hypertension = candidates
            .iter()
            .find(|c| c.disease_key == "hypertension")
            .unwrap();

        // only "headache" matches; "severe headache" is not a keyword
        assert_eq!(hypertension.matched_keywords, vec!["headache"]);
        assert_eq!(hypertension.raw_score, 1);
        assert_eq!(hypertension.confidence, 17);
    }

    #[test]
    fn test_confidence_is_capped() {
        let model = KeywordModel::builtin();
        let candidates = score_text(
            &model,
            "runny nose, sneezing, sore throat, mild fever, cough and congestion",
        );
        let cold = candidates
            .iter()
            .find(|c| c.disease_key == "common cold")
            .unwrap();
        assert_eq!(cold.raw_score, 9);
        assert_eq!(cold.confidence, MAX_CONFIDENCE);
    }

    #[test]
    fn test_unweighted_profile_uses_denominator_of_one() {
        let profile = KeywordProfile::new("sprain", ["swelling", "bruising"], Vec::<(String, u32)>::new());
        let candidate = score_profile(&profile, "swelling and bruising").unwrap();
        assert_eq!(candidate.raw_score, 2);
        assert_eq!(candidate.confidence, 95);

        assert_eq!(confidence(0, 0), 0);
    }

    #[test]
    fn test_overlapping_keywords_are_not_deduplicated() {
        let model = KeywordModel::builtin();
        let candidates = score_text(&model, "persistent cough");
        let tb = candidates.first().unwrap();
        assert_eq!(tb.disease_key, "tuberculosis");
        assert_eq!(tb.matched_keywords, vec!["persistent cough", "cough"]);
        assert_eq!(tb.raw_score, 4);
    }

    proptest! {
        #[test]
        fn prop_confidence_is_bounded(raw in 0u32..10_000, max in 0u32..10_000) {
            prop_assert!(confidence(raw, max) <= MAX_CONFIDENCE);
        }

        #[test]
        fn prop_confidence_is_monotonic_in_raw_score(a in 0u32..500, b in 0u32..500, max in 0u32..100) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(confidence(low, max) <= confidence(high, max));
        }

        #[test]
        fn prop_scoring_is_idempotent(text in "[a-z ]{0,60}") {
            let model = KeywordModel::builtin();
            prop_assert_eq!(score_text(&model, &text), score_text(&model, &text));
        }

        #[test]
        fn prop_candidates_sorted_and_bounded(text in "(fever|cough|rash|chills|headache|nausea|wheezing| )*") {
            let model = KeywordModel::builtin();
            let candidates = score_text(&model, &text);
            let sorted = candidates.windows(2).all(|w| match w {
                [a, b] => a.raw_score >= b.raw_score,
                _ => true,
            });
            prop_assert!(sorted);
            prop_assert!(candidates.iter().all(|c| c.raw_score >= 1 && c.confidence <= MAX_CONFIDENCE));
        }
    }
}
