//! Weighted multi-category risk scoring.
//!
//! Each catalog category is tested independently against a clause; every
//! matched trigger contributes `match_strength x weight` to the category's
//! running score, clamped to [0, 1]. A flag is emitted when the score
//! reaches the category's threshold, with severity equal to the score.
//!
//! Match strengths: exact phrase 1.0, fuzzy phrase 0.7, bare keyword 0.6.
//! Multi-word triggers match as phrases, single-word triggers on word
//! boundaries; fuzzy phrase matching runs rapidfuzz normalized Levenshtein
//! similarity over token windows the width of the trigger.

use rapidfuzz::distance::levenshtein;
use std::sync::Arc;

use crate::catalog::RiskCatalog;
use crate::models::{CategoryScore, Classification, Clause, ClauseRisk, RiskFlag};
use crate::utils::text::{contains_word, normalize};

const EXACT_PHRASE_STRENGTH: f64 = 1.0;
const FUZZY_PHRASE_STRENGTH: f64 = 0.7;
const KEYWORD_STRENGTH: f64 = 0.6;

/// Minimum window similarity for a fuzzy phrase match. High enough that
/// only near-misses (typos, OCR noise) qualify, not paraphrases.
const FUZZY_SIMILARITY_FLOOR: f64 = 0.85;

/// Scores clauses against the static risk catalog. The catalog is shared
/// read-only across all analyses.
pub struct RiskScorer {
    catalog: Arc<RiskCatalog>,
}

impl RiskScorer {
    pub fn new(catalog: Arc<RiskCatalog>) -> Self {
        Self { catalog }
    }

    /// Score one classified clause. The classification is accepted for
    /// entity-aware extensions; no current rule is gated on it.
    pub fn score(&self, clause: &Clause, _classification: &Classification) -> ClauseRisk {
        let normalized = normalize(&clause.text);
        let mut scores = Vec::new();
        let mut flags = Vec::new();

        for category in &self.catalog.categories {
            let mut matched = Vec::new();
            let mut raw = 0.0f64;
            for trigger in &category.triggers {
                if let Some(strength) = trigger_strength(&normalized, trigger) {
                    raw += strength * category.weight;
                    matched.push(trigger.clone());
                }
            }
            if matched.is_empty() {
                continue;
            }
            let score = raw.clamp(0.0, 1.0);
            if score >= category.threshold {
                tracing::debug!(
                    clause_id = %clause.id,
                    category = %category.id,
                    score,
                    "risk flag emitted"
                );
                flags.push(RiskFlag {
                    clause_id: clause.id.clone(),
                    clause_index: clause.index,
                    category_id: category.id.clone(),
                    severity: score,
                    matched_triggers: matched.clone(),
                    rationale: category.explanation.clone(),
                    advice: category.advice.clone(),
                });
            }
            scores.push(CategoryScore {
                category_id: category.id.clone(),
                score,
                matched_triggers: matched,
            });
        }

        ClauseRisk { scores, flags }
    }
}

// ---------------------------------------------------------------------------
// Pure functions
// ---------------------------------------------------------------------------

/// Match strength of one trigger against normalized clause text, or `None`
/// when it does not match. Multi-word triggers try exact then fuzzy;
/// single-word triggers match on word boundaries only.
pub(crate) fn trigger_strength(normalized: &str, trigger: &str) -> Option<f64> {
    let trigger = trigger.to_lowercase();
    if trigger.split_whitespace().count() > 1 {
        if contains_word(normalized, &trigger) {
            return Some(EXACT_PHRASE_STRENGTH);
        }
        if best_window_similarity(normalized, &trigger) >= FUZZY_SIMILARITY_FLOOR {
            return Some(FUZZY_PHRASE_STRENGTH);
        }
        return None;
    }
    contains_word(normalized, &trigger).then_some(KEYWORD_STRENGTH)
}

/// Highest normalized Levenshtein similarity between the trigger and any
/// token window of the same width in the text.
pub(crate) fn best_window_similarity(normalized: &str, trigger: &str) -> f64 {
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let width = trigger.split_whitespace().count();
    if width == 0 || words.len() < width {
        return 0.0;
    }
    words
        .windows(width)
        .map(|window| {
            let candidate = window.join(" ");
            levenshtein::normalized_similarity(candidate.chars(), trigger.chars())
        })
        .fold(0.0, f64::max)
}
