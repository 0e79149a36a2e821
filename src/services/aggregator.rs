//! Report assembly: the fan-in point of the pipeline.
//!
//! A pure function of the per-clause results. Given the same inputs it
//! always produces the same report, so regression tests can assert on the
//! serialized output directly.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{
    AnalysisReport, CategorySummary, ClauseAnalysis, Document, KeyTermCount, RiskDistribution,
    RiskFlag, RiskLevel,
};
use crate::utils::text::{count_word, readability};

/// How many of the worst clause-level category scores feed the headline
/// number. Small on purpose: one catastrophic clause should dominate the
/// contract score, not be averaged away.
pub const DEFAULT_TOP_K: usize = 5;

/// Flags below this severity are dropped from the ranked list.
pub const DEFAULT_SEVERITY_FLOOR: f64 = 0.0;

/// Document-level legal terms counted for the report summary.
const KEY_LEGAL_TERMS: &[&str] = &[
    "liability",
    "indemnity",
    "indemnification",
    "termination",
    "confidentiality",
    "arbitration",
    "jurisdiction",
    "payment",
    "damages",
    "warranty",
];

pub struct Aggregator {
    top_k: usize,
    severity_floor: f64,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            severity_floor: DEFAULT_SEVERITY_FLOOR,
        }
    }

    pub fn with_config(top_k: usize, severity_floor: f64) -> Self {
        Self {
            top_k,
            severity_floor,
        }
    }

    /// Assemble the terminal report from all per-clause results.
    pub fn aggregate(&self, document: &Document, clauses: Vec<ClauseAnalysis>) -> AnalysisReport {
        let clause_scores: Vec<(f64, usize)> = clauses
            .iter()
            .flat_map(|c| {
                c.risk
                    .scores
                    .iter()
                    .map(move |s| (s.score, c.clause.index))
            })
            .collect();
        let contract_score = top_k_mean(clause_scores, self.top_k);
        let risk_level = RiskLevel::from_score(contract_score);

        let flags = ranked_flags(&clauses, self.severity_floor);

        let mut functional_counts: BTreeMap<String, usize> = BTreeMap::new();
        for analysis in &clauses {
            *functional_counts
                .entry(analysis.classification.category.label().to_string())
                .or_insert(0) += 1;
        }

        let category_summaries = summarize_categories(&clauses);

        let mut risk_distribution = RiskDistribution::default();
        for analysis in &clauses {
            match analysis.risk.risk_level() {
                RiskLevel::Low => risk_distribution.low += 1,
                RiskLevel::Medium => risk_distribution.medium += 1,
                RiskLevel::High => risk_distribution.high += 1,
            }
        }

        let recommendations = build_recommendations(risk_level, &flags, risk_distribution.high);
        let key_terms = count_key_terms(&document.text);
        let readability = readability(&document.text);

        AnalysisReport {
            document_id: document.id.clone(),
            language: document.language.clone(),
            clauses,
            contract_score,
            risk_level,
            flags,
            functional_counts,
            category_summaries,
            risk_distribution,
            recommendations,
            key_terms,
            readability,
        }
    }
}

// ---------------------------------------------------------------------------
// Pure functions
// ---------------------------------------------------------------------------

/// Mean of the top-k scores, ties broken by document order. Empty input
/// yields 0.0.
pub(crate) fn top_k_mean(mut scores: Vec<(f64, usize)>, k: usize) -> f64 {
    if scores.is_empty() || k == 0 {
        return 0.0;
    }
    scores.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });
    let take = scores.len().min(k);
    scores[..take].iter().map(|(score, _)| score).sum::<f64>() / take as f64
}

/// All flags at or above the floor, severity descending with document
/// order breaking ties.
pub(crate) fn ranked_flags(clauses: &[ClauseAnalysis], severity_floor: f64) -> Vec<RiskFlag> {
    let mut flags: Vec<RiskFlag> = clauses
        .iter()
        .flat_map(|c| c.risk.flags.iter().cloned())
        .filter(|f| f.severity >= severity_floor)
        .collect();
    flags.sort_by(|a, b| {
        b.severity
            .partial_cmp(&a.severity)
            .unwrap_or(Ordering::Equal)
            .then(a.clause_index.cmp(&b.clause_index))
    });
    flags
}

/// Count and mean score per risk category, sorted by category id.
pub(crate) fn summarize_categories(clauses: &[ClauseAnalysis]) -> Vec<CategorySummary> {
    let mut totals: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for analysis in clauses {
        for score in &analysis.risk.scores {
            let entry = totals.entry(score.category_id.as_str()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += score.score;
        }
    }
    totals
        .into_iter()
        .map(|(category_id, (count, sum))| {
            let mean_score = sum / count as f64;
            CategorySummary {
                category_id: category_id.to_string(),
                count,
                mean_score,
                level: RiskLevel::from_score(mean_score),
            }
        })
        .collect()
}

/// Actionable next steps: an overall call first, then per-category advice
/// in ranked-flag order, deduplicated.
pub(crate) fn build_recommendations(
    risk_level: RiskLevel,
    flags: &[RiskFlag],
    high_risk_clauses: usize,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    match risk_level {
        RiskLevel::High => recommendations.push(
            "This contract carries high overall risk; obtain professional legal review before signing."
                .to_string(),
        ),
        RiskLevel::Medium => recommendations.push(
            "Several terms warrant negotiation; review the flagged clauses before signing."
                .to_string(),
        ),
        RiskLevel::Low => {}
    }
    if high_risk_clauses > 0 {
        recommendations.push(format!(
            "Prioritize renegotiation of the {} high-risk clause(s).",
            high_risk_clauses
        ));
    }
    let mut seen = Vec::new();
    for flag in flags {
        if seen.contains(&flag.category_id.as_str()) {
            continue;
        }
        seen.push(flag.category_id.as_str());
        recommendations.push(flag.advice.clone());
    }
    if recommendations.is_empty() {
        recommendations
            .push("No significant risk patterns detected; standard review recommended.".to_string());
    }
    recommendations
}

/// Frequencies of key legal terms across the whole document, highest
/// count first, alphabetical among equals. Zero-count terms are omitted.
pub(crate) fn count_key_terms(text: &str) -> Vec<KeyTermCount> {
    let lowered = text.to_lowercase();
    let mut counts: Vec<KeyTermCount> = KEY_LEGAL_TERMS
        .iter()
        .map(|term| KeyTermCount {
            term: term.to_string(),
            count: count_word(&lowered, term),
        })
        .filter(|kt| kt.count > 0)
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.term.cmp(&b.term)));
    counts
}
