use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Clause, ClauseCategory, ClauseRisk, Entity, MatchResult, RiskFlag, RiskLevel};

/// Classifier output for one clause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub category: ClauseCategory,
    pub entities: Vec<Entity>,
    /// Raised for hedging language, mixed modal types, or a low-support
    /// fall-through to Other.
    pub ambiguous: bool,
    pub ambiguity_reasons: Vec<String>,
}

/// Per-clause assembly of all three analysis stage outputs.
///
/// Each stage writes only its own field; nothing is rewritten downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseAnalysis {
    pub clause: Clause,
    pub classification: Classification,
    pub risk: ClauseRisk,
    pub template_match: MatchResult,
}

/// Count and mean score of one risk category across the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category_id: String,
    pub count: usize,
    pub mean_score: f64,
    pub level: RiskLevel,
}

/// How many clauses fall in each risk band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Document-level frequency of a key legal term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyTermCount {
    pub term: String,
    pub count: usize,
}

/// Basic readability metrics over the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    /// 0-100, higher reads easier.
    pub score: f64,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub level: String,
}

/// Terminal artifact of the pipeline.
///
/// A pure function of the per-clause results: no wall-clock fields, no
/// environment-dependent content, so identical inputs serialize identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub document_id: String,
    pub language: String,
    pub clauses: Vec<ClauseAnalysis>,
    /// Mean of the top-K clause-level category scores.
    pub contract_score: f64,
    pub risk_level: RiskLevel,
    /// All flags at or above the severity floor, ranked by severity
    /// descending with document order breaking ties.
    pub flags: Vec<RiskFlag>,
    /// Clauses per functional category.
    pub functional_counts: BTreeMap<String, usize>,
    /// Per-risk-category stats, sorted by category id.
    pub category_summaries: Vec<CategorySummary>,
    pub risk_distribution: RiskDistribution,
    pub recommendations: Vec<String>,
    pub key_terms: Vec<KeyTermCount>,
    pub readability: ReadabilityMetrics,
}

impl AnalysisReport {
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn high_risk_clause_count(&self) -> usize {
        self.clauses
            .iter()
            .filter(|c| c.risk.risk_level() == RiskLevel::High)
            .count()
    }
}
