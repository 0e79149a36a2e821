//! Similarity matching against the reference template corpus.
//!
//! Similarity is Jaccard overlap of significant terms between the clause
//! and each candidate's canonical text and variants, taking the maximum.
//! Lexical overlap keeps the result explainable: the matched terms are the
//! evidence. The candidate pool is narrowed to the clause's functional
//! category; cross-category similarity would suggest nonsensical
//! replacements.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::{TemplateClause, TemplateCorpus};
use crate::models::{Clause, ClauseCategory, MatchResult};
use crate::utils::text::{contains_word, jaccard, normalize, significant_terms};

/// Similarity below this floor reports no match rather than a misleading one.
pub const MIN_SIMILARITY: f64 = 0.3;

/// Key elements a safe template typically pins down. A gap is reported
/// when the template carries the element and the clause does not.
const KEY_ELEMENTS: &[(&str, &[&str])] = &[
    ("a defined timeline", &["days", "months", "weeks"]),
    ("a liability cap", &["exceed", "cap", "capped", "lower"]),
    ("a notice requirement", &["notice", "notify"]),
    ("mutual obligations", &["either party", "both parties", "each party", "mutual"]),
    ("an opportunity to cure", &["cure", "rectified", "remedy"]),
];

/// Matches clauses against the shared read-only template corpus.
pub struct TemplateMatcher {
    corpus: Arc<TemplateCorpus>,
    min_similarity: f64,
}

impl TemplateMatcher {
    pub fn new(corpus: Arc<TemplateCorpus>) -> Self {
        Self {
            corpus,
            min_similarity: MIN_SIMILARITY,
        }
    }

    /// Build a matcher with a custom similarity floor. Mostly useful in
    /// tests.
    pub fn with_floor(corpus: Arc<TemplateCorpus>, min_similarity: f64) -> Self {
        Self {
            corpus,
            min_similarity,
        }
    }

    /// Find the closest reference clause, or report that none compares.
    pub fn match_clause(&self, clause: &Clause, category: ClauseCategory) -> MatchResult {
        let clause_terms = significant_terms(&clause.text);
        if clause_terms.is_empty() {
            return MatchResult::no_match(clause.id.clone());
        }

        let candidates = self.candidate_pool(category);
        let mut best: Option<(&TemplateClause, f64)> = None;
        for template in candidates {
            let similarity = template_similarity(&clause_terms, template);
            let improves = best.map_or(true, |(_, s)| similarity > s);
            if improves {
                best = Some((template, similarity));
            }
        }

        match best {
            Some((template, similarity)) if similarity >= self.min_similarity => {
                let gaps = key_element_gaps(&normalize(&clause.text), &normalize(&template.text));
                let gap = if gaps.is_empty() {
                    format!("covers the key elements of '{}'", template.title)
                } else {
                    format!("missing {}", gaps.join(", "))
                };
                MatchResult {
                    clause_id: clause.id.clone(),
                    template_id: Some(template.id.clone()),
                    similarity,
                    gap,
                }
            }
            _ => MatchResult::no_match(clause.id.clone()),
        }
    }

    /// Templates sharing the clause's category; the full corpus when the
    /// category is Other or has no templates.
    fn candidate_pool(&self, category: ClauseCategory) -> Vec<&TemplateClause> {
        if category != ClauseCategory::Other {
            let narrowed = self.corpus.by_category(category);
            if !narrowed.is_empty() {
                return narrowed;
            }
        }
        self.corpus.templates.iter().collect()
    }
}

// ---------------------------------------------------------------------------
// Pure functions
// ---------------------------------------------------------------------------

/// Best Jaccard similarity against a template's canonical text and all of
/// its variants.
pub(crate) fn template_similarity(
    clause_terms: &HashSet<String>,
    template: &TemplateClause,
) -> f64 {
    let mut best = jaccard(clause_terms, &significant_terms(&template.text));
    for variant in &template.variants {
        best = best.max(jaccard(clause_terms, &significant_terms(variant)));
    }
    best
}

/// Key elements the template pins down that the clause leaves open.
pub(crate) fn key_element_gaps(clause_norm: &str, template_norm: &str) -> Vec<&'static str> {
    let mut gaps = Vec::new();
    for (label, markers) in KEY_ELEMENTS {
        let in_template = markers.iter().any(|m| contains_word(template_norm, m));
        let in_clause = markers.iter().any(|m| contains_word(clause_norm, m));
        if in_template && !in_clause {
            gaps.push(*label);
        }
    }
    let template_has_number = template_norm.chars().any(|c| c.is_ascii_digit());
    let clause_has_number = clause_norm.chars().any(|c| c.is_ascii_digit());
    if template_has_number && !clause_has_number {
        gaps.push("specific amounts or periods");
    }
    gaps
}
