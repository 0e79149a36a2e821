//! Rule-based clause classification and entity extraction.
//!
//! Category assignment is first-match-wins over an ordered rule table:
//! Prohibition > Obligation > Right > Definition > Other. Prohibition is
//! checked before Obligation because "shall not" satisfies both surface
//! patterns and restrictive language must not be under-flagged.
//!
//! Entity extraction is pattern-driven: party role nouns, dates, money
//! amounts, durations, obligation verbs, and quoted defined terms.

use regex::Regex;

use crate::models::{Clause, Classification, ClauseCategory, Entity, EntityKind, Span};
use crate::utils::text::{alpha_ratio, contains_word, normalize, tokenize};
use crate::ClauseLensError;

/// Below this fraction of alphabetic content the input is treated as
/// non-linguistic (tables, number grids) and classified Other.
const NON_LINGUISTIC_ALPHA_FLOOR: f64 = 0.3;

/// Definition markers must appear within this many leading tokens for the
/// clause to read as "X means Y" rather than incidental use of the word.
const DEFINITION_TOKEN_WINDOW: usize = 12;

const PROHIBITION_MODALS: &[&str] = &[
    "shall not",
    "must not",
    "may not",
    "will not",
    "is prohibited from",
    "are prohibited from",
    "is not permitted to",
    "is not entitled to",
];

const OBLIGATION_MODALS: &[&str] = &[
    "shall",
    "must",
    "is required to",
    "are required to",
    "is obligated to",
    "agrees to",
    "undertakes to",
];

const PERMISSIVE_MODALS: &[&str] = &[
    "may",
    "is entitled to",
    "are entitled to",
    "has the right to",
    "have the right to",
    "reserves the right to",
];

const DEFINITION_MARKERS: &[&str] = &["means", "shall mean", "refers to", "is defined as"];

/// Vague standards that leave performance criteria undefined.
const HEDGING_TERMS: &[&str] = &[
    "reasonable",
    "commercially reasonable",
    "best efforts",
    "as needed",
    "as appropriate",
    "at its discretion",
    "at their discretion",
    "from time to time",
    "promptly",
    "timely",
    "material",
    "substantially",
];

/// Modal family detected in a clause. Used for classification priority and
/// the mixed-modal ambiguity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalFamily {
    Prohibition,
    Obligation,
    Permissive,
}

/// Pattern-driven clause classifier. Stateless apart from compiled
/// patterns; safe to share across threads.
pub struct Classifier {
    party: Regex,
    date: Regex,
    amount: Regex,
    duration: Regex,
    obligation_verb: Regex,
    defined_term: Regex,
}

impl Classifier {
    pub fn new() -> Result<Self, ClauseLensError> {
        Ok(Self {
            party: compile(
                r"(?i)\b(?:service provider|receiving party|disclosing party|client|contractor|company|supplier|vendor|licensor|licensee|consultant|employer|employee|customer|lessor|lessee|part(?:y|ies))\b",
            )?,
            date: compile(
                r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b|\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b",
            )?,
            amount: compile(r"(?:₹|Rs\.?\s?|INR\s?|\$|USD\s?)[\d,]+(?:\.\d+)?")?,
            duration: compile(r"(?i)\b\d+\s+(?:calendar\s+|business\s+)?(?:day|week|month|year)s?\b")?,
            obligation_verb: compile(
                r"(?i)\b(?:shall(?:\s+not)?|must(?:\s+not)?|is\s+required\s+to|is\s+obligated\s+to|agrees?\s+to|undertakes?\s+to)\b",
            )?,
            defined_term: compile(r#""([A-Z][A-Za-z0-9 \-]{1,40})""#)?,
        })
    }

    /// Classify one clause. Never errors: non-linguistic input yields
    /// Other with no entities.
    pub fn classify(&self, clause: &Clause) -> Classification {
        let text = clause.text.as_str();
        if alpha_ratio(text) < NON_LINGUISTIC_ALPHA_FLOOR {
            tracing::debug!(clause_id = %clause.id, "non-linguistic input, classified Other");
            return Classification {
                category: ClauseCategory::Other,
                entities: Vec::new(),
                ambiguous: true,
                ambiguity_reasons: vec!["non-linguistic input".to_string()],
            };
        }

        let normalized = normalize(text);
        let entities = self.extract_entities(text);
        let families = modal_families(&normalized);

        let mut ambiguity_reasons = Vec::new();
        let category = if families.contains(&ModalFamily::Prohibition) {
            ClauseCategory::Prohibition
        } else if families.contains(&ModalFamily::Obligation) {
            if !has_named_subject(text, &entities) {
                ambiguity_reasons.push("obligation without a named subject".to_string());
            }
            ClauseCategory::Obligation
        } else if families.contains(&ModalFamily::Permissive) {
            ClauseCategory::Right
        } else if has_definition_structure(&normalized) {
            ClauseCategory::Definition
        } else {
            ambiguity_reasons.push("no category rule matched".to_string());
            ClauseCategory::Other
        };

        if families.len() > 1 {
            ambiguity_reasons.push(format!(
                "mixes {} modal types in one clause",
                families.len()
            ));
        }
        let hedges = hedging_terms_in(&normalized);
        if !hedges.is_empty() && !has_defined_standard(&entities) {
            ambiguity_reasons.push(format!(
                "hedging language without a defined standard: {}",
                hedges.join(", ")
            ));
        }

        Classification {
            category,
            entities,
            ambiguous: !ambiguity_reasons.is_empty(),
            ambiguity_reasons,
        }
    }

    fn extract_entities(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();
        for (regex, kind) in [
            (&self.party, EntityKind::Party),
            (&self.date, EntityKind::Date),
            (&self.amount, EntityKind::Amount),
            (&self.duration, EntityKind::Duration),
            (&self.obligation_verb, EntityKind::ObligationVerb),
        ] {
            for m in regex.find_iter(text) {
                entities.push(Entity::new(
                    kind,
                    m.as_str().to_string(),
                    Span::new(m.start(), m.end()),
                ));
            }
        }
        for caps in self.defined_term.captures_iter(text) {
            if let Some(term) = caps.get(1) {
                entities.push(Entity::new(
                    EntityKind::DefinedTerm,
                    term.as_str().to_string(),
                    Span::new(term.start(), term.end()),
                ));
            }
        }
        entities.sort_by_key(|e| (e.span.start, e.span.end));
        entities
    }
}

fn compile(pattern: &str) -> Result<Regex, ClauseLensError> {
    Regex::new(pattern)
        .map_err(|e| ClauseLensError::Configuration(format!("invalid entity pattern: {}", e)))
}

// ---------------------------------------------------------------------------
// Pure functions
// ---------------------------------------------------------------------------

/// Distinct modal families present in normalized text. Prohibition
/// phrases are masked out before the weaker families are tested so that
/// "shall not" does not also count as an obligation modal.
pub(crate) fn modal_families(normalized: &str) -> Vec<ModalFamily> {
    let mut families = Vec::new();
    let mut masked = normalized.to_string();
    if PROHIBITION_MODALS.iter().any(|m| contains_word(&masked, m)) {
        families.push(ModalFamily::Prohibition);
        for modal in PROHIBITION_MODALS {
            masked = masked.replace(modal, " ");
        }
    }
    if OBLIGATION_MODALS.iter().any(|m| contains_word(&masked, m)) {
        families.push(ModalFamily::Obligation);
        for modal in OBLIGATION_MODALS {
            masked = masked.replace(modal, " ");
        }
    }
    if PERMISSIVE_MODALS.iter().any(|m| contains_word(&masked, m)) {
        families.push(ModalFamily::Permissive);
    }
    families
}

/// Whether the clause reads as a definition: a marker phrase within the
/// leading token window.
pub(crate) fn has_definition_structure(normalized: &str) -> bool {
    let head: Vec<String> = tokenize(normalized)
        .into_iter()
        .take(DEFINITION_TOKEN_WINDOW)
        .collect();
    let head = head.join(" ");
    DEFINITION_MARKERS.iter().any(|m| contains_word(&head, m))
}

/// Hedging terms present in normalized text, longest-first so
/// "commercially reasonable" is reported instead of bare "reasonable".
pub(crate) fn hedging_terms_in(normalized: &str) -> Vec<&'static str> {
    let mut sorted: Vec<&'static str> = HEDGING_TERMS.to_vec();
    sorted.sort_by_key(|t| std::cmp::Reverse(t.len()));
    let mut masked = normalized.to_string();
    let mut found = Vec::new();
    for term in sorted {
        if contains_word(&masked, term) {
            found.push(term);
            masked = masked.replace(term, " ");
        }
    }
    found
}

/// A concrete quantity (amount, duration, date) counts as a defined
/// standard and suppresses the hedging flag.
fn has_defined_standard(entities: &[Entity]) -> bool {
    entities.iter().any(|e| {
        matches!(
            e.kind,
            EntityKind::Amount | EntityKind::Duration | EntityKind::Date
        )
    })
}

/// An obligation needs someone bound by it: a party entity or any
/// capitalized word beyond the sentence start.
fn has_named_subject(text: &str, entities: &[Entity]) -> bool {
    if entities.iter().any(|e| e.kind == EntityKind::Party) {
        return true;
    }
    text.split_whitespace()
        .skip(1)
        .any(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
}
