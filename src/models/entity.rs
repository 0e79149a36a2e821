use serde::{Deserialize, Serialize};

use crate::models::Span;

/// Kind of entity surfaced inside a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Party,
    Date,
    Amount,
    Duration,
    ObligationVerb,
    DefinedTerm,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Party => "party",
            EntityKind::Date => "date",
            EntityKind::Amount => "amount",
            EntityKind::Duration => "duration",
            EntityKind::ObligationVerb => "obligation_verb",
            EntityKind::DefinedTerm => "defined_term",
        }
    }
}

/// A surface mention located within a single clause.
///
/// The span is relative to the clause text, not the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub text: String,
    pub span: Span,
}

impl Entity {
    pub fn new(kind: EntityKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}
