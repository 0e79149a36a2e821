use serde::{Deserialize, Serialize};

/// Template matcher output for one clause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub clause_id: String,
    /// Best-matching template corpus entry, or `None` below the similarity floor.
    pub template_id: Option<String>,
    /// Lexical-overlap similarity in [0, 1].
    pub similarity: f64,
    /// Missing key elements when matched; explains the no-match otherwise.
    pub gap: String,
}

impl MatchResult {
    pub fn no_match(clause_id: impl Into<String>) -> Self {
        Self {
            clause_id: clause_id.into(),
            template_id: None,
            similarity: 0.0,
            gap: "no comparable standard clause found".to_string(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.template_id.is_some()
    }
}
