//! Optional prose-explanation interface.
//!
//! The risk report is complete without any provider; this trait models
//! the external language-model collaborator that can turn a flag into a
//! plain-language explanation, invoked out-of-band so a slow or failing
//! call never blocks the report path.

use async_trait::async_trait;
use serde::Serialize;

use crate::models::AnalysisReport;
use crate::ClauseLensError;

/// Everything a prose explainer needs about one flagged clause.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainRequest {
    pub clause_id: String,
    pub clause_text: String,
    pub category_id: String,
    pub severity: f64,
    /// The catalog rationale, usable as a fallback explanation.
    pub rationale: String,
}

/// External collaborator turning a flag into prose.
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    async fn explain(&self, request: &ExplainRequest) -> Result<String, ClauseLensError>;
}

/// Provider used when no external service is configured. Echoes the
/// catalog rationale so callers always get a usable explanation.
pub struct NoopExplanationProvider;

#[async_trait]
impl ExplanationProvider for NoopExplanationProvider {
    async fn explain(&self, request: &ExplainRequest) -> Result<String, ClauseLensError> {
        Ok(request.rationale.clone())
    }
}

/// Build one request per ranked flag in a finished report.
pub fn explain_requests(report: &AnalysisReport) -> Vec<ExplainRequest> {
    report
        .flags
        .iter()
        .filter_map(|flag| {
            let clause = report.clauses.iter().find(|c| c.clause.id == flag.clause_id)?;
            Some(ExplainRequest {
                clause_id: flag.clause_id.clone(),
                clause_text: clause.clause.text.clone(),
                category_id: flag.category_id.clone(),
                severity: flag.severity,
                rationale: flag.rationale.clone(),
            })
        })
        .collect()
}
