//! The end-to-end analysis pipeline.
//!
//! Scatter/gather per document: segmentation runs up front, then
//! classification, risk scoring, and template matching fan out per clause
//! (no clause depends on another clause's result) and fan back in at the
//! aggregator. The stages themselves are synchronous pure code; only the
//! orchestration is async. Dropping the returned future cancels all
//! per-clause work for this document and nothing else.

use futures::future::join_all;
use std::sync::Arc;

use crate::catalog::{RiskCatalog, TemplateCorpus};
use crate::models::{AnalysisReport, ClauseAnalysis, Document};
use crate::services::{Aggregator, Classifier, RiskScorer, Segmenter, TemplateMatcher};
use crate::ClauseLensError;

pub struct AnalysisPipeline {
    segmenter: Segmenter,
    classifier: Classifier,
    scorer: RiskScorer,
    matcher: TemplateMatcher,
    aggregator: Aggregator,
}

impl AnalysisPipeline {
    /// Wire the pipeline against loaded catalogs. The catalogs are shared
    /// read-only; every analysis sees the same snapshot.
    pub fn new(
        catalog: Arc<RiskCatalog>,
        corpus: Arc<TemplateCorpus>,
    ) -> Result<Self, ClauseLensError> {
        Ok(Self {
            segmenter: Segmenter::new()?,
            classifier: Classifier::new()?,
            scorer: RiskScorer::new(catalog),
            matcher: TemplateMatcher::new(corpus),
            aggregator: Aggregator::new(),
        })
    }

    /// Analyze one document. An empty document yields an empty report
    /// with contract score 0, not an error.
    pub async fn analyze(&self, document: &Document) -> AnalysisReport {
        let clauses = self.segmenter.segment(document);
        tracing::info!(
            document_id = %document.id,
            clause_count = clauses.len(),
            "segmentation complete"
        );

        let analyses: Vec<ClauseAnalysis> = join_all(clauses.into_iter().map(|clause| async {
            let classification = self.classifier.classify(&clause);
            let risk = self.scorer.score(&clause, &classification);
            let template_match = self.matcher.match_clause(&clause, classification.category);
            ClauseAnalysis {
                clause,
                classification,
                risk,
                template_match,
            }
        }))
        .await;

        let report = self.aggregator.aggregate(document, analyses);
        tracing::info!(
            document_id = %document.id,
            contract_score = report.contract_score,
            risk_level = report.risk_level.label(),
            flag_count = report.flags.len(),
            "analysis complete"
        );
        report
    }
}
