//! End-to-end pipeline tests over realistic contract texts.
//!
//! Purpose: verify the full segment -> classify -> score -> match ->
//! aggregate path produces coherent reports for both one-sided and
//! balanced agreements.

mod common;

use clauselens::models::{AnalysisReport, ClauseCategory, Document, RiskLevel};
use common::{default_pipeline, BALANCED_CONTRACT, RISKY_CONTRACT};

#[tokio::test]
async fn risky_contract_scores_high_with_ranked_flags() {
    let document = Document::new(RISKY_CONTRACT, "en");
    let report = default_pipeline().analyze(&document).await;

    assert!(report.clause_count() >= 4, "numbered sections must segment");
    assert_eq!(report.risk_level, RiskLevel::High);
    assert!(report.contract_score >= 0.6);

    let flagged: Vec<&str> = report
        .flags
        .iter()
        .map(|f| f.category_id.as_str())
        .collect();
    assert!(flagged.contains(&"unlimited_liability"));
    assert!(flagged.contains(&"unilateral_termination"));
    assert!(flagged.contains(&"auto_renewal"));
    assert!(flagged.contains(&"waiver_of_rights"));

    for pair in report.flags.windows(2) {
        assert!(
            pair[0].severity >= pair[1].severity,
            "flags must rank worst-first"
        );
    }
    for flag in &report.flags {
        assert!(!flag.matched_triggers.is_empty(), "flags carry evidence");
        assert!(!flag.rationale.is_empty());
        assert!(!flag.advice.is_empty());
    }
}

#[tokio::test]
async fn balanced_contract_raises_no_flags() {
    let document = Document::new(BALANCED_CONTRACT, "en");
    let report = default_pipeline().analyze(&document).await;

    assert_eq!(report.clause_count(), 3);
    assert!(report.flags.is_empty(), "flags: {:?}", report.flags);
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert_eq!(
        report.recommendations,
        vec!["No significant risk patterns detected; standard review recommended.".to_string()]
    );
}

#[tokio::test]
async fn balanced_payment_clause_matches_reference_template() {
    let document = Document::new(BALANCED_CONTRACT, "en");
    let report = default_pipeline().analyze(&document).await;

    let payment = report
        .clauses
        .iter()
        .find(|c| c.clause.text.contains("receipt of invoice"))
        .expect("payment clause must be segmented");
    assert_eq!(payment.classification.category, ClauseCategory::Obligation);
    assert_eq!(
        payment.template_match.template_id.as_deref(),
        Some("payment_terms")
    );
    assert!(payment.template_match.similarity >= 0.3);
}

#[tokio::test]
async fn functional_counts_cover_every_clause() {
    let document = Document::new(RISKY_CONTRACT, "en");
    let report = default_pipeline().analyze(&document).await;

    let counted: usize = report.functional_counts.values().sum();
    assert_eq!(counted, report.clause_count());

    let prohibition = report
        .clauses
        .iter()
        .find(|c| c.clause.text.contains("shall not engage"))
        .expect("restriction clause must be segmented");
    assert_eq!(
        prohibition.classification.category,
        ClauseCategory::Prohibition
    );
}

#[tokio::test]
async fn empty_document_yields_empty_report() {
    let document = Document::new("", "en");
    let report = default_pipeline().analyze(&document).await;

    assert_eq!(report.clause_count(), 0);
    assert_eq!(report.contract_score, 0.0);
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert!(report.flags.is_empty());
}

#[tokio::test]
async fn report_round_trips_through_json() {
    let document = Document::new(RISKY_CONTRACT, "en");
    let report = default_pipeline().analyze(&document).await;

    let json = serde_json::to_string(&report).expect("serialize");
    let parsed: AnalysisReport = serde_json::from_str(&json).expect("deserialize");
    let rejson = serde_json::to_string(&parsed).expect("reserialize");
    assert_eq!(json, rejson);
}
