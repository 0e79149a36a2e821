//! Data-directory catalog loading and override behavior.
//!
//! Purpose: verify that catalogs placed in a data directory replace the
//! embedded defaults, that missing files fall back cleanly, and that
//! invalid files fail loudly instead of silently degrading.

mod common;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clauselens::catalog::{
    resolve_data_path, RiskCatalog, TemplateCorpus, RISK_CATALOG_FILE, TEMPLATE_CORPUS_FILE,
};
use clauselens::models::Document;
use clauselens::services::AnalysisPipeline;
use clauselens::ClauseLensError;
use common::RISKY_CONTRACT;

const SINGLE_CATEGORY_CATALOG: &str = r#"
[[categories]]
id = "unlimited_liability"
label = "Unlimited Liability"
triggers = ["liable for all", "without limit"]
weight = 1.0
threshold = 0.3
explanation = "Exposes you to unlimited financial risk."
advice = "Negotiate a liability cap."
"#;

#[test]
fn data_directory_catalog_overrides_embedded() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join(RISK_CATALOG_FILE), SINGLE_CATEGORY_CATALOG).expect("write catalog");

    let catalog = RiskCatalog::load(Some(dir.path())).expect("load from directory");
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("unlimited_liability").is_some());
    assert!(catalog.get("arbitration").is_none());
}

#[test]
fn missing_files_fall_back_to_embedded() {
    let dir = tempfile::tempdir().expect("temp dir");

    let catalog = RiskCatalog::load(Some(dir.path())).expect("embedded fallback");
    let corpus = TemplateCorpus::load(Some(dir.path())).expect("embedded fallback");
    assert_eq!(catalog.len(), 14);
    assert_eq!(corpus.len(), 10);
}

#[test]
fn invalid_catalog_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join(RISK_CATALOG_FILE), "categories = []").expect("write catalog");

    let err = RiskCatalog::load(Some(dir.path())).unwrap_err();
    assert!(matches!(err, ClauseLensError::Configuration(_)));
}

#[test]
fn invalid_corpus_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join(TEMPLATE_CORPUS_FILE), "{ nope").expect("write corpus");

    let err = TemplateCorpus::load(Some(dir.path())).unwrap_err();
    assert!(matches!(err, ClauseLensError::Configuration(_)));
}

#[test]
fn custom_corpus_loaded_from_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let raw = r#"{"templates": [{"id": "only", "category": "obligation", "title": "Only", "text": "Payment shall be made within 30 days of receipt of invoice."}]}"#;
    fs::write(dir.path().join(TEMPLATE_CORPUS_FILE), raw).expect("write corpus");

    let corpus = TemplateCorpus::load(Some(dir.path())).expect("load from directory");
    assert_eq!(corpus.len(), 1);
    assert!(corpus.get("only").is_some());
}

#[test]
fn explicit_path_wins_resolution() {
    let explicit = PathBuf::from("/tmp/clauselens-data");
    assert_eq!(resolve_data_path(Some(explicit.clone())), Some(explicit));
}

#[tokio::test]
async fn narrowed_catalog_restricts_flag_categories() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join(RISK_CATALOG_FILE), SINGLE_CATEGORY_CATALOG).expect("write catalog");

    let catalog = RiskCatalog::load(Some(dir.path())).expect("load from directory");
    let corpus = TemplateCorpus::embedded_default().expect("embedded corpus");
    let pipeline = AnalysisPipeline::new(Arc::new(catalog), Arc::new(corpus)).expect("pipeline");

    let report = pipeline.analyze(&Document::new(RISKY_CONTRACT, "en")).await;
    assert!(!report.flags.is_empty(), "liability clause must still flag");
    assert!(
        report
            .flags
            .iter()
            .all(|f| f.category_id == "unlimited_liability"),
        "a one-category catalog can only raise that category"
    );
}
