//! Shared initialization logic for CLI commands.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::{resolve_data_path, RiskCatalog, TemplateCorpus};
use crate::services::AnalysisPipeline;

/// Application context holding the loaded catalogs and the analysis
/// pipeline.
///
/// Catalogs are loaded once at startup and shared read-only for the
/// lifetime of the process.
pub struct AppContext {
    pub data_path: Option<PathBuf>,
    pub catalog: Arc<RiskCatalog>,
    pub corpus: Arc<TemplateCorpus>,
    pub pipeline: AnalysisPipeline,
}

impl AppContext {
    /// Initialize application context.
    ///
    /// Data path priority: explicit path > CLAUSELENS_DATA_PATH env >
    /// ./.clauselens (if exists) > ~/.clauselens (if exists). When none
    /// resolve, the embedded catalogs are used.
    pub fn new(explicit_path: Option<PathBuf>) -> Result<Self> {
        let data_path = resolve_data_path(explicit_path);
        match &data_path {
            Some(path) => tracing::info!("Using data path: {}", path.display()),
            None => tracing::info!("No data directory found, using embedded catalogs"),
        }

        let catalog = Arc::new(RiskCatalog::load(data_path.as_deref())?);
        let corpus = Arc::new(TemplateCorpus::load(data_path.as_deref())?);
        let pipeline = AnalysisPipeline::new(catalog.clone(), corpus.clone())?;

        Ok(Self {
            data_path,
            catalog,
            corpus,
            pipeline,
        })
    }
}
