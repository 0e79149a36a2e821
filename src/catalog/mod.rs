//! Static configuration snapshots: the risk catalog and template corpus.

pub mod risk;
pub mod templates;

pub use risk::{RiskCatalog, RiskCategory, RISK_CATALOG_FILE};
pub use templates::{TemplateClause, TemplateCorpus, TEMPLATE_CORPUS_FILE};

use std::path::{Path, PathBuf};

/// Resolve the data directory holding catalog files.
///
/// Priority: explicit path > CLAUSELENS_DATA_PATH env > ./.clauselens >
/// ~/.clauselens. `None` means the embedded defaults will be used.
pub fn resolve_data_path(explicit_path: Option<PathBuf>) -> Option<PathBuf> {
    explicit_path
        .or_else(|| {
            std::env::var("CLAUSELENS_DATA_PATH")
                .ok()
                .map(PathBuf::from)
        })
        .or_else(|| {
            let local_path = Path::new(".clauselens");
            if local_path.exists() && local_path.is_dir() {
                Some(local_path.to_path_buf())
            } else {
                None
            }
        })
        .or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".clauselens"))
                .filter(|p| p.exists() && p.is_dir())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/tmp/custom-catalogs");
        let resolved = resolve_data_path(Some(explicit.clone()));
        assert_eq!(resolved, Some(explicit));
    }
}
