//! Static risk category catalog.
//!
//! Loaded once at startup and shared read-only across all analyses.
//! Categories are plain data so the catalog can be edited without
//! recompilation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ClauseLensError;

/// Filename looked up inside the data directory.
pub const RISK_CATALOG_FILE: &str = "risk_catalog.toml";

/// One catalog entry describing a pattern of unfavorable contract language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCategory {
    pub id: String,
    pub label: String,
    /// Multi-word triggers match as phrases (exact or fuzzy); single-word
    /// triggers match on word boundaries.
    pub triggers: Vec<String>,
    /// Contribution multiplier in [0, 1].
    pub weight: f64,
    /// Clause-level score at which a flag is emitted.
    pub threshold: f64,
    /// Why this pattern is unfavorable, in plain language.
    pub explanation: String,
    /// Negotiation advice for the flagged party.
    pub advice: String,
}

/// The full read-only catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCatalog {
    pub categories: Vec<RiskCategory>,
}

impl RiskCatalog {
    /// Load the catalog from `<data_path>/risk_catalog.toml`, falling back
    /// to the embedded defaults when no file is present.
    ///
    /// A file that exists but is unreadable, invalid, or empty is fatal.
    pub fn load(data_path: Option<&Path>) -> Result<Self, ClauseLensError> {
        if let Some(dir) = data_path {
            let file = dir.join(RISK_CATALOG_FILE);
            if file.exists() {
                let raw = std::fs::read_to_string(&file).map_err(|e| {
                    ClauseLensError::Configuration(format!("{}: {}", file.display(), e))
                })?;
                let catalog = Self::from_toml_str(&raw).map_err(|e| {
                    ClauseLensError::Configuration(format!("{}: {}", file.display(), e))
                })?;
                tracing::info!(
                    "Loaded risk catalog from {} ({} categories)",
                    file.display(),
                    catalog.categories.len()
                );
                return Ok(catalog);
            }
        }
        let catalog = Self::embedded_default()?;
        tracing::info!(
            "Using embedded risk catalog ({} categories)",
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ClauseLensError> {
        let catalog: RiskCatalog = toml::from_str(raw)
            .map_err(|e| ClauseLensError::Configuration(format!("invalid risk catalog: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn embedded_default() -> Result<Self, ClauseLensError> {
        Self::from_toml_str(DEFAULT_RISK_CATALOG)
    }

    pub fn get(&self, id: &str) -> Option<&RiskCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn validate(&self) -> Result<(), ClauseLensError> {
        if self.categories.is_empty() {
            return Err(ClauseLensError::Configuration(
                "risk catalog has no categories".to_string(),
            ));
        }
        for cat in &self.categories {
            if cat.triggers.is_empty() {
                return Err(ClauseLensError::Configuration(format!(
                    "risk category '{}' has no triggers",
                    cat.id
                )));
            }
            if !(0.0..=1.0).contains(&cat.weight) {
                return Err(ClauseLensError::Configuration(format!(
                    "risk category '{}' weight {} outside [0, 1]",
                    cat.id, cat.weight
                )));
            }
            if !(0.0..=1.0).contains(&cat.threshold) {
                return Err(ClauseLensError::Configuration(format!(
                    "risk category '{}' threshold {} outside [0, 1]",
                    cat.id, cat.threshold
                )));
            }
        }
        Ok(())
    }
}

const DEFAULT_RISK_CATALOG: &str = r#"
[[categories]]
id = "unlimited_liability"
label = "Unlimited Liability"
triggers = [
    "unlimited liability",
    "without limit",
    "no cap on liability",
    "any damages whatsoever",
    "liable for all",
]
weight = 1.0
threshold = 0.3
explanation = "Exposes you to unlimited financial risk without any cap or protection."
advice = "Negotiate a liability cap equal to contract value or a specific amount."

[[categories]]
id = "one_sided_indemnification"
label = "One-Sided Indemnification"
triggers = [
    "indemnify",
    "indemnification",
    "hold harmless",
    "any and all claims",
]
weight = 0.85
threshold = 0.3
explanation = "Indemnification obligations may be overly broad or flow in one direction only."
advice = "Negotiate indemnity caps and mutual indemnification where appropriate."

[[categories]]
id = "unilateral_termination"
label = "Unilateral Termination"
triggers = [
    "terminate at will",
    "without cause",
    "sole discretion",
    "unilateral",
]
weight = 0.95
threshold = 0.3
explanation = "One party can end the agreement with no balancing right for the other."
advice = "Request balanced termination rights with adequate notice periods for both parties."

[[categories]]
id = "penalty"
label = "Penalty Clause"
triggers = [
    "penalty",
    "liquidated damages",
    "fine",
    "forfeit",
    "deduction",
]
weight = 0.9
threshold = 0.3
explanation = "Financial penalties may be disproportionate to the actual harm."
advice = "Review penalty amounts and ensure they are reasonable and proportionate."

[[categories]]
id = "auto_renewal"
label = "Auto-Renewal"
triggers = [
    "auto-renew",
    "automatic renewal",
    "automatically renew",
    "evergreen",
]
weight = 0.7
threshold = 0.3
explanation = "The contract may renew without notice, silently extending your obligations."
advice = "Ensure there is an adequate notice window before each renewal."

[[categories]]
id = "lock_in"
label = "Lock-In Period"
triggers = [
    "lock-in",
    "minimum period",
    "cannot terminate",
    "binding period",
]
weight = 0.8
threshold = 0.3
explanation = "A binding period may prevent exit even if the relationship sours."
advice = "Negotiate a shorter lock-in or an early-exit option with a defined cost."

[[categories]]
id = "non_compete"
label = "Non-Compete"
triggers = [
    "non-compete",
    "non-competition",
    "restraint of trade",
    "exclusivity",
]
weight = 0.85
threshold = 0.3
explanation = "Restricts your future business activities, possibly beyond the life of this contract."
advice = "Ensure the geographical and temporal scope are reasonable."

[[categories]]
id = "broad_ip_transfer"
label = "Broad IP Transfer"
triggers = [
    "assigns all",
    "transfers all",
    "ownership of intellectual property",
    "assignment of rights",
    "intellectual property",
]
weight = 0.9
threshold = 0.3
explanation = "May transfer ownership of intellectual property outright, including pre-existing work."
advice = "Review IP ownership terms and consider retaining rights to pre-existing IP."

[[categories]]
id = "waiver_of_rights"
label = "Waiver of Rights"
triggers = [
    "waives all",
    "waiver of rights",
    "foregoes any right",
]
weight = 0.9
threshold = 0.3
explanation = "You may be giving up important legal rights or protections."
advice = "Remove the waiver clause or limit it to specific, known rights."

[[categories]]
id = "unilateral_amendment"
label = "Unilateral Amendment"
triggers = [
    "may amend",
    "can modify",
    "right to change",
]
weight = 0.85
threshold = 0.3
explanation = "The other party can change terms without your consent."
advice = "Require mutual written consent for any amendments."

[[categories]]
id = "no_warranty"
label = "No Warranty"
triggers = [
    "as is",
    "without warranty",
    "no warranties",
    "disclaims all warranties",
]
weight = 0.7
threshold = 0.3
explanation = "No guarantees about quality or fitness for purpose."
advice = "Request basic warranties about quality and fitness for purpose."

[[categories]]
id = "indefinite_term"
label = "Indefinite Term"
triggers = [
    "perpetual",
    "indefinite",
    "no expiration",
    "in perpetuity",
]
weight = 0.75
threshold = 0.3
explanation = "No clear end date may make the agreement difficult to exit."
advice = "Add a fixed term with a renewal option or explicit termination rights."

[[categories]]
id = "broad_assignment"
label = "Broad Assignment"
triggers = [
    "freely assign",
    "without consent",
    "may assign",
]
weight = 0.7
threshold = 0.3
explanation = "The other party can transfer its obligations to unknown third parties."
advice = "Require your written consent for any assignment."

[[categories]]
id = "arbitration"
label = "Arbitration and Jurisdiction"
triggers = [
    "arbitration",
    "dispute resolution",
    "jurisdiction",
    "governing law",
]
weight = 0.5
threshold = 0.35
explanation = "The dispute forum and governing law may favor the drafting party."
advice = "Confirm the forum, seat, and governing law are practical for you."
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let catalog = RiskCatalog::embedded_default().expect("embedded catalog should be valid");
        assert_eq!(catalog.len(), 14);
        assert!(catalog.get("unlimited_liability").is_some());
        assert!(catalog.get("arbitration").is_some());
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_embedded_weights_and_thresholds_in_range() {
        let catalog = RiskCatalog::embedded_default().expect("embedded catalog");
        for cat in &catalog.categories {
            assert!(
                (0.0..=1.0).contains(&cat.weight),
                "{} weight out of range",
                cat.id
            );
            assert!(
                (0.0..=1.0).contains(&cat.threshold),
                "{} threshold out of range",
                cat.id
            );
            assert!(!cat.triggers.is_empty(), "{} has no triggers", cat.id);
            assert!(!cat.explanation.is_empty());
            assert!(!cat.advice.is_empty());
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = RiskCatalog::from_toml_str("categories = []").unwrap_err();
        assert!(matches!(err, ClauseLensError::Configuration(_)));
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        let raw = r#"
[[categories]]
id = "bad"
label = "Bad"
triggers = ["x"]
weight = 1.5
threshold = 0.3
explanation = "e"
advice = "a"
"#;
        let err = RiskCatalog::from_toml_str(raw).unwrap_err();
        assert!(matches!(err, ClauseLensError::Configuration(_)));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = RiskCatalog::from_toml_str("not valid toml [[[").unwrap_err();
        assert!(matches!(err, ClauseLensError::Configuration(_)));
    }
}
