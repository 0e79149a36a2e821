//! Reference corpus of SME-friendly template clauses.
//!
//! Each entry carries a canonical text plus acceptable variants; the
//! matcher compares clauses against all of them and takes the maximum.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::ClauseCategory;
use crate::ClauseLensError;

/// Filename looked up inside the data directory.
pub const TEMPLATE_CORPUS_FILE: &str = "contract_templates.json";

/// A reference "safe" clause used as a similarity baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateClause {
    pub id: String,
    /// Functional category used to narrow the candidate pool.
    pub category: ClauseCategory,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
}

/// The full read-only corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateCorpus {
    pub templates: Vec<TemplateClause>,
}

impl TemplateCorpus {
    /// Load the corpus from `<data_path>/contract_templates.json`, falling
    /// back to the embedded defaults when no file is present.
    ///
    /// A file that exists but is unreadable, invalid, or empty is fatal.
    pub fn load(data_path: Option<&Path>) -> Result<Self, ClauseLensError> {
        if let Some(dir) = data_path {
            let file = dir.join(TEMPLATE_CORPUS_FILE);
            if file.exists() {
                let raw = std::fs::read_to_string(&file).map_err(|e| {
                    ClauseLensError::Configuration(format!("{}: {}", file.display(), e))
                })?;
                let corpus = Self::from_json_str(&raw).map_err(|e| {
                    ClauseLensError::Configuration(format!("{}: {}", file.display(), e))
                })?;
                tracing::info!(
                    "Loaded template corpus from {} ({} templates)",
                    file.display(),
                    corpus.templates.len()
                );
                return Ok(corpus);
            }
        }
        let corpus = Self::embedded_default()?;
        tracing::info!(
            "Using embedded template corpus ({} templates)",
            corpus.templates.len()
        );
        Ok(corpus)
    }

    /// Parse and validate a corpus from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, ClauseLensError> {
        let corpus: TemplateCorpus = serde_json::from_str(raw).map_err(|e| {
            ClauseLensError::Configuration(format!("invalid template corpus: {}", e))
        })?;
        corpus.validate()?;
        Ok(corpus)
    }

    /// The corpus compiled into the binary.
    pub fn embedded_default() -> Result<Self, ClauseLensError> {
        Self::from_json_str(DEFAULT_TEMPLATE_CORPUS)
    }

    pub fn get(&self, id: &str) -> Option<&TemplateClause> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Templates sharing a functional category.
    pub fn by_category(&self, category: ClauseCategory) -> Vec<&TemplateClause> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn validate(&self) -> Result<(), ClauseLensError> {
        if self.templates.is_empty() {
            return Err(ClauseLensError::Configuration(
                "template corpus has no templates".to_string(),
            ));
        }
        for tpl in &self.templates {
            if tpl.text.trim().is_empty() {
                return Err(ClauseLensError::Configuration(format!(
                    "template '{}' has empty text",
                    tpl.id
                )));
            }
        }
        Ok(())
    }
}

const DEFAULT_TEMPLATE_CORPUS: &str = r#"{
  "templates": [
    {
      "id": "payment_terms",
      "category": "obligation",
      "title": "Balanced Payment Terms",
      "text": "Payment shall be made within 30 days of receipt of invoice. Late payments shall accrue interest at a reasonable rate per month. The Client reserves the right to withhold payment for defective deliverables until rectified.",
      "variants": [
        "Payment shall be made within 60 days of receipt of a valid invoice, with interest accruing on late payments at the agreed monthly rate."
      ],
      "key_points": [
        "Clear payment timeline",
        "Reasonable interest on late payment",
        "Right to withhold for non-performance"
      ]
    },
    {
      "id": "termination",
      "category": "right",
      "title": "Mutual Termination Rights",
      "text": "Either party may terminate this Agreement by providing 30 days' written notice to the other party. In case of material breach, the non-breaching party may terminate immediately upon written notice, with opportunity to cure within 15 days.",
      "variants": [
        "Either party may terminate this Agreement for convenience upon 60 days' written notice, or immediately for uncured material breach."
      ],
      "key_points": [
        "Equal termination rights for both parties",
        "Reasonable notice period",
        "Opportunity to cure breaches"
      ]
    },
    {
      "id": "liability",
      "category": "prohibition",
      "title": "Limited Liability Clause",
      "text": "Total liability of either party shall not exceed the total amount paid under this Agreement in the 12 months preceding the claim, or the specified amount, whichever is lower. Neither party shall be liable for indirect, incidental, or consequential damages.",
      "variants": [
        "Neither party's aggregate liability under this Agreement shall exceed the fees paid in the preceding 12 months, and neither party shall be liable for consequential damages."
      ],
      "key_points": [
        "Capped liability amount",
        "Mutual limitation",
        "Exclusion of consequential damages"
      ]
    },
    {
      "id": "indemnification",
      "category": "obligation",
      "title": "Mutual Indemnification",
      "text": "Each party shall indemnify the other against third-party claims arising from breach of this Agreement, negligence or willful misconduct, or violation of applicable laws. Indemnification shall be limited to direct damages and shall not exceed the liability cap defined herein.",
      "variants": [],
      "key_points": [
        "Mutual indemnification",
        "Specific triggering events",
        "Limited to direct damages"
      ]
    },
    {
      "id": "confidentiality",
      "category": "obligation",
      "title": "Standard Confidentiality Clause",
      "text": "Each party agrees to maintain confidentiality of the other party's Confidential Information for a period of 3 years. Confidential Information shall not include information that is publicly available, was independently developed, or is required to be disclosed by law.",
      "variants": [
        "Both parties shall keep Confidential Information secret for 5 years, excluding information that is public, independently developed, or legally compelled."
      ],
      "key_points": [
        "Defined confidentiality period",
        "Clear exclusions",
        "Mutual obligations"
      ]
    },
    {
      "id": "ip_rights",
      "category": "right",
      "title": "IP Rights Retention",
      "text": "Each party retains ownership of its pre-existing intellectual property. New intellectual property created during this Agreement shall be owned by the commissioning party, with the other party receiving a non-exclusive license for defined purposes.",
      "variants": [],
      "key_points": [
        "Pre-existing IP remains with creator",
        "Clear ownership of new IP",
        "License rights defined"
      ]
    },
    {
      "id": "dispute_resolution",
      "category": "obligation",
      "title": "Tiered Dispute Resolution",
      "text": "Disputes shall first be resolved through good faith negotiation for 30 days. If unresolved, parties shall attempt mediation. If mediation fails, disputes shall be resolved through arbitration under the Indian Arbitration Act in the agreed city in India.",
      "variants": [],
      "key_points": [
        "Negotiation first approach",
        "Mediation option",
        "Arbitration in India"
      ]
    },
    {
      "id": "force_majeure",
      "category": "prohibition",
      "title": "Reasonable Force Majeure",
      "text": "Neither party shall be liable for failure to perform due to circumstances beyond reasonable control, including natural disasters, war, government actions, or pandemic. The affected party must notify the other within 7 days and make reasonable efforts to mitigate impact.",
      "variants": [],
      "key_points": [
        "Clear definition of Force Majeure",
        "Notice requirement",
        "Mitigation obligation"
      ]
    },
    {
      "id": "warranty",
      "category": "obligation",
      "title": "Basic Warranties",
      "text": "The Service Provider warrants that services will be performed in a professional and workmanlike manner, consistent with industry standards. Services shall substantially conform to specifications for 90 days from delivery. Client's exclusive remedy is re-performance of deficient services.",
      "variants": [],
      "key_points": [
        "Professional standard commitment",
        "Conformance to specifications",
        "Limited warranty period"
      ]
    },
    {
      "id": "amendment",
      "category": "right",
      "title": "Mutual Amendment Rights",
      "text": "This Agreement may only be amended by written agreement signed by authorized representatives of both parties. No oral modifications shall be binding.",
      "variants": [],
      "key_points": [
        "Written amendments only",
        "Mutual consent required",
        "No oral modifications"
      ]
    }
  ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let corpus = TemplateCorpus::embedded_default().expect("embedded corpus should be valid");
        assert_eq!(corpus.len(), 10);
        assert!(corpus.get("liability").is_some());
        assert!(corpus.get("missing").is_none());
    }

    #[test]
    fn test_by_category_narrows_pool() {
        let corpus = TemplateCorpus::embedded_default().expect("embedded corpus");
        let rights = corpus.by_category(ClauseCategory::Right);
        assert!(rights.iter().any(|t| t.id == "termination"));
        assert!(rights.iter().all(|t| t.category == ClauseCategory::Right));

        let others = corpus.by_category(ClauseCategory::Other);
        assert!(others.is_empty(), "no templates are categorized Other");
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let err = TemplateCorpus::from_json_str(r#"{"templates": []}"#).unwrap_err();
        assert!(matches!(err, ClauseLensError::Configuration(_)));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = TemplateCorpus::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, ClauseLensError::Configuration(_)));
    }

    #[test]
    fn test_blank_template_text_rejected() {
        let raw = r#"{"templates": [{"id": "x", "category": "other", "title": "X", "text": "   "}]}"#;
        let err = TemplateCorpus::from_json_str(raw).unwrap_err();
        assert!(matches!(err, ClauseLensError::Configuration(_)));
    }
}
