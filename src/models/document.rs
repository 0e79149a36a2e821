use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ClauseLensError;

/// Hint about the format the document text was extracted from.
///
/// Binary-format decoding happens outside this crate; the hint is carried
/// through to the report so downstream consumers know the provenance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Pdf,
    Docx,
    Txt,
    #[default]
    Plain,
}

/// A contract document under analysis. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
    /// Language tag, e.g. "en" or "hi".
    pub language: String,
    pub source_format: SourceFormat,
}

impl Document {
    /// Create a document from already-extracted text with a generated ID.
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            language: language.into(),
            source_format: SourceFormat::Plain,
        }
    }

    pub fn with_format(mut self, format: SourceFormat) -> Self {
        self.source_format = format;
        self
    }

    /// Read a plain-text contract from disk.
    ///
    /// Empty or whitespace-only files are rejected up front so analysis
    /// never starts on unusable input.
    pub fn from_file(path: &Path, language: &str) -> Result<Self, ClauseLensError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ClauseLensError::Input(format!("{}: {}", path.display(), e)))?;
        if text.trim().is_empty() {
            return Err(ClauseLensError::Input(format!(
                "{} is empty",
                path.display()
            )));
        }
        Ok(Self::new(text, language).with_format(SourceFormat::Txt))
    }
}
