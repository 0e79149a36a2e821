use thiserror::Error;

/// Custom error type for clauselens operations.
#[derive(Debug, Error)]
pub enum ClauseLensError {
    /// Document input was empty or not decodable as text.
    #[error("Input error: {0}")]
    Input(String),

    /// Risk catalog or template corpus failed to load or was empty.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ClauseLensError {
    fn from(err: std::io::Error) -> Self {
        ClauseLensError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClauseLensError {
    fn from(err: serde_json::Error) -> Self {
        ClauseLensError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ClauseLensError {
    fn from(err: toml::de::Error) -> Self {
        ClauseLensError::Serialization(err.to_string())
    }
}
