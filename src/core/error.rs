use thiserror::Error;


#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("Base64 decode error: {0}")]
    Decode(String),

    #[error(
        "Embedding length mismatch: expected {expected} bytes ({patterns} patterns x {dimension} dims), got {actual}"
    )]
    LengthMismatch {
        expected: usize,
        actual: usize,
        patterns: usize,
        dimension: usize,
    },

    #[error("Non-finite embedding value for pattern {id} at index {index}")]
    NonFinite { id: String, index: usize },

    #[error("Pattern table fingerprint mismatch: expected {expected}, got {actual}")]
    FingerprintMismatch { expected: String, actual: String },

    #[error("Duplicate pattern id: {0}")]
    DuplicateId(String),

    #[error("Invalid regex for pattern {id}: {message}")]
    InvalidRegex { id: String, message: String },

    #[error("Table format error: {0}")]
    TableFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PatternError {
    pub fn invalid_regex(id: impl Into<String>, err: &regex::Error) -> Self {
        Self::InvalidRegex {
            id: id.into(),
            message: err.to_string(),
        }
    }
}

impl From<base64::DecodeError> for PatternError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        Self::TableFormat(err.to_string())
    }
}


pub type Result<T> = std::result::Result<T, PatternError>;
