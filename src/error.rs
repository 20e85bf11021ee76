//! Error types for kubehint.
//!
//! Two tiers of failure exist. Fatal faults (bad call-time arguments,
//! unreadable files, rule functions hitting a malformed document) are
//! returned as [`KubeHintError`]. Problems found *inside* documents are never
//! errors in this sense: they are recorded as findings.

use thiserror::Error;

/// Errors that abort a lint run or a surrounding operation.
#[derive(Debug, Error)]
pub enum KubeHintError {
    /// A call-time argument had the wrong shape (documents not a sequence,
    /// rule configuration not a mapping).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A rule function needed a nested field that is missing or mistyped.
    #[error("Document {index} is malformed: `{path}` is missing or has the wrong type")]
    MalformedDocument {
        /// Zero-based index of the offending document
        index: usize,
        /// Dotted path of the field the rule could not read
        path: String,
    },

    /// YAML (or JSON) input could not be parsed
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A document inside a multi-document stream could not be parsed
    #[error("YAML syntax error in {source_name} at line {line}: {message}")]
    Syntax {
        source_name: String,
        line: u32,
        message: String,
    },

    /// JSON could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, KubeHintError>;

impl KubeHintError {
    /// Build a [`KubeHintError::MalformedDocument`].
    pub fn malformed(index: usize, path: impl Into<String>) -> Self {
        Self::MalformedDocument {
            index,
            path: path.into(),
        }
    }
}
