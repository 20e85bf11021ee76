//! Core types for kubehint findings.
//!
//! - `FindingCategory` - error, warning or suggestion
//! - `Finding` - a single issue tied to a document index and field path

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The three independent categories a finding can be recorded under.
///
/// Ordered from most severe to least severe:
/// `Error > Warning > Suggestion`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingCategory {
    /// Structural faults and broken manifests
    Error,
    /// Issues that should be addressed
    Warning,
    /// Best-practice advice
    Suggestion,
}

impl FindingCategory {
    /// All categories, most severe first.
    pub const ALL: [FindingCategory; 3] = [Self::Error, Self::Warning, Self::Suggestion];

    /// Parse a category from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" | "errors" => Some(Self::Error),
            "warning" | "warnings" | "warn" => Some(Self::Warning),
            "suggestion" | "suggestions" | "suggest" => Some(Self::Suggestion),
            _ => None,
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Suggestion => "suggestion",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Error => 2,
            Self::Warning => 1,
            Self::Suggestion => 0,
        }
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Ord for FindingCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for FindingCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One reported issue.
///
/// `document_index` is `None` only for batch-level findings that cannot be
/// tied to a position in the input sequence. `field_path` is `None` when the
/// finding concerns the document as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub document_index: Option<usize>,
    pub field_path: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn new(
        document_index: Option<usize>,
        field_path: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            document_index,
            field_path: field_path.map(str::to_string),
            message: message.into(),
        }
    }

    /// Field path for display, `-` when the finding has none.
    pub fn field_path_or_dash(&self) -> &str {
        self.field_path.as_deref().unwrap_or("-")
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.document_index {
            Some(index) => write!(f, "#{} ", index)?,
            None => write!(f, "#- ")?,
        }
        write!(f, "{}: {}", self.field_path_or_dash(), self.message)
    }
}
