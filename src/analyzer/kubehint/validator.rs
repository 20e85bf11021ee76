//! Minimal document shape validation.
//!
//! Runs before any rule: a document must be a mapping with a non-empty
//! string `apiVersion` and a non-empty string `kind`. Only the first failing
//! check is recorded, so a structurally broken document yields exactly one
//! error.

use crate::analyzer::kubehint::results::FindingsCollector;
use serde_yaml::Value;

pub const NOT_AN_OBJECT: &str = "Document is not an object!";
pub const INVALID_API_VERSION: &str = "apiVersion is invalid!";
pub const INVALID_KIND: &str = "kind is invalid!";

/// Outcome of the shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeCheck<'a> {
    /// The document may be dispatched to a rule.
    Valid { api_version: &'a str, kind: &'a str },
    /// An error was recorded; processing of this document stops.
    Invalid,
}

impl ShapeCheck<'_> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Validate the minimal shape of `document`, recording at most one error.
pub fn validate<'a>(
    document: &'a Value,
    document_index: usize,
    results: &mut FindingsCollector,
) -> ShapeCheck<'a> {
    let Some(mapping) = document.as_mapping() else {
        results.record_error(Some(document_index), None, NOT_AN_OBJECT);
        return ShapeCheck::Invalid;
    };

    let Some(api_version) = non_empty_str(mapping.get("apiVersion")) else {
        results.record_error(Some(document_index), Some("apiVersion"), INVALID_API_VERSION);
        return ShapeCheck::Invalid;
    };

    let Some(kind) = non_empty_str(mapping.get("kind")) else {
        results.record_error(Some(document_index), Some("kind"), INVALID_KIND);
        return ShapeCheck::Invalid;
    };

    ShapeCheck::Valid { api_version, kind }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_valid_document() {
        let document = doc("apiVersion: v1\nkind: PersistentVolumeClaim\n");
        let mut results = FindingsCollector::new();
        let outcome = validate(&document, 0, &mut results);
        assert_eq!(
            outcome,
            ShapeCheck::Valid {
                api_version: "v1",
                kind: "PersistentVolumeClaim"
            }
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_not_an_object() {
        for document in [Value::Null, doc("- a\n- b"), doc("just a string"), doc("42")] {
            let mut results = FindingsCollector::new();
            assert!(!validate(&document, 4, &mut results).is_valid());
            assert_eq!(results.errors.len(), 1);
            assert_eq!(results.errors[0].message, NOT_AN_OBJECT);
            assert_eq!(results.errors[0].field_path, None);
            assert_eq!(results.errors[0].document_index, Some(4));
        }
    }

    #[test]
    fn test_invalid_api_version() {
        for yaml in [
            "kind: Deployment",
            "apiVersion: ''\nkind: Deployment",
            "apiVersion: 1\nkind: Deployment",
            "apiVersion: [apps/v1]\nkind: Deployment",
        ] {
            let mut results = FindingsCollector::new();
            assert!(!validate(&doc(yaml), 1, &mut results).is_valid());
            assert_eq!(results.errors.len(), 1, "{}", yaml);
            assert_eq!(results.errors[0].field_path.as_deref(), Some("apiVersion"));
            assert_eq!(results.errors[0].message, INVALID_API_VERSION);
        }
    }

    #[test]
    fn test_invalid_kind() {
        for yaml in ["apiVersion: v1", "apiVersion: v1\nkind: ''", "apiVersion: v1\nkind: 3"] {
            let mut results = FindingsCollector::new();
            assert!(!validate(&doc(yaml), 2, &mut results).is_valid());
            assert_eq!(results.errors.len(), 1);
            assert_eq!(results.errors[0].field_path.as_deref(), Some("kind"));
            assert_eq!(results.errors[0].document_index, Some(2));
        }
    }

    #[test]
    fn test_only_first_failure_is_recorded() {
        // Both fields are broken, only apiVersion is reported
        let mut results = FindingsCollector::new();
        validate(&doc("apiVersion: 7\nkind: 8"), 0, &mut results);
        assert_eq!(results.len(), 1);
        assert_eq!(results.errors[0].field_path.as_deref(), Some("apiVersion"));
    }
}
