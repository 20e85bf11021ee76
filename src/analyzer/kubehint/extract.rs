//! Checked field access into untyped documents.

use crate::error::{KubeHintError, Result};
use serde_yaml::Value;

/// Follow a dotted path (`spec.template.spec`) through nested mappings.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.as_mapping()?.get(key))
}

/// Like [`lookup`], but a missing field is a malformed document.
pub fn require<'a>(document: &'a Value, document_index: usize, path: &str) -> Result<&'a Value> {
    match lookup(document, path) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(KubeHintError::malformed(document_index, path)),
    }
}

/// Require a sequence at `path`.
pub fn require_sequence<'a>(
    document: &'a Value,
    document_index: usize,
    path: &str,
) -> Result<&'a [Value]> {
    require(document, document_index, path)?
        .as_sequence()
        .map(Vec::as_slice)
        .ok_or_else(|| KubeHintError::malformed(document_index, path))
}

/// Read a string at `path`, if present.
pub fn string_at<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    lookup(value, path).and_then(Value::as_str)
}

/// Read a sequence at `path`, empty when absent or not a sequence.
pub fn sequence_at<'a>(value: &'a Value, path: &str) -> &'a [Value] {
    lookup(value, path)
        .and_then(Value::as_sequence)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Numeric view of a value under loose comparison rules.
///
/// Null and `false` count as 0 and `true` as 1. A string counts when it
/// holds a number, and a blank string is 0. Mappings and sequences have no
/// numeric value.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
        _ => None,
    }
}

/// True when the field is absent or explicitly null.
pub fn is_missing(value: &Value, key: &str) -> bool {
    value
        .as_mapping()
        .and_then(|mapping| mapping.get(key))
        .is_none_or(Value::is_null)
}
