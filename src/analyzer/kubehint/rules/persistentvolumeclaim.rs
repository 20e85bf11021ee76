//! PersistentVolumeClaim rules.

use crate::analyzer::kubehint::config::RuleConfiguration;
use crate::analyzer::kubehint::results::FindingsCollector;
use crate::error::Result;
use serde_yaml::Value;

/// Claims are accepted as-is; no checks run for them yet.
pub fn check(
    _document: &Value,
    _document_index: usize,
    _results: &mut FindingsCollector,
    _rules: &RuleConfiguration,
) -> Result<()> {
    Ok(())
}
