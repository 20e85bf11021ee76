//! Deployment rules.
//!
//! Registered both for `apps/v1` and as the kind's default, so every
//! Deployment is held to the same checks:
//! - fewer than two replicas is a single point of failure (suggestion)
//! - a pod template without containers (error)
//! - containers without a `resources` block (warning, one per container)

use crate::analyzer::kubehint::config::RuleConfiguration;
use crate::analyzer::kubehint::extract::{as_number, is_missing, lookup, require, require_sequence};
use crate::analyzer::kubehint::results::FindingsCollector;
use crate::error::Result;
use serde_yaml::Value;

pub const MIN_REPLICAS: f64 = 2.0;

pub const SINGLE_REPLICA: &str = "One replica implies a single point of failure!";
pub const NO_CONTAINERS: &str = "No containers in this Deployment?";
pub const NO_RESOURCES: &str = "No resource limits defined!";

const CONTAINERS_PATH: &str = "spec.template.spec.containers";

pub fn check(
    document: &Value,
    document_index: usize,
    results: &mut FindingsCollector,
    _rules: &RuleConfiguration,
) -> Result<()> {
    let spec = require(document, document_index, "spec")?;

    // Absent replicas are left alone; null and numeric strings are coerced
    if let Some(replicas) = lookup(spec, "replicas").and_then(as_number)
        && replicas < MIN_REPLICAS
    {
        results.record_suggestion(Some(document_index), Some("spec.replicas"), SINGLE_REPLICA);
    }

    let containers = require_sequence(document, document_index, CONTAINERS_PATH)?;
    if containers.is_empty() {
        results.record_error(
            Some(document_index),
            Some("spec.template.spec.containers.length"),
            NO_CONTAINERS,
        );
    }

    for (i, container) in containers.iter().enumerate() {
        if is_missing(container, "resources") {
            results.record_warning(
                Some(document_index),
                Some(format!("{}[{}]", CONTAINERS_PATH, i).as_str()),
                NO_RESOURCES,
            );
        }
    }

    Ok(())
}
