//! Per-document dispatch: shape check, rule resolution, rule invocation.

use crate::analyzer::kubehint::config::RuleConfiguration;
use crate::analyzer::kubehint::registry::{Resolution, RuleRegistry};
use crate::analyzer::kubehint::reporter::Reporter;
use crate::analyzer::kubehint::results::FindingsCollector;
use crate::analyzer::kubehint::validator::{self, ShapeCheck};
use crate::error::Result;
use serde_yaml::Value;

/// What happened to a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The shape check failed; one error was recorded and no rule ran.
    Rejected,
    /// The rule registered for the exact `apiVersion` ran.
    RanExact,
    /// The kind's default rule ran.
    RanDefault,
    /// The kind is registered but has no rule for this version.
    NoVersion,
    /// No rule exists for the kind; an operator notice was emitted.
    Unmatched,
}

/// Routes documents to the rules registered for their kind and version.
pub struct Dispatcher<'a> {
    registry: &'a RuleRegistry,
    reporter: &'a dyn Reporter,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a RuleRegistry, reporter: &'a dyn Reporter) -> Self {
        Self { registry, reporter }
    }

    /// Process one document into `results`.
    ///
    /// Errors raised by a rule function are passed through untouched.
    pub fn process(
        &self,
        document: &Value,
        document_index: usize,
        results: &mut FindingsCollector,
        rules: &RuleConfiguration,
    ) -> Result<DispatchOutcome> {
        let ShapeCheck::Valid { api_version, kind } =
            validator::validate(document, document_index, results)
        else {
            log::debug!("Document {} failed the shape check", document_index);
            return Ok(DispatchOutcome::Rejected);
        };

        let (rule, outcome) = match self.registry.lookup(kind, api_version) {
            Resolution::Exact(rule) => (rule, DispatchOutcome::RanExact),
            Resolution::Default(rule) => (rule, DispatchOutcome::RanDefault),
            Resolution::NoVersion => {
                log::debug!(
                    "Document {}: no rule for {}/{} and no default",
                    document_index,
                    api_version,
                    kind
                );
                return Ok(DispatchOutcome::NoVersion);
            }
            Resolution::UnknownKind => {
                self.reporter
                    .unmatched_rule(document_index, api_version, kind);
                return Ok(DispatchOutcome::Unmatched);
            }
        };

        log::trace!(
            "Document {}: running {:?} rule for {}/{}",
            document_index,
            outcome,
            api_version,
            kind
        );
        rule(document, document_index, results, rules)?;
        Ok(outcome)
    }
}
