//! Main linting entry points for kubehint.
//!
//! [`KubeHint`] owns the rule registry, the default rule configuration and
//! the reporter for operator notices. Every call to [`KubeHint::lint`]
//! produces a fresh [`FindingsCollector`]; documents are processed strictly
//! in input order.

use crate::analyzer::kubehint::config::RuleConfiguration;
use crate::analyzer::kubehint::dispatch::{DispatchOutcome, Dispatcher};
use crate::analyzer::kubehint::parser::yaml;
use crate::analyzer::kubehint::registry::RuleRegistry;
use crate::analyzer::kubehint::reporter::{LogReporter, Reporter};
use crate::analyzer::kubehint::results::FindingsCollector;
use crate::error::{KubeHintError, Result};
use serde_yaml::Value;

/// The lint engine.
pub struct KubeHint {
    default_rules: RuleConfiguration,
    registry: RuleRegistry,
    reporter: Box<dyn Reporter>,
}

impl KubeHint {
    /// Create an engine with the built-in rules.
    ///
    /// `default_rules` replaces the built-in default configuration for every
    /// lint call that does not supply its own.
    pub fn new(default_rules: Option<RuleConfiguration>) -> Self {
        Self {
            default_rules: default_rules.unwrap_or_default(),
            registry: RuleRegistry::with_builtins(),
            reporter: Box::new(LogReporter),
        }
    }

    /// Replace the rule registry.
    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the reporter that receives operator notices.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn default_rules(&self) -> &RuleConfiguration {
        &self.default_rules
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Lint a sequence of documents with the engine's default configuration.
    ///
    /// `documents` must be a sequence; anything else is rejected with
    /// [`KubeHintError::InvalidArgument`] before any document is examined.
    pub fn lint(&self, documents: &Value) -> Result<FindingsCollector> {
        let documents = expect_sequence(documents)?;
        self.lint_documents(documents, &self.default_rules)
    }

    /// Lint a sequence of documents with an untyped rule configuration,
    /// which must be a mapping.
    pub fn lint_with(&self, documents: &Value, rules: &Value) -> Result<FindingsCollector> {
        let documents = expect_sequence(documents)?;
        let rules = RuleConfiguration::from_value(rules)?;
        self.lint_documents(documents, &rules)
    }

    /// Lint already-separated documents.
    pub fn lint_documents(
        &self,
        documents: &[Value],
        rules: &RuleConfiguration,
    ) -> Result<FindingsCollector> {
        let mut results = FindingsCollector::new();
        let dispatcher = self.dispatcher();

        log::debug!(
            "Linting {} document(s) against Kubernetes {}",
            documents.len(),
            rules.version
        );

        for (index, document) in documents.iter().enumerate() {
            dispatcher.process(document, index, &mut results, rules)?;
        }

        log::debug!(
            "Lint finished: {} error(s), {} warning(s), {} suggestion(s)",
            results.errors.len(),
            results.warnings.len(),
            results.suggestions.len()
        );

        Ok(results)
    }

    /// Lint a single document.
    ///
    /// Findings are appended to `results` when given, otherwise to a fresh
    /// collector. `rules` falls back to the engine's default configuration.
    pub fn lint_document(
        &self,
        document: &Value,
        document_index: usize,
        results: Option<FindingsCollector>,
        rules: Option<&RuleConfiguration>,
    ) -> Result<FindingsCollector> {
        let mut results = results.unwrap_or_default();
        self.lint_document_into(
            document,
            document_index,
            &mut results,
            rules.unwrap_or(&self.default_rules),
        )?;
        Ok(results)
    }

    /// Lint a single document into a borrowed collector and report what the
    /// dispatcher did with it.
    pub fn lint_document_into(
        &self,
        document: &Value,
        document_index: usize,
        results: &mut FindingsCollector,
        rules: &RuleConfiguration,
    ) -> Result<DispatchOutcome> {
        self.dispatcher()
            .process(document, document_index, results, rules)
    }

    /// Parse a multi-document YAML (or JSON) string and lint it.
    pub fn lint_content(&self, content: &str) -> Result<FindingsCollector> {
        let documents = yaml::parse_documents(content)?;
        self.lint_documents(&documents, &self.default_rules)
    }

    fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.registry, self.reporter.as_ref())
    }
}

impl Default for KubeHint {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for KubeHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeHint")
            .field("default_rules", &self.default_rules)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Lint a sequence of documents with a default engine.
pub fn lint(documents: &Value) -> Result<FindingsCollector> {
    KubeHint::default().lint(documents)
}

/// Lint YAML content with a default engine.
pub fn lint_content(content: &str) -> Result<FindingsCollector> {
    KubeHint::default().lint_content(content)
}

fn expect_sequence(documents: &Value) -> Result<&[Value]> {
    documents.as_sequence().map(Vec::as_slice).ok_or_else(|| {
        KubeHintError::InvalidArgument(
            "Lint expects a sequence of documents as its first argument".to_string(),
        )
    })
}
