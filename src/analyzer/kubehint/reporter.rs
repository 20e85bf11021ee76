//! Operator-facing diagnostics that are not findings.
//!
//! A document whose kind has no registered rule is a gap in rule coverage,
//! not a fault in the document. It is reported through a [`Reporter`] so the
//! notice never shows up in the findings and tests can observe it directly.

use std::sync::Mutex;

/// Receives operator notices emitted during a lint run.
pub trait Reporter: Send + Sync {
    /// No rule is registered for the document's `(apiVersion, kind)` pair.
    fn unmatched_rule(&self, document_index: usize, api_version: &str, kind: &str);
}

/// Human-readable text of the unmatched-rule notice.
pub fn unmatched_rule_message(api_version: &str, kind: &str) -> String {
    format!("-> Warning! No linter defined for {}/{}", api_version, kind)
}

/// Default reporter: forwards notices to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn unmatched_rule(&self, document_index: usize, api_version: &str, kind: &str) {
        log::warn!(
            "{} (document {})",
            unmatched_rule_message(api_version, kind),
            document_index
        );
    }
}

/// A notice captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedRule {
    pub document_index: usize,
    pub api_version: String,
    pub kind: String,
}

impl UnmatchedRule {
    pub fn message(&self) -> String {
        unmatched_rule_message(&self.api_version, &self.kind)
    }
}

/// Reporter that keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    notices: Mutex<Vec<UnmatchedRule>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far.
    pub fn notices(&self) -> Vec<UnmatchedRule> {
        match self.notices.lock() {
            Ok(notices) => notices.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Reporter for RecordingReporter {
    fn unmatched_rule(&self, document_index: usize, api_version: &str, kind: &str) {
        let notice = UnmatchedRule {
            document_index,
            api_version: api_version.to_string(),
            kind: kind.to_string(),
        };
        match self.notices.lock() {
            Ok(mut notices) => notices.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for std::sync::Arc<R> {
    fn unmatched_rule(&self, document_index: usize, api_version: &str, kind: &str) {
        (**self).unmatched_rule(document_index, api_version, kind)
    }
}
