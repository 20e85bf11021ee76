//! Findings accumulation for a lint run.

use crate::analyzer::kubehint::types::{Finding, FindingCategory};
use serde::Serialize;

/// Accumulates the findings of one lint run.
///
/// The three lists are append-only while the run is in progress and are
/// ordered by document processing order, which is the input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FindingsCollector {
    /// Structural faults and rule-detected errors.
    pub errors: Vec<Finding>,
    /// Issues that should be addressed.
    pub warnings: Vec<Finding>,
    /// Best-practice advice.
    pub suggestions: Vec<Finding>,
}

impl FindingsCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_error(
        &mut self,
        document_index: Option<usize>,
        field_path: Option<&str>,
        message: impl Into<String>,
    ) {
        self.errors
            .push(Finding::new(document_index, field_path, message));
    }

    pub fn record_warning(
        &mut self,
        document_index: Option<usize>,
        field_path: Option<&str>,
        message: impl Into<String>,
    ) {
        self.warnings
            .push(Finding::new(document_index, field_path, message));
    }

    pub fn record_suggestion(
        &mut self,
        document_index: Option<usize>,
        field_path: Option<&str>,
        message: impl Into<String>,
    ) {
        self.suggestions
            .push(Finding::new(document_index, field_path, message));
    }

    /// Record a finding under the given category.
    pub fn record(
        &mut self,
        category: FindingCategory,
        document_index: Option<usize>,
        field_path: Option<&str>,
        message: impl Into<String>,
    ) {
        match category {
            FindingCategory::Error => self.record_error(document_index, field_path, message),
            FindingCategory::Warning => self.record_warning(document_index, field_path, message),
            FindingCategory::Suggestion => {
                self.record_suggestion(document_index, field_path, message)
            }
        }
    }

    /// The findings of a single category.
    pub fn category(&self, category: FindingCategory) -> &[Finding] {
        match category {
            FindingCategory::Error => &self.errors,
            FindingCategory::Warning => &self.warnings,
            FindingCategory::Suggestion => &self.suggestions,
        }
    }

    /// Total number of findings across all categories.
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Iterate over every finding, errors first, then warnings, then
    /// suggestions. Order inside a category is preserved.
    pub fn iter(&self) -> impl Iterator<Item = (FindingCategory, &Finding)> {
        FindingCategory::ALL.into_iter().flat_map(move |category| {
            self.category(category)
                .iter()
                .map(move |finding| (category, finding))
        })
    }

    /// All findings attributed to one document, in category order.
    pub fn for_document(&self, document_index: usize) -> Vec<(FindingCategory, &Finding)> {
        self.iter()
            .filter(|(_, finding)| finding.document_index == Some(document_index))
            .collect()
    }

    /// Highest category present, if any.
    pub fn max_category(&self) -> Option<FindingCategory> {
        self.iter().map(|(category, _)| category).max()
    }
}
