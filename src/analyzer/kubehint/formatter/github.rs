//! GitHub Actions annotation formatter.

use crate::analyzer::kubehint::formatter::LintReport;
use crate::analyzer::kubehint::types::FindingCategory;

/// Format for GitHub Actions annotations.
pub fn format(report: &LintReport) -> String {
    let mut output = String::new();

    for (category, finding) in report.findings.iter() {
        let level = match category {
            FindingCategory::Error => "error",
            FindingCategory::Warning => "warning",
            FindingCategory::Suggestion => "notice",
        };

        let target = match report.location(finding.document_index) {
            Some(location) => format!(" file={},line={}", location.file, location.line),
            None => String::new(),
        };

        output.push_str(&format!(
            "::{}{}::{}: {}\n",
            level,
            target,
            finding.field_path_or_dash(),
            finding.message,
        ));
    }

    output
}
