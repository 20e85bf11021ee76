//! Plain text formatter.

use crate::analyzer::kubehint::formatter::LintReport;
use crate::analyzer::kubehint::types::FindingCategory;
use colored::Colorize;

/// Format a lint report as plain text.
pub fn format(report: &LintReport, color: bool) -> String {
    let mut output = String::new();

    for (category, finding) in report.findings.iter() {
        let location = match report.location(finding.document_index) {
            Some(location) => location.label(),
            None => "<input>".to_string(),
        };
        let index = finding
            .document_index
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{} #{} [{}] {}: {}\n",
            location,
            index,
            paint(category, color),
            finding.field_path_or_dash(),
            finding.message,
        ));
    }

    let findings = &report.findings;
    if findings.is_empty() {
        output.push_str("No lint findings.\n");
    } else {
        output.push_str(&format!(
            "\nFound {} error(s), {} warning(s), {} suggestion(s) in {} document(s).\n",
            findings.errors.len(),
            findings.warnings.len(),
            findings.suggestions.len(),
            report.documents(),
        ));
    }

    output
}

fn paint(category: FindingCategory, color: bool) -> String {
    let label = category.as_str();
    if !color {
        return label.to_string();
    }
    match category {
        FindingCategory::Error => label.red().bold().to_string(),
        FindingCategory::Warning => label.yellow().to_string(),
        FindingCategory::Suggestion => label.cyan().to_string(),
    }
}
