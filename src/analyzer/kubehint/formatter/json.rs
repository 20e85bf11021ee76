//! JSON formatter.

use crate::analyzer::kubehint::formatter::LintReport;
use crate::analyzer::kubehint::types::Finding;
use crate::error::Result;
use serde::Serialize;

/// Format a lint report as JSON.
pub fn format(report: &LintReport) -> Result<String> {
    let output = JsonOutput::from(report);
    Ok(serde_json::to_string_pretty(&output)?)
}

#[derive(Serialize)]
struct JsonOutput {
    errors: Vec<JsonFinding>,
    warnings: Vec<JsonFinding>,
    suggestions: Vec<JsonFinding>,
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFinding {
    document_index: Option<usize>,
    field_path: Option<String>,
    message: String,
    file: Option<String>,
    line: Option<u32>,
}

#[derive(Serialize)]
struct JsonSummary {
    documents: usize,
    errors: usize,
    warnings: usize,
    suggestions: usize,
    passed: bool,
}

impl JsonFinding {
    fn new(finding: &Finding, report: &LintReport) -> Self {
        let location = report.location(finding.document_index);
        Self {
            document_index: finding.document_index,
            field_path: finding.field_path.clone(),
            message: finding.message.clone(),
            file: location.map(|l| l.file.clone()),
            line: location.map(|l| l.line),
        }
    }
}

impl From<&LintReport> for JsonOutput {
    fn from(report: &LintReport) -> Self {
        let convert = |findings: &[Finding]| -> Vec<JsonFinding> {
            findings.iter().map(|f| JsonFinding::new(f, report)).collect()
        };
        let findings = &report.findings;
        Self {
            errors: convert(&findings.errors),
            warnings: convert(&findings.warnings),
            suggestions: convert(&findings.suggestions),
            summary: JsonSummary {
                documents: report.documents(),
                errors: findings.errors.len(),
                warnings: findings.warnings.len(),
                suggestions: findings.suggestions.len(),
                passed: report.passed(),
            },
        }
    }
}
