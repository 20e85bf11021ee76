//! Output formatters for lint results.

pub mod github;
pub mod json;
pub mod plain;

use crate::analyzer::kubehint::parser::SourcedDocument;
use crate::analyzer::kubehint::results::FindingsCollector;
use crate::error::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output.
    #[default]
    Plain,
    /// JSON output.
    Json,
    /// GitHub Actions annotations.
    #[value(name = "github")]
    GitHub,
}

/// Where a linted document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocation {
    pub file: String,
    pub line: u32,
}

impl DocumentLocation {
    pub fn label(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

impl From<&SourcedDocument> for DocumentLocation {
    fn from(doc: &SourcedDocument) -> Self {
        Self {
            file: doc.source.display().to_string(),
            line: doc.line,
        }
    }
}

/// Findings of a lint run plus the origin of every linted document.
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    pub findings: FindingsCollector,
    /// Indexed by document index.
    pub locations: Vec<DocumentLocation>,
}

impl LintReport {
    pub fn new(findings: FindingsCollector, documents: &[SourcedDocument]) -> Self {
        Self {
            findings,
            locations: documents.iter().map(DocumentLocation::from).collect(),
        }
    }

    /// Number of linted documents.
    pub fn documents(&self) -> usize {
        self.locations.len()
    }

    /// Location of a document, if the index is known.
    pub fn location(&self, document_index: Option<usize>) -> Option<&DocumentLocation> {
        document_index.and_then(|i| self.locations.get(i))
    }

    /// Whether the run should fail the calling process.
    pub fn passed(&self) -> bool {
        !self.findings.has_errors()
    }
}

/// Format a lint report to a string.
pub fn format_report_to_string(
    report: &LintReport,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => plain::format(report, color),
        OutputFormat::Json => json::format(report)?,
        OutputFormat::GitHub => github::format(report),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_str("github", true), Ok(OutputFormat::GitHub));
        assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("sarif", true).is_err());
        assert_eq!(
            serde_json::to_string(&OutputFormat::GitHub).unwrap(),
            "\"github\""
        );
    }

    #[test]
    fn test_format_report_dispatches_on_format() {
        let mut findings = FindingsCollector::new();
        findings.record_error(Some(0), Some("kind"), "kind is invalid!");
        let report = LintReport {
            findings,
            locations: vec![DocumentLocation {
                file: "a.yaml".to_string(),
                line: 1,
            }],
        };

        let plain = format_report_to_string(&report, OutputFormat::Plain, false).unwrap();
        assert!(plain.starts_with("a.yaml:1 #0 [error] kind: kind is invalid!"));
        let json = format_report_to_string(&report, OutputFormat::Json, false).unwrap();
        assert!(json.contains("\"documentIndex\": 0"));
        let github = format_report_to_string(&report, OutputFormat::GitHub, false).unwrap();
        assert_eq!(github, "::error file=a.yaml,line=1::kind: kind is invalid!\n");
    }

    #[test]
    fn test_report_location_lookup() {
        let report = LintReport {
            findings: FindingsCollector::new(),
            locations: vec![DocumentLocation {
                file: "a.yaml".to_string(),
                line: 3,
            }],
        };
        assert_eq!(report.location(Some(0)).map(|l| l.label()), Some("a.yaml:3".to_string()));
        assert_eq!(report.location(Some(1)), None);
        assert_eq!(report.location(None), None);
        assert!(report.passed());
    }
}
