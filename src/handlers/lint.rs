//! Handler for the `lint` command.

use crate::analyzer::kubehint::{
    FindingsCollector, KubeHint, LintReport, OutputFormat, format_report_to_string,
};
use crate::config::{self, types};
use crate::error::Result;
use crate::handlers::utils::load_documents;
use serde_yaml::Value;
use std::path::PathBuf;

/// Options for the lint command
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Files, directories or `-` for stdin
    pub paths: Vec<PathBuf>,
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Output format, overriding the config
    pub format: Option<OutputFormat>,
    /// Kubernetes version, overriding the config
    pub rules_version: Option<String>,
    /// Report success even when errors are found
    pub no_fail: bool,
    /// Disable colored output
    pub no_color: bool,
}

/// Lint the requested manifests and print the report.
///
/// Returns `Ok(false)` when error findings should fail the process.
pub fn handle_lint(options: &LintOptions) -> Result<bool> {
    let project_path = std::env::current_dir().ok();
    let config = config::load_config(options.config.as_deref(), project_path.as_deref())?;
    let (output, passed) = run_lint(options, &config)?;
    print!("{}", output);
    Ok(passed || options.no_fail)
}

/// Lint and render without touching stdout.
pub fn run_lint(options: &LintOptions, config: &types::Config) -> Result<(String, bool)> {
    let documents = load_documents(&options.paths, config)?;

    let mut rules = config.rules.clone();
    if let Some(version) = &options.rules_version {
        rules.version = version.clone();
    }

    let engine = KubeHint::new(Some(rules.clone()));
    let values: Vec<Value> = documents.iter().map(|d| d.value.clone()).collect();
    let findings: FindingsCollector = engine.lint_documents(&values, &rules)?;

    log::info!(
        "Linted {} document(s): {} error(s), {} warning(s), {} suggestion(s)",
        values.len(),
        findings.errors.len(),
        findings.warnings.len(),
        findings.suggestions.len()
    );

    let report = LintReport::new(findings, &documents);
    let format = options.format.unwrap_or(config.output.format);
    let color = config.output.color && !options.no_color;
    let passed = report.passed();
    Ok((format_report_to_string(&report, format, color)?, passed))
}
