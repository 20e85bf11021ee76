use crate::analyzer::summary::{DocumentSummary, summarize_documents};
use crate::config;
use crate::error::Result;
use crate::handlers::utils::load_documents;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Describe every workload found under `paths`.
pub fn handle_summarize(paths: &[PathBuf], config_path: Option<&Path>, json: bool) -> Result<()> {
    let project_path = std::env::current_dir().ok();
    let config = config::load_config(config_path, project_path.as_deref())?;
    let documents = load_documents(paths, &config)?;
    let values: Vec<Value> = documents.into_iter().map(|d| d.value).collect();

    print!("{}", render_summaries(&summarize_documents(&values), json)?);
    Ok(())
}

fn render_summaries(summaries: &[DocumentSummary], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(summaries)? + "\n");
    }
    if summaries.is_empty() {
        return Ok("No workloads found.\n".to_string());
    }
    Ok(summaries
        .iter()
        .map(|summary| format!("{}\n", summary))
        .collect())
}
