use crate::analyzer::kubehint::{OutputFormat, RuleConfiguration};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule configuration handed to every lint run
    #[serde(default)]
    pub rules: RuleConfiguration,
    #[serde(default)]
    pub output: OutputConfig,
    /// Glob patterns for paths skipped during file discovery
    #[serde(default)]
    pub ignore_paths: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

impl Config {
    /// Check if a file path should be ignored based on ignore_paths patterns.
    pub fn should_ignore_path(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.ignore_paths {
            if let Ok(glob) = glob::Pattern::new(pattern)
                && glob.matches(&path_str)
            {
                return true;
            }
            // Also check simple substring matches
            if path_str.contains(pattern.as_str()) {
                return true;
            }
        }
        false
    }
}
