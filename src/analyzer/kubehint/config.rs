//! Rule configuration for kubehint.
//!
//! The configuration is handed to every rule function. The built-in rules do
//! not consult it yet; it carries the targeted Kubernetes version and any
//! extra keys a custom rule set may want.

use crate::error::{KubeHintError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Kubernetes version assumed when no configuration is supplied.
pub const DEFAULT_KUBERNETES_VERSION: &str = "1.15.4";

/// Configuration passed through to rule functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfiguration {
    /// Targeted Kubernetes version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Keys not known to the built-in rule set.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn default_version() -> String {
    DEFAULT_KUBERNETES_VERSION.to_string()
}

impl Default for RuleConfiguration {
    fn default() -> Self {
        Self {
            version: default_version(),
            extra: BTreeMap::new(),
        }
    }
}

impl RuleConfiguration {
    /// Create a configuration targeting the given Kubernetes version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Set an extra key.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Look up an extra key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Build a configuration from an untyped value.
    ///
    /// The value must be a mapping; anything else is an
    /// [`KubeHintError::InvalidArgument`].
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_mapping() {
            return Err(KubeHintError::InvalidArgument(
                "Lint expects a rule configuration mapping as its second argument".to_string(),
            ));
        }

        serde_yaml::from_value(value.clone()).map_err(|e| {
            KubeHintError::InvalidArgument(format!("Invalid rule configuration: {}", e))
        })
    }

    /// Load configuration from a YAML string.
    pub fn load_from_str(content: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(content)?;
        Self::from_value(&value)
    }
}
