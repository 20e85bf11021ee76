//! Rule registry keyed by resource kind and API version.
//!
//! Kinds are stored lowercase. Each kind maps version keys to rule
//! functions; [`VersionKey::Default`] is used when no exact `apiVersion`
//! entry exists.

use crate::analyzer::kubehint::config::RuleConfiguration;
use crate::analyzer::kubehint::results::FindingsCollector;
use crate::analyzer::kubehint::rules;
use crate::error::Result;
use serde_yaml::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A rule function: inspects one document and records findings.
///
/// Called only for documents that passed the shape check. A rule returns
/// an error when the document lacks nested structure it depends on.
pub type RuleFn =
    fn(&Value, usize, &mut FindingsCollector, &RuleConfiguration) -> Result<()>;

/// Second-level key of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VersionKey {
    /// Exact `apiVersion` match, e.g. `apps/v1`
    Exact(String),
    /// Fallback used when no exact version is registered
    Default,
}

impl VersionKey {
    pub fn exact(api_version: impl Into<String>) -> Self {
        Self::Exact(api_version.into())
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(version) => write!(f, "{}", version),
            Self::Default => write!(f, "default"),
        }
    }
}

/// How a `(kind, apiVersion)` pair resolved.
#[derive(Debug, Clone, Copy)]
pub enum Resolution {
    /// A rule registered for exactly this version.
    Exact(RuleFn),
    /// The kind's default rule.
    Default(RuleFn),
    /// The kind is known, but neither the version nor a default is.
    NoVersion,
    /// The kind is not registered at all.
    UnknownKind,
}

impl Resolution {
    /// The resolved rule, if any.
    pub fn rule(&self) -> Option<RuleFn> {
        match self {
            Self::Exact(rule) | Self::Default(rule) => Some(*rule),
            Self::NoVersion | Self::UnknownKind => None,
        }
    }
}

/// Two-level lookup table from normalized kind, then version, to rule.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    kinds: HashMap<String, HashMap<VersionKey, RuleFn>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in rule set.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            "PersistentVolumeClaim",
            VersionKey::Default,
            rules::persistentvolumeclaim::check,
        );
        registry.register(
            "Deployment",
            VersionKey::exact("apps/v1"),
            rules::deployment::check,
        );
        registry.register("Deployment", VersionKey::Default, rules::deployment::check);
        registry
    }

    /// Register a rule. The kind is normalized to lowercase; a previous rule
    /// under the same key is replaced.
    pub fn register(&mut self, kind: &str, version: VersionKey, rule: RuleFn) {
        self.kinds
            .entry(normalize_kind(kind))
            .or_default()
            .insert(version, rule);
    }

    /// Resolve the rule for a document's `kind` and `apiVersion`.
    pub fn lookup(&self, kind: &str, api_version: &str) -> Resolution {
        let Some(versions) = self.kinds.get(&normalize_kind(kind)) else {
            return Resolution::UnknownKind;
        };

        if let Some(rule) = versions.get(&VersionKey::exact(api_version)) {
            return Resolution::Exact(*rule);
        }

        match versions.get(&VersionKey::Default) {
            Some(rule) => Resolution::Default(*rule),
            None => Resolution::NoVersion,
        }
    }

    /// Resolve to a rule function, or `None` when nothing applies.
    pub fn resolve(&self, kind: &str, api_version: &str) -> Option<RuleFn> {
        self.lookup(kind, api_version).rule()
    }

    /// Whether any rule is registered for `kind`.
    pub fn contains_kind(&self, kind: &str) -> bool {
        self.kinds.contains_key(&normalize_kind(kind))
    }

    /// Registered kinds with their version keys, sorted.
    pub fn entries(&self) -> BTreeMap<&str, Vec<&VersionKey>> {
        self.kinds
            .iter()
            .map(|(kind, versions)| {
                let mut keys: Vec<&VersionKey> = versions.keys().collect();
                keys.sort();
                (kind.as_str(), keys)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.kinds.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("kinds", &self.entries())
            .finish()
    }
}

/// Lowercase a kind for lookup.
pub fn normalize_kind(kind: &str) -> String {
    kind.to_lowercase()
}
