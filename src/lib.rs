//! # KubeHint
//!
//! Best-practice hints for Kubernetes manifests.
//!
//! ## Features
//!
//! - **Shape Checks**: Every document must be a mapping with string `apiVersion` and `kind`
//! - **Versioned Rules**: Rules are looked up by kind, then by exact `apiVersion`, then by a per-kind default
//! - **Graded Findings**: Errors, warnings and suggestions, each tied to a document and field path
//! - **Summaries**: Plain-language descriptions of workloads, their Services and volumes
//!
//! ## Example
//!
//! ```rust,no_run
//! use kubehint::KubeHint;
//! use kubehint::analyzer::kubehint::parser::parse_documents;
//!
//! # fn main() -> kubehint::Result<()> {
//! let documents = parse_documents(&std::fs::read_to_string("deploy.yaml")?)?;
//! let results = KubeHint::default().lint(&serde_yaml::Value::Sequence(documents))?;
//! println!("{} error(s)", results.errors.len());
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::{FindingsCollector, KubeHint, RuleConfiguration};
pub use error::{KubeHintError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
