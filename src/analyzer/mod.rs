//! # Analyzer Module
//!
//! - [`kubehint`] - lints Kubernetes manifests into errors, warnings and
//!   suggestions
//! - [`summary`] - describes workloads, their Services and their volumes

pub mod kubehint;
pub mod summary;

pub use kubehint::{FindingsCollector, KubeHint, RuleConfiguration};
pub use summary::{DocumentSummary, summarize_documents};
