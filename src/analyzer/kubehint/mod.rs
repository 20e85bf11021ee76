//! KubeHint: best-practice hints for Kubernetes manifests
//!
//! Every document in a batch is first checked for its minimal shape (a
//! mapping with string `apiVersion` and `kind`), then routed to the rule
//! registered for its kind and version. Rules record findings into a single
//! collector shared by the whole batch:
//!
//! - **errors** - structural faults and broken manifests
//! - **warnings** - issues that should be addressed
//! - **suggestions** - best-practice advice
//!
//! # Example
//!
//! ```rust,no_run
//! use kubehint::analyzer::kubehint::KubeHint;
//!
//! # fn main() -> kubehint::Result<()> {
//! let yaml = r#"
//! apiVersion: apps/v1
//! kind: Deployment
//! spec:
//!   replicas: 1
//!   template:
//!     spec:
//!       containers:
//!       - image: redis
//! "#;
//! let results = KubeHint::default().lint_content(yaml)?;
//! for finding in &results.suggestions {
//!     println!("{}", finding);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Rules
//!
//! | Kind                    | Version            | Checks                              |
//! |-------------------------|--------------------|-------------------------------------|
//! | `Deployment`            | `apps/v1`, default | replicas, containers, resources     |
//! | `PersistentVolumeClaim` | default            | none                                |
//!
//! Kinds without a rule are not findings; they are reported to the
//! engine's [`Reporter`].

pub mod config;
pub mod dispatch;
pub mod extract;
pub mod formatter;
pub mod lint;
pub mod parser;
pub mod registry;
pub mod reporter;
pub mod results;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export main types and functions
pub use config::{DEFAULT_KUBERNETES_VERSION, RuleConfiguration};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use formatter::{LintReport, OutputFormat, format_report_to_string};
pub use lint::{KubeHint, lint, lint_content};
pub use registry::{Resolution, RuleFn, RuleRegistry, VersionKey};
pub use reporter::{LogReporter, RecordingReporter, Reporter, UnmatchedRule};
pub use results::FindingsCollector;
pub use types::{Finding, FindingCategory};
