// Handler modules
pub mod lint;
pub mod rules;
pub mod summarize;
pub mod utils;

// Re-export all handler functions
pub use lint::{LintOptions, handle_lint};
pub use rules::handle_rules;
pub use summarize::handle_summarize;
pub use utils::load_documents;
