//! Loading manifests from YAML or JSON text and files.

pub mod yaml;

pub use yaml::{STDIN_SOURCE, SourcedDocument, parse_documents, parse_file, parse_paths, parse_sourced};
