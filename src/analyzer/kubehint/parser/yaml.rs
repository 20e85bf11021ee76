//! YAML parsing for Kubernetes manifests.
//!
//! A stream is split on `---` separators while tracking the line each
//! document starts on. Empty and comment-only documents are dropped; any
//! other document is kept as-is, even when it is not a mapping, so the lint
//! engine can report it.

use crate::error::{KubeHintError, Result};
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Name used for content that did not come from a file.
pub const STDIN_SOURCE: &str = "<stdin>";

/// A parsed document together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcedDocument {
    /// File the document was read from.
    pub source: PathBuf,
    /// 1-indexed line the document starts on.
    pub line: u32,
    /// The parsed document.
    pub value: Value,
}

impl SourcedDocument {
    /// `file:line` label for display.
    pub fn location(&self) -> String {
        format!("{}:{}", self.source.display(), self.line)
    }
}

/// Parse a YAML string containing one or more documents.
pub fn parse_documents(content: &str) -> Result<Vec<Value>> {
    Ok(parse_sourced(content, Path::new(STDIN_SOURCE))?
        .into_iter()
        .map(|doc| doc.value)
        .collect())
}

/// Parse YAML content, remembering the source path and start line of
/// every document.
pub fn parse_sourced(content: &str, path: &Path) -> Result<Vec<SourcedDocument>> {
    let mut documents = Vec::new();

    for chunk in split_documents(content) {
        let Some(line) = chunk.first_content_line() else {
            continue;
        };

        let value: Value =
            serde_yaml::from_str(&chunk.text).map_err(|e| KubeHintError::Syntax {
                source_name: path.display().to_string(),
                line,
                message: e.to_string(),
            })?;

        documents.push(SourcedDocument {
            source: path.to_path_buf(),
            line,
            value,
        });
    }

    Ok(documents)
}

/// Parse a single YAML or JSON file.
pub fn parse_file(path: &Path) -> Result<Vec<SourcedDocument>> {
    let content = std::fs::read_to_string(path)?;
    parse_sourced(&content, path)
}

/// Parse every file named in `paths`, in order.
///
/// Directories are walked recursively in file-name order and only
/// `.yaml`, `.yml` and `.json` files inside them are read. Files inside a
/// directory that fail to parse are logged and skipped; a file named
/// explicitly must parse. Paths for which `ignore` returns true are skipped.
pub fn parse_paths<F>(paths: &[PathBuf], ignore: F) -> Result<Vec<SourcedDocument>>
where
    F: Fn(&Path) -> bool,
{
    let mut documents = Vec::new();

    for path in paths {
        if ignore(path) {
            log::debug!("Ignoring {}", path.display());
            continue;
        }

        if path.is_dir() {
            documents.extend(parse_dir(path, &ignore));
        } else {
            documents.extend(parse_file(path)?);
        }
    }

    Ok(documents)
}

fn parse_dir<F>(path: &Path, ignore: &F) -> Vec<SourcedDocument>
where
    F: Fn(&Path) -> bool,
{
    let mut documents = Vec::new();

    for entry in walkdir::WalkDir::new(path)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let entry_path = entry.path();
        if !entry_path.is_file() || !is_manifest_file(entry_path) || ignore(entry_path) {
            continue;
        }

        match parse_file(entry_path) {
            Ok(mut docs) => documents.append(&mut docs),
            Err(e) => {
                log::warn!("Skipping {}: {}", entry_path.display(), e);
            }
        }
    }

    documents
}

/// Whether a file looks like a manifest by extension.
pub fn is_manifest_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml") | Some("json")
    )
}

struct Chunk {
    start_line: u32,
    text: String,
}

impl Chunk {
    /// Line of the first line that is neither blank nor a comment.
    fn first_content_line(&self) -> Option<u32> {
        self.text
            .lines()
            .position(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(|offset| self.start_line + offset as u32)
    }
}

fn split_documents(content: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current = Chunk {
        start_line: 1,
        text: String::new(),
    };

    for (i, line) in content.lines().enumerate() {
        let line_number = i as u32 + 1;

        if line.trim_end() == "---" || line.starts_with("--- ") {
            chunks.push(current);
            current = Chunk {
                start_line: line_number,
                text: String::new(),
            };
            // `--- value` keeps its inline content on the separator line
            if let Some(rest) = line.strip_prefix("--- ") {
                current.text.push_str(rest);
            }
            current.text.push('\n');
            continue;
        }

        if line.trim_end() == "..." {
            continue;
        }

        current.text.push_str(line);
        current.text.push('\n');
    }

    chunks.push(current);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multi_document() {
        let yaml = r#"apiVersion: v1
kind: Service
metadata:
  name: my-service
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: my-deployment
"#;
        let docs = parse_sourced(yaml, Path::new("app.yaml")).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].line, 1);
        assert_eq!(docs[0].value["kind"], Value::String("Service".to_string()));
        assert_eq!(docs[1].line, 6);
        assert_eq!(docs[1].location(), "app.yaml:6");
    }

    #[test]
    fn test_leading_separator_and_comments() {
        let yaml = "---\n# header\n\napiVersion: v1\nkind: PersistentVolumeClaim\n---\n# only a comment\n---\n";
        let docs = parse_sourced(yaml, Path::new("pvc.yaml")).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].line, 4);
    }

    #[test]
    fn test_non_mapping_documents_are_kept() {
        let docs = parse_documents("- a\n- b\n---\n42\n---\nnull\n").unwrap();
        assert_eq!(docs.len(), 3);
        assert!(docs[0].is_sequence());
        assert!(docs[1].is_number());
        assert!(docs[2].is_null());
    }

    #[test]
    fn test_json_document() {
        let docs = parse_documents(r#"{"apiVersion": "v1", "kind": "PersistentVolumeClaim"}"#).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["apiVersion"], Value::String("v1".to_string()));
    }

    #[test]
    fn test_syntax_error_reports_line() {
        let yaml = "apiVersion: v1\nkind: Service\n---\nkind: [unclosed\n";
        let err = parse_sourced(yaml, Path::new("bad.yaml")).unwrap_err();
        match err {
            KubeHintError::Syntax {
                source_name, line, ..
            } => {
                assert_eq!(source_name, "bad.yaml");
                assert_eq!(line, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_yaml() {
        assert!(parse_documents("").unwrap().is_empty());
        assert!(parse_documents("# comment\n# another").unwrap().is_empty());
    }

    #[test]
    fn test_parse_paths_walks_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("b.yaml"),
            "apiVersion: v1\nkind: PersistentVolumeClaim\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("a.yml"),
            "apiVersion: apps/v1\nkind: Deployment\n---\napiVersion: v1\nkind: Service\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "kind: nope").unwrap();
        std::fs::write(dir.path().join("broken.yaml"), "kind: [").unwrap();

        let docs = parse_paths(&[dir.path().to_path_buf()], |_| false).unwrap();
        let kinds: Vec<_> = docs
            .iter()
            .map(|d| d.value["kind"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(kinds, vec!["Deployment", "Service", "PersistentVolumeClaim"]);
    }

    #[test]
    fn test_parse_paths_honors_ignore() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("keep.yaml"), "apiVersion: v1\nkind: A\n").unwrap();
        std::fs::write(dir.path().join("skip.yaml"), "apiVersion: v1\nkind: B\n").unwrap();

        let docs = parse_paths(&[dir.path().to_path_buf()], |p| {
            p.to_string_lossy().contains("skip")
        })
        .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].value["kind"], Value::String("A".to_string()));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = parse_paths(&[PathBuf::from("/nonexistent/kubehint.yaml")], |_| false).unwrap_err();
        assert!(matches!(err, KubeHintError::Io(_)));
    }
}
