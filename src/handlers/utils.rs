use crate::analyzer::kubehint::parser::{STDIN_SOURCE, SourcedDocument, parse_paths, parse_sourced};
use crate::config::types::Config;
use crate::error::Result;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read every document named by `paths`, in argument order.
///
/// A path of `-` reads standard input. Directories are walked and
/// filtered through the config's `ignore_paths`.
pub fn load_documents(paths: &[PathBuf], config: &Config) -> Result<Vec<SourcedDocument>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.as_os_str() == "-" {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            documents.extend(parse_sourced(&content, Path::new(STDIN_SOURCE))?);
        } else {
            let single = std::slice::from_ref(path);
            documents.extend(parse_paths(single, |p| config.should_ignore_path(p))?);
        }
    }

    log::info!("Loaded {} document(s)", documents.len());
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_documents_honors_ignore_paths() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.yaml"), "kind: A\napiVersion: v1\n").unwrap();
        fs::create_dir(dir.path().join("vendor")).unwrap();
        fs::write(
            dir.path().join("vendor").join("skip.yaml"),
            "kind: B\napiVersion: v1\n",
        )
        .unwrap();

        let config = Config {
            ignore_paths: vec!["**/vendor/**".to_string()],
            ..Config::default()
        };
        let documents = load_documents(&[dir.path().to_path_buf()], &config).unwrap();
        assert_eq!(documents.len(), 1);
        assert!(documents[0].source.ends_with("app.yaml"));
    }

    #[test]
    fn test_load_documents_keeps_argument_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("z.yaml");
        let second = dir.path().join("a.yaml");
        fs::write(&first, "kind: First\napiVersion: v1\n").unwrap();
        fs::write(&second, "kind: Second\napiVersion: v1\n").unwrap();

        let documents = load_documents(&[first, second], &Config::default()).unwrap();
        let kinds: Vec<_> = documents
            .iter()
            .map(|d| d.value["kind"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(kinds, vec!["First", "Second"]);
    }
}
