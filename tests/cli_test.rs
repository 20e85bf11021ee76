//! Integration tests for the kubehint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly.
#![allow(deprecated)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SINGLE_REPLICA: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: cache
spec:
  replicas: 1
  template:
    spec:
      containers:
      - image: redis
"#;

const BROKEN: &str = r#"apiVersion: v1
kind: ""
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn kubehint(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("kubehint"));
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

#[test]
fn cli_lint_reports_warnings_and_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(&temp, "deploy.yaml", SINGLE_REPLICA);

    kubehint(&temp)
        .args(["lint", "deploy.yaml", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "deploy.yaml:1 #0 [warning] spec.template.spec.containers[0]: No resource limits defined!",
        ))
        .stdout(predicate::str::contains("[suggestion] spec.replicas"))
        .stdout(predicate::str::contains(
            "Found 0 error(s), 1 warning(s), 1 suggestion(s) in 1 document(s).",
        ));
    Ok(())
}

#[test]
fn cli_lint_fails_on_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(&temp, "broken.yaml", BROKEN);

    kubehint(&temp)
        .args(["lint", "broken.yaml", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[error] kind: kind is invalid!"));

    kubehint(&temp)
        .args(["lint", "broken.yaml", "--no-fail"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_lint_json_over_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir(temp.path().join("k8s"))?;
    fs::write(temp.path().join("k8s").join("a.yaml"), SINGLE_REPLICA)?;
    fs::write(temp.path().join("k8s").join("b.yml"), BROKEN)?;
    fs::write(temp.path().join("k8s").join("notes.txt"), "not a manifest")?;

    let output = kubehint(&temp)
        .args(["lint", "k8s", "--format", "json"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["summary"]["documents"], 2);
    assert_eq!(json["summary"]["errors"], 1);
    assert_eq!(json["errors"][0]["documentIndex"], 1);
    assert_eq!(json["summary"]["passed"], false);
    Ok(())
}

#[test]
fn cli_lint_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    kubehint(&temp)
        .args(["lint", "-", "--format", "github"])
        .write_stdin(SINGLE_REPLICA)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "::notice file=<stdin>,line=1::spec.replicas: One replica implies a single point of failure!",
        ));
    Ok(())
}

#[test]
fn cli_lint_uses_local_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(&temp, "deploy.yaml", SINGLE_REPLICA);
    write(&temp, ".kubehint.toml", "[output]\nformat = \"github\"\n");

    kubehint(&temp)
        .args(["lint", "deploy.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("::warning file=deploy.yaml,line=1::"));
    Ok(())
}

#[test]
fn cli_fatal_fault_exits_with_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(&temp, "bad.yaml", "apiVersion: apps/v1\nkind: Deployment\n");

    kubehint(&temp)
        .args(["lint", "bad.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));

    kubehint(&temp)
        .args(["lint", "missing.yaml"])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn cli_summarize_describes_workloads() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(&temp, "deploy.yaml", SINGLE_REPLICA);

    kubehint(&temp)
        .args(["summarize", "deploy.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cache"));
    Ok(())
}

#[test]
fn cli_rules_lists_builtins() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    kubehint(&temp)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("deployment: apps/v1, default"));
    Ok(())
}
