//! End-to-end tests for the `sandbox` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sandbox() -> Command {
    let mut cmd = Command::cargo_bin("sandbox").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let examples = temp.path().join("examples");
    fs::write(temp.path().join("index.html"), "").unwrap();
    for (folder, file) in [
        ("counter", "index.tsx"),
        ("legacy", "index.html"),
        ("todo", "index.vue"),
    ] {
        fs::create_dir_all(examples.join(folder)).unwrap();
        fs::write(examples.join(folder).join(file), "").unwrap();
    }
    temp
}

#[test]
fn test_entries_prints_json_map() {
    let temp = project();

    let output = sandbox()
        .args(["entries", "--root"])
        .arg(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let map: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let map = map.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert!(map["main"].as_str().unwrap().ends_with("index.html"));
    assert!(map["legacy"]
        .as_str()
        .unwrap()
        .ends_with("legacy/index.html"));
}

#[test]
fn test_entries_lines_to_file() {
    let temp = project();
    let out = temp.path().join("entries.txt");

    sandbox()
        .args(["--quiet", "entries", "--format", "lines", "--root"])
        .arg(temp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    let names: Vec<&str> = written
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(names, vec!["main", "legacy"]);
}

#[test]
fn test_check_schema() {
    sandbox()
        .args(["check", "--schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"examplesDir\""))
        .stdout(predicate::str::contains("\"openPath\""));
}

#[test]
fn test_check_lists_sandboxes() {
    let temp = project();

    sandbox()
        .args(["check", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration is valid"))
        .stderr(predicate::str::contains("/counter/"))
        .stderr(predicate::str::contains("react (index.tsx)"))
        .stderr(predicate::str::contains("vue (index.vue)"))
        .stderr(predicate::str::contains("static (index.html)"));
}

#[test]
fn test_check_rejects_invalid_config() {
    let temp = project();
    fs::write(
        temp.path().join("sandbox.config.json"),
        r#"{ "server": { "port": 0 } }"#,
    )
    .unwrap();

    sandbox()
        .args(["check", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("server.port"));
}

#[test]
fn test_examples_dir_must_be_url_safe() {
    let temp = project();
    fs::create_dir_all(temp.path().join("my examples/legacy")).unwrap();
    fs::write(temp.path().join("my examples/legacy/index.html"), "").unwrap();

    sandbox()
        .args(["check", "--examples", "my examples", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("examplesDir"));

    sandbox()
        .args(["entries", "--examples", "my examples", "--root"])
        .arg(temp.path())
        .assert()
        .failure();
}

#[test]
fn test_missing_explicit_config() {
    let temp = project();

    sandbox()
        .args(["entries", "--root"])
        .arg(temp.path())
        .args(["--config", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    sandbox()
        .args(["--verbose", "--quiet", "check", "--schema"])
        .assert()
        .failure();
}
