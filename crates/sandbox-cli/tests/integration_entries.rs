//! Integration tests for the entries map against a loaded configuration.

use sandbox_cli::config::{ConfigOverrides, SandboxConfig, CONFIG_FILE_NAME};
use sandbox_cli::entries::{enumerate, LANDING_KEY};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write(root: &std::path::Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
#[serial]
fn test_entries_follow_configured_examples_dir() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, CONFIG_FILE_NAME, r#"{ "examplesDir": "demos" }"#);
    write(root, "index.html", "");
    write(root, "demos/legacy/index.html", "");
    write(root, "demos/counter/index.tsx", "");
    write(root, "examples/ignored/index.html", "");

    let config = SandboxConfig::load(&ConfigOverrides {
        root: Some(root.to_path_buf()),
        ..ConfigOverrides::default()
    })
    .unwrap();

    let entries = enumerate(&config.project_root(), &config.examples_root());
    let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![LANDING_KEY, "legacy"]);
    assert_eq!(entries["legacy"], root.join("demos/legacy/index.html"));
    assert!(entries.values().all(|path| path.is_absolute()));
}

#[test]
fn test_relative_roots_are_made_absolute() {
    let entries = enumerate(
        std::path::Path::new("."),
        std::path::Path::new("./does-not-exist"),
    );
    assert_eq!(entries.len(), 1);
    assert!(entries[LANDING_KEY].is_absolute());
    assert!(entries[LANDING_KEY].ends_with("index.html"));
}

#[test]
fn test_entries_serialize_as_json_object() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "examples/about/index.html", "");

    let entries = enumerate(root, &root.join("examples"));
    let json = serde_json::to_value(&entries).unwrap();

    assert_eq!(json.as_object().unwrap().len(), 2);
    assert_eq!(
        json["about"],
        root.join("examples/about/index.html").display().to_string()
    );
}
