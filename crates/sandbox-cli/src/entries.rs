//! Multi-page build inputs.
//!
//! Enumerates `<examples-root>/<name>/index.html` documents and maps each
//! sandbox name to its absolute path. The landing page is always present
//! under [`LANDING_KEY`]. The map is what a production build consumes as its
//! set of named HTML inputs; the dev server never reads it.

use crate::dev::EntryConvention;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Key of the project's own landing page.
pub const LANDING_KEY: &str = "main";

/// Sandbox name (plus [`LANDING_KEY`]) to HTML document path.
pub type EntriesMap = IndexMap<String, PathBuf>;

/// Build the entries map for a project.
///
/// A missing or empty examples root yields a map holding only the landing
/// page. A sandbox named like the landing key is skipped with a warning.
/// Sandboxes are listed in file-name order.
pub fn enumerate(project_root: &Path, examples_root: &Path) -> EntriesMap {
    let project_root = absolute(project_root);
    let examples_root = absolute(examples_root);

    let mut entries = EntriesMap::new();
    entries.insert(LANDING_KEY.to_string(), project_root.join("index.html"));

    for document in WalkDir::new(&examples_root)
        .min_depth(2)
        .max_depth(2)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == "index.html")
    {
        let Some(name) = folder_name(document.path()) else {
            tracing::warn!("Skipping sandbox with non UTF-8 name: {}", document.path().display());
            continue;
        };

        if is_hidden(name) {
            continue;
        }

        if name == LANDING_KEY {
            tracing::warn!(
                "Sandbox '{}' collides with the landing page entry and is not included",
                name
            );
            continue;
        }

        entries.insert(name.to_string(), document.into_path());
    }

    tracing::debug!(
        "Enumerated {} sandbox entries under {}",
        entries.len() - 1,
        examples_root.display()
    );

    entries
}

/// A sandbox folder together with the convention it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxFolder {
    pub name: String,
    pub path: PathBuf,
    pub convention: Option<EntryConvention>,
}

/// List every immediate sub-folder of the examples root with its resolved
/// entry convention, in file-name order.
pub fn list_sandboxes(examples_root: &Path) -> Vec<SandboxFolder> {
    WalkDir::new(examples_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            if is_hidden(&name) {
                return None;
            }
            let convention = EntryConvention::detect_blocking(entry.path());
            Some(SandboxFolder {
                name,
                path: entry.into_path(),
                convention,
            })
        })
        .collect()
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn folder_name(document: &Path) -> Option<&str> {
    document.parent()?.file_name()?.to_str()
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
