//! Writing synthetic bootstrap modules into sandbox folders.
//!
//! The module is written to disk so the downstream file service can resolve
//! it like any other file. Writes are idempotent: the file is only replaced
//! when its bytes differ from the generated source, and replacement goes
//! through a sibling temporary file that is atomically renamed over the
//! target. Concurrent first requests therefore never observe a torn file.

use crate::dev::convention::EntryConvention;
use crate::error::RouterError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of [`write_entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryWrite {
    /// The file was created or its content replaced
    Written(PathBuf),
    /// The file already held the generated source
    Unchanged(PathBuf),
}

impl EntryWrite {
    /// Path of the bootstrap module.
    pub fn path(&self) -> &Path {
        match self {
            EntryWrite::Written(path) | EntryWrite::Unchanged(path) => path,
        }
    }
}

/// Write the bootstrap module for `convention` into `folder`.
///
/// Returns `Ok(None)` for conventions without a bootstrap module.
pub async fn write_entry(
    folder: &Path,
    convention: EntryConvention,
) -> Result<Option<EntryWrite>, RouterError> {
    let (Some(entry_file), Some(source)) =
        (convention.entry_file(), convention.bootstrap_source())
    else {
        return Ok(None);
    };

    let path = folder.join(entry_file);

    if let Ok(existing) = tokio::fs::read(&path).await {
        if existing == source.as_bytes() {
            return Ok(Some(EntryWrite::Unchanged(path)));
        }
    }

    let target = path.clone();
    let dir = folder.to_path_buf();
    let result = tokio::task::spawn_blocking(move || persist_atomically(&dir, &target, &source))
        .await
        .map_err(std::io::Error::other)
        .and_then(|inner| inner);

    match result {
        Ok(()) => {
            tracing::debug!("Wrote synthetic entry {}", path.display());
            Ok(Some(EntryWrite::Written(path)))
        }
        Err(source) => Err(RouterError::WriteEntry { path, source }),
    }
}

fn persist_atomically(dir: &Path, target: &Path, source: &str) -> std::io::Result<()> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".__entry")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(source.as_bytes())?;
    tmp.flush()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
