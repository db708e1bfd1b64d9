//! Entries command implementation.
//!
//! Prints the multi-page build inputs for a production build to consume.

use crate::cli::{EntriesArgs, EntriesFormat};
use crate::config::SandboxConfig;
use crate::entries::{enumerate, EntriesMap};
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the entries command.
///
/// Output goes to stdout unless `--out` is given, in which case the file is
/// created or replaced.
pub async fn execute(args: EntriesArgs) -> Result<()> {
    let config = SandboxConfig::load(&args.project.overrides())?;
    config.validate()?;

    let entries = enumerate(&config.project_root(), &config.examples_root());
    let rendered = render(&entries, args.format)?;

    match args.out {
        Some(path) => {
            tokio::fs::write(&path, rendered).await.with_path(&path)?;
            ui::success(&format!(
                "Wrote {} entries to {}",
                entries.len(),
                path.display()
            ));
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Render the map in the requested format, always newline-terminated.
fn render(entries: &EntriesMap, format: EntriesFormat) -> Result<String> {
    let mut out = match format {
        EntriesFormat::Json => serde_json::to_string_pretty(entries)?,
        EntriesFormat::Lines => entries
            .iter()
            .map(|(name, path)| format!("{}\t{}", name, path.display()))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> EntriesMap {
        let mut entries = EntriesMap::new();
        entries.insert("main".to_string(), PathBuf::from("/work/index.html"));
        entries.insert(
            "legacy".to_string(),
            PathBuf::from("/work/examples/legacy/index.html"),
        );
        entries
    }

    #[test]
    fn test_render_json() {
        let out = render(&sample(), EntriesFormat::Json).unwrap();
        insta::assert_snapshot!(out.trim_end(), @r#"
        {
          "main": "/work/index.html",
          "legacy": "/work/examples/legacy/index.html"
        }
        "#);
    }

    #[test]
    fn test_render_lines() {
        let out = render(&sample(), EntriesFormat::Lines).unwrap();
        assert_eq!(
            out,
            "main\t/work/index.html\nlegacy\t/work/examples/legacy/index.html\n"
        );
    }
}
