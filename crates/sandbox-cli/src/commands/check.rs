//! Check command implementation.
//!
//! Validates configuration and reports how each sandbox will be served.

use crate::cli::CheckArgs;
use crate::config::SandboxConfig;
use crate::entries::list_sandboxes;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Returns errors for an unreadable config file or invalid values.
pub async fn execute(args: CheckArgs) -> Result<()> {
    if args.schema {
        let schema = SandboxConfig::json_schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    ui::info("Checking configuration...");

    let config = SandboxConfig::load(&args.project.overrides())?;
    config.validate()?;

    ui::success("Configuration is valid!");

    let landing = config.landing_page();
    if !landing.exists() {
        ui::warning(&format!("Landing page not found: {}", landing.display()));
    }

    let examples_root = config.examples_root();
    if !examples_root.is_dir() {
        ui::warning(&format!(
            "Examples directory not found: {}",
            examples_root.display()
        ));
        return Ok(());
    }

    let sandboxes = list_sandboxes(&examples_root);
    let mount = config.examples_mount();
    ui::info(&format!(
        "Found {} sandboxes in {} (served from {})",
        sandboxes.len(),
        examples_root.display(),
        mount
    ));

    let mut unresolved = 0;
    for sandbox in &sandboxes {
        match sandbox.convention {
            Some(convention) => {
                ui::success(&format!("  /{}/  {}", sandbox.name, convention));
            }
            None => {
                unresolved += 1;
                ui::warning(&format!(
                    "  /{}/  no index.tsx, index.jsx, index.vue or index.html",
                    sandbox.name
                ));
            }
        }
    }

    if unresolved > 0 {
        ui::warning(&format!("{} sandboxes will answer 404", unresolved));
    } else {
        ui::success("All checks passed!");
    }

    Ok(())
}
