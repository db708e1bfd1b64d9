//! Development server command implementation.
//!
//! Loads the configuration, starts the HTTP server in the background and
//! waits for Ctrl+C or for the server task to end.

use crate::cli::DevArgs;
use crate::dev::{DevConfig, DevServer};
use crate::entries::list_sandboxes;
use crate::error::{CliError, Result};
use crate::ui;
use tokio::signal;

/// Execute the dev command.
///
/// # Errors
///
/// Returns errors for invalid configuration, when no port in the fallback
/// range is free, or when the server fails to bind.
pub async fn execute(args: DevArgs) -> Result<()> {
    ui::info("Starting development server...");

    let config = DevConfig::from_args(&args)?;
    let examples_root = config.base.examples_root();

    ui::info(&format!("Project root: {}", config.base.project_root().display()));
    ui::info(&format!("Examples: {}", examples_root.display()));

    let sandboxes = list_sandboxes(&examples_root);
    if sandboxes.is_empty() {
        ui::warning("No sandboxes found yet; add a folder with an index.tsx, index.jsx, index.vue or index.html");
    } else {
        ui::info(&format!("Found {} sandboxes", sandboxes.len()));
        for sandbox in &sandboxes {
            ui::debug(&format!(
                "  {}/{}/",
                config.server_url(),
                sandbox.name
            ));
        }
    }

    let open_url = config.open_url();
    let open = config.open;

    let server = DevServer::new(config);
    let mut server_handle = tokio::spawn(server.start());

    if open {
        open_browser(&open_url);
    }

    ui::info("Press Ctrl+C to stop");

    tokio::select! {
        _ = signal::ctrl_c() => {
            ui::info("Shutting down development server...");
            server_handle.abort();
        }

        result = &mut server_handle => {
            return match result {
                Ok(Ok(())) => {
                    ui::warning("Server task completed unexpectedly");
                    Ok(())
                }
                Ok(Err(e)) => Err(e),
                Err(e) => Err(CliError::Server(format!("Server task failed: {}", e))),
            };
        }
    }

    ui::success("Development server stopped");
    Ok(())
}

/// Open the given URL in the default browser.
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Windows: `start`
/// - Linux: `xdg-open`
fn open_browser(url: &str) {
    use std::process::Command;

    let result = if cfg!(target_os = "macos") {
        Command::new("open").arg(url).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", url]).spawn()
    } else {
        Command::new("xdg-open").arg(url).spawn()
    };

    match result {
        Ok(_) => ui::info(&format!("Opened browser at {}", url)),
        Err(e) => ui::warning(&format!("Failed to open browser: {}", e)),
    }
}
