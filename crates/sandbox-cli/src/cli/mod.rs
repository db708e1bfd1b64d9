//! Command-line interface definition for the sandbox dev server.
//!
//! # Command Structure
//!
//! - `sandbox dev` - Serve every sandbox folder with synthesized entry pages
//! - `sandbox entries` - Emit the multi-page build input map
//! - `sandbox check` - Validate configuration and list discovered sandboxes

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, DevArgs, EntriesArgs, ProjectArgs};
pub use enums::*;
pub use validation::parse_host_arg;

/// Sandbox - serve React and Vue example folders without boilerplate
#[derive(Parser, Debug)]
#[command(
    name = "sandbox",
    version,
    about = "Serve React and Vue example folders without per-example boilerplate",
    long_about = "Sandbox discovers example folders under an examples root and serves each one\n\
                  at /<name>/. Folders holding an index.tsx, index.jsx or index.vue get a\n\
                  generated bootstrap module and HTML shell; folders with an index.html are\n\
                  served as-is."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Logs every routing decision: redirects, rewrites and synthesized pages.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
