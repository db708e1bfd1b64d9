use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_host_arg;
use crate::config::ConfigOverrides;

/// Available sandbox subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the development server
    ///
    /// Serves the landing page at / and every sandbox at /<name>/.
    Dev(DevArgs),

    /// Print the multi-page build inputs
    ///
    /// Emits a map from sandbox name to its index.html, plus the landing
    /// page under the key "main", for consumption by a production build.
    Entries(EntriesArgs),

    /// Validate configuration and list sandboxes
    ///
    /// Loads sandbox.config.json, validates it, and reports which entry
    /// convention each sandbox resolves to.
    Check(CheckArgs),
}

/// Options shared by every command that loads the project configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Examples directory, relative to the project root
    #[arg(short = 'e', long = "examples", value_name = "DIR")]
    pub examples_dir: Option<PathBuf>,

    /// Path to a config file (defaults to <root>/sandbox.config.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ProjectArgs {
    /// Overrides carrying only the project-level flags.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            root: self.root.clone(),
            config: self.config.clone(),
            examples_dir: self.examples_dir.clone(),
            ..ConfigOverrides::default()
        }
    }
}

/// Arguments for the dev command
#[derive(Args, Debug, Clone)]
pub struct DevArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Port for the development server
    ///
    /// The server falls back to the next free port (up to ten above) when
    /// this one is in use. Defaults to 8030.
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Interface to bind (IP address or localhost)
    #[arg(long, value_name = "HOST", value_parser = parse_host_arg)]
    pub host: Option<String>,

    /// Open the browser once the server is listening
    #[arg(long)]
    pub open: bool,
}

impl DevArgs {
    /// Overrides carrying project and server flags.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            open: self.open,
            ..self.project.overrides()
        }
    }
}

/// Arguments for the entries command
#[derive(Args, Debug, Clone)]
pub struct EntriesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: EntriesFormat,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the JSON schema for sandbox.config.json and exit
    #[arg(long)]
    pub schema: bool,
}
