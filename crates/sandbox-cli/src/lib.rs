//! Sandbox - a development server for self-contained UI examples.
//!
//! Every folder under the examples directory is a sandbox. A folder holding
//! an `index.tsx`, `index.jsx` or `index.vue` is served as an app without
//! any boilerplate: the server writes a small bootstrap module next to the
//! component and answers with a generated HTML page that loads it. Folders
//! with a hand-written `index.html` are served as is.
//!
//! # Architecture
//!
//! - [`dev`] - Sandbox routing middleware and the axum dev server
//! - [`entries`] - Multi-page build inputs (`name -> index.html`)
//! - [`config`] - `sandbox.config.json`, environment and CLI merging
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status output
//! - `cli` / `commands` - Argument parsing and command implementations
//!
//! # Example
//!
//! ```rust,no_run
//! use sandbox_cli::{config::SandboxConfig, entries};
//!
//! let config = SandboxConfig::default();
//! let map = entries::enumerate(&config.project_root(), &config.examples_root());
//! assert!(map.contains_key(entries::LANDING_KEY));
//! ```

// Public modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod dev;
pub mod entries;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result, ResultExt, RouterError};
