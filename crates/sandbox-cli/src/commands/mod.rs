//! Command implementations for the sandbox CLI.
//!
//! - [`dev`] - Development server with sandbox routing
//! - [`entries`] - Multi-page build inputs
//! - [`check`] - Configuration validation and sandbox listing
//!
//! Each command is implemented in its own module and provides an `execute`
//! function that takes the parsed command arguments and returns a Result.

pub mod check;
pub mod dev;
pub mod entries;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use dev::execute as dev_execute;
pub use entries::execute as entries_execute;
