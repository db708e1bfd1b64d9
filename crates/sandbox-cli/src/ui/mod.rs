//! Terminal UI helpers for status output.
//!
//! Status lines go to stderr so that machine-readable output (for example
//! the entries map printed by `sandbox entries`) can be piped from stdout.
//!
//! # Examples
//!
//! ```no_run
//! use sandbox_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Serving 3 sandboxes");
//! ui::success("Development server running at http://127.0.0.1:8030");
//! ```

mod messages;

pub use messages::{debug, error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// `--no-color` wins over everything; otherwise `owo-colors` colorizes only
/// when [`should_use_color`] agrees.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
