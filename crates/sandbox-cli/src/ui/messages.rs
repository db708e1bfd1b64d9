//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Stream::Stderr, Style};

/// Print a success message to stderr.
///
/// ```no_run
/// use sandbox_cli::ui::success;
///
/// success("Development server running at http://127.0.0.1:8030");
/// ```
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stderr, |t| t.style(Style::new().green().bold())),
        message
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        "ℹ".if_supports_color(Stderr, |t| t.style(Style::new().blue().bold())),
        message
    );
}

/// Print a warning message to stderr.
///
/// ```no_run
/// use sandbox_cli::ui::warning;
///
/// warning("Port 8030 is busy, using port 8031 instead");
/// ```
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stderr, |t| t.style(Style::new().yellow().bold())),
        message.if_supports_color(Stderr, |t| t.yellow())
    );
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "✗".if_supports_color(Stderr, |t| t.style(Style::new().red().bold())),
        message.if_supports_color(Stderr, |t| t.red())
    );
}

/// Print a dimmed detail line, only when RUST_LOG is set.
pub fn debug(message: &str) {
    if std::env::var("RUST_LOG").is_ok() {
        eprintln!(
            "{} {}",
            "◆".if_supports_color(Stderr, |t| t.dimmed()),
            message.if_supports_color(Stderr, |t| t.dimmed())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        // These should not panic
        success("Success message");
        info("Info message");
        warning("Warning message");
        error("Error message");
        debug("Debug message");
    }

    #[test]
    #[serial_test::serial]
    fn test_status_messages_with_colors_forced() {
        owo_colors::set_override(true);
        let symbol = format!(
            "{}",
            "✓".if_supports_color(Stderr, |t| t.style(Style::new().green().bold()))
        );
        success("Success message");
        warning("Warning message");
        error("Error message");
        owo_colors::unset_override();

        assert!(symbol.contains('✓'));
        assert!(symbol.starts_with('\u{1b}'));
    }
}
