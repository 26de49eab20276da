// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the otorule CLI.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Prints a status message with a prefix to stderr, coloring the prefix when
/// `use_color` is set.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether to emit color codes
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints an error message.
pub fn print_error(message: &str, use_color: bool) {
    print_status("Error", Color::Red, message, use_color);
}

/// Prints a warning message.
pub fn print_warning(message: &str, use_color: bool) {
    print_status("Warning", Color::Yellow, message, use_color);
}
