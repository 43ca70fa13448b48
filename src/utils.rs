//! Supporting helpers: colored stderr prefixes for diagnostics.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal configuration problems.
pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for friendly notes (e.g. defaults in effect).
pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Prefix for per-file trace lines in debug mode.
pub fn debug_prefix() -> String {
    if colors_enabled() {
        "[debug]".bright_black().to_string()
    } else {
        "[debug]".to_string()
    }
}
