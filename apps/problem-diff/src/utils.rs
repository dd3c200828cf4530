//! Colored stderr prefixes shared by the binary and printers.

use owo_colors::OwoColorize;

/// Colors are off for `json` output or when `NO_COLOR` is set.
pub fn colors_enabled(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix(output: &str) -> String {
    if colors_enabled(output) {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix(output: &str) -> String {
    if colors_enabled(output) {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix(output: &str) -> String {
    if colors_enabled(output) {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}
