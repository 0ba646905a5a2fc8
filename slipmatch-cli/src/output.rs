//! Output formatting utilities

use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Color, ContentArrangement, Table};
use slipmatch_core::Severity;

/// Apply the colour for a report severity
pub fn paint(severity: Severity, msg: &str) -> ColoredString {
    match severity {
        Severity::Success => msg.green(),
        Severity::Info => msg.blue(),
        Severity::Warning => msg.yellow(),
        Severity::Failure => msg.red(),
    }
}

/// Table cell colour for a report severity
pub fn cell_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Info => Color::Blue,
        Severity::Warning => Color::Yellow,
        Severity::Failure => Color::Red,
    }
}

/// Print a line in the colour of its severity
pub fn emit(severity: Severity, msg: &str) {
    println!("{}", paint(severity, msg));
}

/// Print a success message
pub fn success(msg: &str) {
    emit(Severity::Success, msg);
}

/// Print an informational message
pub fn info(msg: &str) {
    emit(Severity::Info, msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    emit(Severity::Warning, msg);
}

/// Print a failure line to stdout (part of the report)
pub fn failure(msg: &str) {
    emit(Severity::Failure, msg);
}

/// Print a heading
pub fn heading(msg: &str) {
    println!("{}", msg.bold());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
