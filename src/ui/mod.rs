//! Terminal presentation helpers.

pub mod icons;

use console::style;

/// A rejected-input line, red when stderr is a terminal.
pub fn error_line(line: &str) -> String {
    style(line).for_stderr().red().to_string()
}

/// A section heading with its underline.
pub fn heading(title: &str) -> String {
    format!("{}\n{}", style(title).bold(), "=".repeat(title.chars().count()))
}
