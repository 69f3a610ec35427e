//! Gutter formatting for quoted content

use super::GUTTER;

/// Formats text with a gutter (single-space with background color) on each line
///
/// Used to quote external output, such as git's stderr, beneath an error
/// message. The gutter sits at column 0 and content starts at column 2, which
/// lines up with the text of symbol-prefixed messages.
///
/// ```
/// use getpr::styling::format_with_gutter;
///
/// print!("{}", format_with_gutter("fatal: no such path 'x' in HEAD"));
/// ```
pub fn format_with_gutter(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("{GUTTER} {GUTTER:#} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
