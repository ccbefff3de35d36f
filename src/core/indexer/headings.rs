//! Markdown heading extraction.
//!
//! A single forward pass over a document's lines; heading shortcuts
//! come out in document order. Raw heading lines are returned with
//! markers and whitespace intact so the deriver's sanitization sees
//! the original text.

/// Tests if a line is a markdown heading we create a shortcut for
pub fn is_heading_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    !trimmed.is_empty() && trimmed.starts_with('#')
}

/// Iterate the heading lines of a document, in document order
pub fn heading_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.lines().filter(|line| is_heading_line(line))
}
