//! Utility functions and shared constants for VTT core
//!
//! Contains the literal grammar tokens of the WebVTT format and the small
//! text helpers shared by the block readers, the timestamp scanner and the
//! settings parser.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::utils::{is_blank, trim_tabs_spaces};
//!
//! assert!(is_blank(" \t "));
//! assert_eq!(trim_tabs_spaces("\t align:start "), "align:start");
//! ```

pub mod constants;

pub use constants::ARROW_TOKEN;

/// Check whether a line terminates a block
///
/// Empty lines and lines made only of whitespace both count as blank.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Trim leading and trailing tabs and spaces, leaving other whitespace alone
#[must_use]
pub fn trim_tabs_spaces(text: &str) -> &str {
    text.trim_matches(|c| c == '\t' || c == ' ')
}

/// Trim leading tabs and spaces
#[must_use]
pub fn trim_start_tabs_spaces(text: &str) -> &str {
    text.trim_start_matches(|c| c == '\t' || c == ' ')
}

/// Advance a byte cursor past any whitespace in `text`
///
/// Returns the byte offset of the first non-whitespace character at or
/// after `position`, or `text.len()` when only whitespace remains.
#[must_use]
pub fn skip_whitespace(text: &str, position: usize) -> usize {
    text[position..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(offset, _)| position + offset)
}

/// Join payload lines with `\n`, yielding `None` when there are none
#[must_use]
pub fn join_lines(lines: &[String]) -> Option<String> {
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
