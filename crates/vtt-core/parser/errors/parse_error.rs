//! Primary parse error type for WebVTT document parsing
//!
//! Every WebVTT error is fatal: the parse stops at the first one and no
//! partial document is returned. Lenient conditions (a setting value that
//! fails its range or keyword check) never reach this type.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::parser::ast::BlockKind;

/// Primary parse error type for WebVTT documents
///
/// All line numbers are 1-based and refer to the line that triggered the
/// error. Positions inside a line are byte offsets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// First line is not a valid `WEBVTT` signature
    #[error("Input does not start with a valid WEBVTT signature at line {line}")]
    InvalidSignature { line: usize },

    /// Region or style block found after the first cue
    #[error("{kind} block at line {line} cannot follow cue blocks")]
    BlockOrder { line: usize, kind: BlockKind },

    /// Region or style header followed by something other than whitespace
    #[error("Invalid characters after {kind} header at line {line}: '{header}'")]
    InvalidBlockHeader {
        line: usize,
        kind: BlockKind,
        header: String,
    },

    /// Arrow token inside a block payload where it is not allowed
    #[error("{kind} block must not contain '-->' (line {line})")]
    ForbiddenArrow { line: usize, kind: BlockKind },

    /// Cue timing line violates the timestamp or separator grammar
    #[error("Invalid cue timing '{text}' at line {line}, position {position}: {reason}")]
    TimingSyntax {
        line: usize,
        position: usize,
        text: String,
        reason: &'static str,
    },

    /// Cue end time precedes its start time
    #[error("Cue end time precedes start time in '{text}' at line {line}")]
    TimingOrder { line: usize, text: String },

    /// Timestamp fields do not fit the duration range
    #[error("Cue timing value '{text}' at line {line} is too large")]
    TimingOverflow { line: usize, text: String },

    /// Settings token without a colon or without a value
    #[error("Invalid setting '{token}' at line {line}: expected 'name:value'")]
    SettingsSyntax { line: usize, token: String },

    /// Line source failed to produce the next line
    #[error("I/O error reading line {line}: {message}")]
    Io { line: usize, message: String },

    /// Cancellation was requested before the next block was read
    #[error("Parsing cancelled before line {line}")]
    Cancelled { line: usize },

    /// Input has more lines than the configured limit
    #[error("Input exceeds the limit of {limit} lines at line {line}")]
    InputTooLarge { line: usize, limit: usize },
}

impl ParseError {
    /// Line number the error refers to
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidSignature { line }
            | Self::BlockOrder { line, .. }
            | Self::InvalidBlockHeader { line, .. }
            | Self::ForbiddenArrow { line, .. }
            | Self::TimingSyntax { line, .. }
            | Self::TimingOrder { line, .. }
            | Self::TimingOverflow { line, .. }
            | Self::SettingsSyntax { line, .. }
            | Self::Io { line, .. }
            | Self::Cancelled { line }
            | Self::InputTooLarge { line, .. } => *line,
        }
    }

    /// Coarse classification of the error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSignature { .. } => ErrorCategory::Signature,
            Self::BlockOrder { .. } => ErrorCategory::Structure,
            Self::InvalidBlockHeader { .. } | Self::ForbiddenArrow { .. } => ErrorCategory::Syntax,
            Self::TimingSyntax { .. } | Self::TimingOrder { .. } | Self::TimingOverflow { .. } => {
                ErrorCategory::Timing
            }
            Self::SettingsSyntax { .. } => ErrorCategory::Settings,
            Self::Io { .. } | Self::Cancelled { .. } | Self::InputTooLarge { .. } => {
                ErrorCategory::Io
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let error = ParseError::TimingSyntax {
            line: 3,
            position: 5,
            text: "00:0x.000".to_string(),
            reason: "unexpected character",
        };
        let message = error.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("position 5"));
        assert!(message.contains("00:0x.000"));
    }

    #[test]
    fn block_kind_in_message() {
        let error = ParseError::BlockOrder {
            line: 7,
            kind: BlockKind::Style,
        };
        assert_eq!(error.to_string(), "STYLE block at line 7 cannot follow cue blocks");
        assert_eq!(error.line(), 7);
    }

    #[test]
    fn categories() {
        assert_eq!(
            ParseError::InvalidSignature { line: 1 }.category(),
            ErrorCategory::Signature
        );
        assert_eq!(
            ParseError::TimingOverflow {
                line: 2,
                text: String::new()
            }
            .category(),
            ErrorCategory::Timing
        );
        assert_eq!(
            ParseError::SettingsSyntax {
                line: 2,
                token: "id-fred".to_string()
            }
            .category(),
            ErrorCategory::Settings
        );
        assert_eq!(ParseError::Cancelled { line: 4 }.category(), ErrorCategory::Io);
    }
}
