//! Error categorization for WebVTT parse failures
//!
//! Groups the fatal parse errors into a handful of classes so callers can
//! decide how to report them without matching every variant.

use core::fmt;

/// Error category for filtering and user interface organization
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{Document, ErrorCategory};
///
/// let error = Document::parse("WEBvtt").unwrap_err();
/// assert_eq!(error.category(), ErrorCategory::Signature);
/// assert!(error.category().is_user_fixable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing or malformed `WEBVTT` signature line
    Signature,

    /// Blocks appear in an order the format forbids
    ///
    /// Region and style blocks must all precede the first cue.
    Structure,

    /// Malformed block header or forbidden token inside a payload
    Syntax,

    /// Cue timing line errors: timestamp grammar, ordering and range
    Timing,

    /// Malformed `name:value` token in a settings string
    Settings,

    /// Line source failures, cancellation and input limits
    ///
    /// These come from outside the document text itself.
    Io,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ErrorCategory {
    /// Get human-readable category name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Signature => "signature",
            Self::Structure => "structure",
            Self::Syntax => "syntax",
            Self::Timing => "timing",
            Self::Settings => "settings",
            Self::Io => "io",
        }
    }

    /// Check if errors in this category can be fixed by editing the document
    #[must_use]
    pub const fn is_user_fixable(self) -> bool {
        !matches!(self, Self::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names() {
        assert_eq!(ErrorCategory::Timing.to_string(), "timing");
        assert_eq!(ErrorCategory::Io.name(), "io");
    }

    #[test]
    fn user_fixable() {
        assert!(ErrorCategory::Settings.is_user_fixable());
        assert!(ErrorCategory::Structure.is_user_fixable());
        assert!(!ErrorCategory::Io.is_user_fixable());
    }
}
