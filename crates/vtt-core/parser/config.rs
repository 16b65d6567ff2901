//! Parser configuration
//!
//! A parse is configured in code only: there is no environment or file
//! configuration. The defaults accept documents of any length and never
//! cancel.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Cooperative cancellation handle
///
/// Clones share the same flag. The parser checks it before reading each
/// block, so a single block always finishes once started.
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{CancelFlag, Document, ParseError, ParserConfig};
///
/// let flag = CancelFlag::new();
/// let config = ParserConfig::default().with_cancel(flag.clone());
/// flag.cancel();
///
/// let result = Document::parse_with_config("WEBVTT\n\n00:01.000 --> 00:02.000\n", config);
/// assert!(matches!(result, Err(ParseError::Cancelled { .. })));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a flag that is not yet raised
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Check whether the flag has been raised
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Options for a single parse
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Abort with `InputTooLarge` after this many lines
    pub max_lines: Option<usize>,

    /// Cancellation flag checked before each block read
    pub cancel: Option<CancelFlag>,
}

impl ParserConfig {
    /// Limit the number of lines read
    #[must_use]
    pub const fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Attach a cancellation flag
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Check the attached flag, if any
    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}
