//! `STYLE` block reader

use crate::{
    parser::{
        ast::{BlockKind, Style},
        errors::ParseResult,
        source::{LineCursor, LineSource},
    },
    utils::constants::STYLE_TOKEN,
};

use super::{check_header, read_payload};

/// Reader for style sheet blocks
///
/// The style sheet is kept as raw text, it is not interpreted.
pub struct StyleReader<'c, S> {
    /// Line cursor positioned after the header line
    lines: &'c mut LineCursor<S>,
}

impl<'c, S: LineSource> StyleReader<'c, S> {
    /// Create a reader over the lines following a `STYLE` header
    pub fn new(lines: &'c mut LineCursor<S>) -> Self {
        Self { lines }
    }

    /// Read the block whose header line is `header`
    ///
    /// # Errors
    ///
    /// Returns `InvalidBlockHeader` for text after the token and
    /// `ForbiddenArrow` for a style line containing `-->`.
    pub fn read(self, header: &str) -> ParseResult<Style> {
        check_header(header, STYLE_TOKEN, BlockKind::Style, self.lines.line())?;
        let raw_content = read_payload(self.lines, BlockKind::Style, true, Vec::new())?;
        Ok(Style { raw_content })
    }
}
