//! `NOTE` block reader

use crate::{
    parser::{
        ast::{BlockKind, Comment},
        errors::ParseResult,
        source::{LineCursor, LineSource},
    },
    utils::{constants::COMMENT_TOKEN, is_blank, trim_start_tabs_spaces},
};

use super::read_payload;

/// Reader for comment blocks
///
/// Comments may contain anything, including `-->`.
pub struct CommentReader<'c, S> {
    /// Line cursor positioned after the header line
    lines: &'c mut LineCursor<S>,
}

impl<'c, S: LineSource> CommentReader<'c, S> {
    /// Create a reader over the lines following a `NOTE` header
    pub fn new(lines: &'c mut LineCursor<S>) -> Self {
        Self { lines }
    }

    /// Read the block whose header line is `header`
    ///
    /// Text after `NOTE` on the header line becomes the first payload line.
    ///
    /// # Errors
    ///
    /// Only line source errors are possible.
    pub fn read(self, header: &str) -> ParseResult<Comment> {
        let inline = trim_start_tabs_spaces(&header[COMMENT_TOKEN.len()..]);
        let first = if is_blank(inline) {
            Vec::new()
        } else {
            vec![inline.to_owned()]
        };

        let raw_content = read_payload(self.lines, BlockKind::Comment, false, first)?;
        Ok(Comment { raw_content })
    }
}
