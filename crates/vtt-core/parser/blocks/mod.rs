//! Block readers for the top-level units of a WebVTT document
//!
//! The block reader classifies a block by the leading token of its first
//! line and hands the rest of the block to a kind-specific reader. Each
//! reader consumes lines up to and including the blank line (or end of
//! input) that terminates its block.
//!
//! # Architecture
//!
//! - `region` - `REGION` header, settings lines decoded into [`Region`]
//! - `style` - `STYLE` header, opaque style sheet text
//! - `comment` - `NOTE` header with optional inline text
//! - `cue` - optional identifier, timing line, payload
//!
//! [`Region`]: crate::parser::ast::Region

pub mod comment;
pub mod cue;
pub mod region;
pub mod style;

pub use comment::CommentReader;
pub use cue::CueReader;
pub use region::RegionReader;
pub use style::StyleReader;

use log::debug;

use crate::{
    parser::{
        ast::{Block, BlockKind},
        errors::{ParseError, ParseResult},
        source::{LineCursor, LineSource},
    },
    utils::{
        constants::{COMMENT_TOKEN, REGION_TOKEN, STYLE_TOKEN},
        is_blank, join_lines, ARROW_TOKEN,
    },
};

/// Read and classify the next block
///
/// Returns `Ok(None)` when the next line is blank or input is exhausted.
///
/// # Errors
///
/// Propagates any error from the block-specific reader.
pub fn read_block<S: LineSource>(lines: &mut LineCursor<S>) -> ParseResult<Option<Block>> {
    let Some(first_line) = lines.next_line()? else {
        return Ok(None);
    };
    if is_blank(&first_line) {
        return Ok(None);
    }

    let block = if first_line.starts_with(REGION_TOKEN) {
        Block::Region(RegionReader::new(lines).read(&first_line)?)
    } else if first_line.starts_with(STYLE_TOKEN) {
        Block::Style(StyleReader::new(lines).read(&first_line)?)
    } else if first_line.starts_with(COMMENT_TOKEN) {
        Block::Comment(CommentReader::new(lines).read(&first_line)?)
    } else {
        Block::Cue(CueReader::new(lines).read(first_line)?)
    };

    debug!("read {} block ending at line {}", block.kind(), lines.line());
    Ok(Some(block))
}

/// Check that a header line has only whitespace after its token
pub(crate) fn check_header(
    header: &str,
    token: &str,
    kind: BlockKind,
    line: usize,
) -> ParseResult<()> {
    if is_blank(&header[token.len()..]) {
        Ok(())
    } else {
        Err(ParseError::InvalidBlockHeader {
            line,
            kind,
            header: header.to_owned(),
        })
    }
}

/// Collect payload lines up to the next blank line or end of input
///
/// Lines are appended to `payload`, which may already hold a first line.
/// With `forbid_arrow` set, a line containing `-->` is an error.
pub(crate) fn read_payload<S: LineSource>(
    lines: &mut LineCursor<S>,
    kind: BlockKind,
    forbid_arrow: bool,
    mut payload: Vec<String>,
) -> ParseResult<Option<String>> {
    while let Some(line) = lines.next_line()? {
        if is_blank(&line) {
            break;
        }
        if forbid_arrow && line.contains(ARROW_TOKEN) {
            return Err(ParseError::ForbiddenArrow {
                line: lines.line(),
                kind,
            });
        }
        payload.push(line);
    }
    Ok(join_lines(&payload))
}
