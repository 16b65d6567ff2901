//! Document reader coordinating signature, header and block parsing
//!
//! Contains the `Parser` struct that drives a line source through the
//! document grammar and enforces block ordering.

use log::debug;

use super::{
    ast::{Block, Comment, Cue, Region, Style},
    blocks::read_block,
    config::ParserConfig,
    document::Document,
    errors::{ParseError, ParseResult},
    source::{LineCursor, LineSource},
};
use crate::utils::{constants::SIGNATURE_TOKEN, is_blank};

/// Parser state for a single document
pub(super) struct Parser<S> {
    /// Counted line source
    lines: LineCursor<S>,
    /// Options for this parse
    config: ParserConfig,
    /// Region definitions accumulated so far
    regions: Vec<Region>,
    /// Style blocks accumulated so far
    styles: Vec<Style>,
    /// Comment blocks accumulated so far
    comments: Vec<Comment>,
    /// Cues accumulated so far
    cues: Vec<Cue>,
}

impl<S: LineSource> Parser<S> {
    /// Create a parser over `source`
    pub fn new(source: S, config: ParserConfig) -> Self {
        Self {
            lines: LineCursor::new(source, config.max_lines),
            config,
            regions: Vec::new(),
            styles: Vec::new(),
            comments: Vec::new(),
            cues: Vec::new(),
        }
    }

    /// Parse the complete document
    pub fn parse(mut self) -> ParseResult<Document> {
        self.read_signature()?;
        self.skip_header()?;

        loop {
            if self.config.is_cancelled() {
                return Err(ParseError::Cancelled {
                    line: self.lines.line(),
                });
            }

            let block_line = self.lines.line() + 1;
            let Some(block) = read_block(&mut self.lines)? else {
                break;
            };
            self.push(block, block_line)?;
        }

        debug!(
            "parsed {} regions, {} styles, {} comments, {} cues from {} lines",
            self.regions.len(),
            self.styles.len(),
            self.comments.len(),
            self.cues.len(),
            self.lines.line()
        );

        Ok(Document::from_parts(
            self.regions,
            self.styles,
            self.comments,
            self.cues,
        ))
    }

    /// Check the `WEBVTT` line
    fn read_signature(&mut self) -> ParseResult<()> {
        let first = self.lines.next_line()?;
        let line = self.lines.line().max(1);

        match first.as_deref() {
            Some(text) if is_signature(text) => {
                debug!("accepted signature line {text:?}");
                Ok(())
            }
            _ => Err(ParseError::InvalidSignature { line }),
        }
    }

    /// Discard header lines up to and including the first blank line
    fn skip_header(&mut self) -> ParseResult<()> {
        while let Some(line) = self.lines.next_line()? {
            if is_blank(&line) {
                break;
            }
        }
        Ok(())
    }

    /// Append a block to its collection
    ///
    /// Region and style blocks are rejected once a cue has been seen.
    fn push(&mut self, block: Block, line: usize) -> ParseResult<()> {
        match block {
            Block::Region(_) | Block::Style(_) if !self.cues.is_empty() => {
                Err(ParseError::BlockOrder {
                    line,
                    kind: block.kind(),
                })
            }
            Block::Region(region) => {
                self.regions.push(region);
                Ok(())
            }
            Block::Style(style) => {
                self.styles.push(style);
                Ok(())
            }
            Block::Comment(comment) => {
                self.comments.push(comment);
                Ok(())
            }
            Block::Cue(cue) => {
                self.cues.push(cue);
                Ok(())
            }
        }
    }
}

/// Whether `text` is a valid signature line
///
/// `WEBVTT` alone, or followed by a tab or space and free text.
fn is_signature(text: &str) -> bool {
    text.strip_prefix(SIGNATURE_TOKEN)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t']))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ast::BlockKind, source::StrLines};

    fn parse(text: &str) -> ParseResult<Document> {
        Parser::new(StrLines::new(text), ParserConfig::default()).parse()
    }

    #[test]
    fn signature_rules() {
        assert!(is_signature("WEBVTT"));
        assert!(is_signature("WEBVTT - Sample"));
        assert!(is_signature("WEBVTT\tSample"));
        assert!(!is_signature("WEB"));
        assert!(!is_signature("WEBvtt"));
        assert!(!is_signature("WEBVTT_"));
        assert!(!is_signature(" WEBVTT"));
        assert!(!is_signature(""));
    }

    #[test]
    fn empty_input_fails_on_line_one() {
        assert_eq!(parse(""), Err(ParseError::InvalidSignature { line: 1 }));
    }

    #[test]
    fn header_lines_are_skipped() {
        let doc = parse("WEBVTT\nKind: captions\nLanguage: en\n\n00:01.000 --> 00:02.000\nhi").unwrap();
        assert_eq!(doc.cues().map(<[Cue]>::len), Some(1));
    }

    #[test]
    fn header_running_to_end_of_input() {
        let doc = parse("WEBVTT\nKind: captions").unwrap();
        assert_eq!(doc.cues(), None);
    }

    #[test]
    fn ordering_error_points_at_block_header() {
        let text = "WEBVTT\n\n00:01.000 --> 00:02.000\nhi\n\nSTYLE\n::cue {}";
        assert_eq!(
            parse(text),
            Err(ParseError::BlockOrder {
                line: 6,
                kind: BlockKind::Style
            })
        );
    }

    #[test]
    fn comments_may_follow_cues() {
        let doc = parse("WEBVTT\n\n00:01.000 --> 00:02.000\n\nNOTE done").unwrap();
        assert_eq!(doc.comments().len(), 1);
    }
}
