//! Parsed WebVTT document container
//!
//! The `Document` owns every block the parser accepted. Region, style and cue
//! collections are reported as absent when the document has none of them.

use std::io::BufRead;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    ast::{Comment, Cue, Region, Style},
    config::ParserConfig,
    errors::ParseResult,
    main::Parser,
    source::{LineSource, ReaderLines, StrLines},
};

/// Parsed WebVTT document
///
/// Immutable once constructed. Blocks keep the order they had in the source.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    /// Region definitions in document order
    regions: Vec<Region>,

    /// Style blocks in document order
    styles: Vec<Style>,

    /// Comment blocks in document order
    comments: Vec<Comment>,

    /// Cues in document order
    cues: Vec<Cue>,
}

impl Document {
    /// Parse a document held in memory
    ///
    /// # Example
    ///
    /// ```rust
    /// # use vtt_core::parser::Document;
    /// let doc = Document::parse("WEBVTT\n\n00:01.000 --> 00:04.000\nNever drink liquid nitrogen.")?;
    /// let cues = doc.cues().unwrap();
    /// assert_eq!(cues[0].raw_content.as_deref(), Some("Never drink liquid nitrogen."));
    /// assert!(doc.regions().is_none());
    /// # Ok::<(), vtt_core::parser::ParseError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first fatal error found. There is no partial result.
    pub fn parse(text: &str) -> ParseResult<Self> {
        Self::parse_with_config(text, ParserConfig::default())
    }

    /// Parse a document held in memory with explicit options
    ///
    /// # Errors
    ///
    /// Same as [`Document::parse`], plus `InputTooLarge` and `Cancelled`
    /// depending on `config`.
    pub fn parse_with_config(text: &str, config: ParserConfig) -> ParseResult<Self> {
        Self::parse_source(StrLines::new(text), config)
    }

    /// Parse a document from a buffered reader
    ///
    /// # Errors
    ///
    /// Same as [`Document::parse`], plus `Io` when the reader fails or
    /// yields invalid UTF-8.
    pub fn from_reader<R: BufRead>(reader: R) -> ParseResult<Self> {
        Self::parse_source(ReaderLines::new(reader), ParserConfig::default())
    }

    /// Parse a document from any line source
    ///
    /// # Errors
    ///
    /// Same as [`Document::parse_with_config`], plus `Io` for source
    /// failures.
    pub fn parse_source<S: LineSource>(source: S, config: ParserConfig) -> ParseResult<Self> {
        Parser::new(source, config).parse()
    }

    /// Parse a document from an async buffered reader
    ///
    /// Lines are read one at a time. The cancellation flag is checked
    /// between reads and the line limit is enforced while reading, then the
    /// collected lines go through the same readers as [`Document::parse`].
    ///
    /// # Errors
    ///
    /// Same as [`Document::parse_source`].
    #[cfg(feature = "async")]
    pub async fn parse_async<R>(reader: R, config: ParserConfig) -> ParseResult<Self>
    where
        R: tokio::io::AsyncBufRead + Unpin,
    {
        use super::{errors::ParseError, source::IterLines};
        use tokio::io::AsyncBufReadExt;

        let mut reader = reader.lines();
        let mut collected = Vec::new();

        loop {
            let line = collected.len() + 1;
            if config.is_cancelled() {
                return Err(ParseError::Cancelled { line: line - 1 });
            }

            let next = reader.next_line().await.map_err(|err| ParseError::Io {
                line,
                message: err.to_string(),
            })?;
            let Some(text) = next else {
                break;
            };

            if let Some(limit) = config.max_lines {
                if line > limit {
                    return Err(ParseError::InputTooLarge { line, limit });
                }
            }
            collected.push(text);
        }

        Self::parse_source(IterLines::new(collected.into_iter()), config)
    }

    /// Assemble a document from parsed blocks
    pub(super) fn from_parts(
        regions: Vec<Region>,
        styles: Vec<Style>,
        comments: Vec<Comment>,
        cues: Vec<Cue>,
    ) -> Self {
        Self {
            regions,
            styles,
            comments,
            cues,
        }
    }

    /// Region definitions, or `None` if there are none
    #[must_use]
    pub fn regions(&self) -> Option<&[Region]> {
        non_empty(&self.regions)
    }

    /// Style blocks, or `None` if there are none
    #[must_use]
    pub fn styles(&self) -> Option<&[Style]> {
        non_empty(&self.styles)
    }

    /// Cues, or `None` if there are none
    #[must_use]
    pub fn cues(&self) -> Option<&[Cue]> {
        non_empty(&self.cues)
    }

    /// Comment blocks
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Find the first region definition with identifier `id`
    #[must_use]
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions
            .iter()
            .find(|region| region.id.as_deref() == Some(id))
    }

    /// Check whether the document holds no blocks at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
            && self.styles.is_empty()
            && self.comments.is_empty()
            && self.cues.is_empty()
    }
}

/// Borrow `items` unless empty
fn non_empty<T>(items: &[T]) -> Option<&[T]> {
    (!items.is_empty()).then_some(items)
}
