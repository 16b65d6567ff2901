//! AST node types for parsed WebVTT documents
//!
//! All nodes own their data and are immutable once a reader has produced
//! them. The `Block` enum is what the block reader returns, tagging each
//! block with its kind so the document reader never has to inspect values
//! after the fact.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::parser::ast::{Block, BlockKind, Style};
//!
//! let block = Block::Style(Style { raw_content: Some("::cue { color: lime }".into()) });
//! assert_eq!(block.kind(), BlockKind::Style);
//! assert_eq!(block.raw_content(), Some("::cue { color: lime }"));
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod cue;
mod keywords;
mod region;

pub use cue::{Cue, LineOffset, LineSettings, PositionSettings};
pub use keywords::{Keyword, LineAlignment, PositionAlignment, TextAlignment, VerticalTextLayout};
pub use region::{Anchor, Region};

/// `STYLE` block holding an opaque style sheet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Style {
    /// Lines after the header, joined with `\n`
    pub raw_content: Option<String>,
}

/// `NOTE` block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comment {
    /// Inline text after `NOTE` followed by the remaining lines, joined with `\n`
    pub raw_content: Option<String>,
}

/// One top-level block of a WebVTT document
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `REGION` definition
    Region(Region),
    /// `STYLE` sheet
    Style(Style),
    /// `NOTE` comment
    Comment(Comment),
    /// Timed cue
    Cue(Cue),
}

impl Block {
    /// Discriminant of this block
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        match self {
            Self::Region(_) => BlockKind::Region,
            Self::Style(_) => BlockKind::Style,
            Self::Comment(_) => BlockKind::Comment,
            Self::Cue(_) => BlockKind::Cue,
        }
    }

    /// Raw payload text of the block
    #[must_use]
    pub fn raw_content(&self) -> Option<&str> {
        match self {
            Self::Region(region) => region.raw_content.as_deref(),
            Self::Style(style) => style.raw_content.as_deref(),
            Self::Comment(comment) => comment.raw_content.as_deref(),
            Self::Cue(cue) => cue.raw_content.as_deref(),
        }
    }
}

/// Block discriminant used in errors and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockKind {
    /// Block opened by `REGION`
    Region,
    /// Block opened by `STYLE`
    Style,
    /// Block opened by `NOTE`
    Comment,
    /// Block holding a timing line
    Cue,
}

impl BlockKind {
    /// Header token for the block kind, or `"CUE"` for cues which have none
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Region => "REGION",
            Self::Style => "STYLE",
            Self::Comment => "NOTE",
            Self::Cue => "CUE",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
