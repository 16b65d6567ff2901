//! Cue AST node and its compound settings
//!
//! Contains the `Cue` struct together with the `line:` and `position:`
//! setting values, which combine an offset with an optional alignment.

use core::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{LineAlignment, PositionAlignment, Region, TextAlignment, VerticalTextLayout};
use crate::parser::Document;

/// Offset part of a `line:` setting
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineOffset {
    /// Offset as a percentage of the viewport (`line:10%`)
    Percent(f64),
    /// Line number, negative values count from the bottom (`line:-1`)
    Number(i32),
}

/// Decoded `line:` cue setting
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSettings {
    pub offset: LineOffset,
    pub alignment: Option<LineAlignment>,
}

impl LineSettings {
    /// Percentage offset, if the line was given as a percentage
    #[must_use]
    pub const fn percent(&self) -> Option<f64> {
        match self.offset {
            LineOffset::Percent(percent) => Some(percent),
            LineOffset::Number(_) => None,
        }
    }

    /// Line number, if the line was given as an integer
    #[must_use]
    pub const fn line_number(&self) -> Option<i32> {
        match self.offset {
            LineOffset::Number(number) => Some(number),
            LineOffset::Percent(_) => None,
        }
    }
}

/// Decoded `position:` cue setting
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSettings {
    pub percent: f64,
    pub alignment: Option<PositionAlignment>,
}

/// Timed caption, subtitle, chapter or metadata cue
///
/// Timing is always present and `end >= start`. Typed settings are decoded
/// from `raw_settings`; a value that fails validation leaves its field unset.
///
/// # Examples
///
/// ```rust
/// use core::time::Duration;
/// use vtt_core::parser::{ast::TextAlignment, Document};
///
/// let doc = Document::parse("WEBVTT\n\nintro\n00:01.000 --> 00:04.500 align:start\nHello\n")?;
/// let cue = &doc.cues().unwrap()[0];
///
/// assert_eq!(cue.id.as_deref(), Some("intro"));
/// assert_eq!(cue.duration(), Duration::from_millis(3500));
/// assert_eq!(cue.alignment, Some(TextAlignment::Start));
/// assert_eq!(cue.raw_content.as_deref(), Some("Hello"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cue {
    /// Identifier line preceding the timing line
    pub id: Option<String>,

    /// Start time relative to the beginning of the media
    pub start: Duration,

    /// End time relative to the beginning of the media
    pub end: Duration,

    /// Settings text after the end timestamp, trimmed of tabs and spaces
    pub raw_settings: Option<String>,

    /// `vertical:` setting
    pub vertical: Option<VerticalTextLayout>,

    /// `line:` setting
    pub line: Option<LineSettings>,

    /// `position:` setting
    pub position: Option<PositionSettings>,

    /// `size:` setting, percentage of the viewport
    pub size: Option<f64>,

    /// `align:` setting
    pub alignment: Option<TextAlignment>,

    /// `region:` setting, identifier of a region definition
    pub region: Option<String>,

    /// Payload lines joined with `\n`, markup left unparsed
    pub raw_content: Option<String>,
}

impl Cue {
    /// Time the cue stays visible
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end.saturating_sub(self.start)
    }

    /// Resolve the `region:` setting against a document's region definitions
    #[must_use]
    pub fn region_definition<'d>(&self, document: &'d Document) -> Option<&'d Region> {
        self.region.as_deref().and_then(|id| document.region(id))
    }
}
