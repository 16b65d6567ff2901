//! Region definition AST node
//!
//! A region is a named rectangle of the video viewport that cues can be
//! placed into. All typed fields are optional: a missing or malformed setting
//! leaves the field unset while the raw block text is always preserved.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pair of percentages locating a point inside a box
///
/// Both coordinates lie in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Anchor {
    /// Horizontal offset from the left edge
    pub x_percent: f64,
    /// Vertical offset from the top edge
    pub y_percent: f64,
}

impl Anchor {
    /// Create an anchor from two percentages
    #[must_use]
    pub const fn new(x_percent: f64, y_percent: f64) -> Self {
        Self {
            x_percent,
            y_percent,
        }
    }
}

/// `REGION` block with its decoded settings
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{ast::Anchor, Document};
///
/// let doc = Document::parse("WEBVTT\n\nREGION\nid:fred\nregionanchor:0%,100%\n")?;
/// let region = &doc.regions().unwrap()[0];
///
/// assert_eq!(region.id.as_deref(), Some("fred"));
/// assert_eq!(region.region_anchor, Some(Anchor::new(0.0, 100.0)));
/// assert_eq!(region.width, None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Region identifier (`id:`) referenced by cue `region:` settings
    pub id: Option<String>,

    /// Width as a percentage of the viewport (`width:`)
    pub width: Option<f64>,

    /// Height in lines of text (`lines:`)
    pub lines: Option<u32>,

    /// Point of the region aligned to the viewport anchor (`regionanchor:`)
    pub region_anchor: Option<Anchor>,

    /// Point of the viewport the region is pinned to (`viewportanchor:`)
    pub viewport_anchor: Option<Anchor>,

    /// Whether cues scroll up inside the region (`scroll:`)
    ///
    /// `Some(true)` only for the value `up`; any other value gives
    /// `Some(false)`.
    pub scroll: Option<bool>,

    /// Lines after the header, joined with `\n`
    pub raw_content: Option<String>,
}
