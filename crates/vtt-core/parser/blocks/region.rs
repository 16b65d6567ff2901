//! `REGION` block reader
//!
//! Region settings are written one per line but are tokenized exactly like
//! cue settings. Typed fields that fail validation stay unset; only
//! malformed tokens and stray arrows abort the parse.

use crate::{
    parser::{
        ast::{BlockKind, Region},
        errors::ParseResult,
        settings::Settings,
        source::{LineCursor, LineSource},
    },
    utils::constants::{
        LINES, REGION_ANCHOR, REGION_ID, REGION_TOKEN, SCROLL, SCROLL_UP, VIEWPORT_ANCHOR, WIDTH,
    },
};

use super::{check_header, read_payload};

/// Reader for region definition blocks
pub struct RegionReader<'c, S> {
    /// Line cursor positioned after the header line
    lines: &'c mut LineCursor<S>,
}

impl<'c, S: LineSource> RegionReader<'c, S> {
    /// Create a reader over the lines following a `REGION` header
    pub fn new(lines: &'c mut LineCursor<S>) -> Self {
        Self { lines }
    }

    /// Read the block whose header line is `header`
    ///
    /// # Errors
    ///
    /// Returns `InvalidBlockHeader` for text after the token, `ForbiddenArrow`
    /// for a settings line containing `-->` and `SettingsSyntax` for a
    /// malformed settings token.
    pub fn read(self, header: &str) -> ParseResult<Region> {
        let header_line = self.lines.line();
        check_header(header, REGION_TOKEN, BlockKind::Region, header_line)?;

        let raw_content = read_payload(self.lines, BlockKind::Region, true, Vec::new())?;
        let mut region = Region {
            raw_content,
            ..Region::default()
        };

        if let Some(content) = region.raw_content.as_deref() {
            let settings = Settings::parse_lines(content, header_line + 1)?;
            region.id = settings.string(REGION_ID).map(str::to_owned);
            region.width = settings.percent(WIDTH);
            region.lines = settings.integer(LINES);
            region.region_anchor = settings.anchor(REGION_ANCHOR);
            region.viewport_anchor = settings.anchor(VIEWPORT_ANCHOR);
            region.scroll = settings
                .string(SCROLL)
                .map(|value| value.eq_ignore_ascii_case(SCROLL_UP));
        }

        Ok(region)
    }
}
