//! Cue block reader
//!
//! A cue is an optional identifier line, a timing line of the form
//! `start --> end [settings]` and zero or more payload lines. The payload
//! must not contain `-->` so that cue boundaries stay unambiguous.

use crate::{
    parser::{
        ast::{BlockKind, Cue, TextAlignment, VerticalTextLayout},
        errors::{ParseError, ParseResult},
        settings::Settings,
        source::{LineCursor, LineSource},
        timestamp::scan_timestamp,
    },
    utils::{
        constants::{ALIGN, LINE, POSITION, REGION, SIZE, VERTICAL},
        is_blank, skip_whitespace, trim_tabs_spaces, ARROW_TOKEN,
    },
};

use super::read_payload;

/// Reader for cue blocks
pub struct CueReader<'c, S> {
    /// Line cursor positioned after the first line of the cue
    lines: &'c mut LineCursor<S>,
}

/// Fields decoded from a timing line
struct Timing {
    start: core::time::Duration,
    end: core::time::Duration,
    raw_settings: Option<String>,
}

impl<'c, S: LineSource> CueReader<'c, S> {
    /// Create a reader over the lines following the first line of a cue
    pub fn new(lines: &'c mut LineCursor<S>) -> Self {
        Self { lines }
    }

    /// Read the cue whose first line is `first_line`
    ///
    /// A first line without `-->` is the cue identifier and the timing line
    /// follows it.
    ///
    /// # Errors
    ///
    /// Returns `TimingSyntax`, `TimingOrder` or `TimingOverflow` for a bad
    /// timing line, `SettingsSyntax` for a malformed settings token and
    /// `ForbiddenArrow` for a payload line containing `-->`.
    pub fn read(self, first_line: String) -> ParseResult<Cue> {
        let (id, timing_line) = if first_line.contains(ARROW_TOKEN) {
            (None, first_line)
        } else {
            let timing_line = self.lines.next_line()?.ok_or_else(|| ParseError::TimingSyntax {
                line: self.lines.line() + 1,
                position: 0,
                text: String::new(),
                reason: "missing cue timing line",
            })?;
            (Some(first_line), timing_line)
        };

        let line = self.lines.line();
        let timing = parse_timing(&timing_line, line)?;

        let mut cue = Cue {
            id,
            start: timing.start,
            end: timing.end,
            ..Cue::default()
        };

        if let Some(raw) = timing.raw_settings {
            let settings = Settings::parse(&raw, line)?;
            cue.vertical = settings.keyword::<VerticalTextLayout>(VERTICAL);
            cue.line = settings.line(LINE);
            cue.position = settings.position(POSITION);
            cue.size = settings.percent(SIZE);
            cue.alignment = settings.keyword::<TextAlignment>(ALIGN);
            cue.region = settings.string(REGION).map(str::to_owned);
            cue.raw_settings = Some(raw);
        }

        cue.raw_content = read_payload(self.lines, BlockKind::Cue, true, Vec::new())?;
        Ok(cue)
    }
}

/// Parse `start --> end [settings]`
fn parse_timing(text: &str, line: usize) -> ParseResult<Timing> {
    let mut position = 0;
    let start = scan_timestamp(text, &mut position, line)?;

    position = skip_whitespace(text, position);
    if !text[position..].starts_with(ARROW_TOKEN) {
        return Err(ParseError::TimingSyntax {
            line,
            position,
            text: text.to_owned(),
            reason: "expected '-->' after start time",
        });
    }
    position = skip_whitespace(text, position + ARROW_TOKEN.len());

    let end = scan_timestamp(text, &mut position, line)?;
    if end < start {
        return Err(ParseError::TimingOrder {
            line,
            text: text.to_owned(),
        });
    }

    let rest = trim_tabs_spaces(&text[position..]);
    let raw_settings = (!is_blank(rest)).then(|| rest.to_owned());

    Ok(Timing {
        start,
        end,
        raw_settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{
        ast::{LineAlignment, LineOffset, PositionAlignment},
        source::StrLines,
    };
    use core::time::Duration;

    fn read(text: &str) -> ParseResult<Cue> {
        let mut lines = LineCursor::new(StrLines::new(text), None);
        let first = lines.next_line().unwrap().unwrap();
        CueReader::new(&mut lines).read(first)
    }

    #[test]
    fn cue_without_identifier() {
        let cue = read("00:01.000 --> 00:02.500\nHello\nworld\n\nnext").unwrap();
        assert_eq!(cue.id, None);
        assert_eq!(cue.start, Duration::from_millis(1_000));
        assert_eq!(cue.end, Duration::from_millis(2_500));
        assert_eq!(cue.raw_settings, None);
        assert_eq!(cue.raw_content.as_deref(), Some("Hello\nworld"));
    }

    #[test]
    fn cue_with_identifier() {
        let cue = read("intro\n00:00:01.000 --> 00:00:02.000\nHi").unwrap();
        assert_eq!(cue.id.as_deref(), Some("intro"));
        assert_eq!(cue.raw_content.as_deref(), Some("Hi"));
    }

    #[test]
    fn arrow_without_spaces() {
        let cue = read("00:35.123-->12345:59:59.999").unwrap();
        assert_eq!(cue.start, Duration::from_millis(35_123));
        assert_eq!(
            cue.end,
            Duration::from_millis(((12_345 * 3600 + 59 * 60 + 59) * 1000) + 999)
        );
        assert_eq!(cue.raw_content, None);
    }

    #[test]
    fn equal_times_are_allowed() {
        let cue = read("00:01.000 --> 00:01.000").unwrap();
        assert_eq!(cue.duration(), Duration::ZERO);
    }

    #[test]
    fn end_before_start_fails() {
        assert!(matches!(
            read("0:10:00.000 --> 0:00:00.000\ntext"),
            Err(ParseError::TimingOrder { line: 1, .. })
        ));
    }

    #[test]
    fn missing_arrow_fails() {
        assert!(matches!(
            read("id\n00:01.000 00:02.000"),
            Err(ParseError::TimingSyntax { line: 2, position: 10, .. })
        ));
        assert!(matches!(
            read("00:01.000 -> 00:02.000 -->"),
            Err(ParseError::TimingSyntax { .. })
        ));
    }

    #[test]
    fn missing_timing_line_fails() {
        assert!(matches!(
            read("just an id"),
            Err(ParseError::TimingSyntax { line: 2, .. })
        ));
    }

    #[test]
    fn decodes_settings() {
        let cue = read(
            "00:01.000 --> 00:02.000 align:right size:50% vertical:lr line:3%,center position:15%,line-right region:r",
        )
        .unwrap();

        assert_eq!(cue.alignment, Some(TextAlignment::Right));
        assert_eq!(cue.size, Some(50.0));
        assert_eq!(cue.vertical, Some(VerticalTextLayout::LeftToRight));
        let line = cue.line.unwrap();
        assert_eq!(line.offset, LineOffset::Percent(3.0));
        assert_eq!(line.alignment, Some(LineAlignment::Center));
        let position = cue.position.unwrap();
        assert_eq!(position.percent, 15.0);
        assert_eq!(position.alignment, Some(PositionAlignment::LineRight));
        assert_eq!(cue.region.as_deref(), Some("r"));
    }

    #[test]
    fn raw_settings_are_trimmed() {
        let cue = read("00:01.000 --> 00:02.000 \t start:10% \t").unwrap();
        assert_eq!(cue.raw_settings.as_deref(), Some("start:10%"));
        assert_eq!(cue.alignment, None);
    }

    #[test]
    fn whitespace_only_settings_are_absent() {
        let cue = read("00:01.000 --> 00:02.000 \u{3000}").unwrap();
        assert_eq!(cue.raw_settings, None);
    }

    #[test]
    fn malformed_setting_token_fails() {
        assert!(matches!(
            read("00:01.000 --> 00:02.000 align:start id-fred"),
            Err(ParseError::SettingsSyntax { .. })
        ));
        assert!(matches!(
            read("00:01.000 --> 00:02.000 width:"),
            Err(ParseError::SettingsSyntax { .. })
        ));
    }

    #[test]
    fn invalid_setting_values_are_ignored() {
        let cue = read("00:01.000 --> 00:02.000 align:middle line:x position:5 size:200% vertical:up").unwrap();
        assert_eq!(cue.alignment, None);
        assert_eq!(cue.line, None);
        assert_eq!(cue.position, None);
        assert_eq!(cue.size, None);
        assert_eq!(cue.vertical, None);
        assert!(cue.raw_settings.is_some());
    }

    #[test]
    fn arrow_in_payload_fails() {
        assert_eq!(
            read("00:01.000 --> 00:02.000\nline one\nline --> two"),
            Err(ParseError::ForbiddenArrow {
                line: 3,
                kind: BlockKind::Cue
            })
        );
    }
}
