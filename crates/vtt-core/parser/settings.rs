//! Settings parser shared by region and cue blocks
//!
//! Settings are whitespace-separated `name:value` tokens. Parsing happens in
//! two distinct steps with different error policies:
//!
//! 1. [`Settings::parse`] tokenizes the string and fails on any token that is
//!    not `name:value` with a non-empty value.
//! 2. The typed getters decode one value each and return `None` when it does
//!    not pass its format, range or keyword check. They never fail.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::parser::{ast::TextAlignment, settings::Settings};
//!
//! let settings = Settings::parse("align:right size:150% region:r", 1)?;
//! assert_eq!(settings.keyword::<TextAlignment>("ALIGN"), Some(TextAlignment::Right));
//! assert_eq!(settings.percent("size"), None);
//! assert_eq!(settings.string("region"), Some("r"));
//!
//! assert!(Settings::parse("id-fred", 1).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use ahash::AHashMap;
use log::trace;

use super::{
    ast::{Anchor, Keyword, LineAlignment, LineOffset, LineSettings, PositionAlignment, PositionSettings},
    errors::{ParseError, ParseResult},
};

/// Decoded `name:value` pairs
///
/// Names are case-insensitive; a later token with the same name replaces an
/// earlier one.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    entries: AHashMap<String, String>,
}

impl Settings {
    /// Tokenize a settings string
    ///
    /// `line` is used for error reporting only.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::SettingsSyntax`] for a token without a colon or
    /// with nothing after its colon.
    pub fn parse(raw: &str, line: usize) -> ParseResult<Self> {
        let mut settings = Self::default();
        settings.extend(raw, line)?;
        Ok(settings)
    }

    /// Tokenize settings spread over several lines
    ///
    /// Line `i` of `raw` (zero-based) is reported as `first_line + i`.
    /// Tokens on later lines replace same-named tokens on earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::SettingsSyntax`] carrying the line of the first
    /// malformed token.
    pub fn parse_lines(raw: &str, first_line: usize) -> ParseResult<Self> {
        let mut settings = Self::default();
        for (offset, text) in raw.lines().enumerate() {
            settings.extend(text, first_line + offset)?;
        }
        Ok(settings)
    }

    fn extend(&mut self, raw: &str, line: usize) -> ParseResult<()> {
        for token in raw.split(char::is_whitespace).filter(|t| !t.is_empty()) {
            let (name, value) = token
                .split_once(':')
                .filter(|(_, value)| !value.is_empty())
                .ok_or_else(|| ParseError::SettingsSyntax {
                    line,
                    token: token.to_owned(),
                })?;
            self.entries.insert(name.to_ascii_lowercase(), value.to_owned());
        }
        Ok(())
    }

    /// Number of distinct setting names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no settings were given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw value of a setting
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }

    /// Raw value of a setting, if it is non-empty
    #[must_use]
    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// Percentage setting such as `width:40%`
    #[must_use]
    pub fn percent(&self, name: &str) -> Option<f64> {
        self.decode(name, parse_percent)
    }

    /// Integer setting such as `lines:3`
    #[must_use]
    pub fn integer<T: core::str::FromStr>(&self, name: &str) -> Option<T> {
        self.decode(name, |value| value.parse().ok())
    }

    /// Two-percentage anchor setting such as `regionanchor:0%,100%`
    #[must_use]
    pub fn anchor(&self, name: &str) -> Option<Anchor> {
        self.decode(name, parse_anchor)
    }

    /// Keyword setting such as `vertical:rl`
    #[must_use]
    pub fn keyword<T: Keyword>(&self, name: &str) -> Option<T> {
        self.decode(name, T::parse_keyword)
    }

    /// Compound `line:` setting
    #[must_use]
    pub fn line(&self, name: &str) -> Option<LineSettings> {
        self.decode(name, parse_line)
    }

    /// Compound `position:` setting
    #[must_use]
    pub fn position(&self, name: &str) -> Option<PositionSettings> {
        self.decode(name, parse_position)
    }

    /// Run a decoder over a present value, tracing values it rejects
    fn decode<T>(&self, name: &str, decoder: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let value = self.string(name)?;
        let decoded = decoder(value);
        if decoded.is_none() {
            trace!("ignoring invalid value '{value}' for setting '{name}'");
        }
        decoded
    }
}

/// Parse a percentage in `0%..=100%`
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::settings::parse_percent;
///
/// assert_eq!(parse_percent("12.5%"), Some(12.5));
/// assert_eq!(parse_percent("40"), None);
/// assert_eq!(parse_percent("101%"), None);
/// ```
#[must_use]
pub fn parse_percent(value: &str) -> Option<f64> {
    let number = value.strip_suffix('%')?;
    let percent: f64 = number.parse().ok()?;
    (0.0..=100.0).contains(&percent).then_some(percent)
}

/// Parse an `x%,y%` anchor
///
/// Exactly one comma is allowed and both halves must be valid percentages.
#[must_use]
pub fn parse_anchor(value: &str) -> Option<Anchor> {
    let (x, y) = value.split_once(',')?;
    if y.contains(',') {
        return None;
    }
    Some(Anchor::new(parse_percent(x)?, parse_percent(y)?))
}

/// Parse `offset[,alignment]` for the `line:` setting
///
/// The offset is tried as a percentage first and then as a line number. If
/// either part is invalid the whole value is rejected.
#[must_use]
pub fn parse_line(value: &str) -> Option<LineSettings> {
    let (offset, alignment) = split_alignment::<LineAlignment>(value)?;
    let offset = parse_percent(offset)
        .map(LineOffset::Percent)
        .or_else(|| offset.parse().ok().map(LineOffset::Number))?;
    Some(LineSettings { offset, alignment })
}

/// Parse `percent[,alignment]` for the `position:` setting
#[must_use]
pub fn parse_position(value: &str) -> Option<PositionSettings> {
    let (offset, alignment) = split_alignment::<PositionAlignment>(value)?;
    Some(PositionSettings {
        percent: parse_percent(offset)?,
        alignment,
    })
}

/// Split an optional `,keyword` suffix off a compound value
///
/// Returns `None` when a suffix is present but is not a valid keyword.
fn split_alignment<T: Keyword>(value: &str) -> Option<(&str, Option<T>)> {
    match value.split_once(',') {
        Some((offset, keyword)) => T::parse_keyword(keyword).map(|alignment| (offset, Some(alignment))),
        None => Some((value, None)),
    }
}
