//! Keyword-valued cue settings
//!
//! Each enum here decodes from a fixed set of case-insensitive literals.
//! Unknown literals decode to `None` and the setting is left unset.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Setting value decoded from a fixed keyword table
pub trait Keyword: Sized + Copy + 'static {
    /// Accepted literals and the value each decodes to
    const KEYWORDS: &'static [(&'static str, Self)];

    /// Decode a keyword, ignoring ASCII case
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vtt_core::parser::ast::{Keyword, TextAlignment};
    ///
    /// assert_eq!(TextAlignment::parse_keyword("RIGHT"), Some(TextAlignment::Right));
    /// assert_eq!(TextAlignment::parse_keyword("middle"), None);
    /// ```
    #[must_use]
    fn parse_keyword(value: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(value))
            .map(|&(_, parsed)| parsed)
    }
}

/// Writing direction of a vertical cue (`vertical:` setting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VerticalTextLayout {
    /// `rl`: lines grow from right to left
    RightToLeft,
    /// `lr`: lines grow from left to right
    LeftToRight,
}

impl VerticalTextLayout {
    /// Canonical keyword for this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RightToLeft => "rl",
            Self::LeftToRight => "lr",
        }
    }
}

impl Keyword for VerticalTextLayout {
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("rl", Self::RightToLeft), ("lr", Self::LeftToRight)];
}

/// Alignment of the cue box relative to its line position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineAlignment {
    /// `start`: the box starts at the line position
    Start,
    /// `center`: the box is centered on the line position
    Center,
    /// `end`: the box ends at the line position
    End,
}

impl LineAlignment {
    /// Canonical keyword for this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

impl Keyword for LineAlignment {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("start", Self::Start),
        ("center", Self::Center),
        ("end", Self::End),
    ];
}

/// Alignment of the cue box relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PositionAlignment {
    /// `line-left`: the position marks the box's left edge
    LineLeft,
    /// `center`: the position marks the box's center
    Center,
    /// `line-right`: the position marks the box's right edge
    LineRight,
}

impl PositionAlignment {
    /// Canonical keyword for this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LineLeft => "line-left",
            Self::Center => "center",
            Self::LineRight => "line-right",
        }
    }
}

impl Keyword for PositionAlignment {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("line-left", Self::LineLeft),
        ("center", Self::Center),
        ("line-right", Self::LineRight),
    ];
}

/// Alignment of the cue text within the cue box (`align:` setting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextAlignment {
    /// `start`: aligned to the start edge of the writing direction
    Start,
    /// `center`: centered in the cue box
    Center,
    /// `end`: aligned to the end edge of the writing direction
    End,
    /// `left`: aligned to the left edge regardless of direction
    Left,
    /// `right`: aligned to the right edge regardless of direction
    Right,
}

impl TextAlignment {
    /// Canonical keyword for this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl Keyword for TextAlignment {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("start", Self::Start),
        ("center", Self::Center),
        ("end", Self::End),
        ("left", Self::Left),
        ("right", Self::Right),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(
            VerticalTextLayout::parse_keyword("LR"),
            Some(VerticalTextLayout::LeftToRight)
        );
        assert_eq!(
            PositionAlignment::parse_keyword("Line-Right"),
            Some(PositionAlignment::LineRight)
        );
        assert_eq!(LineAlignment::parse_keyword("CENTER"), Some(LineAlignment::Center));
    }

    #[test]
    fn unknown_keywords_are_rejected() {
        assert_eq!(VerticalTextLayout::parse_keyword("tb"), None);
        assert_eq!(LineAlignment::parse_keyword("left"), None);
        assert_eq!(PositionAlignment::parse_keyword("start"), None);
        assert_eq!(TextAlignment::parse_keyword(""), None);
        assert_eq!(TextAlignment::parse_keyword("right "), None);
    }

    #[test]
    fn as_str_matches_keyword_table() {
        for &(keyword, value) in TextAlignment::KEYWORDS {
            assert_eq!(value.as_str(), keyword);
        }
        for &(keyword, value) in PositionAlignment::KEYWORDS {
            assert_eq!(value.as_str(), keyword);
        }
        for &(keyword, value) in LineAlignment::KEYWORDS {
            assert_eq!(value.as_str(), keyword);
        }
        for &(keyword, value) in VerticalTextLayout::KEYWORDS {
            assert_eq!(value.as_str(), keyword);
        }
    }
}
