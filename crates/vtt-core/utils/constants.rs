//! Literal tokens of the WebVTT grammar
//!
//! Block tokens are matched case-sensitively as line prefixes. Setting names
//! and keyword values are compared case-insensitively by the settings parser.

/// File signature that must open every document
pub const SIGNATURE_TOKEN: &str = "WEBVTT";
/// Region definition block header
pub const REGION_TOKEN: &str = "REGION";
/// Style block header
pub const STYLE_TOKEN: &str = "STYLE";
/// Comment block header
pub const COMMENT_TOKEN: &str = "NOTE";
/// Separator between cue start and end timestamps
pub const ARROW_TOKEN: &str = "-->";

// Region setting names
pub const REGION_ID: &str = "id";
pub const WIDTH: &str = "width";
pub const LINES: &str = "lines";
pub const REGION_ANCHOR: &str = "regionanchor";
pub const VIEWPORT_ANCHOR: &str = "viewportanchor";
pub const SCROLL: &str = "scroll";

// Cue setting names
pub const VERTICAL: &str = "vertical";
pub const LINE: &str = "line";
pub const POSITION: &str = "position";
pub const SIZE: &str = "size";
pub const ALIGN: &str = "align";
pub const REGION: &str = "region";

/// The only scroll value that enables scrolling
pub const SCROLL_UP: &str = "up";
