//! WebVTT document parser module
//!
//! Turns a line source into a [`Document`] holding region definitions,
//! style sheets, comments and cues. Parsing is strict about structure and
//! token syntax and lenient about individual setting values: a malformed
//! timing line aborts the parse, an unknown `align:` keyword is dropped.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::parser::{ast::TextAlignment, Document};
//!
//! let text = "WEBVTT - Example\n\
//!             \n\
//!             REGION\n\
//!             id:bill\n\
//!             width:40%\n\
//!             \n\
//!             intro\n\
//!             00:00.000 --> 00:02.500 region:bill align:start\n\
//!             Hello <b>world</b>\n";
//!
//! let doc = Document::parse(text)?;
//! let cue = &doc.cues().unwrap()[0];
//! assert_eq!(cue.id.as_deref(), Some("intro"));
//! assert_eq!(cue.alignment, Some(TextAlignment::Start));
//! assert_eq!(cue.region_definition(&doc).and_then(|r| r.width), Some(40.0));
//! # Ok::<(), vtt_core::parser::ParseError>(())
//! ```

pub mod ast;
pub mod blocks;
pub mod config;
pub mod errors;
pub mod settings;
pub mod source;
pub mod timestamp;

mod document;
mod main;

pub use ast::{Block, BlockKind, Comment, Cue, Region, Style};
pub use config::{CancelFlag, ParserConfig};
pub use document::Document;
pub use errors::{ErrorCategory, ParseError, ParseResult};
pub use source::{IterLines, LineSource, ReaderLines, StrLines};
