//! # VTT Core
//!
//! Strict parser for WebVTT caption and subtitle documents. Produces an owned
//! document model with typed region definitions and cue settings while
//! keeping every block's raw text available.
//!
//! ## Features
//!
//! - **Strict structure**: signature, block ordering and timing syntax are
//!   validated and reported with the offending line
//! - **Lenient values**: settings that fail range or keyword checks are
//!   dropped without failing the parse
//! - **Any line source**: strings, buffered readers, iterators and (with the
//!   `async` feature) tokio readers
//! - **Cancellable**: optional line limit and cancellation flag
//!
//! ## Quick Start
//!
//! ```rust
//! use vtt_core::Document;
//!
//! let text = "WEBVTT\n\
//!             \n\
//!             STYLE\n\
//!             ::cue { color: lime }\n\
//!             \n\
//!             00:01.000 --> 00:04.000 line:0 position:20%,line-left\n\
//!             Hello there\n";
//!
//! let doc = Document::parse(text)?;
//! assert_eq!(doc.styles().map(<[_]>::len), Some(1));
//! assert_eq!(doc.cues().unwrap()[0].line.and_then(|l| l.line_number()), Some(0));
//! # Ok::<(), vtt_core::ParseError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod parser;
pub mod utils;

pub use parser::{Block, Cue, Document, ParseError, ParseResult, ParserConfig, Region};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
