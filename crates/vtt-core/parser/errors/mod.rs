//! Parser error types for WebVTT document parsing
//!
//! # Error Philosophy
//!
//! - Structural and token-stream errors are fatal and abort the parse
//! - Individual setting values that fail validation are dropped, not reported
//! - Every error carries the line it was raised on
//!
//! # Module Organization
//!
//! - `parse_error` - Fatal parsing errors
//! - `category` - Coarse error classification

pub mod category;
pub mod parse_error;

pub use category::ErrorCategory;
pub use parse_error::ParseError;

/// Result type for all parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
