//! Line sources feeding the document reader
//!
//! The parser pulls one newline-stripped line at a time and never needs to
//! look ahead. Sources exist for borrowed strings, buffered readers and
//! plain iterators; `LineCursor` wraps any of them with line counting,
//! limit enforcement and byte-order-mark stripping.

use std::io::{self, BufRead};

use super::errors::{ParseError, ParseResult};

/// Producer of newline-stripped lines
pub trait LineSource {
    /// Read the next line, or `Ok(None)` at end of input
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the line cannot be read.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// Lines of an in-memory string
///
/// Splits on `\n` and drops a trailing `\r`, like [`str::lines`].
#[derive(Debug, Clone)]
pub struct StrLines<'a> {
    lines: core::str::Lines<'a>,
}

impl<'a> StrLines<'a> {
    /// Create a source over `text`
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }
}

impl LineSource for StrLines<'_> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.next().map(str::to_owned))
    }
}

/// Lines of any buffered reader
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> ReaderLines<R> {
    /// Create a source over `reader`
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }

        let line = self
            .buffer
            .strip_suffix('\n')
            .unwrap_or(&self.buffer);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_owned()))
    }
}

/// Lines yielded by an iterator of owned or borrowed strings
#[derive(Debug, Clone)]
pub struct IterLines<I> {
    iter: I,
}

impl<I> IterLines<I> {
    /// Create a source over `iter`
    pub const fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I, T> LineSource for IterLines<I>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.iter.next().map(Into::into))
    }
}

/// Counting wrapper used by the readers
///
/// Tracks the number of the last line handed out so errors can point at it.
#[derive(Debug)]
pub struct LineCursor<S> {
    source: S,
    line: usize,
    max_lines: Option<usize>,
}

impl<S: LineSource> LineCursor<S> {
    /// Wrap a source, optionally limiting the number of lines read
    pub const fn new(source: S, max_lines: Option<usize>) -> Self {
        Self {
            source,
            line: 0,
            max_lines,
        }
    }

    /// Number of the last line returned (0 before the first read)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Read the next line
    ///
    /// A UTF-8 byte-order mark at the start of the first line is removed.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InputTooLarge`] once the line limit is passed and
    /// [`ParseError::Io`] when the source fails.
    pub fn next_line(&mut self) -> ParseResult<Option<String>> {
        let next = self.line + 1;
        let Some(mut text) = self
            .source
            .next_line()
            .map_err(|err| ParseError::Io {
                line: next,
                message: err.to_string(),
            })?
        else {
            return Ok(None);
        };

        if let Some(limit) = self.max_lines {
            if next > limit {
                return Err(ParseError::InputTooLarge { line: next, limit });
            }
        }

        if next == 1 && text.starts_with('\u{feff}') {
            text.remove(0);
        }

        self.line = next;
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drain<S: LineSource>(mut source: S) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn str_lines_strip_carriage_returns() {
        let lines = drain(StrLines::new("WEBVTT\r\n\r\nend\n"));
        assert_eq!(lines, vec!["WEBVTT", "", "end"]);
    }

    #[test]
    fn reader_lines_match_str_lines() {
        let text = "WEBVTT\r\n\n00:01.000 --> 00:02.000\nlast";
        let from_reader = drain(ReaderLines::new(Cursor::new(text)));
        let from_str = drain(StrLines::new(text));
        assert_eq!(from_reader, from_str);
    }

    #[test]
    fn iter_lines_accept_borrowed_strings() {
        let lines = drain(IterLines::new(["a", "b"].into_iter()));
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn cursor_counts_lines_and_strips_bom() {
        let mut cursor = LineCursor::new(StrLines::new("\u{feff}WEBVTT\n\u{feff}x"), None);
        assert_eq!(cursor.line(), 0);
        assert_eq!(cursor.next_line().unwrap().as_deref(), Some("WEBVTT"));
        assert_eq!(cursor.next_line().unwrap().as_deref(), Some("\u{feff}x"));
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.next_line().unwrap(), None);
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn cursor_enforces_line_limit() {
        let mut cursor = LineCursor::new(StrLines::new("a\nb\nc"), Some(2));
        assert!(cursor.next_line().unwrap().is_some());
        assert!(cursor.next_line().unwrap().is_some());
        assert_eq!(
            cursor.next_line(),
            Err(ParseError::InputTooLarge { line: 3, limit: 2 })
        );
    }

    #[test]
    fn cursor_maps_io_errors() {
        struct Broken;
        impl LineSource for Broken {
            fn next_line(&mut self) -> io::Result<Option<String>> {
                Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes"))
            }
        }

        let mut cursor = LineCursor::new(Broken, None);
        match cursor.next_line() {
            Err(ParseError::Io { line, message }) => {
                assert_eq!(line, 1);
                assert!(message.contains("bad bytes"));
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
    }
}
