//! Cue timestamp scanner
//!
//! Scans `[hours:]minutes:seconds.milliseconds` left to right with an
//! explicit state machine, counting the digits of every field. Hours have no
//! width limit, minutes and seconds take exactly two digits and milliseconds
//! exactly three. The scan stops before whitespace or `-` (the start of an
//! arrow written without spaces) and at end of line.
//!
//! # Example
//!
//! ```rust
//! use core::time::Duration;
//! use vtt_core::parser::timestamp::scan_timestamp;
//!
//! let line = "01:02:03.004 --> 01:02:05.000";
//! let mut position = 0;
//! let start = scan_timestamp(line, &mut position, 1)?;
//!
//! assert_eq!(start, Duration::from_millis(3_723_004));
//! assert_eq!(&line[position..], " --> 01:02:05.000");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use core::time::Duration;

use super::errors::{ParseError, ParseResult};

/// Most fields a timestamp can have: hours, minutes, seconds, milliseconds
const MAX_FIELDS: usize = 4;

/// Width of minutes and seconds fields
const CLOCK_DIGITS: u32 = 2;

/// Width of the milliseconds field
const FRACTION_DIGITS: u32 = 3;

/// Largest minutes or seconds value
const MAX_CLOCK_VALUE: u64 = 59;

/// Field the scanner is currently writing digits into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// First field: hours or minutes, decided by the number of colons
    Leading,
    /// Two-digit field after a colon: minutes or seconds
    Clock,
    /// Three-digit field after `.`
    Fraction,
}

/// Outcome of feeding one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Done,
}

/// Reason a scan failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanError {
    Syntax(&'static str),
    Overflow,
}

/// Digit-counting state machine for one timestamp
#[derive(Debug)]
struct TimestampScanner {
    values: [u64; MAX_FIELDS],
    digits: [u32; MAX_FIELDS],
    field: usize,
    state: State,
}

impl TimestampScanner {
    const fn new() -> Self {
        Self {
            values: [0; MAX_FIELDS],
            digits: [0; MAX_FIELDS],
            field: 0,
            state: State::Leading,
        }
    }

    fn feed(&mut self, c: char) -> Result<Step, ScanError> {
        match c {
            '0'..='9' => self.digit(u64::from(c) - u64::from('0')),
            ':' => self.colon(),
            '.' => self.dot(),
            c if c.is_whitespace() || c == '-' => {
                if self.state == State::Fraction && self.current_digits() == FRACTION_DIGITS {
                    Ok(Step::Done)
                } else {
                    Err(ScanError::Syntax("timestamp ended before three millisecond digits"))
                }
            }
            _ => Err(ScanError::Syntax("unexpected character in timestamp")),
        }
    }

    fn digit(&mut self, digit: u64) -> Result<Step, ScanError> {
        let limit = match self.state {
            State::Leading => None,
            State::Clock => Some(CLOCK_DIGITS),
            State::Fraction => Some(FRACTION_DIGITS),
        };
        if limit.is_some_and(|limit| self.current_digits() >= limit) {
            return Err(ScanError::Syntax("too many digits in timestamp field"));
        }

        let value = &mut self.values[self.field];
        *value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(ScanError::Overflow)?;
        self.digits[self.field] += 1;
        Ok(Step::Continue)
    }

    fn colon(&mut self) -> Result<Step, ScanError> {
        match self.state {
            State::Fraction => return Err(ScanError::Syntax("':' after milliseconds")),
            State::Clock if self.current_digits() != CLOCK_DIGITS => {
                return Err(ScanError::Syntax("minutes and seconds need two digits"));
            }
            _ => {}
        }
        // Two colons at most: a colon may not open the milliseconds slot
        if self.field + 2 >= MAX_FIELDS {
            return Err(ScanError::Syntax("too many fields in timestamp"));
        }

        self.field += 1;
        self.state = State::Clock;
        Ok(Step::Continue)
    }

    fn dot(&mut self) -> Result<Step, ScanError> {
        match self.state {
            State::Leading => Err(ScanError::Syntax("milliseconds must follow minutes and seconds")),
            State::Fraction => Err(ScanError::Syntax("duplicate '.' in timestamp")),
            State::Clock if self.current_digits() != CLOCK_DIGITS => {
                Err(ScanError::Syntax("seconds need two digits"))
            }
            State::Clock => {
                self.field += 1;
                self.state = State::Fraction;
                Ok(Step::Continue)
            }
        }
    }

    const fn current_digits(&self) -> u32 {
        self.digits[self.field]
    }

    /// Validate the collected fields and build the duration
    fn finish(&self) -> Result<Duration, ScanError> {
        if self.field < 2 {
            return Err(ScanError::Syntax("timestamp needs minutes and seconds"));
        }
        if self.state != State::Fraction || self.current_digits() != FRACTION_DIGITS {
            return Err(ScanError::Syntax("milliseconds need three digits"));
        }

        let (hours, minutes, seconds, millis) = if self.field == 2 {
            if self.digits[0] != CLOCK_DIGITS {
                return Err(ScanError::Syntax("minutes and seconds need two digits"));
            }
            (0, self.values[0], self.values[1], self.values[2])
        } else {
            (self.values[0], self.values[1], self.values[2], self.values[3])
        };

        if minutes > MAX_CLOCK_VALUE || seconds > MAX_CLOCK_VALUE {
            return Err(ScanError::Syntax("minutes and seconds must be below 60"));
        }

        let secs = hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60 + seconds))
            .ok_or(ScanError::Overflow)?;
        // millis < 1000, so the nanosecond part never carries
        let nanos = u32::try_from(millis * 1_000_000).map_err(|_| ScanError::Overflow)?;
        Ok(Duration::new(secs, nanos))
    }
}

/// Scan a timestamp starting at byte offset `*position` of `text`
///
/// On success `*position` points at the first character after the
/// timestamp (whitespace, `-` or the end of the line).
///
/// # Errors
///
/// Returns [`ParseError::TimingSyntax`] for any field-width, separator or
/// range violation and [`ParseError::TimingOverflow`] when the value does
/// not fit a [`Duration`].
pub fn scan_timestamp(text: &str, position: &mut usize, line: usize) -> ParseResult<Duration> {
    let start = *position;
    let mut scanner = TimestampScanner::new();
    let mut end = text.len();

    for (offset, c) in text[start..].char_indices() {
        match scanner.feed(c) {
            Ok(Step::Continue) => {}
            Ok(Step::Done) => {
                end = start + offset;
                break;
            }
            Err(err) => return Err(scan_error(err, text, start + offset, line)),
        }
    }

    let duration = scanner
        .finish()
        .map_err(|err| scan_error(err, text, end, line))?;
    *position = end;
    Ok(duration)
}

fn scan_error(err: ScanError, text: &str, position: usize, line: usize) -> ParseError {
    match err {
        ScanError::Syntax(reason) => ParseError::TimingSyntax {
            line,
            position,
            text: text.to_owned(),
            reason,
        },
        ScanError::Overflow => ParseError::TimingOverflow {
            line,
            text: text.to_owned(),
        },
    }
}
