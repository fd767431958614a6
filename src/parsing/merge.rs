//! Reassembly of multi-line messages.
//!
//! Exports write a message with embedded newlines as several physical lines;
//! only the first carries the date prefix:
//!
//! ```text
//! 1/6/20, 11:27 AM - Jane: Let's meet
//! tomorrow at noon
//! 1/6/20, 11:28 AM - Bob: ok
//! ```
//!
//! [`LogicalLines`] turns that into one line per message. Lines in the legacy
//! `PM:` delimiter convention are rewritten to the `PM -` form on the way.

use std::io::{self, BufRead};

use tracing::debug;

use crate::core::models::{LogicalLine, RawLine};

use super::date::{ChronoDateRecognizer, DateRecognizer, leading_segment};

/// Legacy delimiter rewrites, applied to the first match only.
const LEGACY_DELIMITERS: [(&str, &str); 2] = [("AM:", "AM -"), ("PM:", "PM -")];

/// Separator of the current export format between the time and the sender.
const MODERN_SEPARATOR: &str = " - ";

/// Rewrites the legacy `AM:`/`PM:` delimiter to `AM -`/`PM -`.
///
/// Only the first delimiter on the line is considered, and only when no
/// modern `" - "` separator precedes it, so message text like `at 5PM: ok`
/// on a current-format line is kept intact.
///
/// ```rust
/// use chatprep::parsing::merge::normalize_legacy_delimiter;
///
/// assert_eq!(
///     normalize_legacy_delimiter("21/12/16, 11:48:42 PM: Bob: hi"),
///     "21/12/16, 11:48:42 PM - Bob: hi"
/// );
/// ```
pub fn normalize_legacy_delimiter(line: &str) -> String {
    let first = LEGACY_DELIMITERS
        .iter()
        .filter_map(|&(legacy, modern)| line.find(legacy).map(|pos| (pos, legacy, modern)))
        .min_by_key(|&(pos, _, _)| pos);

    let Some((pos, legacy, modern)) = first else {
        return line.to_string();
    };

    if line[..pos].contains(MODERN_SEPARATOR) {
        return line.to_string();
    }

    let mut normalized = String::with_capacity(line.len() + 1);
    normalized.push_str(&line[..pos]);
    normalized.push_str(modern);
    normalized.push_str(&line[pos + legacy.len()..]);
    normalized
}

/// Reads physical lines from `reader`, numbering them from zero.
///
/// Line terminators (`\n` and `\r\n`) are removed.
pub fn raw_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<RawLine>> {
    reader
        .lines()
        .enumerate()
        .map(|(ordinal, line)| line.map(|text| RawLine::new(text, ordinal)))
}

/// Iterator adapter that merges continuation lines into logical lines.
///
/// Lines are consumed and produced in order, one logical line behind the
/// input: a logical line is only complete once the next dated line (or the
/// end of input) has been seen. I/O errors from the underlying iterator are
/// passed through as they occur.
pub struct LogicalLines<I, D = ChronoDateRecognizer> {
    raw: I,
    recognizer: D,
    pending: Option<LogicalLine>,
    seen_first: bool,
}

impl<I> LogicalLines<I, ChronoDateRecognizer>
where
    I: Iterator<Item = io::Result<RawLine>>,
{
    /// Merges `raw` using the default date recognizer.
    pub fn new(raw: I) -> Self {
        Self::with_recognizer(raw, ChronoDateRecognizer::default())
    }
}

impl<I, D> LogicalLines<I, D>
where
    I: Iterator<Item = io::Result<RawLine>>,
    D: DateRecognizer,
{
    /// Merges `raw` using a custom date recognizer.
    pub fn with_recognizer(raw: I, recognizer: D) -> Self {
        Self {
            raw,
            recognizer,
            pending: None,
            seen_first: false,
        }
    }

    fn starts_message(&self, line: &str) -> bool {
        self.recognizer.is_date(leading_segment(line))
    }
}

impl<I, D> Iterator for LogicalLines<I, D>
where
    I: Iterator<Item = io::Result<RawLine>>,
    D: DateRecognizer,
{
    type Item = io::Result<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.raw.next() {
                Some(Ok(raw)) => raw,
                Some(Err(e)) => return Some(Err(e)),
                None => return self.pending.take().map(Ok),
            };

            let source = if self.seen_first {
                raw.text.as_str()
            } else {
                self.seen_first = true;
                raw.text.trim_start_matches('\u{feff}')
            };
            let text = normalize_legacy_delimiter(source);

            if !self.starts_message(&text) {
                if let Some(pending) = self.pending.as_mut() {
                    debug!(
                        ordinal = raw.ordinal,
                        into = pending.ordinal,
                        "line does not start with a date, merging into previous line"
                    );
                    // A single space, so "Let's meet" + "tomorrow at noon" reads as
                    // "Let's meet tomorrow at noon".
                    pending.text.push(' ');
                    pending.text.push_str(&text);
                    continue;
                }
                // Nothing to continue on the very first line; it stands alone.
            }

            let completed = self.pending.replace(LogicalLine::new(text, raw.ordinal));
            if let Some(line) = completed {
                return Some(Ok(line));
            }
        }
    }
}

/// Merges an in-memory export into logical lines with the default recognizer.
///
/// ```rust
/// use chatprep::parsing::merge::merge_lines;
///
/// let lines = merge_lines("1/6/20, 11:27 AM - Jane: Let's meet\ntomorrow at noon\n");
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].text, "1/6/20, 11:27 AM - Jane: Let's meet tomorrow at noon");
/// ```
pub fn merge_lines(text: &str) -> Vec<LogicalLine> {
    let raw = text
        .lines()
        .enumerate()
        .map(|(ordinal, line)| Ok(RawLine::new(line, ordinal)));

    LogicalLines::new(raw).filter_map(Result::ok).collect()
}
