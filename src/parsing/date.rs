//! Leading date token recognition.
//!
//! Every message line of an export starts with a date followed by a comma:
//!
//! ```text
//! 1/6/20, 11:26 AM - Jane: How is everyone today?
//! 21/12/16, 11:48:42 PM: Bob: hi
//! ```
//!
//! A line whose leading segment is not a date is the continuation of a
//! multi-line message. Recognition never fails loudly: anything that does not
//! parse is simply "not a date".

use chrono::NaiveDate;

/// Decides whether a piece of text is a calendar date.
pub trait DateRecognizer {
    /// Returns `true` if `text` can be interpreted as a date.
    fn is_date(&self, text: &str) -> bool;
}

impl<F> DateRecognizer for F
where
    F: Fn(&str) -> bool,
{
    fn is_date(&self, text: &str) -> bool {
        self(text)
    }
}

/// Date layouts accepted by [`ChronoDateRecognizer::default`].
///
/// US month-first layouts come first, then day-first ones, so `1/6/20` and
/// `21/12/16` are both accepted. Two-digit year layouts precede four-digit
/// ones; chrono rejects trailing input, so `1/6/2020` falls through to `%Y`.
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%d/%m/%y",
    "%d/%m/%Y",
    "%d.%m.%y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%d-%m-%y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%b %d %Y",
    "%d %b %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Recognizes dates by trying a list of chrono format strings.
#[derive(Debug, Clone)]
pub struct ChronoDateRecognizer {
    formats: Vec<&'static str>,
}

impl ChronoDateRecognizer {
    /// Creates a recognizer with the default layouts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recognizer that only accepts the given layouts.
    pub fn with_formats(formats: &[&'static str]) -> Self {
        Self {
            formats: formats.to_vec(),
        }
    }

    /// Returns the layouts tried, in order.
    pub fn formats(&self) -> &[&'static str] {
        &self.formats
    }
}

impl Default for ChronoDateRecognizer {
    fn default() -> Self {
        Self::with_formats(DEFAULT_DATE_FORMATS)
    }
}

impl DateRecognizer for ChronoDateRecognizer {
    fn is_date(&self, text: &str) -> bool {
        // iOS exports wrap the date in brackets: "[1/15/24, 10:30:45 AM]"
        let candidate = text.trim().trim_start_matches('[').trim_end_matches(']');
        if candidate.is_empty() || !candidate.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return false;
        }

        self.formats
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(candidate, fmt).is_ok())
    }
}

/// Checks `text` against the default layouts.
///
/// Convenience for one-off checks; the pipeline keeps one recognizer for the
/// whole run.
pub fn is_date(text: &str) -> bool {
    ChronoDateRecognizer::default().is_date(text)
}

/// Returns the part of `line` before its first comma (the whole line if it has
/// none).
pub fn leading_segment(line: &str) -> &str {
    line.split_once(',').map_or(line, |(head, _)| head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_dates() {
        assert!(is_date("1/6/20"));
        assert!(is_date("4/30/19"));
        assert!(is_date("12/31/2019"));
    }

    #[test]
    fn test_day_first_dates() {
        assert!(is_date("21/12/16"));
        assert!(is_date("26.10.2025"));
        assert!(is_date("15.01.24"));
    }

    #[test]
    fn test_iso_and_named_dates() {
        assert!(is_date("2020-01-06"));
        assert!(is_date("Jan 06 2020"));
        assert!(is_date("6 January 2020"));
    }

    #[test]
    fn test_bracketed_and_padded() {
        assert!(is_date("[1/15/24"));
        assert!(is_date("  1/6/20 "));
    }

    #[test]
    fn test_not_dates() {
        assert!(!is_date(""));
        assert!(!is_date("tomorrow at noon"));
        assert!(!is_date("Let's meet"));
        assert!(!is_date("11:26 AM"));
        assert!(!is_date("3/4"));
        assert!(!is_date("1/2 cup flour"));
        assert!(!is_date("13/13/20"));
        assert!(!is_date("- Jane"));
    }

    #[test]
    fn test_leading_segment() {
        assert_eq!(leading_segment("1/6/20, 11:26 AM - Jane: hi"), "1/6/20");
        assert_eq!(leading_segment("no comma here"), "no comma here");
        assert_eq!(leading_segment(""), "");
    }

    #[test]
    fn test_closure_recognizer() {
        let always = |_: &str| true;
        assert!(always.is_date("anything"));
    }

    #[test]
    fn test_custom_formats() {
        let iso_only = ChronoDateRecognizer::with_formats(&["%Y-%m-%d"]);
        assert!(iso_only.is_date("2020-01-06"));
        assert!(!iso_only.is_date("1/6/20"));
        assert_eq!(iso_only.formats(), &["%Y-%m-%d"]);
    }
}
