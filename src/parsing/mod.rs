//! Line-level parsing of chat exports.
//!
//! - [`date`] - leading date token recognition
//! - [`merge`] - joining continuation lines into logical lines
//! - [`record`] - splitting logical lines into records, events and the header
//! - [`emoji`] - emoji extraction from message text

pub mod date;
pub mod emoji;
pub mod merge;
pub mod record;

pub use date::{ChronoDateRecognizer, DateRecognizer, is_date};
pub use emoji::{extract_emojis, is_emoji};
pub use merge::{LogicalLines, merge_lines, normalize_legacy_delimiter, raw_lines};
pub use record::{GroupHeader, LineOutcome, MIN_EXPECTED_TOKENS, RecordParser};
