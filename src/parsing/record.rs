//! Tokenizing logical lines into records, events and the group header.
//!
//! A logical line is split on whitespace. For a current-format message
//!
//! ```text
//! 1/6/20, 11:26 AM - Jane Doe: How is everyone today?
//! ```
//!
//! the tokens are `["1/6/20,", "11:26", "AM", "-", "Jane", "Doe:", "How", ...]`.
//! The first three build the date and timestamp, token 3 is the dash, and the
//! sender runs from token 4 up to the first token ending in a colon. Lines
//! without such a token are events (system notices). The first line of a group
//! export may instead be the creation header:
//!
//! ```text
//! 4/30/19, 12:45 PM - Jane Doe created group "Friends for life"
//! ```

use tracing::{debug, warn};

use crate::config::SenderAliasMap;
use crate::core::models::{Event, LogicalLine, ParsedRecord};
use crate::error::{PrepError, Result};

use super::emoji::extract_emojis;

/// Fewest whitespace-separated tokens a parseable line can have.
pub const MIN_EXPECTED_TOKENS: usize = 6;

/// Marker phrase of the group-creation header line.
pub const CREATED_GROUP_MARKER: &str = "created group";

/// Index of the first sender token.
const SENDER_START: usize = 4;

/// Facts taken from the group-creation header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupHeader {
    pub creation_date: Option<String>,
    pub created_by: Option<String>,
    /// Group name as written in the header, quotes removed
    pub group_name: Option<String>,
}

/// What a single logical line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A message with a sender.
    Record(ParsedRecord),
    /// A line without a sender.
    Event(Event),
    /// The group-creation header on the first line; also kept as an event.
    Header(GroupHeader, Event),
}

/// Splits logical lines into records.
///
/// # Example
///
/// ```rust
/// use chatprep::config::SenderAliasMap;
/// use chatprep::core::models::LogicalLine;
/// use chatprep::parsing::record::{LineOutcome, RecordParser};
///
/// let aliases = SenderAliasMap::new();
/// let parser = RecordParser::new(&aliases);
/// let line = LogicalLine::new("1/6/20, 11:26 AM - Jane: How is everyone today?", 0);
///
/// match parser.parse(&line, false)? {
///     LineOutcome::Record(record) => {
///         assert_eq!(record.sender, "Jane");
///         assert_eq!(record.timestamp, "1/6/20 11:26 AM");
///     }
///     other => panic!("expected a record, got {other:?}"),
/// }
/// # Ok::<(), chatprep::PrepError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecordParser<'a> {
    aliases: &'a SenderAliasMap,
}

impl<'a> RecordParser<'a> {
    pub fn new(aliases: &'a SenderAliasMap) -> Self {
        Self { aliases }
    }

    /// Parses one logical line.
    ///
    /// `first` marks the first logical line of the export, the only place
    /// the group-creation header is looked for.
    ///
    /// # Errors
    ///
    /// Returns [`PrepError::MalformedLine`] when the line has fewer than
    /// [`MIN_EXPECTED_TOKENS`] tokens.
    pub fn parse(&self, line: &LogicalLine, first: bool) -> Result<LineOutcome> {
        let tokens: Vec<&str> = line.text.split_whitespace().collect();
        if tokens.len() < MIN_EXPECTED_TOKENS {
            return Err(PrepError::malformed_line(
                line.ordinal,
                line.text.clone(),
                tokens.len(),
                MIN_EXPECTED_TOKENS,
            ));
        }

        let date = strip_separator(tokens[0]);
        let sender_end = find_sender_end(&tokens);

        if first
            && line.text.contains(CREATED_GROUP_MARKER)
            && !sender_precedes_marker(&tokens, sender_end)
        {
            if let Some(header) = parse_group_header(&tokens, date) {
                debug!(
                    created_by = header.created_by.as_deref().unwrap_or("-"),
                    group_name = header.group_name.as_deref().unwrap_or("-"),
                    "found group creation header"
                );
                return Ok(LineOutcome::Header(header, Event::new(line.text.clone())));
            }
            warn!(
                ordinal = line.ordinal,
                line = %line.text,
                "first line mentions group creation in an unrecognized layout"
            );
        }

        let Some(colon_at) = sender_end else {
            if first {
                debug!(ordinal = line.ordinal, "first line has no sender, keeping it as an event");
            } else {
                debug!(ordinal = line.ordinal, "no sender found, keeping line as an event");
            }
            return Ok(LineOutcome::Event(Event::new(line.text.clone())));
        };

        let raw_sender = tokens[SENDER_START..=colon_at].join(" ");
        let raw_sender = raw_sender.strip_suffix(':').unwrap_or(&raw_sender);
        let sender = self.aliases.canonicalize(raw_sender).to_string();

        let message = tokens[colon_at + 1..].join(" ").replace('"', "");
        let emojis = extract_emojis(&message);
        let timestamp = format!("{date} {} {}", tokens[1], tokens[2]);

        Ok(LineOutcome::Record(ParsedRecord {
            date: date.to_string(),
            timestamp,
            sender,
            message,
            emojis,
        }))
    }
}

/// Removes the comma that follows the date.
fn strip_separator(token: &str) -> &str {
    token.strip_suffix(',').unwrap_or(token)
}

/// Index of the first token at or after the sender start that ends in a colon.
fn find_sender_end(tokens: &[&str]) -> Option<usize> {
    tokens[SENDER_START..]
        .iter()
        .position(|t| t.ends_with(':'))
        .map(|offset| SENDER_START + offset)
}

/// `true` when a sender colon comes before `created group`, i.e. the phrase is
/// part of a message body.
fn sender_precedes_marker(tokens: &[&str], sender_end: Option<usize>) -> bool {
    let marker_at = tokens.windows(2).position(|w| w == ["created", "group"]);
    matches!((sender_end, marker_at), (Some(ti), Some(m)) if ti < m)
}

/// Recognizes the two header layouts: one-token and two-token creator names.
///
/// Longer creator names are not recognized and yield `None`.
fn parse_group_header(tokens: &[&str], date: &str) -> Option<GroupHeader> {
    let is_marker_at = |i: usize| {
        tokens.get(i) == Some(&"created") && tokens.get(i + 1) == Some(&"group")
    };

    let (created_by, name_start) = if is_marker_at(5) {
        (tokens[4].to_string(), 7)
    } else if is_marker_at(6) {
        (format!("{} {}", tokens[4], tokens[5]), 8)
    } else {
        return None;
    };

    let group_name = tokens
        .get(name_start..)
        .map(|rest| rest.join(" ").replace('"', ""))
        .filter(|name| !name.is_empty());

    Some(GroupHeader {
        creation_date: Some(date.to_string()),
        created_by: Some(created_by),
        group_name,
    })
}
