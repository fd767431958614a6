//! Core data models for preprocessed chats.

use serde::{Deserialize, Serialize};

/// One physical line of the export, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Line text
    pub text: String,
    /// Zero-based physical line index
    pub ordinal: usize,
}

impl RawLine {
    pub fn new(text: impl Into<String>, ordinal: usize) -> Self {
        Self {
            text: text.into(),
            ordinal,
        }
    }
}

/// One complete message line, possibly reassembled from several physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Line text, continuation newlines removed
    pub text: String,
    /// Ordinal of the first physical line that makes up this line
    pub ordinal: usize,
}

impl LogicalLine {
    pub fn new(text: impl Into<String>, ordinal: usize) -> Self {
        Self {
            text: text.into(),
            ordinal,
        }
    }
}

/// A message attributed to a sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// Date as written in the export, e.g. `1/6/20`
    pub date: String,
    /// Date, clock time and AM/PM marker, e.g. `1/6/20 11:26 AM`
    pub timestamp: String,
    /// Canonical sender name
    pub sender: String,
    /// Message text with double quotes removed
    pub message: String,
    /// Emoji characters found in the message, in order
    pub emojis: Vec<char>,
}

impl ParsedRecord {
    /// Emojis joined with commas, the form used in CSV output.
    pub fn emoji_field(&self) -> String {
        let mut field = String::with_capacity(self.emojis.len() * 5);
        for (i, c) in self.emojis.iter().enumerate() {
            if i > 0 {
                field.push(',');
            }
            field.push(*c);
        }
        field
    }
}

/// A line that is not an attributable message: encryption banners,
/// membership changes, subject changes and the like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event {
    pub text: String,
}

impl Event {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A distinct sender and how many messages they sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub message_count: usize,
}

/// Aggregated metadata for one exported group chat.
///
/// Produced by [`Aggregator::finish`](crate::core::aggregator::Aggregator::finish).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    pub group_name: String,

    /// Event lines in order of appearance
    pub events: Vec<Event>,

    /// Members in order of their first message
    pub members: Vec<Member>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_active_sender: Option<String>,

    #[serde(
        rename = "date_when_most_messages_were_sent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_with_most_messages: Option<String>,

    #[serde(
        rename = "median_message_count_per_day",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub median_messages_per_day: Option<u64>,
}

impl GroupInfo {
    /// Looks up a member by canonical name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Total number of messages across all members.
    pub fn total_messages(&self) -> usize {
        self.members.iter().map(|m| m.message_count).sum()
    }
}
