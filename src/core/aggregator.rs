//! Folding parsed lines into group metadata.

use std::collections::HashMap;

use tracing::debug;

use super::models::{Event, GroupInfo, Member, ParsedRecord};
use crate::parsing::record::{GroupHeader, LineOutcome};

/// Group name used when neither the header nor the caller provides one.
pub const GROUP_NAME_UNKNOWN: &str = "unknown";

/// Counts keyed by name, iterated in first-seen order.
#[derive(Debug, Default)]
struct OrderedCounter {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl OrderedCounter {
    /// Increments `key`, returning `true` if it was seen for the first time.
    fn increment(&mut self, key: &str) -> bool {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].1 += 1;
            return false;
        }
        self.index.insert(key.to_string(), self.entries.len());
        self.entries.push((key.to_string(), 1));
        true
    }

    /// Key with the highest count; ties go to the earliest key.
    fn most_common(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.entries {
            if best.is_none_or(|b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(key, _)| key.as_str())
    }

    /// Median of the counts (mean of the middle pair for an even number of
    /// keys), truncated.
    fn median_count(&self) -> Option<u64> {
        let mut counts: Vec<usize> = self.entries.iter().map(|(_, n)| *n).collect();
        if counts.is_empty() {
            return None;
        }
        counts.sort_unstable();
        let mid = counts.len() / 2;
        let median = if counts.len() % 2 == 0 {
            (counts[mid - 1] + counts[mid]) / 2
        } else {
            counts[mid]
        };
        Some(median as u64)
    }
}

/// Accumulates [`LineOutcome`]s into a [`GroupInfo`].
///
/// Owned by whoever drives the parse; nothing here is shared.
///
/// # Example
///
/// ```rust
/// use chatprep::core::aggregator::Aggregator;
/// use chatprep::core::models::Event;
/// use chatprep::parsing::record::LineOutcome;
///
/// let mut aggregator = Aggregator::new(None);
/// aggregator.push(LineOutcome::Event(Event::new("1/1/20, 9:33 PM - banner")));
/// let info = aggregator.finish();
/// assert_eq!(info.group_name, "unknown");
/// assert_eq!(info.events.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Aggregator {
    group_name_override: Option<String>,
    header: Option<GroupHeader>,
    events: Vec<Event>,
    senders: OrderedCounter,
    dates: OrderedCounter,
    records: usize,
}

impl Aggregator {
    /// Creates an aggregator; `group_name_override` wins over any name found
    /// in the export.
    pub fn new(group_name_override: Option<String>) -> Self {
        Self {
            group_name_override,
            ..Self::default()
        }
    }

    /// Folds one outcome in, handing records back to the caller.
    pub fn push(&mut self, outcome: LineOutcome) -> Option<ParsedRecord> {
        match outcome {
            LineOutcome::Record(record) => {
                self.add_record(&record);
                Some(record)
            }
            LineOutcome::Event(event) => {
                self.events.push(event);
                None
            }
            LineOutcome::Header(header, event) => {
                self.header = Some(header);
                self.events.push(event);
                None
            }
        }
    }

    /// Counts a record towards its sender and date.
    pub fn add_record(&mut self, record: &ParsedRecord) {
        if self.senders.increment(&record.sender) {
            debug!(sender = %record.sender, "adding member");
        }
        self.dates.increment(&record.date);
        self.records += 1;
    }

    /// Number of records folded in so far.
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Number of events folded in so far, header included.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Computes the summary statistics and returns the finished metadata.
    pub fn finish(self) -> GroupInfo {
        let most_active_sender = self.senders.most_common().map(str::to_string);
        let date_with_most_messages = self.dates.most_common().map(str::to_string);
        let median_messages_per_day = self.dates.median_count();

        let header = self.header.unwrap_or_default();
        let group_name = self
            .group_name_override
            .or(header.group_name)
            .unwrap_or_else(|| GROUP_NAME_UNKNOWN.to_string());

        let members = self
            .senders
            .entries
            .into_iter()
            .map(|(name, message_count)| Member {
                name,
                message_count,
            })
            .collect();

        GroupInfo {
            creation_date: header.creation_date,
            created_by: header.created_by,
            group_name,
            events: self.events,
            members,
            most_active_sender,
            date_with_most_messages,
            median_messages_per_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str, sender: &str) -> LineOutcome {
        LineOutcome::Record(ParsedRecord {
            date: date.into(),
            timestamp: format!("{date} 10:00 AM"),
            sender: sender.into(),
            message: "msg".into(),
            emojis: vec![],
        })
    }

    #[test]
    fn test_empty_fold() {
        let info = Aggregator::new(None).finish();
        assert_eq!(info.group_name, GROUP_NAME_UNKNOWN);
        assert!(info.members.is_empty());
        assert!(info.most_active_sender.is_none());
        assert!(info.date_with_most_messages.is_none());
        assert!(info.median_messages_per_day.is_none());
    }

    #[test]
    fn test_member_counts_start_at_one() {
        let mut agg = Aggregator::new(None);
        agg.push(rec("1/6/20", "Jane"));
        agg.push(rec("1/6/20", "Bob"));
        agg.push(rec("1/7/20", "Jane"));
        let info = agg.finish();
        assert_eq!(
            info.members,
            vec![
                Member {
                    name: "Jane".into(),
                    message_count: 2
                },
                Member {
                    name: "Bob".into(),
                    message_count: 1
                },
            ]
        );
        assert_eq!(info.total_messages(), 3);
    }

    #[test]
    fn test_ties_go_to_first_seen() {
        let mut agg = Aggregator::new(None);
        agg.push(rec("1/6/20", "Bob"));
        agg.push(rec("1/7/20", "Jane"));
        agg.push(rec("1/7/20", "Jane"));
        agg.push(rec("1/6/20", "Bob"));
        let info = agg.finish();
        assert_eq!(info.most_active_sender.as_deref(), Some("Bob"));
        assert_eq!(info.date_with_most_messages.as_deref(), Some("1/6/20"));
    }

    #[test]
    fn test_median_odd_and_even() {
        let mut agg = Aggregator::new(None);
        for _ in 0..3 {
            agg.push(rec("1/1/20", "A"));
        }
        agg.push(rec("1/2/20", "A"));
        for _ in 0..6 {
            agg.push(rec("1/3/20", "A"));
        }
        // counts per day: 3, 1, 6 -> median 3
        assert_eq!(agg.finish().median_messages_per_day, Some(3));

        let mut agg = Aggregator::new(None);
        agg.push(rec("1/1/20", "A"));
        for _ in 0..4 {
            agg.push(rec("1/2/20", "A"));
        }
        // counts per day: 1, 4 -> 2.5 truncated
        assert_eq!(agg.finish().median_messages_per_day, Some(2));
    }

    #[test]
    fn test_header_and_override() {
        let header = GroupHeader {
            creation_date: Some("4/30/19".into()),
            created_by: Some("Jane Doe".into()),
            group_name: Some("Friends for life".into()),
        };

        let mut agg = Aggregator::new(None);
        agg.push(LineOutcome::Header(header.clone(), Event::new("header")));
        let info = agg.finish();
        assert_eq!(info.group_name, "Friends for life");
        assert_eq!(info.created_by.as_deref(), Some("Jane Doe"));
        assert_eq!(info.creation_date.as_deref(), Some("4/30/19"));
        assert_eq!(info.events, vec![Event::new("header")]);

        let mut agg = Aggregator::new(Some("Override".into()));
        agg.push(LineOutcome::Header(header, Event::new("header")));
        let info = agg.finish();
        assert_eq!(info.group_name, "Override");
        assert_eq!(info.created_by.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_events_keep_order() {
        let mut agg = Aggregator::new(None);
        agg.push(LineOutcome::Event(Event::new("first")));
        agg.push(rec("1/6/20", "Jane"));
        agg.push(LineOutcome::Event(Event::new("second")));
        assert_eq!(agg.event_count(), 2);
        assert_eq!(agg.record_count(), 1);
        let info = agg.finish();
        assert_eq!(info.events, vec![Event::new("first"), Event::new("second")]);
    }

    #[test]
    fn test_push_returns_record() {
        let mut agg = Aggregator::new(None);
        assert!(agg.push(rec("1/6/20", "Jane")).is_some());
        assert!(agg.push(LineOutcome::Event(Event::new("e"))).is_none());
    }
}
