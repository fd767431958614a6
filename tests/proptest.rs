//! Property-based tests for chatprep.
//!
//! Exports are assembled from a fixed pool of line shapes, so every run mixes
//! messages, continuations, legacy lines, events and malformed lines.

use proptest::prelude::*;

use chatprep::config::{PrepConfig, SenderAliasMap};
use chatprep::core::pipeline::Preprocessor;
use chatprep::parsing::merge_lines;

/// Generate a random physical line using fast strategies (no regex!)
fn arb_line() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "1/6/20, 11:26 AM - Jane: How is everyone today?".to_string(),
        "1/6/20, 11:27 AM - John Doe: Let's meet".to_string(),
        "1/7/20, 8:15 PM - buddy: party 🎉🔥".to_string(),
        "tomorrow at noon".to_string(),
        "and bring \"snacks\" 😀".to_string(),
        String::new(),
        "21/12/16, 11:48:42 PM: Bob: hi".to_string(),
        "21/12/16, 9:01:02 AM: Some Body: at 5PM: ok".to_string(),
        "1/7/20, 8:00 AM - Bob added Carol".to_string(),
        "1/7/20, 8:01 AM - Carol".to_string(),
        "4/30/19, 12:45 PM - Jane Doe created group \"Friends\"".to_string(),
        "Привет мир 你好".to_string(),
    ])
}

/// Generate a whole export
fn arb_export(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(arb_line(), 0..max_len).prop_map(|lines| lines.join("\n"))
}

fn arb_aliases() -> impl Strategy<Value = SenderAliasMap> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["buddy", "Bob", "Jane", "Some Body"]),
            prop::sample::select(vec!["Canonical One", "Canonical Two"]),
        ),
        0..4,
    )
    .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================
    // MERGE PROPERTIES
    // ============================================

    /// Re-merging merged output changes nothing
    #[test]
    fn merge_is_idempotent(export in arb_export(30)) {
        let once = merge_lines(&export);
        let rejoined: String = once.iter().map(|l| format!("{}\n", l.text)).collect();
        let twice = merge_lines(&rejoined);

        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            prop_assert_eq!(&a.text, &b.text);
        }
    }

    /// Merging never produces more lines than it reads
    #[test]
    fn merge_never_increases_count(export in arb_export(30)) {
        prop_assert!(merge_lines(&export).len() <= export.lines().count());
    }

    // ============================================
    // PIPELINE PROPERTIES
    // ============================================

    /// Every logical line becomes exactly one record, event or skipped line
    #[test]
    fn logical_lines_are_partitioned(export in arb_export(30)) {
        let report = Preprocessor::new(PrepConfig::new()).run_str(&export).unwrap();
        prop_assert_eq!(
            report.records.len() + report.group_info.events.len() + report.skipped.len(),
            report.logical_lines
        );
        prop_assert_eq!(report.raw_lines, export.lines().count());
    }

    /// Member counts add up to the number of records
    #[test]
    fn member_counts_are_conserved(export in arb_export(30), aliases in arb_aliases()) {
        let config = PrepConfig::new().with_sender_map(aliases);
        let report = Preprocessor::new(config).run_str(&export).unwrap();
        prop_assert_eq!(report.group_info.total_messages(), report.records.len());

        for record in &report.records {
            prop_assert!(report.group_info.member(&record.sender).is_some());
        }
    }

    /// Summary statistics exist exactly when records do
    #[test]
    fn summary_present_iff_records(export in arb_export(20)) {
        let report = Preprocessor::new(PrepConfig::new()).run_str(&export).unwrap();
        let info = &report.group_info;
        let has_records = !report.records.is_empty();
        prop_assert_eq!(info.most_active_sender.is_some(), has_records);
        prop_assert_eq!(info.date_with_most_messages.is_some(), has_records);
        prop_assert_eq!(info.median_messages_per_day.is_some(), has_records);
    }

    /// Messages never keep double quotes
    #[test]
    fn messages_have_no_quotes(export in arb_export(30)) {
        let report = Preprocessor::new(PrepConfig::new()).run_str(&export).unwrap();
        for record in &report.records {
            prop_assert!(!record.message.contains('"'));
        }
    }

    // ============================================
    // ALIAS PROPERTIES
    // ============================================

    /// Canonicalizing a canonical name is stable
    #[test]
    fn canonicalize_is_idempotent(
        aliases in arb_aliases(),
        name in prop::sample::select(vec!["buddy", "Bob", "Jane", "Some Body", "Carol"]),
    ) {
        let once = aliases.canonicalize(name);
        prop_assert_eq!(aliases.canonicalize(once), once);
    }

    /// Aliased names never show up as members
    #[test]
    fn aliased_names_never_members(export in arb_export(30)) {
        let aliases = SenderAliasMap::new().with_alias("buddy", "John Doe");
        let report = Preprocessor::new(PrepConfig::new().with_sender_map(aliases))
            .run_str(&export)
            .unwrap();
        prop_assert!(report.group_info.member("buddy").is_none());
    }
}
