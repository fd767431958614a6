//! The full preprocessing pass: read, merge, parse, aggregate.
//!
//! ```rust
//! use chatprep::config::PrepConfig;
//! use chatprep::core::pipeline::Preprocessor;
//!
//! let export = "\
//! 4/30/19, 12:45 PM - Jane Doe created group \"Friends for life\"
//! 1/6/20, 11:26 AM - Jane Doe: How is everyone today?
//! 1/6/20, 11:27 AM - Bob: Let's meet
//! tomorrow at noon
//! ";
//!
//! let report = Preprocessor::new(PrepConfig::new()).run_str(export)?;
//! assert_eq!(report.records.len(), 2);
//! assert_eq!(report.records[1].message, "Let's meet tomorrow at noon");
//! assert_eq!(report.group_info.group_name, "Friends for life");
//! # Ok::<(), chatprep::PrepError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use tracing::{info, warn};

use super::aggregator::Aggregator;
use super::models::{GroupInfo, ParsedRecord};
use crate::config::PrepConfig;
use crate::error::{PrepError, Result};
use crate::parsing::date::{ChronoDateRecognizer, DateRecognizer};
use crate::parsing::merge::{LogicalLines, raw_lines};
use crate::parsing::record::RecordParser;

/// A logical line that was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// Ordinal of the line's first physical line
    pub ordinal: usize,
    /// The logical line text
    pub text: String,
    /// Why it was skipped
    pub reason: String,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct PreprocessReport {
    /// Parsed messages in export order
    pub records: Vec<ParsedRecord>,
    /// Group metadata and summary statistics
    pub group_info: GroupInfo,
    /// Malformed lines that were skipped
    pub skipped: Vec<SkippedLine>,
    /// Number of physical lines read
    pub raw_lines: usize,
    /// Number of logical lines after merging
    pub logical_lines: usize,
}

impl PreprocessReport {
    /// Number of physical lines that were continuations of a previous line.
    pub fn merged_lines(&self) -> usize {
        self.raw_lines - self.logical_lines
    }
}

/// Runs the preprocessing pipeline with one configuration.
pub struct Preprocessor<D = ChronoDateRecognizer> {
    config: PrepConfig,
    recognizer: D,
}

impl Preprocessor<ChronoDateRecognizer> {
    /// Creates a preprocessor with the default date recognizer.
    pub fn new(config: PrepConfig) -> Self {
        Self {
            config,
            recognizer: ChronoDateRecognizer::default(),
        }
    }
}

impl<D: DateRecognizer> Preprocessor<D> {
    /// Replaces the date recognizer used to tell message starts from
    /// continuations.
    pub fn with_recognizer<R: DateRecognizer>(self, recognizer: R) -> Preprocessor<R> {
        Preprocessor {
            config: self.config,
            recognizer,
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// Preprocesses an export file.
    pub fn run_path(&self, path: &Path) -> Result<PreprocessReport> {
        info!(path = %path.display(), "reading raw data");
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        self.run(reader)
    }

    /// Preprocesses an in-memory export.
    pub fn run_str(&self, text: &str) -> Result<PreprocessReport> {
        self.run(Cursor::new(text.as_bytes()))
    }

    /// Preprocesses an export read line by line from `reader`.
    ///
    /// Malformed lines are skipped and listed in the report unless the
    /// configuration is strict, in which case the first one ends the run with
    /// [`PrepError::MalformedLine`].
    pub fn run<R: BufRead>(&self, reader: R) -> Result<PreprocessReport> {
        let mut raw_count = 0usize;
        let counted = raw_lines(reader).inspect(|_| raw_count += 1);
        let lines =
            LogicalLines::with_recognizer(counted, |s: &str| self.recognizer.is_date(s));

        let parser = RecordParser::new(&self.config.sender_map);
        let mut aggregator = Aggregator::new(self.config.group_name.clone());
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        let mut logical_count = 0usize;

        for line in lines {
            let line = line?;
            let first = logical_count == 0;
            logical_count += 1;

            match parser.parse(&line, first) {
                Ok(outcome) => {
                    if let Some(record) = aggregator.push(outcome) {
                        records.push(record);
                    }
                }
                Err(err @ PrepError::MalformedLine { .. }) if !self.config.strict => {
                    warn!(ordinal = line.ordinal, line = %line.text, "{err}, skipping it");
                    skipped.push(SkippedLine {
                        ordinal: line.ordinal,
                        text: line.text,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        let group_info = aggregator.finish();
        info!(
            raw_lines = raw_count,
            logical_lines = logical_count,
            records = records.len(),
            events = group_info.events.len(),
            members = group_info.members.len(),
            skipped = skipped.len(),
            "preprocessing finished"
        );

        Ok(PreprocessReport {
            records,
            group_info,
            skipped,
            raw_lines: raw_count,
            logical_lines: logical_count,
        })
    }
}
