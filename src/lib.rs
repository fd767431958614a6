//! # Chatprep
//!
//! A Rust library for preprocessing WhatsApp group chat exports into a tidy
//! message table plus group metadata, ready for downstream analysis.
//!
//! ## Overview
//!
//! A WhatsApp text export is one message per line, except when it isn't:
//! multi-line messages continue on lines without a date, older exports use a
//! colon instead of a dash after the time, system notices have no sender, and
//! group exports may start with a creation header. Chatprep turns that into:
//!
//! - **Records** - `date`, `timestamp`, `sender`, `message`, `emojis`, one per
//!   message, written as CSV or JSON Lines
//! - **Group metadata** - creation facts, events, per-member message counts
//!   and summary statistics, written as YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "yaml-output"))]
//! # fn main() -> chatprep::Result<()> {
//! use chatprep::prelude::*;
//!
//! let config = PrepConfig::new()
//!     .with_sender_map(SenderAliasMap::new().with_alias("buddy", "John Doe"));
//! let report = Preprocessor::new(config).run_path("chat.txt".as_ref())?;
//!
//! write_records(&report.records, "preprocessed_chat.csv", RecordFormat::Csv)?;
//! write_metadata(&report.group_info, "metadata_chat.yaml", MetadataFormat::Yaml)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "yaml-output")))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - Line-level parsing
//!   - [`parsing::date`] - [`DateRecognizer`](parsing::DateRecognizer) and the chrono-based default
//!   - [`parsing::merge`] - [`LogicalLines`](parsing::LogicalLines), legacy delimiter normalization
//!   - [`parsing::record`] - [`RecordParser`](parsing::RecordParser), [`LineOutcome`](parsing::LineOutcome)
//!   - [`parsing::emoji`] - [`extract_emojis`](parsing::extract_emojis)
//! - [`core`] - Models, aggregation, the pipeline and output writers
//! - [`config`] - [`PrepConfig`](config::PrepConfig), [`SenderAliasMap`](config::SenderAliasMap)
//! - [`format`] - [`RecordFormat`](format::RecordFormat), [`MetadataFormat`](format::MetadataFormat)
//! - [`cli`] - CLI arguments (requires `cli` feature)
//! - [`error`] - [`PrepError`], [`Result`]
//! - [`prelude`] - Convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `csv-output` | CSV record writer |
//! | `yaml-output` | YAML metadata writer |
//! | `cli` | Command-line binary (clap, tracing-subscriber) |
//! | `gen-test` | Synthetic export generator binary |
//! | `full` | `csv-output`, `yaml-output` and `cli` (default) |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parsing;

pub use error::{PrepError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatprep::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PrepError, Result};

    pub use crate::config::{PrepConfig, SenderAliasMap};

    pub use crate::core::aggregator::Aggregator;
    pub use crate::core::models::{Event, GroupInfo, LogicalLine, Member, ParsedRecord};
    pub use crate::core::pipeline::{PreprocessReport, Preprocessor};

    pub use crate::parsing::{
        ChronoDateRecognizer, DateRecognizer, LineOutcome, LogicalLines, RecordParser,
        extract_emojis,
    };

    pub use crate::format::{MetadataFormat, RecordFormat, write_metadata, write_records};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "yaml-output")]
    pub use crate::core::output::{to_yaml, write_metadata_yaml};
    pub use crate::core::output::{to_json, to_jsonl, write_jsonl, write_metadata_json};
}
