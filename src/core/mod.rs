//! Core processing logic for chatprep.
//!
//! This module contains:
//! - [`models`] - Line, record and metadata types
//! - [`aggregator`] - Folding parsed lines into group metadata
//! - [`pipeline`] - The end-to-end preprocessing run
//! - [`output`] - Record and metadata writers
//!
//! # Quick Start
//!
//! ```rust
//! use chatprep::core::{PrepConfig, Preprocessor};
//!
//! let report = Preprocessor::new(PrepConfig::new())
//!     .run_str("1/6/20, 11:26 AM - Jane: How is everyone today?\n")?;
//! assert_eq!(report.group_info.members[0].name, "Jane");
//! # Ok::<(), chatprep::PrepError>(())
//! ```

pub mod aggregator;
pub mod models;
pub mod output;
pub mod pipeline;

pub use aggregator::{Aggregator, GROUP_NAME_UNKNOWN};
pub use models::{Event, GroupInfo, LogicalLine, Member, ParsedRecord, RawLine};
pub use pipeline::{PreprocessReport, Preprocessor, SkippedLine};

pub use crate::config::PrepConfig;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "yaml-output")]
pub use output::{to_yaml, write_metadata_yaml};
pub use output::{to_json, to_jsonl, write_jsonl, write_metadata_json};
