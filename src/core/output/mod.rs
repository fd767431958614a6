//! Output writers.
//!
//! Records:
//! - [`write_csv`] / [`to_csv`] - quoted CSV, the format downstream analysis expects - requires `csv-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line
//!
//! Group metadata:
//! - [`write_metadata_yaml`] / [`to_yaml`] - YAML document - requires `yaml-output` feature
//! - [`write_metadata_json`] / [`to_json`] - pretty JSON
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "yaml-output"))]
//! # fn main() -> chatprep::Result<()> {
//! use chatprep::config::PrepConfig;
//! use chatprep::core::output::{write_csv, write_metadata_yaml};
//! use chatprep::core::pipeline::Preprocessor;
//!
//! let report = Preprocessor::new(PrepConfig::new()).run_path("chat.txt".as_ref())?;
//! write_csv(&report.records, "preprocessed_chat.csv")?;
//! write_metadata_yaml(&report.group_info, "metadata_chat.yaml")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "yaml-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod jsonl_writer;
mod metadata_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
pub use jsonl_writer::{to_jsonl, write_jsonl};
#[cfg(feature = "yaml-output")]
pub use metadata_writer::{to_yaml, write_metadata_yaml};
pub use metadata_writer::{to_json, write_metadata_json};
