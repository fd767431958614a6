//! Output format types for the chatprep library.
//!
//! Two independent choices are made per run: how the message records are
//! written ([`RecordFormat`]) and how the group metadata is written
//! ([`MetadataFormat`]). Neither type depends on the CLI framework.
//!
//! # Example
//!
//! ```rust
//! use chatprep::format::{MetadataFormat, RecordFormat};
//!
//! let records: RecordFormat = "jsonl".parse().unwrap();
//! assert_eq!(records.extension(), "jsonl");
//! assert_eq!(MetadataFormat::default().extension(), "yaml");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::{GroupInfo, ParsedRecord};
use crate::core::output;
use crate::error::{PrepError, Result};

/// Format of the preprocessed records file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum RecordFormat {
    /// Quoted CSV with a `date,timestamp,sender,message,emojis` header
    #[default]
    Csv,

    /// JSON Lines, one record per line
    Jsonl,
}

impl RecordFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            RecordFormat::Csv => "csv",
            RecordFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "jsonl", "ndjson"]
    }
}

impl std::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFormat::Csv => write!(f, "CSV"),
            RecordFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for RecordFormat {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(RecordFormat::Csv),
            "jsonl" | "ndjson" => Ok(RecordFormat::Jsonl),
            _ => Err(PrepError::invalid_format(
                "records",
                format!(
                    "Unknown format: '{}'. Expected one of: {}",
                    s,
                    RecordFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Format of the group metadata file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum MetadataFormat {
    /// YAML document
    #[default]
    Yaml,

    /// Pretty-printed JSON object
    Json,
}

impl MetadataFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            MetadataFormat::Yaml => "yaml",
            MetadataFormat::Json => "json",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["yaml", "yml", "json"]
    }
}

impl std::fmt::Display for MetadataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetadataFormat::Yaml => write!(f, "YAML"),
            MetadataFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for MetadataFormat {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(MetadataFormat::Yaml),
            "json" => Ok(MetadataFormat::Json),
            _ => Err(PrepError::invalid_format(
                "metadata",
                format!(
                    "Unknown format: '{}'. Expected one of: {}",
                    s,
                    MetadataFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Writes records to a file in the given format.
///
/// # Errors
///
/// Returns [`PrepError::InvalidFormat`] if the format's feature is disabled.
pub fn write_records(
    records: &[ParsedRecord],
    path: impl AsRef<Path>,
    format: RecordFormat,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        RecordFormat::Csv => output::write_csv(records, path),
        #[cfg(not(feature = "csv-output"))]
        RecordFormat::Csv => Err(PrepError::invalid_format(
            "records",
            "CSV output requires the 'csv-output' feature",
        )),
        RecordFormat::Jsonl => output::write_jsonl(records, path),
    }
}

/// Writes group metadata to a file in the given format.
///
/// # Errors
///
/// Returns [`PrepError::InvalidFormat`] if the format's feature is disabled.
pub fn write_metadata(
    info: &GroupInfo,
    path: impl AsRef<Path>,
    format: MetadataFormat,
) -> Result<()> {
    match format {
        #[cfg(feature = "yaml-output")]
        MetadataFormat::Yaml => output::write_metadata_yaml(info, path),
        #[cfg(not(feature = "yaml-output"))]
        MetadataFormat::Yaml => Err(PrepError::invalid_format(
            "metadata",
            "YAML output requires the 'yaml-output' feature",
        )),
        MetadataFormat::Json => output::write_metadata_json(info, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_format_from_str() {
        assert_eq!("csv".parse::<RecordFormat>().unwrap(), RecordFormat::Csv);
        assert_eq!("JSONL".parse::<RecordFormat>().unwrap(), RecordFormat::Jsonl);
        assert_eq!("ndjson".parse::<RecordFormat>().unwrap(), RecordFormat::Jsonl);

        let err = "xml".parse::<RecordFormat>().unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_metadata_format_from_str() {
        assert_eq!("yml".parse::<MetadataFormat>().unwrap(), MetadataFormat::Yaml);
        assert_eq!("json".parse::<MetadataFormat>().unwrap(), MetadataFormat::Json);
        assert!("toml".parse::<MetadataFormat>().is_err());
    }

    #[test]
    fn test_extensions_and_display() {
        assert_eq!(RecordFormat::Csv.extension(), "csv");
        assert_eq!(RecordFormat::Jsonl.to_string(), "JSONL");
        assert_eq!(MetadataFormat::Json.extension(), "json");
        assert_eq!(MetadataFormat::Yaml.to_string(), "YAML");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&RecordFormat::Jsonl).unwrap(), "\"jsonl\"");
        let parsed: MetadataFormat = serde_json::from_str("\"yaml\"").unwrap();
        assert_eq!(parsed, MetadataFormat::Yaml);
    }

    #[test]
    fn test_write_records_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let records = vec![ParsedRecord {
            date: "1/6/20".into(),
            timestamp: "1/6/20 11:26 AM".into(),
            sender: "Jane".into(),
            message: "hi".into(),
            emojis: vec![],
        }];
        write_records(&records, &path, RecordFormat::Jsonl).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 1);
    }
}
