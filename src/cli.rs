//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`RecordsFormatArg`], [`MetadataFormatArg`] - format options
//! - [`OutputPaths`] - where a run's two output files go

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tempfile::NamedTempFile;

use crate::config::{PrepConfig, SenderAliasMap};
use crate::core::models::{GroupInfo, ParsedRecord};
use crate::error::Result;
use crate::format::{MetadataFormat, RecordFormat, write_metadata, write_records};

/// Preprocess a WhatsApp group chat export into a message table
/// and group metadata.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatprep")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatprep --raw-data-filename chat.txt
    chatprep --raw-data-filename chat.txt --group-name \"Family\"
    chatprep --raw-data-filename chat.txt --sender-name-map '{\"buddy\": \"John Doe\"}'
    chatprep --raw-data-filename chat.txt --records-format jsonl --metadata-format json -o out/")]
pub struct Args {
    /// Path to the exported chat text file
    #[arg(long, value_name = "FILE")]
    pub raw_data_filename: PathBuf,

    /// Group name to use instead of the one found in the export
    #[arg(long, value_name = "NAME")]
    pub group_name: Option<String>,

    /// JSON object mapping raw sender names to canonical names
    #[arg(long, value_name = "JSON")]
    pub sender_name_map: Option<String>,

    /// Directory for output files (default: next to the input)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Records output format
    #[arg(long, value_enum, default_value = "csv")]
    pub records_format: RecordsFormatArg,

    /// Metadata output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub metadata_format: MetadataFormatArg,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Log per-line decisions
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the run configuration from the flags.
    ///
    /// # Errors
    ///
    /// Returns [`PrepError::InvalidSenderMap`](crate::PrepError::InvalidSenderMap)
    /// if `--sender-name-map` is not a JSON object of strings.
    pub fn to_config(&self) -> Result<PrepConfig> {
        let mut config = PrepConfig::new().with_strict(self.strict);
        if let Some(ref name) = self.group_name {
            config = config.with_group_name(name.clone());
        }
        if let Some(ref json) = self.sender_name_map {
            config = config.with_sender_map(SenderAliasMap::from_json(json)?);
        }
        Ok(config)
    }

    /// Resolves the output file paths for this run.
    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths::new(
            &self.raw_data_filename,
            self.output_dir.as_deref(),
            self.records_format.into(),
            self.metadata_format.into(),
        )
    }
}

/// Paths of the records and metadata files of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub records: PathBuf,
    pub metadata: PathBuf,
}

impl OutputPaths {
    /// Names outputs `preprocessed_<stem>.<ext>` and `metadata_<stem>.<ext>`,
    /// placed in `output_dir` or else next to the input.
    ///
    /// ```rust
    /// use std::path::Path;
    /// use chatprep::cli::OutputPaths;
    /// use chatprep::format::{MetadataFormat, RecordFormat};
    ///
    /// let paths = OutputPaths::new(
    ///     Path::new("data/chat.txt"),
    ///     None,
    ///     RecordFormat::Csv,
    ///     MetadataFormat::Yaml,
    /// );
    /// assert_eq!(paths.records, Path::new("data/preprocessed_chat.csv"));
    /// assert_eq!(paths.metadata, Path::new("data/metadata_chat.yaml"));
    /// ```
    pub fn new(
        input: &Path,
        output_dir: Option<&Path>,
        records: RecordFormat,
        metadata: MetadataFormat,
    ) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "chat".to_string());
        let dir = output_dir
            .map(Path::to_path_buf)
            .or_else(|| input.parent().map(Path::to_path_buf))
            .unwrap_or_default();

        Self {
            records: dir.join(format!("preprocessed_{stem}.{}", records.extension())),
            metadata: dir.join(format!("metadata_{stem}.{}", metadata.extension())),
        }
    }

    /// Writes both outputs of a run.
    ///
    /// Each file is first written to a temporary file in its target
    /// directory. Neither path is touched until both have been written, so
    /// a failed serialization never leaves a half-written or mismatched pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either file can't be written or moved into place.
    pub fn write(
        &self,
        records: &[ParsedRecord],
        info: &GroupInfo,
        records_format: RecordFormat,
        metadata_format: MetadataFormat,
    ) -> Result<()> {
        let records_tmp = NamedTempFile::new_in(parent_dir(&self.records))?;
        let metadata_tmp = NamedTempFile::new_in(parent_dir(&self.metadata))?;

        write_records(records, records_tmp.path(), records_format)?;
        write_metadata(info, metadata_tmp.path(), metadata_format)?;

        metadata_tmp.persist(&self.metadata).map_err(|e| e.error)?;
        records_tmp.persist(&self.records).map_err(|e| e.error)?;
        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Records output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum RecordsFormatArg {
    /// Quoted CSV (default)
    #[default]
    Csv,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

/// Metadata output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum MetadataFormatArg {
    /// YAML document (default)
    #[default]
    #[value(alias = "yml")]
    Yaml,

    /// Pretty-printed JSON
    Json,
}

// Conversion to library format types
impl From<RecordsFormatArg> for RecordFormat {
    fn from(format: RecordsFormatArg) -> RecordFormat {
        match format {
            RecordsFormatArg::Csv => RecordFormat::Csv,
            RecordsFormatArg::Jsonl => RecordFormat::Jsonl,
        }
    }
}

impl From<MetadataFormatArg> for MetadataFormat {
    fn from(format: MetadataFormatArg) -> MetadataFormat {
        match format {
            MetadataFormatArg::Yaml => MetadataFormat::Yaml,
            MetadataFormatArg::Json => MetadataFormat::Json,
        }
    }
}
