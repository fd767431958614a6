//! Unified error types for chatprep.
//!
//! This module provides a single [`PrepError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - Conditions the export format makes routine (lines without a date, lines
//!   without a sender) are never errors; they are continuations and events.
//! - Malformed lines are recoverable per line and only surface as
//!   [`PrepError::MalformedLine`] in strict mode.
//! - I/O and serialization failures carry their source error.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatprep operations.
///
/// # Example
///
/// ```rust
/// use chatprep::error::Result;
/// use chatprep::core::models::ParsedRecord;
///
/// fn my_function() -> Result<Vec<ParsedRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, PrepError>;

/// The error type for all chatprep operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrepError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input export doesn't exist or isn't valid UTF-8
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A logical line has fewer tokens than a message line can have.
    ///
    /// Only returned when the run is configured as strict; otherwise the line
    /// is skipped and reported in the run report.
    #[error("Malformed line {ordinal}: {tokens} tokens (minimum: {expected}): \"{line}\"")]
    MalformedLine {
        /// Zero-based ordinal of the first physical line of the logical line
        ordinal: usize,
        /// The logical line text
        line: String,
        /// Number of whitespace-separated tokens found
        tokens: usize,
        /// Minimum number of tokens expected
        expected: usize,
    },

    /// The sender alias map could not be parsed.
    ///
    /// The map is expected to be a JSON object of string to string, e.g.
    /// `{"buddy": "John Doe"}`.
    #[error("Invalid sender name map: {0}")]
    InvalidSenderMap(#[source] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// YAML serialization error.
    #[cfg(feature = "yaml-output")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An output format name was not recognized.
    #[error("Invalid {kind} format: {message}")]
    InvalidFormat {
        /// Which kind of output the format was meant for ("records", "metadata")
        kind: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl PrepError {
    /// Creates a malformed line error.
    pub fn malformed_line(
        ordinal: usize,
        line: impl Into<String>,
        tokens: usize,
        expected: usize,
    ) -> Self {
        PrepError::MalformedLine {
            ordinal,
            line: line.into(),
            tokens,
            expected,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(kind: &'static str, message: impl Into<String>) -> Self {
        PrepError::InvalidFormat {
            kind,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, PrepError::Io(_))
    }

    /// Returns `true` if this is a malformed line error.
    pub fn is_malformed_line(&self) -> bool {
        matches!(self, PrepError::MalformedLine { .. })
    }

    /// Returns `true` if this is an invalid sender map error.
    pub fn is_invalid_sender_map(&self) -> bool {
        matches!(self, PrepError::InvalidSenderMap(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
