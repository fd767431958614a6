//! Configuration types for a preprocessing run.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatprep::config::{PrepConfig, SenderAliasMap};
//!
//! let aliases = SenderAliasMap::from_json(r#"{"buddy": "John Doe"}"#).unwrap();
//! let config = PrepConfig::new()
//!     .with_group_name("Friends for life")
//!     .with_sender_map(aliases)
//!     .with_strict(true);
//!
//! assert_eq!(config.sender_map.canonicalize("buddy"), "John Doe");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};

/// Mapping from raw sender names to canonical sender names.
///
/// Useful for anonymizing exports or for collapsing phonebook nicknames into
/// one name. Lookup is a single step: the map is not applied iteratively, so
/// canonicalizing a canonical name again yields the same name as long as the
/// canonical name is not itself a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenderAliasMap(HashMap<String, String>);

impl SenderAliasMap {
    /// Creates an empty map (every name is its own canonical name).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object such as `{"buddy": "John Doe", "whothis": "Jane Doe"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(PrepError::InvalidSenderMap)
    }

    /// Adds or replaces an alias.
    pub fn insert(&mut self, raw: impl Into<String>, canonical: impl Into<String>) {
        self.0.insert(raw.into(), canonical.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with_alias(mut self, raw: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.insert(raw, canonical);
        self
    }

    /// Returns the canonical name for `raw`, or `raw` itself when unmapped.
    pub fn canonicalize<'a>(&'a self, raw: &'a str) -> &'a str {
        self.0.get(raw).map_or(raw, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SenderAliasMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(raw, canonical)| (raw.into(), canonical.into()))
                .collect(),
        )
    }
}

/// Configuration for a preprocessing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// Group name that overrides whatever the export's header says (default: none)
    pub group_name: Option<String>,

    /// Sender aliases applied before counting (default: empty)
    pub sender_map: SenderAliasMap,

    /// Abort on the first malformed line instead of skipping it (default: false)
    pub strict: bool,

    /// Buffer size for reading the export (default: 64KB)
    pub buffer_size: usize,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            group_name: None,
            sender_map: SenderAliasMap::default(),
            strict: false,
            buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl PrepConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the group name override.
    #[must_use]
    pub fn with_group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = Some(name.into());
        self
    }

    /// Sets the sender alias map.
    #[must_use]
    pub fn with_sender_map(mut self, map: SenderAliasMap) -> Self {
        self.sender_map = map;
        self
    }

    /// Sets whether malformed lines abort the run.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the read buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrepConfig::default();
        assert!(config.group_name.is_none());
        assert!(config.sender_map.is_empty());
        assert!(!config.strict);
        assert_eq!(config.buffer_size, 64 * 1024);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PrepConfig::new()
            .with_group_name("Book club")
            .with_strict(true)
            .with_buffer_size(1024);
        assert_eq!(config.group_name.as_deref(), Some("Book club"));
        assert!(config.strict);
        assert_eq!(config.buffer_size, 1024);
    }

    #[test]
    fn test_alias_map_from_json() {
        let map = SenderAliasMap::from_json(r#"{"buddy": "John Doe", "whothis": "Jane Doe"}"#)
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.canonicalize("buddy"), "John Doe");
        assert_eq!(map.canonicalize("whothis"), "Jane Doe");
        assert_eq!(map.canonicalize("Bob"), "Bob");
    }

    #[test]
    fn test_alias_map_invalid_json() {
        let err = SenderAliasMap::from_json("not json").unwrap_err();
        assert!(err.is_invalid_sender_map());

        let err = SenderAliasMap::from_json(r#"{"buddy": 3}"#).unwrap_err();
        assert!(err.is_invalid_sender_map());
    }

    #[test]
    fn test_alias_is_single_step() {
        let map: SenderAliasMap = [("buddy", "John Doe")].into_iter().collect();
        let once = map.canonicalize("buddy");
        assert_eq!(map.canonicalize(once), once);
    }

    #[test]
    fn test_config_serde_roundtrip_defaults() {
        let config: PrepConfig = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(config.strict);
        assert_eq!(config.buffer_size, 64 * 1024);
        assert!(config.sender_map.is_empty());
    }
}
