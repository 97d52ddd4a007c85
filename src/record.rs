//! The persisted save envelope and the outcome of reading one back.

use serde::{Deserialize, Serialize};

use crate::sanitizer::SafeId;

/// A single saved game, as written to disk and returned by `/api/load`.
///
/// `data` is opaque to the server; the game client decides its format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub id: String,
    pub data: String,
}

impl SaveRecord {
    pub fn new(id: &SafeId, data: impl Into<String>) -> Self {
        Self {
            id: id.as_str().to_string(),
            data: data.into(),
        }
    }

    /// Serialize to the on-disk form: two-space indented JSON.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse the on-disk form.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// Result of looking up a save by identifier.
///
/// A missing save is an expected state, not an error. I/O failures while
/// reading are reported separately through [`GameSaverError`](crate::GameSaverError).
#[derive(Debug)]
pub enum LoadOutcome {
    /// Nothing has been saved under this identifier.
    Missing,
    /// A well-formed record was found.
    Found(SaveRecord),
    /// A file exists but its content is not a valid envelope.
    Corrupt(serde_json::Error),
}
