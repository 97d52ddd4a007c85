//! Identifier sanitization.
//!
//! Every caller-supplied save identifier passes through [`SafeId::parse`]
//! before it is used to build a storage key. Only the final path segment
//! survives, so an identifier can never address a file outside the saves
//! directory.

use std::fmt;

/// A save identifier reduced to a single, traversal-free path segment.
///
/// # Example
///
/// ```
/// use game_saver::SafeId;
///
/// let id = SafeId::parse("../../etc/passwd").unwrap();
/// assert_eq!(id.as_str(), "passwd");
///
/// assert!(SafeId::parse("..").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeId(String);

impl SafeId {
    /// Reduce `raw` to its final path segment.
    ///
    /// Both `/` and `\` are treated as separators and trailing separators
    /// are ignored. Returns `None` when nothing usable remains: an empty
    /// segment, `.`, `..`, or a segment containing a NUL byte.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_end_matches(is_separator);
        let segment = trimmed.rsplit(is_separator).next().unwrap_or_default();

        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\0') {
            return None;
        }

        Some(Self(segment.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn is_separator(ch: char) -> bool {
    ch == '/' || ch == '\\'
}

impl AsRef<str> for SafeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
