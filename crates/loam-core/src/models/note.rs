//! Note model

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for a note.
///
/// IDs are assigned by the backend and are opaque to the client; Loam never
/// mints or mutates one locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap a backend-assigned identifier
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NoteId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// A note as held by the backend.
///
/// The core only keeps transient copies: every view of a note is a snapshot
/// refreshed by re-fetching after each mutating action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Backend-assigned identifier
    pub id: NoteId,
    /// Note title
    pub title: String,
    /// Markdown content, possibly with embedded data-URI images
    pub content: String,
    /// Ordered tags
    pub tags: Vec<String>,
}

impl Note {
    /// Join tags into the comma-separated form shown in the compose form
    #[must_use]
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }
}

/// Parse the raw comma-separated tags field into a tag list.
///
/// Tags are trimmed and empty entries are dropped, so `"a, ,b,"` yields
/// `["a", "b"]`.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}
