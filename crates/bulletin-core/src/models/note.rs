//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a note, derived from its creation time (Unix ms)
///
/// Ids are allocated by [`crate::store::NoteStore`], which nudges the clock
/// value forward when two notes are created within the same millisecond, so
/// ids are strictly increasing within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(i64);

impl NoteId {
    /// Create an id from a Unix-millisecond timestamp value
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// The raw millisecond value of this id
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A news note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Headline text
    pub title: String,
    /// Body text
    pub content: String,
}

impl Note {
    /// Create a note with the given id and text
    #[must_use]
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}
