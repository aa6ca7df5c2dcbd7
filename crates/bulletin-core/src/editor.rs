//! Create/edit state machine backing the note form.

use crate::error::Result;
use crate::models::{Note, NoteId};
use crate::store::NoteStore;

/// Which mode the form is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Submitting appends a new note
    #[default]
    Creating,
    /// Submitting saves over the note with this id
    Editing(NoteId),
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    /// A new note was appended
    Added(NoteId),
    /// The note being edited was saved
    Updated(NoteId),
    /// A draft was empty or whitespace-only; nothing changed
    Rejected,
}

/// Transient draft text plus the current [`EditorMode`]. Never persisted.
///
/// Drafts are stored exactly as typed; only the submit guard trims.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Draft headline text
    pub title: String,
    /// Draft body text
    pub content: String,
    mode: EditorMode,
}

impl EditorState {
    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing(_))
    }

    /// Load a note's text into the drafts and switch to editing it.
    ///
    /// Selecting edit while already editing another note simply overwrites
    /// the drafts and mode.
    pub fn begin_edit(&mut self, note: &Note) {
        self.title = note.title.clone();
        self.content = note.content.clone();
        self.mode = EditorMode::Editing(note.id);
    }

    /// Apply the drafts to the store.
    ///
    /// A whitespace-only draft rejects the submit with no state change. A
    /// successful submit clears the drafts and returns the editor to
    /// [`EditorMode::Creating`].
    pub fn submit(&mut self, store: &mut NoteStore) -> Result<Submit> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Ok(Submit::Rejected);
        }

        let outcome = match self.mode {
            EditorMode::Editing(id) => {
                store.update(id, self.title.as_str(), self.content.as_str())?;
                Submit::Updated(id)
            }
            EditorMode::Creating => {
                Submit::Added(store.add(self.title.as_str(), self.content.as_str())?)
            }
        };

        self.title.clear();
        self.content.clear();
        self.mode = EditorMode::Creating;
        Ok(outcome)
    }
}
