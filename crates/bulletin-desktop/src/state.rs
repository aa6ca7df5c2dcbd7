//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use bulletin_core::{EditorState, NoteId, NoteStore, Submit};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// The note collection and its persistence
    pub store: Signal<NoteStore>,
    /// Draft text and create/edit mode for the form
    pub editor: Signal<EditorState>,
}

impl AppState {
    /// Load a note's text into the form and switch it to edit mode.
    pub fn edit_note(&mut self, id: NoteId) {
        let store = self.store.read();
        if let Some(note) = store.get(id) {
            self.editor.write().begin_edit(note);
        }
    }

    /// Submit the form: add a new note or save the one being edited.
    ///
    /// A rejected submit leaves the drafts alone; persistence failures are
    /// logged and the in-memory state stays authoritative.
    pub fn submit(&mut self) {
        let mut store = self.store.write();
        let mut editor = self.editor.write();
        match editor.submit(&mut store) {
            Ok(Submit::Added(id)) => tracing::info!("Added note {id}"),
            Ok(Submit::Updated(id)) => tracing::info!("Saved note {id}"),
            Ok(Submit::Rejected) => tracing::debug!("Ignored submit with blank title or content"),
            Err(e) => tracing::error!("Failed to persist notes: {e}"),
        }
    }

    /// Delete a note from the collection.
    pub fn delete_note(&mut self, id: NoteId) {
        match self.store.write().delete(id) {
            Ok(true) => tracing::info!("Deleted note {id}"),
            Ok(false) => tracing::debug!("Delete for unknown note {id}"),
            Err(e) => tracing::error!("Failed to persist notes: {e}"),
        }
    }
}
