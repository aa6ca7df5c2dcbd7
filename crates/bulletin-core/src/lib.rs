//! bulletin-core - Core library for Bulletin
//!
//! Models, persistence, and the editor state machine behind the Bulletin
//! desktop app. Everything here is synchronous and UI-agnostic.

pub mod editor;
pub mod error;
pub mod models;
pub mod slot;
pub mod store;

pub use editor::{EditorMode, EditorState, Submit};
pub use error::{Error, Result};
pub use models::{Note, NoteId};
pub use slot::{FileSlot, MemorySlot, Slot};
pub use store::NoteStore;
