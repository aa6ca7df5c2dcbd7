//! Data models for Bulletin

mod note;

pub use note::{Note, NoteId};
