//! The persisted slot holding the serialized note collection.
//!
//! A [`Slot`] is a single named location that stores one string payload
//! between sessions. [`FileSlot`] backs it with a JSON file on disk;
//! [`MemorySlot`] keeps the payload in memory for testing logic without
//! filesystem I/O.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::Result;

/// A single durable location for the serialized collection.
pub trait Slot {
    /// Read the stored payload, or `None` if nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored payload.
    fn write(&mut self, payload: &str) -> Result<()>;
}

/// File-backed slot: one JSON file on disk.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this slot reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory slot. Clones share contents, so a test can hand one handle to
/// a store and observe through another what the store wrote.
#[derive(Clone, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds the given payload.
    #[must_use]
    pub fn seeded(payload: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }

    /// The current payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.value.lock().expect("slot lock poisoned").clone()
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.payload())
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        *self.value.lock().expect("slot lock poisoned") = Some(payload.to_string());
        Ok(())
    }
}
