//! Note collection and its persistence.

use crate::error::Result;
use crate::models::{Note, NoteId};
use crate::slot::Slot;

/// The note collection plus the slot it mirrors itself to.
///
/// The store owns both. Every effective mutation re-serializes the whole
/// collection into the slot before returning; reads never touch the slot.
pub struct NoteStore {
    notes: Vec<Note>,
    slot: Box<dyn Slot>,
    last_id: i64,
}

impl NoteStore {
    /// Load the collection from the slot.
    ///
    /// An absent payload yields an empty collection. So does a malformed
    /// one: the parse failure is logged and otherwise swallowed, it never
    /// reaches the caller.
    #[must_use]
    pub fn load(slot: Box<dyn Slot>) -> Self {
        let notes = match slot.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Note>>(&payload) {
                Ok(notes) => notes,
                Err(e) => {
                    tracing::warn!("Discarding malformed note data: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read stored notes: {e}");
                Vec::new()
            }
        };
        // Seed the id guard from the largest persisted id so a restart
        // cannot hand out an id that is already taken.
        let last_id = notes
            .iter()
            .map(|note| note.id.as_millis())
            .max()
            .unwrap_or(0);

        Self {
            notes,
            slot,
            last_id,
        }
    }

    /// All notes in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Look up a note by id.
    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a new note and persist. Returns the allocated id.
    pub fn add(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<NoteId> {
        let id = self.next_id();
        self.notes.push(Note::new(id, title, content));
        self.persist()?;
        Ok(id)
    }

    /// Replace the title/content of the note with `id`, keeping its position.
    ///
    /// Returns `false` without touching the slot when the id is unknown.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return Ok(false);
        };
        note.title = title.into();
        note.content = content.into();
        self.persist()?;
        Ok(true)
    }

    /// Remove the note with `id`. Returns `false` when the id is unknown.
    pub fn delete(&mut self, id: NoteId) -> Result<bool> {
        let len_before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == len_before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Next creation-time id, nudged forward when the clock has not moved
    /// since the previous allocation.
    fn next_id(&mut self) -> NoteId {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        NoteId::from_millis(self.last_id)
    }

    fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.notes)?;
        self.slot.write(&payload)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::slot::MemorySlot;

    fn store() -> (NoteStore, MemorySlot) {
        let slot = MemorySlot::new();
        (NoteStore::load(Box::new(slot.clone())), slot)
    }

    #[test]
    fn add_appends_and_note_is_retrievable_by_id() {
        let (mut store, _slot) = store();
        let id = store.add("A", "1").unwrap();

        assert_eq!(store.len(), 1);
        let note = store.get(id).unwrap();
        assert_eq!(note.title, "A");
        assert_eq!(note.content, "1");
    }

    #[test]
    fn notes_keep_insertion_order() {
        let (mut store, _slot) = store();
        store.add("A", "1").unwrap();
        store.add("B", "2").unwrap();

        let titles: Vec<&str> = store.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        let contents: Vec<&str> = store.notes().iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["1", "2"]);
    }

    #[test]
    fn ids_strictly_increase_across_rapid_adds() {
        let (mut store, _slot) = store();
        let a = store.add("A", "1").unwrap();
        let b = store.add("B", "2").unwrap();
        let c = store.add("C", "3").unwrap();

        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn update_changes_text_but_not_position_or_id() {
        let (mut store, _slot) = store();
        let first = store.add("A", "1").unwrap();
        let second = store.add("B", "2").unwrap();

        assert!(store.update(first, "A2", "1b").unwrap());

        assert_eq!(store.len(), 2);
        assert_eq!(store.notes()[0], Note::new(first, "A2", "1b"));
        assert_eq!(store.notes()[1], Note::new(second, "B", "2"));
    }

    #[test]
    fn update_unknown_id_leaves_collection_and_slot_alone() {
        let (mut store, slot) = store();
        store.add("A", "1").unwrap();
        let written = slot.payload();

        assert!(!store.update(NoteId::from_millis(1), "X", "Y").unwrap());

        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title, "A");
        assert_eq!(slot.payload(), written);
    }

    #[test]
    fn delete_removes_exactly_one_note() {
        let (mut store, _slot) = store();
        let first = store.add("A", "1").unwrap();
        store.add("B", "2").unwrap();

        assert!(store.delete(first).unwrap());

        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title, "B");
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let (mut store, _slot) = store();
        store.add("A", "1").unwrap();

        assert!(!store.delete(NoteId::from_millis(1)).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn mutations_mirror_to_the_slot() {
        let (mut store, slot) = store();
        let id = store.add("A", "1").unwrap();

        let payload = slot.payload().unwrap();
        let stored: Vec<Note> = serde_json::from_str(&payload).unwrap();
        assert_eq!(stored, vec![Note::new(id, "A", "1")]);
    }

    #[test]
    fn reloading_from_the_slot_round_trips_the_collection() {
        let (mut store, slot) = store();
        store.add("A", "1").unwrap();
        store.add("B", "line 1\nline 2").unwrap();

        let reloaded = NoteStore::load(Box::new(slot));
        assert_eq!(reloaded.notes(), store.notes());
    }

    #[test]
    fn malformed_payload_loads_as_empty_without_panicking() {
        let slot = MemorySlot::seeded("definitely not json");
        let store = NoteStore::load(Box::new(slot));
        assert!(store.is_empty());
    }

    #[test]
    fn load_seeds_id_guard_from_persisted_ids() {
        let far_future = i64::MAX - 1;
        let payload = format!(r#"[{{"id":{far_future},"title":"A","content":"1"}}]"#);
        let mut store = NoteStore::load(Box::new(MemorySlot::seeded(payload)));

        let id = store.add("B", "2").unwrap();
        assert!(id.as_millis() > far_future);
    }
}
