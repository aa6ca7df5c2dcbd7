//! Note list component

use dioxus::prelude::*;

use super::NoteCard;
use crate::state::AppState;
use crate::theme;

/// List of notes in insertion order
#[component]
pub fn NoteList() -> Element {
    let mut state = use_context::<AppState>();
    let colors = theme::palette();
    let notes = state.store.read().notes().to_vec();

    rsx! {
        div {
            class: "note-list",

            if notes.is_empty() {
                div {
                    style: "
                        padding: 20px;
                        text-align: center;
                        color: {colors.text_secondary};
                    ",
                    "No notes yet"
                }
            } else {
                ul {
                    style: "
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                    ",

                    for note in notes {
                        {
                            let note_id = note.id;
                            rsx! {
                                NoteCard {
                                    key: "{note_id}",
                                    note,
                                    onedit: move |_| state.edit_note(note_id),
                                    ondelete: move |_| state.delete_note(note_id),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
