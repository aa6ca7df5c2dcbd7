//! Note card component

use dioxus::prelude::*;

use bulletin_core::Note;

use crate::theme;

/// A single note rendered in the list, with its edit/delete controls.
#[component]
pub fn NoteCard(
    note: Note,
    onedit: EventHandler<MouseEvent>,
    ondelete: EventHandler<MouseEvent>,
) -> Element {
    let colors = theme::palette();

    rsx! {
        li {
            class: "note-card",
            style: "
                background: {colors.bg_card};
                padding: 16px;
                border-radius: 8px;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                list-style: none;
            ",

            h2 {
                style: "
                    margin: 0 0 4px 0;
                    font-size: 16px;
                    font-weight: 700;
                    color: {colors.text_primary};
                ",
                "{note.title}"
            }

            p {
                style: "
                    margin: 0;
                    color: {colors.text_secondary};
                    white-space: pre-wrap;
                ",
                "{note.content}"
            }

            div {
                style: "margin-top: 8px; display: flex; gap: 8px;",

                button {
                    style: "
                        padding: 4px 12px;
                        border: none;
                        border-radius: 6px;
                        background: {colors.edit};
                        color: {colors.text_on_accent};
                        cursor: pointer;
                    ",
                    onclick: move |evt| onedit.call(evt),
                    "Edit"
                }

                button {
                    style: "
                        padding: 4px 12px;
                        border: none;
                        border-radius: 6px;
                        background: {colors.delete};
                        color: {colors.text_on_accent};
                        cursor: pointer;
                    ",
                    onclick: move |evt| ondelete.call(evt),
                    "Delete"
                }
            }
        }
    }
}
