//! Home view - the single application screen

use dioxus::prelude::*;

use crate::components::{NoteForm, NoteList};

/// Home view component composing the heading, form, and list
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "
                max-width: 640px;
                margin: 0 auto;
                padding: 24px;
                display: flex;
                flex-direction: column;
                gap: 24px;
            ",

            h1 {
                style: "margin: 0; font-size: 24px; text-align: center;",
                "Bulletin"
            }

            NoteForm {}
            NoteList {}
        }
    }
}
