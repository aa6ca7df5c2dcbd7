//! Main application component

use dioxus::prelude::*;

use bulletin_core::{EditorState, FileSlot, NoteStore};

use crate::paths::slot_path;
use crate::state::AppState;
use crate::theme;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let store = use_signal(|| {
        let store = NoteStore::load(Box::new(FileSlot::new(slot_path())));
        tracing::info!("Loaded {} notes from the slot", store.len());
        store
    });
    let editor = use_signal(EditorState::default);

    use_context_provider(|| AppState { store, editor });

    let colors = theme::palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_page};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
