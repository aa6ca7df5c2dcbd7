//! Note form component

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme;

/// Form for drafting a new note or saving the one being edited
#[component]
pub fn NoteForm() -> Element {
    let mut state = use_context::<AppState>();
    let colors = theme::palette();

    let title = state.editor.read().title.clone();
    let content = state.editor.read().content.clone();
    let label = submit_label(state.editor.read().is_editing());

    rsx! {
        div {
            class: "note-form",
            style: "
                background: {colors.bg_card};
                padding: 16px;
                border-radius: 8px;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
            ",

            input {
                r#type: "text",
                value: "{title}",
                placeholder: "Title",
                style: "
                    width: 100%;
                    padding: 8px;
                    margin-bottom: 8px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    box-sizing: border-box;
                    outline: none;
                ",
                oninput: move |evt| state.editor.write().title = evt.value(),
            }

            textarea {
                value: "{content}",
                placeholder: "Content",
                rows: "4",
                style: "
                    width: 100%;
                    padding: 8px;
                    margin-bottom: 8px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    font-family: inherit;
                    resize: vertical;
                    box-sizing: border-box;
                    outline: none;
                ",
                oninput: move |evt| state.editor.write().content = evt.value(),
            }

            button {
                style: "
                    width: 100%;
                    padding: 8px;
                    border: none;
                    border-radius: 6px;
                    background: {colors.accent};
                    color: {colors.text_on_accent};
                    font-size: 14px;
                    cursor: pointer;
                ",
                onclick: move |_| state.submit(),
                "{label}"
            }
        }
    }
}

/// Button label for the current mode
fn submit_label(editing: bool) -> &'static str {
    if editing {
        "Save"
    } else {
        "Add"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_label_reflects_mode() {
        assert_eq!(submit_label(false), "Add");
        assert_eq!(submit_label(true), "Save");
    }
}
