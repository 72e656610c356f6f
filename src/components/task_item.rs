use dioxus::events::FocusEvent;
use dioxus::prelude::*;

use crate::models::Todo;

/// Presentational task row. All state lives in the owning list card;
/// this component only renders props and raises events.
#[component]
pub fn TaskItem(
    todo: Todo,
    is_editing: bool,
    editing_text: String,
    is_updating: bool,
    on_toggle: EventHandler<MouseEvent>,
    on_start_edit: EventHandler<MouseEvent>,
    on_edit_input: EventHandler<FormEvent>,
    on_commit: EventHandler<FocusEvent>,
    on_commit_key: EventHandler<KeyboardEvent>,
    on_remove: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: if todo.is_done { "task done" } else { "task" },
            span {
                class: if todo.is_done { "task-check done" } else { "task-check" },
                onclick: move |e| on_toggle.call(e),
            }
            div { class: "task-content",
                if !is_editing {
                    span {
                        class: if todo.is_done { "task-text done" } else { "task-text" },
                        onclick: move |e| on_start_edit.call(e),
                        "{todo.description}"
                    }
                } else {
                    input {
                        class: "task-edit",
                        r#type: "text",
                        value: "{editing_text}",
                        autofocus: "true",
                        oninput: move |e| on_edit_input.call(e),
                        onblur: move |e| on_commit.call(e),
                        onkeydown: move |e| on_commit_key.call(e),
                    }
                }
            }
            if is_updating {
                span { class: "spinner small" }
            }
            button { class: "btn btn-danger btn-icon", onclick: move |e| on_remove.call(e), "×" }
        }
    }
}
