use dioxus::events::{FocusEvent, Key};
use dioxus::prelude::*;
use tracing::error;

use crate::api::ApiClient;
use crate::components::{add_form::AddForm, task_item::TaskItem};
use crate::models::{Todo, TodoList, UpdateTodo};
use crate::state::{merge_by_id, remove_by_id};

/// One todo list rendered as a card: editable title, its tasks, and an
/// add-task row. The card owns its task collection and performs task
/// mutations itself; list rename/delete bubble up through
/// `on_rename`/`on_delete` so the parent can keep its collection current.
///
/// A failed call leaves the collection untouched; the error only goes to
/// the log.
#[component]
pub fn ListCard(
    list: TodoList,
    on_rename: EventHandler<String>,
    on_delete: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let list_id = list.id;

    let mut tasks = use_signal(Vec::<Todo>::new);
    let mut loading = use_signal(|| true);
    // Id of the row with a request in flight, so only that row shows the
    // updating indicator.
    let mut updating = use_signal(|| Option::<u64>::None);
    let mut new_task = use_signal(String::new);
    let mut editing_title = use_signal(|| false);
    let mut edited_title = use_signal(String::new);
    let mut editing_task = use_signal(|| Option::<u64>::None);
    let mut editing_text = use_signal(String::new);

    // One-time task fetch after first render.
    let api_load = api.clone();
    use_effect(move || {
        let api = api_load.clone();
        spawn(async move {
            match api.list_todos(Some(list_id)).await {
                Ok(fetched) => tasks.set(fetched),
                Err(e) => error!(list_id, "failed to load tasks: {e}"),
            }
            loading.set(false);
        });
    });

    let api_add = api.clone();
    let add_task = move || {
        let description = new_task.read().trim().to_string();
        if description.is_empty() {
            return;
        }
        let api = api_add.clone();
        spawn(async move {
            match api.create_todo(list_id, &description).await {
                Ok(created) => {
                    tasks.write().push(created);
                    new_task.set(String::new());
                }
                Err(e) => error!(list_id, "failed to create task: {e}"),
            }
        });
    };
    let add_task_on_key = add_task.clone();
    let add_task_on_click = add_task;

    // The title commits on blur or Enter, only when the trimmed name
    // changed and is non-empty.
    let current_name = list.name.clone();
    let commit_title = move || {
        editing_title.set(false);
        let name = edited_title.read().trim().to_string();
        if !name.is_empty() && name != current_name {
            on_rename.call(name);
        }
    };
    let mut commit_title_on_blur = commit_title.clone();
    let mut commit_title_on_key = commit_title;

    let display_name = if list.name.is_empty() {
        "Untitled List".to_string()
    } else {
        list.name.clone()
    };
    let name_for_edit = list.name.clone();

    let visible: Vec<Todo> = tasks.read().iter().cloned().collect();

    let render_task = |task: Todo| -> Element {
        let task_id = task.id;
        let currently_done = task.is_done;
        let current_description = task.description.clone();
        let edit_seed = task.description.clone();

        let api_toggle = api.clone();
        let on_toggle = move |_: MouseEvent| {
            let api = api_toggle.clone();
            updating.set(Some(task_id));
            spawn(async move {
                let patch = UpdateTodo {
                    is_done: Some(!currently_done),
                    ..Default::default()
                };
                match api.update_todo(task_id, &patch).await {
                    Ok(updated) => merge_by_id(&mut tasks.write(), updated),
                    Err(e) => error!(task_id, "failed to toggle task: {e}"),
                }
                updating.set(None);
            });
        };

        let api_commit = api.clone();
        let commit_edit = move || {
            editing_task.set(None);
            let text = editing_text.read().trim().to_string();
            if text.is_empty() || text == current_description {
                return;
            }
            let api = api_commit.clone();
            updating.set(Some(task_id));
            spawn(async move {
                let patch = UpdateTodo {
                    description: Some(text),
                    ..Default::default()
                };
                match api.update_todo(task_id, &patch).await {
                    Ok(updated) => merge_by_id(&mut tasks.write(), updated),
                    Err(e) => error!(task_id, "failed to edit task: {e}"),
                }
                updating.set(None);
            });
        };
        let mut commit_edit_on_blur = commit_edit.clone();
        let mut commit_edit_on_key = commit_edit;

        let api_remove = api.clone();
        let on_remove = move |_: MouseEvent| {
            let api = api_remove.clone();
            spawn(async move {
                match api.delete_todo(task_id).await {
                    Ok(()) => remove_by_id(&mut tasks.write(), task_id),
                    Err(e) => error!(task_id, "failed to delete task: {e}"),
                }
            });
        };

        rsx! {
            TaskItem {
                key: "task-{task_id}",
                todo: task.clone(),
                is_editing: matches!(*editing_task.read(), Some(id) if id == task_id),
                editing_text: editing_text.read().clone(),
                is_updating: matches!(*updating.read(), Some(id) if id == task_id),
                on_toggle: on_toggle,
                on_start_edit: move |_: MouseEvent| {
                    editing_task.set(Some(task_id));
                    editing_text.set(edit_seed.clone());
                },
                on_edit_input: move |e: FormEvent| editing_text.set(e.value()),
                on_commit: move |_: FocusEvent| commit_edit_on_blur(),
                on_commit_key: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        commit_edit_on_key();
                    } else if e.key() == Key::Escape {
                        editing_task.set(None);
                        editing_text.set(String::new());
                    }
                },
                on_remove: on_remove,
            }
        }
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                if *editing_title.read() {
                    input {
                        class: "title-input",
                        r#type: "text",
                        value: "{edited_title}",
                        autofocus: "true",
                        oninput: move |e| edited_title.set(e.value()),
                        onblur: move |_| commit_title_on_blur(),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                commit_title_on_key();
                            }
                        },
                    }
                } else {
                    span {
                        class: "card-title",
                        onclick: move |_| {
                            edited_title.set(name_for_edit.clone());
                            editing_title.set(true);
                        },
                        "{display_name}"
                    }
                }
                button { class: "btn btn-danger btn-icon", onclick: move |_| on_delete.call(()), "×" }
            }
            div { class: "tasks",
                if *loading.read() {
                    div { class: "loading-row", span { class: "spinner" } }
                } else {
                    {visible.into_iter().map(render_task)}
                }
            }
            AddForm {
                value: new_task.read().clone(),
                placeholder: "Add a task",
                on_input: move |e: FormEvent| new_task.set(e.value()),
                on_submit: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        add_task_on_key();
                    }
                },
                on_add: move |_: MouseEvent| add_task_on_click(),
            }
        }
    }
}
