use dioxus::prelude::*;
use tracing::error;

use crate::api::ApiClient;
use crate::app_assets::head_nodes;
use crate::components::{header::Header, list_card::ListCard};
use crate::models::TodoList;
use crate::state::{merge_by_id, next_list_name, remove_by_id};

/// Root screen: the collection of todo lists.
///
/// Owns the list collection and the loading flag; each mutation is one API
/// call followed by a merge into local state. Failures are logged and the
/// previous state is kept.
#[component]
pub fn App() -> Element {
    let api = use_context_provider(ApiClient::default);

    let mut lists = use_signal(Vec::<TodoList>::new);
    let mut loading = use_signal(|| true);

    // One-time load after first render.
    let api_load = api.clone();
    use_effect(move || {
        let api = api_load.clone();
        spawn(async move {
            match api.list_lists().await {
                Ok(fetched) => lists.set(fetched),
                Err(e) => error!("failed to load lists: {e}"),
            }
            loading.set(false);
        });
    });

    let api_add = api.clone();
    let on_add_list = move |_: MouseEvent| {
        let api = api_add.clone();
        let name = next_list_name(&lists.read());
        spawn(async move {
            match api.create_list(&name).await {
                Ok(created) => lists.write().push(created),
                Err(e) => error!("failed to create list: {e}"),
            }
        });
    };

    let visible: Vec<TodoList> = lists.read().iter().cloned().collect();

    let render_list = |list: TodoList| -> Element {
        let list_id = list.id;

        let api_rename = api.clone();
        let on_rename = move |name: String| {
            let api = api_rename.clone();
            spawn(async move {
                match api.update_list(list_id, &name).await {
                    Ok(updated) => merge_by_id(&mut lists.write(), updated),
                    Err(e) => error!(list_id, "failed to rename list: {e}"),
                }
            });
        };

        let api_delete = api.clone();
        let on_delete = move |_: ()| {
            let api = api_delete.clone();
            spawn(async move {
                // The card's tasks vanish with the card; other lists are
                // not re-fetched (the server cascades on its side).
                match api.delete_list(list_id).await {
                    Ok(()) => remove_by_id(&mut lists.write(), list_id),
                    Err(e) => error!(list_id, "failed to delete list: {e}"),
                }
            });
        };

        rsx! {
            ListCard {
                key: "list-{list_id}",
                list: list.clone(),
                on_rename: on_rename,
                on_delete: on_delete,
            }
        }
    };

    rsx! {
        {head_nodes()}
        div { class: "app",
            Header { count: visible.len(), on_new_list: on_add_list }
            if *loading.read() {
                div { class: "loading-row", span { class: "spinner" } }
            } else {
                div { class: "lists", {visible.into_iter().map(render_list)} }
            }
        }
    }
}
