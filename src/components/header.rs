use dioxus::prelude::*;

#[component]
pub fn Header(count: usize, on_new_list: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "header",
            h1 { class: "title", "My Todo Lists" }
            span { class: "meta", "{count} lists" }
            button { class: "btn btn-primary", onclick: move |e| on_new_list.call(e), "+ New List" }
        }
    }
}
