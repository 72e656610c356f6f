use dioxus::prelude::*;

#[component]
pub fn AddForm(
    value: String,
    placeholder: String,
    on_input: EventHandler<FormEvent>,
    on_submit: EventHandler<KeyboardEvent>,
    on_add: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "add-row",
            input {
                class: "add-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| on_input.call(e),
                onkeydown: move |e| on_submit.call(e),
            }
            button { class: "btn btn-primary btn-round", onclick: move |e| on_add.call(e), "+" }
        }
    }
}
