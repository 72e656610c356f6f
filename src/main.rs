use dx_todo_lists::App;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
