use serde::{Deserialize, Serialize};

/// A named container of todo items, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A single task. `todo_list_id` never changes after creation; moving a
/// task between lists is not a backend operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub todo_list_id: u64,
    pub description: String,
    pub is_done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request payload for `POST /todo-lists`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTodoList {
    pub name: String,
}

/// Request payload for `PUT /todo-lists/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTodoList {
    pub name: String,
}

/// Request payload for `POST /todos`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTodo {
    pub todo_list_id: u64,
    pub description: String,
}

/// Partial-update payload for `PUT /todos/{id}`. Omitted fields are left
/// unchanged on the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
}

/// Entities addressable by their server-assigned id.
pub trait HasId {
    fn id(&self) -> u64;
}

impl HasId for TodoList {
    fn id(&self) -> u64 {
        self.id
    }
}

impl HasId for Todo {
    fn id(&self) -> u64 {
        self.id
    }
}
