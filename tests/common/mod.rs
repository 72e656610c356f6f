//! In-memory mock of the todo-list REST backend.
//!
//! Mirrors the real backend's surface: both resources under `/api`,
//! sequential server-assigned ids, and cascade deletion of a list's todos.
//! DTOs are defined independently from the crate under test so schema
//! drift shows up as a test failure.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize)]
struct TodoList {
    id: u64,
    name: String,
}

#[derive(Clone, Debug, Serialize)]
struct Todo {
    id: u64,
    todo_list_id: u64,
    description: String,
    is_done: bool,
}

#[derive(Deserialize)]
struct CreateTodoList {
    name: String,
}

#[derive(Deserialize)]
struct UpdateTodoList {
    name: String,
}

#[derive(Deserialize)]
struct CreateTodo {
    todo_list_id: u64,
    description: String,
}

// Verb-spoofing clients send a `_method` body field alongside the real
// payload; serde drops unknown fields, matching the real backend.
#[derive(Deserialize)]
struct UpdateTodo {
    description: Option<String>,
    is_done: Option<bool>,
}

#[derive(Default)]
struct Store {
    next_id: u64,
    lists: HashMap<u64, TodoList>,
    todos: HashMap<u64, Todo>,
}

impl Store {
    fn assign_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

type Db = Arc<RwLock<Store>>;

fn app() -> Router {
    let db: Db = Db::default();
    let api = Router::new()
        .route("/todo-lists", get(list_lists).post(create_list))
        .route(
            "/todo-lists/{id}",
            get(get_list).put(update_list).delete(delete_list),
        )
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(db);
    Router::new().nest("/api", api)
}

/// Serves the mock backend on an ephemeral port and returns the base URL
/// for an `ApiClient`.
pub async fn spawn_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    format!("http://{addr}/api")
}

async fn list_lists(State(db): State<Db>) -> Json<Vec<TodoList>> {
    let store = db.read().await;
    let mut lists: Vec<TodoList> = store.lists.values().cloned().collect();
    lists.sort_by_key(|l| l.id);
    Json(lists)
}

async fn create_list(
    State(db): State<Db>,
    Json(input): Json<CreateTodoList>,
) -> (StatusCode, Json<TodoList>) {
    let mut store = db.write().await;
    let id = store.assign_id();
    let list = TodoList {
        id,
        name: input.name,
    };
    store.lists.insert(id, list.clone());
    (StatusCode::CREATED, Json(list))
}

async fn get_list(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<TodoList>, StatusCode> {
    db.read()
        .await
        .lists
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_list(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodoList>,
) -> Result<Json<TodoList>, StatusCode> {
    let mut store = db.write().await;
    let list = store.lists.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    list.name = input.name;
    Ok(Json(list.clone()))
}

async fn delete_list(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.lists.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    store.todos.retain(|_, t| t.todo_list_id != id);
    Ok(StatusCode::NO_CONTENT)
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    let mut todos: Vec<Todo> = store.todos.values().cloned().collect();
    todos.sort_by_key(|t| t.id);
    Json(todos)
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    let mut store = db.write().await;
    if !store.lists.contains_key(&input.todo_list_id) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let id = store.assign_id();
    let todo = Todo {
        id,
        todo_list_id: input.todo_list_id,
        description: input.description,
        is_done: false,
    };
    store.todos.insert(id, todo.clone());
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    db.read()
        .await
        .todos
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(description) = input.description {
        todo.description = description;
    }
    if let Some(is_done) = input.is_done {
        todo.is_done = is_done;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .todos
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
