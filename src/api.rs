//! Typed async client for the todo-list REST backend.
//!
//! One method per backend operation; every call issues a single request
//! with JSON `Accept`/`Content-Type` headers and either returns the parsed
//! resource or fails with the response status. There are no retries,
//! timeouts, or auth headers.

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{CreateTodo, CreateTodoList, Todo, TodoList, UpdateTodo, UpdateTodoList};

/// Android emulators reach the host machine through 10.0.2.2.
#[cfg(target_os = "android")]
pub const DEFAULT_BASE_URL: &str = "http://10.0.2.2:8000/api";
#[cfg(not(target_os = "android"))]
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Errors returned by [`ApiClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `reason` is the standard
    /// reason phrase, empty for unregistered codes.
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A payload or response body was not valid JSON for the expected shape.
    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Some PHP-framework backends route PUT/DELETE through POST and expect the
/// real verb spoofed in the body. The override is sent both ways: as the
/// `_method` body field and as the `X-HTTP-Method-Override` header.
#[derive(Serialize)]
struct MethodOverride<'a, T: Serialize> {
    #[serde(rename = "_method")]
    method: &'a str,
    #[serde(flatten)]
    payload: &'a T,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // Todo-list operations

    pub async fn list_lists(&self) -> Result<Vec<TodoList>, ApiError> {
        let body = self.execute(self.http.get(self.url("/todo-lists"))).await?;
        decode_collection(&body)
    }

    pub async fn create_list(&self, name: &str) -> Result<TodoList, ApiError> {
        let payload = serde_json::to_string(&CreateTodoList {
            name: name.to_string(),
        })?;
        let body = self
            .execute(self.http.post(self.url("/todo-lists")).body(payload))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_list(&self, id: u64) -> Result<TodoList, ApiError> {
        let body = self
            .execute(self.http.get(self.url(&format!("/todo-lists/{id}"))))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn update_list(&self, id: u64, name: &str) -> Result<TodoList, ApiError> {
        let payload = serde_json::to_string(&UpdateTodoList {
            name: name.to_string(),
        })?;
        let body = self
            .execute(
                self.http
                    .put(self.url(&format!("/todo-lists/{id}")))
                    .body(payload),
            )
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Deletes a list; the backend cascades to its todos.
    pub async fn delete_list(&self, id: u64) -> Result<(), ApiError> {
        self.execute(
            self.http
                .delete(self.url(&format!("/todo-lists/{id}")))
                .header("X-HTTP-Method-Override", HeaderValue::from_static("DELETE"))
                .body(r#"{"_method":"DELETE"}"#),
        )
        .await?;
        Ok(())
    }

    // Todo operations

    /// Fetches all todos, narrowed to one list when `list_id` is given. The
    /// backend endpoint has no server-side filter, so narrowing happens here.
    pub async fn list_todos(&self, list_id: Option<u64>) -> Result<Vec<Todo>, ApiError> {
        let body = self.execute(self.http.get(self.url("/todos"))).await?;
        let todos: Vec<Todo> = decode_collection(&body)?;
        Ok(match list_id {
            Some(list_id) => todos
                .into_iter()
                .filter(|t| t.todo_list_id == list_id)
                .collect(),
            None => todos,
        })
    }

    pub async fn create_todo(&self, todo_list_id: u64, description: &str) -> Result<Todo, ApiError> {
        let payload = serde_json::to_string(&CreateTodo {
            todo_list_id,
            description: description.to_string(),
        })?;
        let body = self
            .execute(self.http.post(self.url("/todos")).body(payload))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_todo(&self, id: u64) -> Result<Todo, ApiError> {
        let body = self
            .execute(self.http.get(self.url(&format!("/todos/{id}"))))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn update_todo(&self, id: u64, patch: &UpdateTodo) -> Result<Todo, ApiError> {
        let payload = serde_json::to_string(&MethodOverride {
            method: "PUT",
            payload: patch,
        })?;
        let body = self
            .execute(
                self.http
                    .put(self.url(&format!("/todos/{id}")))
                    .header("X-HTTP-Method-Override", HeaderValue::from_static("PUT"))
                    .body(payload),
            )
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn delete_todo(&self, id: u64) -> Result<(), ApiError> {
        self.execute(self.http.delete(self.url(&format!("/todos/{id}"))))
            .await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends the request with JSON headers and returns the raw body text of
    /// a successful response.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;
        let status = response.status();
        debug!(status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Collection endpoints may answer with an empty body; treat that as an
/// empty list rather than a decode failure.
fn decode_collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(body)?)
}
