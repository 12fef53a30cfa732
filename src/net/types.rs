//! Wire types shared with the record store.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A to-do record as stored by the backend. `id` is assigned by the store and
/// never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub completed: bool,
}

impl Todo {
    /// Full replacement body with `completed` inverted.
    pub fn toggled(&self) -> Self {
        Self { completed: !self.completed, ..self.clone() }
    }

    /// Full replacement body with a new task text and everything else kept.
    pub fn with_task(&self, task: impl Into<String>) -> Self {
        Self { task: task.into(), ..self.clone() }
    }
}

/// Body for `POST /todos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub task: String,
    pub completed: bool,
}

impl NewTodo {
    /// New records always start incomplete.
    pub fn new(task: impl Into<String>) -> Self {
        Self { task: task.into(), completed: false }
    }
}

/// A product row. Read-only on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
}

/// `POST /todos` response. The reference backend wraps the record as
/// `{"message": ..., "todo": {...}}`; a bare record is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CreatedTodo {
    Wrapped { todo: Todo },
    Bare(Todo),
}

impl CreatedTodo {
    pub(crate) fn into_todo(self) -> Todo {
        match self {
            Self::Wrapped { todo } | Self::Bare(todo) => todo,
        }
    }
}

/// Error body carried by non-success responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Only string details are user-facing; validation error arrays and
    /// blank strings are dropped so the caller's fallback is shown instead.
    pub(crate) fn into_detail(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}
