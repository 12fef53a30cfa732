//! Creation form state.
//!
//! At most one create request is in flight per form: `begin_submit` refuses
//! while `submitting` is set, and `finish_submit` clears it on every outcome.

#[cfg(test)]
#[path = "create_form_test.rs"]
mod create_form_test;

use crate::net::error::StoreError;
use crate::net::types::{NewTodo, Todo};

/// Surfaced when the store rejects a create without a `detail`.
pub const CREATE_FALLBACK: &str = "Failed to create todo";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub task: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl CreateForm {
    pub fn set_task(&mut self, task: impl Into<String>) {
        self.task = task.into();
    }

    /// Start a submit. Returns the request body, or `None` when the task is
    /// empty or another submit is still outstanding. The task is sent as
    /// typed.
    pub fn begin_submit(&mut self) -> Option<NewTodo> {
        if self.submitting || self.task.is_empty() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(NewTodo::new(self.task.clone()))
    }

    /// Apply the store's answer. Returns `true` when the page should re-fetch.
    pub fn finish_submit(&mut self, result: Result<Todo, StoreError>) -> bool {
        self.submitting = false;
        match result {
            Ok(created) => {
                leptos::logging::log!("todo created: id={}", created.id);
                self.task.clear();
                true
            }
            Err(e) => {
                leptos::logging::warn!("error creating todo: {e}");
                self.error = Some(e.user_message(CREATE_FALLBACK));
                false
            }
        }
    }
}
