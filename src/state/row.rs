//! Editable row state: direct toggle and delete mutations.
//!
//! Rows never flip their own display. A row shows the record from the last
//! fetch; a confirmed mutation asks the page to re-fetch, a failed one is
//! logged and reported on the row while the record stays as it was.

#[cfg(test)]
#[path = "row_test.rs"]
mod row_test;

use leptos::prelude::*;

use crate::net::error::StoreError;
use crate::net::store::RecordStore;
use crate::net::types::Todo;

pub const TOGGLE_FALLBACK: &str = "Failed to update todo";
pub const DELETE_FALLBACK: &str = "Failed to delete todo";

/// A single-record write issued from a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowMutation {
    /// Full replacement body with `completed` already inverted.
    Toggle(Todo),
    Delete(i64),
}

impl RowMutation {
    pub fn toggle(todo: &Todo) -> Self {
        Self::Toggle(todo.toggled())
    }

    pub fn delete(todo: &Todo) -> Self {
        Self::Delete(todo.id)
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Toggle(todo) => todo.id,
            Self::Delete(id) => *id,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Toggle(_) => "toggling",
            Self::Delete(_) => "deleting",
        }
    }

    fn fallback(&self) -> &'static str {
        match self {
            Self::Toggle(_) => TOGGLE_FALLBACK,
            Self::Delete(_) => DELETE_FALLBACK,
        }
    }

    /// Diagnostic line logged when the mutation fails.
    pub fn failure_diagnostic(&self, err: &StoreError) -> String {
        format!("error {} todo {}: {err}", self.label(), self.id())
    }

    /// Issue the request. Failures are logged here, before any row state is
    /// touched, since the row may be gone by the time the answer arrives.
    ///
    /// # Errors
    ///
    /// Returns the store's error unchanged.
    pub async fn send<S: RecordStore + ?Sized>(&self, store: &S) -> Result<(), StoreError> {
        let result = match self {
            Self::Toggle(todo) => store.update_todo(todo).await,
            Self::Delete(id) => store.delete_todo(*id).await,
        };
        if let Err(e) = &result {
            leptos::logging::warn!("{}", self.failure_diagnostic(e));
        }
        result
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowState {
    pub pending: bool,
    pub error: Option<String>,
}

impl RowState {
    /// Start a mutation unless one is already in flight for this row.
    pub fn begin(&mut self, mutation: RowMutation) -> Option<RowMutation> {
        if self.pending {
            return None;
        }
        self.pending = true;
        self.error = None;
        Some(mutation)
    }

    /// Apply the store's answer. Returns `true` when the page should re-fetch.
    pub fn finish(&mut self, mutation: &RowMutation, result: Result<(), StoreError>) -> bool {
        self.pending = false;
        match result {
            Ok(()) => true,
            Err(e) => {
                self.error = Some(e.user_message(mutation.fallback()));
                false
            }
        }
    }
}

/// Apply the store's answer to a row signal. A row disposed by a sibling's
/// re-fetch is skipped and the page is refreshed anyway.
pub fn settle(row: RwSignal<RowState>, mutation: &RowMutation, result: Result<(), StoreError>) -> bool {
    row.try_update(|r| r.finish(mutation, result)).unwrap_or(true)
}
