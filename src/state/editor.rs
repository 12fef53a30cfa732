//! Inline editor state machine.
//!
//! ```text
//! Closed --open(record)--> Open { draft = record.task }
//! Open --input--> Open
//! Open --cancel / Escape--> Closed                      (no request)
//! Open --save, blank draft--> Open { error }            (no request)
//! Open --save--> Open { saving } --ok--> Closed          (page re-fetch)
//!                                --err--> Open { error } (input re-enabled)
//! ```
//!
//! There is one editing slot per list: opening a record while another is open
//! replaces the session, draft included. A save answer that arrives after its
//! session was cancelled or replaced does not touch the new state, but a
//! successful one still asks for a re-fetch.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::error::StoreError;
use crate::net::types::Todo;

pub const EMPTY_TASK_ERROR: &str = "Task cannot be empty";
pub const UPDATE_FALLBACK: &str = "Failed to update todo";

/// One editing session. `record` is the row as it was when editing began.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub record: Todo,
    pub draft: String,
    pub saving: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open(EditSession),
}

/// What a key press inside the editor means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Cancel,
    Save,
    None,
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            Self::Open(session) => Some(session),
            Self::Closed => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.session().is_some_and(|s| s.saving)
    }

    pub fn draft(&self) -> String {
        self.session().map(|s| s.draft.clone()).unwrap_or_default()
    }

    pub fn error(&self) -> Option<String> {
        self.session().and_then(|s| s.error.clone())
    }

    /// Begin editing `record`, discarding any open session.
    pub fn open(&mut self, record: Todo) {
        let draft = record.task.clone();
        *self = Self::Open(EditSession { record, draft, saving: false, error: None });
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Self::Open(session) = self {
            session.draft = text.into();
        }
    }

    /// Discard the draft and close.
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Validate and start a save. Returns the full replacement body, or
    /// `None` when closed, already saving, or the trimmed draft is empty.
    pub fn begin_save(&mut self) -> Option<Todo> {
        let Self::Open(session) = self else {
            return None;
        };
        if session.saving {
            return None;
        }
        let task = session.draft.trim();
        if task.is_empty() {
            session.error = Some(EMPTY_TASK_ERROR.to_owned());
            return None;
        }
        let update = session.record.with_task(task);
        session.saving = true;
        session.error = None;
        Some(update)
    }

    /// Apply the store's answer to the save of record `id`. Returns `true`
    /// when the page should re-fetch.
    pub fn finish_save(&mut self, id: i64, result: Result<(), StoreError>) -> bool {
        let current = matches!(self, Self::Open(s) if s.record.id == id && s.saving);
        match result {
            Ok(()) => {
                if current {
                    *self = Self::Closed;
                }
                true
            }
            Err(e) => {
                leptos::logging::warn!("error updating todo {id}: {e}");
                if let Self::Open(session) = self
                    && current
                {
                    session.saving = false;
                    session.error = Some(e.user_message(UPDATE_FALLBACK));
                }
                false
            }
        }
    }

    /// Map a `KeyboardEvent::key()` value to an editor command.
    pub fn key_command(&self, key: &str) -> KeyCommand {
        match key {
            "Escape" => KeyCommand::Cancel,
            "Enter" if !self.is_saving() => KeyCommand::Save,
            _ => KeyCommand::None,
        }
    }
}
