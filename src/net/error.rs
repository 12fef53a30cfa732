//! Record store failure classification.
//!
//! ERROR HANDLING
//! ==============
//! Read paths collapse every variant into an empty result. Write paths turn a
//! failure into one line of user-facing text via [`StoreError::user_message`]:
//! the server's `detail` when it sent one, the operation's fallback for any
//! other rejection, and a generic message for transport or decode failures.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when a write fails before the server could explain why.
pub const GENERIC_ERROR: &str = "An unexpected error occurred";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Text to surface next to the control that issued the write.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            Self::Rejected { detail: None, .. } => fallback.to_owned(),
            Self::Transport(_) | Self::Decode(_) => GENERIC_ERROR.to_owned(),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
