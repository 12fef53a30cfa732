//! Client configuration.
//!
//! The record store base URL is baked in at build time from `TODO_API_BASE`
//! and handed to components through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `TODO_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    /// Build a config for the given base URL. Trailing slashes are dropped;
    /// a blank value falls back to [`DEFAULT_API_BASE`].
    pub fn new(api_base: impl Into<String>) -> Self {
        let raw = api_base.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let api_base = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { api_base: api_base.to_owned() }
    }

    /// Config from the build environment.
    pub fn from_env() -> Self {
        Self::new(option_env!("TODO_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Absolute URL for an API path such as `/todos`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
