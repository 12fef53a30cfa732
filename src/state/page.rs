//! Page-level re-fetch trigger.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use leptos::prelude::*;

/// Shared by the page and its children. Fetchers read [`PageData::track`]
/// so that any child calling [`PageData::refresh`] re-runs them.
#[derive(Clone, Copy, Debug)]
pub struct PageData {
    version: RwSignal<u64>,
}

impl PageData {
    pub fn new() -> Self {
        Self { version: RwSignal::new(0) }
    }

    /// Request a full re-fetch of the page's collections.
    pub fn refresh(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    /// Subscribe the current reactive scope to refreshes.
    pub fn track(&self) -> u64 {
        self.version.get()
    }

    pub fn version_untracked(&self) -> u64 {
        self.version.get_untracked()
    }
}

impl Default for PageData {
    fn default() -> Self {
        Self::new()
    }
}
