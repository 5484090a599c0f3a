// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session data model

use serde::{Serialize, Serializer};

/// Backend-specific tab handle.
///
/// Terminal applications with two nesting levels (window → tab) use
/// [`TabRef::Plain`]; applications with a third level (window → tab →
/// session) use [`TabRef::Nested`]. The two sub-identifiers stay separate
/// fields everywhere in the codebase; they are joined with `:` only at the
/// serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRef {
    Plain(String),
    Nested { tab_id: String, session_id: String },
}

impl TabRef {
    /// Render the handle for display/JSON output.
    pub fn render(&self) -> String {
        match self {
            TabRef::Plain(id) => id.clone(),
            TabRef::Nested { tab_id, session_id } => format!("{}:{}", tab_id, session_id),
        }
    }
}

impl std::fmt::Display for TabRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Serialize for TabRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

/// Canonical description of a live session.
///
/// Built fresh on every enumeration — nothing here is cached across
/// invocations. `title` is the source of truth; `tty_from_title` and
/// `pid_from_title` are decoded fallbacks for when live introspection is
/// unavailable.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    /// Human-readable `project/tag` label; for display, not globally unique.
    pub identifier: String,
    pub project_hash: String,
    pub tag: String,
    /// The full encoded title currently set on the window/tab.
    pub title: String,
    pub tty: Option<String>,
    /// Computed on demand from the process table, never cached.
    pub is_busy: bool,
    pub window_id: String,
    pub tab: TabRef,
    pub tty_from_title: Option<String>,
    pub pid_from_title: Option<u32>,
}

impl SessionInfo {
    /// Best available tty: live value first, decoded title value second.
    pub fn effective_tty(&self) -> Option<&str> {
        self.tty.as_deref().or(self.tty_from_title.as_deref())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
