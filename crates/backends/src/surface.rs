// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The backend adapter contract

use async_trait::async_trait;
use td_core::{DriverError, TabRef};

/// A window/tab/session slot as the terminal application reports it.
///
/// Identity is not interpreted here: the engine decodes `title` through the
/// codec and decides what is a managed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSession {
    pub window_id: String,
    pub tab: TabRef,
    pub title: String,
    pub tty: Option<String>,
}

/// Low-level primitives one terminal application must provide.
///
/// Everything returns [`DriverError`]: the backend knows which application it
/// talks to and lifts bridge errors with that name attached.
#[async_trait]
pub trait TerminalSurface: Send + Sync {
    /// Application name for diagnostics and permission prompts.
    fn app_name(&self) -> &str;

    /// Every window/tab/session of the application, enumeration order.
    async fn enumerate(&self) -> Result<Vec<RawSession>, DriverError>;

    /// Identifier of the frontmost window, if any window exists.
    async fn frontmost_window(&self) -> Result<Option<String>, DriverError>;

    /// Create a new top-level window with the given title already set.
    async fn create_window(&self, title: &str) -> Result<RawSession, DriverError>;

    /// Create a new tab inside an existing window, title already set.
    async fn create_tab(&self, window_id: &str, title: &str)
        -> Result<RawSession, DriverError>;

    async fn set_title(
        &self,
        window_id: &str,
        tab: &TabRef,
        title: &str,
    ) -> Result<(), DriverError>;

    /// Type a line of text into the session's shell and submit it.
    async fn type_text(&self, window_id: &str, tab: &TabRef, text: &str)
        -> Result<(), DriverError>;

    /// Deliver a Ctrl-C equivalent to the session.
    async fn send_interrupt(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError>;

    /// Read the session's buffer, tailed to at most `lines` lines.
    async fn read_buffer(
        &self,
        window_id: &str,
        tab: &TabRef,
        lines: u32,
    ) -> Result<String, DriverError>;

    /// Clear the visible screen (submits `clear` to the shell).
    async fn clear_screen(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError>;

    /// Bring the window/tab to the foreground.
    async fn focus(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError>;
}

/// Tail a buffer to its last `lines` lines.
///
/// The terminal reports whole histories; callers only ever want the end.
pub fn tail_lines(text: &str, lines: u32) -> String {
    if lines == 0 {
        return String::new();
    }
    let all: Vec<&str> = text.lines().collect();
    let start = all.len().saturating_sub(lines as usize);
    all[start..].join("\n")
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
