// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend selection by configured application name

use crate::apple_terminal::AppleTerminal;
use crate::iterm::Iterm;
use crate::surface::{RawSession, TerminalSurface};
use async_trait::async_trait;
use td_bridge::ScriptRunner;
use td_core::{DriverError, TabRef};

/// The supported backends as a tagged variant.
///
/// Selected once at startup by name; callers dispatch through the
/// [`TerminalSurface`] impl below and never branch on the variant again.
#[derive(Clone)]
pub enum Backend<R> {
    AppleTerminal(AppleTerminal<R>),
    Iterm(Iterm<R>),
}

/// Look up a backend for the configured application name.
///
/// Names are matched case-insensitively, with common aliases accepted; an
/// unrecognized name is a configuration error, not a fallback.
pub fn select<R: ScriptRunner>(
    app: &str,
    runner: R,
    profile: Option<String>,
) -> Result<Backend<R>, DriverError> {
    match app.trim().to_ascii_lowercase().as_str() {
        "terminal" | "terminal.app" | "apple terminal" | "appleterminal" => {
            Ok(Backend::AppleTerminal(AppleTerminal::new(runner)))
        }
        "iterm" | "iterm2" | "iterm.app" | "iterm2.app" => {
            Ok(Backend::Iterm(Iterm::new(runner, profile)))
        }
        other => Err(DriverError::Config(format!(
            "unsupported terminal application: {:?} (supported: Terminal, iTerm2)",
            other
        ))),
    }
}

macro_rules! delegate {
    ($self:ident, $inner:ident => $call:expr) => {
        match $self {
            Backend::AppleTerminal($inner) => $call,
            Backend::Iterm($inner) => $call,
        }
    };
}

#[async_trait]
impl<R: ScriptRunner> TerminalSurface for Backend<R> {
    fn app_name(&self) -> &str {
        delegate!(self, b => b.app_name())
    }

    async fn enumerate(&self) -> Result<Vec<RawSession>, DriverError> {
        delegate!(self, b => b.enumerate().await)
    }

    async fn frontmost_window(&self) -> Result<Option<String>, DriverError> {
        delegate!(self, b => b.frontmost_window().await)
    }

    async fn create_window(&self, title: &str) -> Result<RawSession, DriverError> {
        delegate!(self, b => b.create_window(title).await)
    }

    async fn create_tab(
        &self,
        window_id: &str,
        title: &str,
    ) -> Result<RawSession, DriverError> {
        delegate!(self, b => b.create_tab(window_id, title).await)
    }

    async fn set_title(
        &self,
        window_id: &str,
        tab: &TabRef,
        title: &str,
    ) -> Result<(), DriverError> {
        delegate!(self, b => b.set_title(window_id, tab, title).await)
    }

    async fn type_text(
        &self,
        window_id: &str,
        tab: &TabRef,
        text: &str,
    ) -> Result<(), DriverError> {
        delegate!(self, b => b.type_text(window_id, tab, text).await)
    }

    async fn send_interrupt(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        delegate!(self, b => b.send_interrupt(window_id, tab).await)
    }

    async fn read_buffer(
        &self,
        window_id: &str,
        tab: &TabRef,
        lines: u32,
    ) -> Result<String, DriverError> {
        delegate!(self, b => b.read_buffer(window_id, tab, lines).await)
    }

    async fn clear_screen(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        delegate!(self, b => b.clear_screen(window_id, tab).await)
    }

    async fn focus(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        delegate!(self, b => b.focus(window_id, tab).await)
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
