// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! iTerm2 backend

mod scripts;

use crate::surface::{tail_lines, RawSession, TerminalSurface};
use async_trait::async_trait;
use td_bridge::{ScriptError, ScriptRunner, ScriptValue};
use td_core::{DriverError, TabRef};

pub const APP_NAME: &str = "iTerm2";

/// Backend for iTerm2 (windows → tabs → sessions).
///
/// The third nesting level means a tab handle is composite: the tab index
/// plus the session's `unique id`. The unique id is stable for the lifetime
/// of the session; the tab index is only stable within one invocation.
#[derive(Clone)]
pub struct Iterm<R> {
    runner: R,
    profile: Option<String>,
}

impl<R: ScriptRunner> Iterm<R> {
    pub fn new(runner: R, profile: Option<String>) -> Self {
        Self { runner, profile }
    }

    fn drv(&self, err: ScriptError) -> DriverError {
        err.into_driver(APP_NAME)
    }

    async fn run(&self, script: &str) -> Result<ScriptValue, DriverError> {
        self.runner.run(script).await.map_err(|e| self.drv(e))
    }
}

/// Split a composite handle into (tab index, session id).
fn tab_parts(tab: &TabRef) -> Result<(&str, &str), DriverError> {
    match tab {
        TabRef::Nested { tab_id, session_id } => Ok((tab_id, session_id)),
        TabRef::Plain(_) => Err(DriverError::Internal(
            "plain tab handle on a three-level backend".to_string(),
        )),
    }
}

fn text_field(value: &ScriptValue) -> Result<String, DriverError> {
    value
        .as_text()
        .map(str::to_string)
        .map_err(|e| e.into_driver(APP_NAME))
}

fn optional_text_field(value: &ScriptValue) -> Result<Option<String>, DriverError> {
    value
        .as_optional_text()
        .map(|o| o.map(str::to_string))
        .map_err(|e| e.into_driver(APP_NAME))
}

/// Parse one enumeration row:
/// `{window id, tab index, session unique id, name, tty}`.
fn parse_row(row: &ScriptValue) -> Result<RawSession, DriverError> {
    let fields = row.as_list().map_err(|e| e.into_driver(APP_NAME))?;
    if fields.len() != 5 {
        return Err(DriverError::Internal(format!(
            "enumeration row has {} fields, expected 5",
            fields.len()
        )));
    }
    Ok(RawSession {
        window_id: text_field(&fields[0])?,
        tab: TabRef::Nested {
            tab_id: text_field(&fields[1])?,
            session_id: text_field(&fields[2])?,
        },
        title: optional_text_field(&fields[3])?.unwrap_or_default(),
        tty: optional_text_field(&fields[4])?,
    })
}

/// Parse a creation result: `{window id, tab index, session unique id, tty}`.
fn parse_created(value: &ScriptValue, title: &str) -> Result<RawSession, DriverError> {
    let fields = value.as_list().map_err(|e| e.into_driver(APP_NAME))?;
    if fields.len() != 4 {
        return Err(DriverError::Internal(format!(
            "creation result has {} fields, expected 4",
            fields.len()
        )));
    }
    Ok(RawSession {
        window_id: text_field(&fields[0])?,
        tab: TabRef::Nested {
            tab_id: text_field(&fields[1])?,
            session_id: text_field(&fields[2])?,
        },
        title: title.to_string(),
        tty: optional_text_field(&fields[3])?,
    })
}

#[async_trait]
impl<R: ScriptRunner> TerminalSurface for Iterm<R> {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    async fn enumerate(&self) -> Result<Vec<RawSession>, DriverError> {
        let value = self.run(&scripts::enumerate()).await?;
        match value {
            ScriptValue::Null => Ok(Vec::new()),
            other => other
                .as_list()
                .map_err(|e| self.drv(e))?
                .iter()
                .map(parse_row)
                .collect(),
        }
    }

    async fn frontmost_window(&self) -> Result<Option<String>, DriverError> {
        let value = self.run(&scripts::frontmost_window()).await?;
        let id = value.as_text().map_err(|e| self.drv(e))?;
        Ok((!id.is_empty()).then(|| id.to_string()))
    }

    async fn create_window(&self, title: &str) -> Result<RawSession, DriverError> {
        let value = self
            .run(&scripts::create_window(title, self.profile.as_deref()))
            .await?;
        let created = parse_created(&value, title)?;
        tracing::info!(window_id = %created.window_id, "created iTerm2 window");
        Ok(created)
    }

    async fn create_tab(
        &self,
        window_id: &str,
        title: &str,
    ) -> Result<RawSession, DriverError> {
        let value = self
            .run(&scripts::create_tab(
                window_id,
                title,
                self.profile.as_deref(),
            ))
            .await?;
        let created = parse_created(&value, title)?;
        tracing::info!(window_id, tab = %created.tab, "created iTerm2 tab");
        Ok(created)
    }

    async fn set_title(
        &self,
        window_id: &str,
        tab: &TabRef,
        title: &str,
    ) -> Result<(), DriverError> {
        let (tab_id, session_id) = tab_parts(tab)?;
        self.run(&scripts::set_title(window_id, tab_id, session_id, title))
            .await?;
        Ok(())
    }

    async fn type_text(
        &self,
        window_id: &str,
        tab: &TabRef,
        text: &str,
    ) -> Result<(), DriverError> {
        let (tab_id, session_id) = tab_parts(tab)?;
        self.run(&scripts::write_text(window_id, tab_id, session_id, text))
            .await?;
        Ok(())
    }

    async fn send_interrupt(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        let (tab_id, session_id) = tab_parts(tab)?;
        self.run(&scripts::send_interrupt(window_id, tab_id, session_id))
            .await?;
        Ok(())
    }

    async fn read_buffer(
        &self,
        window_id: &str,
        tab: &TabRef,
        lines: u32,
    ) -> Result<String, DriverError> {
        let (tab_id, session_id) = tab_parts(tab)?;
        let value = self
            .run(&scripts::read_contents(window_id, tab_id, session_id))
            .await?;
        let text = value.as_text().map_err(|e| self.drv(e))?;
        Ok(tail_lines(text, lines))
    }

    async fn clear_screen(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        self.type_text(window_id, tab, "clear").await
    }

    async fn focus(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        let (tab_id, session_id) = tab_parts(tab)?;
        self.run(&scripts::focus(window_id, tab_id, session_id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
