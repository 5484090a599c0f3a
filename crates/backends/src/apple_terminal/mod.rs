// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal.app backend

mod scripts;

use crate::surface::{tail_lines, RawSession, TerminalSurface};
use async_trait::async_trait;
use td_bridge::{ScriptError, ScriptRunner, ScriptValue};
use td_core::{DriverError, TabRef};

pub const APP_NAME: &str = "Terminal";

/// Backend for Apple's Terminal.app (windows → tabs).
///
/// Tabs are addressed by 1-based index. Indexes are only stable within one
/// invocation; identity across invocations always goes through the title.
#[derive(Clone)]
pub struct AppleTerminal<R> {
    runner: R,
}

impl<R: ScriptRunner> AppleTerminal<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn drv(&self, err: ScriptError) -> DriverError {
        err.into_driver(APP_NAME)
    }

    async fn run(&self, script: &str) -> Result<ScriptValue, DriverError> {
        self.runner.run(script).await.map_err(|e| self.drv(e))
    }
}

/// Extract the tab index from a handle; this backend never sees composites.
fn tab_index(tab: &TabRef) -> Result<&str, DriverError> {
    match tab {
        TabRef::Plain(idx) => Ok(idx),
        TabRef::Nested { .. } => Err(DriverError::Internal(
            "composite tab handle on a two-level backend".to_string(),
        )),
    }
}

/// Parse one enumeration row: `{window id, tab index, custom title, tty}`.
fn parse_row(row: &ScriptValue) -> Result<RawSession, DriverError> {
    let fields = row
        .as_list()
        .map_err(|e| e.into_driver(APP_NAME))?;
    if fields.len() != 4 {
        return Err(DriverError::Internal(format!(
            "enumeration row has {} fields, expected 4",
            fields.len()
        )));
    }
    let get_text = |v: &ScriptValue| v.as_text().map(str::to_string);
    Ok(RawSession {
        window_id: get_text(&fields[0]).map_err(|e| e.into_driver(APP_NAME))?,
        tab: TabRef::Plain(get_text(&fields[1]).map_err(|e| e.into_driver(APP_NAME))?),
        title: fields[2]
            .as_optional_text()
            .map_err(|e| e.into_driver(APP_NAME))?
            .unwrap_or_default()
            .to_string(),
        tty: fields[3]
            .as_optional_text()
            .map_err(|e| e.into_driver(APP_NAME))?
            .map(str::to_string),
    })
}

/// Parse a creation result: `{window id, tab index, tty}`.
fn parse_created(value: &ScriptValue, title: &str) -> Result<RawSession, DriverError> {
    let fields = value.as_list().map_err(|e| e.into_driver(APP_NAME))?;
    if fields.len() != 3 {
        return Err(DriverError::Internal(format!(
            "creation result has {} fields, expected 3",
            fields.len()
        )));
    }
    Ok(RawSession {
        window_id: fields[0]
            .as_text()
            .map_err(|e| e.into_driver(APP_NAME))?
            .to_string(),
        tab: TabRef::Plain(
            fields[1]
                .as_text()
                .map_err(|e| e.into_driver(APP_NAME))?
                .to_string(),
        ),
        title: title.to_string(),
        tty: fields[2]
            .as_optional_text()
            .map_err(|e| e.into_driver(APP_NAME))?
            .map(str::to_string),
    })
}

#[async_trait]
impl<R: ScriptRunner> TerminalSurface for AppleTerminal<R> {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    async fn enumerate(&self) -> Result<Vec<RawSession>, DriverError> {
        let value = self.run(&scripts::enumerate()).await?;
        match value {
            // No windows at all comes back as an empty result.
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
        let value = self.run(&scripts::create_window(title)).await?;
        let created = parse_created(&value, title)?;
        tracing::info!(window_id = %created.window_id, "created Terminal window");
        Ok(created)
    }

    async fn create_tab(
        &self,
        window_id: &str,
        title: &str,
    ) -> Result<RawSession, DriverError> {
        let value = self.run(&scripts::create_tab(window_id, title)).await?;
        let created = parse_created(&value, title)?;
        tracing::info!(window_id, tab = %created.tab, "created Terminal tab");
        Ok(created)
    }

    async fn set_title(
        &self,
        window_id: &str,
        tab: &TabRef,
        title: &str,
    ) -> Result<(), DriverError> {
        self.run(&scripts::set_title(window_id, tab_index(tab)?, title))
            .await?;
        Ok(())
    }

    async fn type_text(
        &self,
        window_id: &str,
        tab: &TabRef,
        text: &str,
    ) -> Result<(), DriverError> {
        self.run(&scripts::type_text(window_id, tab_index(tab)?, text))
            .await?;
        Ok(())
    }

    async fn send_interrupt(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        self.run(&scripts::send_interrupt(window_id, tab_index(tab)?))
            .await?;
        Ok(())
    }

    async fn read_buffer(
        &self,
        window_id: &str,
        tab: &TabRef,
        lines: u32,
    ) -> Result<String, DriverError> {
        let value = self
            .run(&scripts::read_history(window_id, tab_index(tab)?))
            .await?;
        let text = value.as_text().map_err(|e| self.drv(e))?;
        Ok(tail_lines(text, lines))
    }

    async fn clear_screen(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        self.type_text(window_id, tab, "clear").await
    }

    async fn focus(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        self.run(&scripts::focus(window_id, tab_index(tab)?))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
