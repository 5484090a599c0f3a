// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for the five operations
//!
//! Text output goes to stdout and stays grep-friendly; `-o json` prints one
//! pretty-printed object per invocation. Logging goes to stderr, so stdout is
//! machine-consumable in both modes.

use clap::ValueEnum;
use td_core::{ExecuteResult, SessionInfo};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render the session listing as an aligned text table.
pub fn sessions_table(sessions: &[SessionInfo]) -> String {
    if sessions.is_empty() {
        return "No sessions found".to_string();
    }
    let width = sessions
        .iter()
        .map(|s| s.identifier.len())
        .max()
        .unwrap_or(0)
        .max("SESSION".len());
    let mut out = format!(
        "{:<width$}  {:<6}  {:<14}  {:<8}  TAB",
        "SESSION", "STATUS", "TTY", "WINDOW"
    );
    for s in sessions {
        out.push_str(&format!(
            "\n{:<width$}  {:<6}  {:<14}  {:<8}  {}",
            s.identifier,
            if s.is_busy { "busy" } else { "idle" },
            s.tty.as_deref().unwrap_or("-"),
            s.window_id,
            s.tab,
        ));
    }
    out
}

pub fn print_sessions(sessions: &[SessionInfo], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", sessions_table(sessions)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(sessions)?);
        }
    }
    Ok(())
}

pub fn print_execute(result: &ExecuteResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if !result.output.is_empty() {
                println!("{}", result.output);
            }
            if result.killed_by_timeout {
                eprintln!(
                    "Command timed out in session {}; process group killed",
                    result.session.identifier
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }
    Ok(())
}

pub fn print_read(
    session: &SessionInfo,
    output: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "session": session,
                "output": output,
            });
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }
    }
    Ok(())
}

pub fn print_focus(session: &SessionInfo, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("Focused {}", session.identifier),
        OutputFormat::Json => {
            let obj = serde_json::json!({ "session": session });
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }
    }
    Ok(())
}

pub fn print_kill(
    session: &SessionInfo,
    detail: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}: {}", session.identifier, detail),
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "session": session,
                "detail": detail,
            });
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }
    }
    Ok(())
}
