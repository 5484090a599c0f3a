// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Foreground process introspection via `ps`

use async_trait::async_trait;
use td_bridge::subprocess::{run_with_timeout, PROCESS_TABLE_TIMEOUT};
use thiserror::Error;
use tokio::process::Command;

/// Shell programs that never count as a foreground occupant.
///
/// Login shells show up with a leading `-`; the comparison strips it.
const SHELL_NAMES: &[&str] = &[
    "sh", "bash", "zsh", "fish", "tcsh", "csh", "ksh", "dash", "login", "screen", "tmux",
];

/// Errors from process-table operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("process table query failed: {0}")]
    QueryFailed(String),
    #[error("signal delivery failed: {0}")]
    SignalFailed(String),
}

/// The most specific non-shell process attached to a tty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForegroundProcess {
    pub pgid: u32,
    pub pid: u32,
    pub command: String,
}

/// Queries the foreground occupant of a tty. Point-in-time, never cached.
#[async_trait]
pub trait ProcessProber: Send + Sync {
    async fn foreground(&self, tty: &str) -> Result<Option<ForegroundProcess>, ProbeError>;

    /// "Busy" is simply "a non-shell foreground process exists".
    async fn busy(&self, tty: &str) -> Result<bool, ProbeError> {
        Ok(self.foreground(tty).await?.is_some())
    }
}

/// Real prober backed by `ps -t <tty>`.
#[derive(Clone, Default)]
pub struct PsProber;

impl PsProber {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessProber for PsProber {
    async fn foreground(&self, tty: &str) -> Result<Option<ForegroundProcess>, ProbeError> {
        let short_tty = tty.strip_prefix("/dev/").unwrap_or(tty);
        let mut cmd = Command::new("ps");
        cmd.args(["-t", short_tty, "-o", "pgid=,pid=,command="]);
        let output = run_with_timeout(cmd, PROCESS_TABLE_TIMEOUT, "ps tty query")
            .await
            .map_err(ProbeError::QueryFailed)?;

        // ps exits nonzero when the tty has no processes at all.
        if !output.status.success() {
            return Ok(None);
        }
        Ok(pick_foreground(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Pick the foreground occupant from raw `ps` output.
///
/// Shell rows are dropped; of what remains, the last row wins (the most
/// recently started, most specific process on the tty).
pub fn pick_foreground(ps_output: &str) -> Option<ForegroundProcess> {
    ps_output
        .lines()
        .filter_map(parse_ps_row)
        .filter(|p| !is_shell(&p.command))
        .next_back()
}

fn parse_ps_row(line: &str) -> Option<ForegroundProcess> {
    let mut fields = line.split_whitespace();
    let pgid = fields.next()?.parse().ok()?;
    let pid = fields.next()?.parse().ok()?;
    let command = fields.collect::<Vec<_>>().join(" ");
    if command.is_empty() {
        return None;
    }
    Some(ForegroundProcess { pgid, pid, command })
}

/// Whether a command line is a plain (idle) shell.
///
/// A shell running a script (`bash build.sh`) is a real occupant; only a
/// shell with nothing but option flags after it counts as idle.
fn is_shell(command: &str) -> bool {
    let mut tokens = command.split_whitespace();
    let first = tokens.next().unwrap_or("");
    let name = first.rsplit('/').next().unwrap_or(first);
    let name = name.strip_prefix('-').unwrap_or(name);
    SHELL_NAMES.contains(&name) && tokens.all(|t| t.starts_with('-'))
}

#[cfg(test)]
#[path = "prober_tests.rs"]
mod tests;
