// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signal delivery to process groups

use crate::prober::ProbeError;
use async_trait::async_trait;
use td_bridge::subprocess::{run_with_timeout, PROCESS_TABLE_TIMEOUT};
use tokio::process::Command;

/// Signals used by the escalation sequence, in escalation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Int,
    Term,
    Kill,
}

impl Signal {
    /// The `kill(1)` flag for this signal.
    pub fn flag(self) -> &'static str {
        match self {
            Signal::Int => "-INT",
            Signal::Term => "-TERM",
            Signal::Kill => "-KILL",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SIG{}", &self.flag()[1..])
    }
}

/// Delivers a signal to a whole process group.
#[async_trait]
pub trait SignalSender: Send + Sync {
    async fn send(&self, pgid: u32, signal: Signal) -> Result<(), ProbeError>;
}

/// Real sender: shells out to `kill <sig> -- -<pgid>`.
///
/// The negative pgid targets the whole group, so pipelines and child
/// processes are interrupted together.
#[derive(Clone, Default)]
pub struct KillSender;

impl KillSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SignalSender for KillSender {
    async fn send(&self, pgid: u32, signal: Signal) -> Result<(), ProbeError> {
        let group = format!("-{}", pgid);
        let mut cmd = Command::new("kill");
        cmd.args([signal.flag(), "--", &group]);
        let output = run_with_timeout(cmd, PROCESS_TABLE_TIMEOUT, "kill")
            .await
            .map_err(ProbeError::SignalFailed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // The group may have exited between probe and kill; the caller
            // re-checks, so report rather than guess.
            return Err(ProbeError::SignalFailed(format!(
                "{} to pgid {} failed: {}",
                signal,
                pgid,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "signals_tests.rs"]
mod tests;
