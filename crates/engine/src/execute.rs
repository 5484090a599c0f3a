// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command wrapping and completion detection
//!
//! A submitted command is wrapped so its output lands in a private log file,
//! with a random completion marker appended once the command finishes. The
//! detector polls the log for the marker; the terminal never has to report
//! process exit itself. Markers are fresh per invocation so a stale marker
//! from an earlier run can never satisfy a new wait.

use rand::distr::Alphanumeric;
use rand::Rng;
use std::path::Path;
use std::time::Duration;
use tokio::time::Instant;
use tracing::warn;

const MARKER_PREFIX: &str = "TD_DONE_";
const MARKER_SUFFIX_LEN: usize = 12;

/// Fresh completion marker: `TD_DONE_` plus 12 random alphanumerics.
pub fn generate_marker() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..MARKER_SUFFIX_LEN)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect();
    format!("{}{}", MARKER_PREFIX, suffix)
}

/// Wrap a foreground command: redirect all output to the log, then append
/// the marker on its own line once the command (success or failure) is done.
///
/// The subshell keeps redirections from leaking into the session's shell.
pub fn wrap_foreground(command: &str, log_path: &Path, marker: &str) -> String {
    format!(
        "( {} ) > \"{}\" 2>&1; printf '%s\\n' '{}' >> \"{}\"",
        command,
        log_path.display(),
        marker,
        log_path.display()
    )
}

/// Wrap a background command: same redirection, detached with `&`, no marker.
pub fn wrap_background(command: &str, log_path: &Path) -> String {
    format!("( {} ) > \"{}\" 2>&1 &", command, log_path.display())
}

/// Poll interval schedule: tight at first for snappy short commands, backing
/// off for long-running ones.
pub fn poll_interval(iteration: u32) -> Duration {
    match iteration {
        0..=19 => Duration::from_millis(200),
        20..=99 => Duration::from_millis(500),
        _ => Duration::from_secs(1),
    }
}

/// Outcome of waiting for a foreground command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollResult {
    /// Marker observed; `output` is everything the command wrote before it.
    Completed { output: String },
    /// Deadline passed without the marker; `partial` is whatever had been
    /// written so far.
    TimedOut { partial: String },
}

/// Poll the log file until the marker appears or the timeout elapses.
///
/// The log may not exist yet when polling starts (the shell has not run the
/// redirection); that reads as empty, not as an error.
pub async fn await_marker(log_path: &Path, marker: &str, timeout: Duration) -> PollResult {
    let deadline = Instant::now() + timeout;
    let mut iteration: u32 = 0;
    loop {
        let content = read_log(log_path).await;
        if let Some(output) = split_at_marker(&content, marker) {
            return PollResult::Completed { output };
        }
        let now = Instant::now();
        if now >= deadline {
            return PollResult::TimedOut { partial: content };
        }
        let interval = poll_interval(iteration).min(deadline - now);
        tokio::time::sleep(interval).await;
        iteration += 1;
    }
}

/// Poll the log until the background command produces its first output, or
/// the startup window closes. Returns whatever is there at that point.
pub async fn sample_background(log_path: &Path, startup: Duration) -> String {
    let deadline = Instant::now() + startup;
    let mut iteration: u32 = 0;
    loop {
        let content = read_log(log_path).await;
        if !content.is_empty() {
            return content;
        }
        let now = Instant::now();
        if now >= deadline {
            return content;
        }
        let interval = poll_interval(iteration).min(deadline - now);
        tokio::time::sleep(interval).await;
        iteration += 1;
    }
}

/// Delete a finished execution log. Failure is a warning; the next run uses
/// a fresh file either way.
pub async fn remove_log(log_path: &Path) {
    if let Err(err) = tokio::fs::remove_file(log_path).await {
        if err.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %log_path.display(), error = %err, "could not delete execution log");
        }
    }
}

async fn read_log(log_path: &Path) -> String {
    match tokio::fs::read(log_path).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}

/// Everything before the marker line, when the marker is present as a line
/// of its own.
fn split_at_marker(content: &str, marker: &str) -> Option<String> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == marker {
            return Some(content[..offset].trim_end_matches('\n').to_string());
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod tests;
