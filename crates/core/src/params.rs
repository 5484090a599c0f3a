// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request and result records for the five public operations
//!
//! These are pure inputs/outputs: constructed once per invocation, never
//! mutated afterwards, owning nothing beyond their own strings.

use crate::session::SessionInfo;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Whether the caller blocks for command completion or only for an initial
/// output sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Foreground,
    Background,
}

/// Whether to bring the session's window to the foreground after the
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPreference {
    Force,
    Suppress,
    /// Fall back to the configured default.
    #[default]
    Default,
}

impl FocusPreference {
    /// Resolve against the configured default focus behavior.
    pub fn resolve(self, config_default: bool) -> bool {
        match self {
            FocusPreference::Force => true,
            FocusPreference::Suppress => false,
            FocusPreference::Default => config_default,
        }
    }
}

/// Request record for `executeCommand`.
#[derive(Debug, Clone, Default)]
pub struct ExecuteParams {
    pub project_path: Option<PathBuf>,
    pub tag: String,
    /// `None` or empty means "ensure the session exists", no command is run.
    pub command: Option<String>,
    pub mode: ExecutionMode,
    /// Overrides the configured foreground/background timeout when set.
    pub timeout: Option<Duration>,
    pub lines: Option<u32>,
    pub focus: FocusPreference,
}

/// Request record for `readSessionOutput`.
#[derive(Debug, Clone, Default)]
pub struct ReadParams {
    pub project_path: Option<PathBuf>,
    pub tag: String,
    pub lines: Option<u32>,
    pub focus: FocusPreference,
}

/// Request record for `focusSession`.
#[derive(Debug, Clone, Default)]
pub struct FocusParams {
    pub project_path: Option<PathBuf>,
    pub tag: String,
}

/// Request record for `killProcessInSession`.
#[derive(Debug, Clone, Default)]
pub struct KillParams {
    pub project_path: Option<PathBuf>,
    pub tag: String,
    pub focus: FocusPreference,
}

/// Result of one `executeCommand` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteResult {
    pub session: SessionInfo,
    pub output: String,
    /// `Some(0)` when the completion marker was observed; `None` when the
    /// command timed out or was submitted in background mode.
    pub exit_code: Option<i32>,
    pub pid: Option<u32>,
    pub killed_by_timeout: bool,
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
