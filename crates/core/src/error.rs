// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unified error taxonomy and process exit codes

use thiserror::Error;

/// Exit code for a successful invocation.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when the user's command ran to completion with nonzero status.
///
/// Not a [`DriverError`] variant: a command that finishes with a bad status is
/// still a successful orchestration, so the CLI maps it from
/// [`crate::ExecuteResult::exit_code`] rather than from an error.
pub const EXIT_COMMAND_FAILED: i32 = 6;

/// Exit code when a foreground command hit its completion timeout.
///
/// Like [`EXIT_COMMAND_FAILED`], mapped by the CLI from a result
/// ([`crate::ExecuteResult::killed_by_timeout`]) rather than from an error;
/// it shares its value with the [`DriverError::Timeout`] row of the table.
pub const EXIT_TIMEOUT: i32 = 7;

/// Errors surfaced by the session orchestration engine.
///
/// Every variant resolves to exactly one process exit code via
/// [`DriverError::exit_code`]; the table is part of the external contract.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Invalid caller-supplied parameters (bad tag, missing command, ...).
    #[error("invalid parameter: {0}")]
    InvalidParams(String),

    /// Unsupported or inconsistent configuration (unknown terminal app).
    #[error("configuration error: {0}")]
    Config(String),

    /// The automation script failed to compile.
    #[error("script compilation failed: {message}\nscript:\n{script}")]
    ScriptCompile { message: String, script: String },

    /// The automation script compiled but failed while running.
    #[error("script execution failed: {message} (code {code})\nscript:\n{script}")]
    ScriptExecution {
        message: String,
        code: i64,
        script: String,
    },

    /// The OS refused automation access to the target application.
    ///
    /// Requires user action (System Settings > Privacy & Security >
    /// Automation), so it is surfaced distinctly from execution failures.
    #[error("automation permission denied for \"{app}\": grant access under Privacy & Security > Automation and retry")]
    PermissionDenied { app: String },

    /// No managed session matched the requested project/tag.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// The session is occupied by a foreground process that could not be
    /// (or was not allowed to be) interrupted.
    #[error("session busy: {0}")]
    Busy(String),

    /// A blocking operation exceeded its wall-clock deadline.
    ///
    /// A foreground command timing out is NOT this error: that is reported
    /// as a normal result with `killed_by_timeout` set, and the CLI maps it
    /// to [`EXIT_TIMEOUT`]. This variant is for engine operations that
    /// cannot produce a partial result.
    #[error("timed out: {0}")]
    Timeout(String),

    /// The backend or bridge violated its contract (missing identifiers,
    /// malformed enumeration rows).
    #[error("internal error: {0}")]
    Internal(String),

    /// The bridge returned a value of an unexpected shape.
    #[error("type conversion error: {0}")]
    TypeConversion(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// Map this error onto the process exit code table.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::InvalidParams(_) | DriverError::Io(_) => 1,
            DriverError::Config(_) => 2,
            DriverError::ScriptCompile { .. } | DriverError::ScriptExecution { .. } => 3,
            DriverError::SessionNotFound(_) => 4,
            DriverError::Busy(_) => 5,
            DriverError::Timeout(_) => 7,
            DriverError::Internal(_) | DriverError::TypeConversion(_) => 8,
            DriverError::PermissionDenied { .. } => 9,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
