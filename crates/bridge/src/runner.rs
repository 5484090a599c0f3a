// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script execution against the target application

use crate::subprocess::{run_with_timeout, OSASCRIPT_TIMEOUT};
use crate::value::{parse_source, ScriptValue};
use async_trait::async_trait;
use td_core::DriverError;
use thiserror::Error;
use tokio::process::Command;

/// Numeric code AppleEvents return when automation access is not authorized.
const ERR_AE_EVENT_NOT_PERMITTED: i64 = -1743;

/// Errors from the scripting bridge.
///
/// Every variant except `TypeConversion` carries the originating script text
/// so a failure in a deeply nested call is diagnosable from the log alone.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script compilation failed: {message}")]
    Compilation { message: String, script: String },

    #[error("script execution failed: {message} (code {code})")]
    Execution {
        message: String,
        code: i64,
        script: String,
    },

    /// Automation access denied (code -1743). Requires user action, not retry.
    #[error("automation permission denied")]
    PermissionDenied { script: String },

    #[error("bridge I/O failure: {0}")]
    Io(String),

    #[error("type conversion error: {0}")]
    TypeConversion(String),
}

impl ScriptError {
    /// Lift into the unified taxonomy, naming the application that denied
    /// permission.
    pub fn into_driver(self, app: &str) -> DriverError {
        match self {
            ScriptError::Compilation { message, script } => {
                DriverError::ScriptCompile { message, script }
            }
            ScriptError::Execution {
                message,
                code,
                script,
            } => DriverError::ScriptExecution {
                message,
                code,
                script,
            },
            ScriptError::PermissionDenied { .. } => DriverError::PermissionDenied {
                app: app.to_string(),
            },
            ScriptError::Io(message) => DriverError::Internal(message),
            ScriptError::TypeConversion(message) => DriverError::TypeConversion(message),
        }
    }
}

/// Executes automation scripts and returns typed results.
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    async fn run(&self, script: &str) -> Result<ScriptValue, ScriptError>;
}

/// Real bridge: shells out to `osascript -s s`.
///
/// `-s s` makes osascript print results in source form, which
/// [`parse_source`] understands, instead of the lossy human-readable form.
#[derive(Clone, Default)]
pub struct OsaScript;

impl OsaScript {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScriptRunner for OsaScript {
    async fn run(&self, script: &str) -> Result<ScriptValue, ScriptError> {
        let mut cmd = Command::new("osascript");
        cmd.args(["-s", "s", "-e", script]);
        let output = run_with_timeout(cmd, OSASCRIPT_TIMEOUT, "osascript")
            .await
            .map_err(ScriptError::Io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(script, stderr = %stderr, "osascript failed");
            return Err(classify_failure(&stderr, script));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_source(&stdout)
    }
}

/// Classify an osascript stderr dump into a structured error.
///
/// osascript reports compile problems as `... syntax error: ... (-2741)` and
/// runtime problems as `... execution error: <message> (<code>)`.
fn classify_failure(stderr: &str, script: &str) -> ScriptError {
    let stderr = stderr.trim();
    if stderr.contains("syntax error") {
        return ScriptError::Compilation {
            message: stderr.to_string(),
            script: script.to_string(),
        };
    }

    let (message, code) = split_message_and_code(stderr);
    if code == ERR_AE_EVENT_NOT_PERMITTED {
        return ScriptError::PermissionDenied {
            script: script.to_string(),
        };
    }
    ScriptError::Execution {
        message,
        code,
        script: script.to_string(),
    }
}

/// Split `"...execution error: msg (-1743)"` into message and numeric code.
///
/// Falls back to code 1 when no trailing `(N)` is present.
fn split_message_and_code(stderr: &str) -> (String, i64) {
    let body = stderr
        .split_once("execution error:")
        .map(|(_, rest)| rest.trim())
        .unwrap_or(stderr);

    if let Some(open) = body.rfind('(') {
        if let Some(inner) = body[open + 1..].strip_suffix(')') {
            if let Ok(code) = inner.trim().parse::<i64>() {
                return (body[..open].trim().to_string(), code);
            }
        }
    }
    (body.to_string(), 1)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
