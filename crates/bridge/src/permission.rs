// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Automation permission preflight
//!
//! The first Apple event sent to an application triggers the one-time
//! automation consent prompt; if that happens in the middle of a real
//! operation the script fails silently with -1743. The preflight launches the
//! target application and runs a trivial `count windows` first, so the prompt
//! (or the denial) surfaces before any real work. Runs at most once per
//! process per application.

use crate::runner::{ScriptError, ScriptRunner};
use crate::value::applescript_quote;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::LazyLock;

static PREFLIGHTED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Ensure the target application is running and automation access is granted.
///
/// `PermissionDenied` from here short-circuits the whole invocation; callers
/// must not attempt further bridge calls after it.
pub async fn preflight(runner: &dyn ScriptRunner, app: &str) -> Result<(), ScriptError> {
    {
        let mut done = PREFLIGHTED.lock();
        if !done.insert(app.to_string()) {
            return Ok(());
        }
    }

    let quoted = applescript_quote(app);
    let script = format!(
        "tell application {quoted}\n\tlaunch\n\tcount windows\nend tell"
    );
    match runner.run(&script).await {
        Ok(_) => Ok(()),
        Err(err) => {
            // Allow a later retry in-process if the probe itself failed.
            PREFLIGHTED.lock().remove(app);
            tracing::warn!(app, error = %err, "automation preflight failed");
            Err(err)
        }
    }
}

#[cfg(test)]
#[path = "permission_tests.rs"]
mod tests;
