// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation execution log paths
//!
//! Every command submission owns one log file, named with a fresh UUID so
//! concurrent invocations can never collide:
//!   `<log_dir>/exec/<uuid>.log`
//! The file is deleted on foreground success and after background sampling,
//! and retained on foreground timeout for post-mortem inspection.

use std::path::{Path, PathBuf};

/// Fresh unique id for one execution's log file.
pub fn new_exec_log_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Build the path to an execution log file.
///
/// Structure: `{log_dir}/exec/{id}.log`
pub fn exec_log_path(log_dir: &Path, id: &str) -> PathBuf {
    log_dir.join("exec").join(format!("{}.log", id))
}

#[cfg(test)]
#[path = "log_paths_tests.rs"]
mod tests;
