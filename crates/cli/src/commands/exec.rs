// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `td exec` - run a command in a session, creating it when needed

use crate::exit_error::ExitError;
use crate::output::{print_execute, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use td_core::{
    AppConfig, ExecuteParams, ExecutionMode, FocusPreference, EXIT_COMMAND_FAILED, EXIT_TIMEOUT,
};

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Session tag
    #[arg(long)]
    pub tag: String,

    /// Project directory (session identity includes its hash)
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Submit detached; return after an initial output sample
    #[arg(long)]
    pub background: bool,

    /// Completion timeout in milliseconds (startup window in background mode)
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,

    /// Limit returned output to the last N lines
    #[arg(long)]
    pub lines: Option<u32>,

    /// Bring the session window forward afterwards
    #[arg(long, overrides_with = "no_focus")]
    pub focus: bool,

    /// Leave the current window in front
    #[arg(long)]
    pub no_focus: bool,

    /// Shell command to run; omit to just ensure the session exists
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl ExecArgs {
    pub fn focus_preference(&self) -> FocusPreference {
        if self.focus {
            FocusPreference::Force
        } else if self.no_focus {
            FocusPreference::Suppress
        } else {
            FocusPreference::Default
        }
    }

    pub fn to_params(&self) -> ExecuteParams {
        let command = Some(self.command.join(" ")).filter(|c| !c.is_empty());
        ExecuteParams {
            project_path: self.project.clone(),
            tag: self.tag.clone(),
            command,
            mode: if self.background {
                ExecutionMode::Background
            } else {
                ExecutionMode::Foreground
            },
            timeout: self.timeout_ms.map(Duration::from_millis),
            lines: self.lines,
            focus: self.focus_preference(),
        }
    }
}

pub async fn handle(args: ExecArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    super::ensure_tag(&args.tag)?;
    let driver = super::driver(config).await?;
    let result = driver.execute(args.to_params()).await?;
    print_execute(&result, format)?;

    if result.killed_by_timeout {
        return Err(ExitError::silent(EXIT_TIMEOUT).into());
    }
    if matches!(result.exit_code, Some(code) if code != 0) {
        return Err(ExitError::silent(EXIT_COMMAND_FAILED).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
