// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `td read` - capture the tail of a session's buffer

use crate::output::{print_read, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use td_core::{AppConfig, FocusPreference, ReadParams};

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Session tag
    #[arg(long)]
    pub tag: String,

    /// Project directory the session belongs to
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Number of lines to capture from the end of the buffer
    #[arg(long)]
    pub lines: Option<u32>,

    /// Also bring the session window forward
    #[arg(long)]
    pub focus: bool,
}

pub async fn handle(args: ReadArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    super::ensure_tag(&args.tag)?;
    let driver = super::driver(config).await?;
    let params = ReadParams {
        project_path: args.project.clone(),
        tag: args.tag.clone(),
        lines: args.lines,
        focus: if args.focus {
            FocusPreference::Force
        } else {
            FocusPreference::Default
        },
    };
    let (session, output) = driver.read(params).await?;
    print_read(&session, &output, format)
}
