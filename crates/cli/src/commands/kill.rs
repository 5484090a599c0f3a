// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `td kill` - interrupt whatever occupies a session's foreground

use crate::output::{print_kill, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use td_core::{AppConfig, FocusPreference, KillParams};

#[derive(Args, Debug)]
pub struct KillArgs {
    /// Session tag
    #[arg(long)]
    pub tag: String,

    /// Project directory the session belongs to
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Bring the session forward before interrupting
    #[arg(long)]
    pub focus: bool,
}

pub async fn handle(args: KillArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    super::ensure_tag(&args.tag)?;
    let driver = super::driver(config).await?;
    let (session, detail) = driver
        .kill(KillParams {
            project_path: args.project.clone(),
            tag: args.tag.clone(),
            focus: if args.focus {
                FocusPreference::Force
            } else {
                FocusPreference::Default
            },
        })
        .await?;
    print_kill(&session, &detail, format)
}
