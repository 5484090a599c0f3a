// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `td focus` - bring a session's window and tab to the foreground

use crate::output::{print_focus, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use td_core::{AppConfig, FocusParams};

#[derive(Args, Debug)]
pub struct FocusArgs {
    /// Session tag
    #[arg(long)]
    pub tag: String,

    /// Project directory the session belongs to
    #[arg(long)]
    pub project: Option<PathBuf>,
}

pub async fn handle(args: FocusArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    super::ensure_tag(&args.tag)?;
    let driver = super::driver(config).await?;
    let session = driver
        .focus(FocusParams {
            project_path: args.project.clone(),
            tag: args.tag.clone(),
        })
        .await?;
    print_focus(&session, format)
}
