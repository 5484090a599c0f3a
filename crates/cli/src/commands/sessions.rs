// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `td sessions` - list managed sessions

use crate::output::{print_sessions, OutputFormat};
use anyhow::Result;
use clap::Args;
use td_core::AppConfig;

#[derive(Args, Debug)]
pub struct SessionsArgs {
    /// Only show sessions with this tag
    #[arg(long)]
    pub tag: Option<String>,
}

pub async fn handle(args: SessionsArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let driver = super::driver(config).await?;
    let sessions = driver.list_sessions(args.tag.as_deref()).await?;
    print_sessions(&sessions, format)
}
