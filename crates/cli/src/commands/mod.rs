// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod exec;
pub mod focus;
pub mod kill;
pub mod read;
pub mod sessions;

use td_backends::{select, Backend, TerminalSurface};
use td_bridge::{preflight, OsaScript};
use td_core::{AppConfig, DriverError};
use td_engine::Orchestrator;
use td_procs::{KillSender, PsProber};

pub type Driver = Orchestrator<Backend<OsaScript>, PsProber, KillSender>;

/// Reject a malformed tag before the permission preflight ever runs.
pub fn ensure_tag(tag: &str) -> Result<(), DriverError> {
    if td_core::valid_tag(tag) {
        Ok(())
    } else {
        Err(DriverError::InvalidParams(format!(
            "tag {:?} must be 1-40 characters of [A-Za-z0-9_-]",
            tag
        )))
    }
}

/// Build the orchestrator for one invocation.
///
/// Backend selection runs before the permission preflight so an unsupported
/// application name fails as a configuration error without ever touching
/// `osascript`.
pub async fn driver(config: &AppConfig) -> Result<Driver, DriverError> {
    let runner = OsaScript::new();
    let backend = select(&config.app, runner.clone(), config.profile.clone())?;
    let app = backend.app_name().to_string();
    preflight(&runner, &app)
        .await
        .map_err(|e| e.into_driver(&app))?;
    Ok(Orchestrator::new(
        backend,
        PsProber::new(),
        KillSender::new(),
        config.clone(),
    ))
}
