// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Orchestrator facade
//!
//! One [`Orchestrator`] per invocation, generic over the three seams (terminal
//! surface, process prober, signal sender) so the whole flow runs against
//! fakes in tests. Exposes the five public operations: list, execute, read,
//! focus, kill. Every operation re-enumerates the terminal application; no
//! session state is held between calls.

use crate::execute::{
    await_marker, generate_marker, remove_log, sample_background, wrap_background,
    wrap_foreground, PollResult,
};
use crate::interrupt::{interrupt_session, Outcome};
use crate::locate::{find_session, locate_or_create};
use crate::log_paths::{exec_log_path, new_exec_log_id};
use std::path::Path;
use td_backends::{tail_lines, TerminalSurface};
use td_core::{
    project_hash, valid_tag, AppConfig, DriverError, ExecuteParams, ExecuteResult, ExecutionMode,
    FocusParams, FocusPreference, KillParams, ReadParams, SessionInfo,
};
use td_procs::{ForegroundProcess, ProcessProber, Signal, SignalSender};
use tracing::{debug, info, warn};

pub struct Orchestrator<B, P, S> {
    surface: B,
    prober: P,
    sender: S,
    config: AppConfig,
}

impl<B, P, S> Orchestrator<B, P, S>
where
    B: TerminalSurface,
    P: ProcessProber,
    S: SignalSender,
{
    pub fn new(surface: B, prober: P, sender: S, config: AppConfig) -> Self {
        Self {
            surface,
            prober,
            sender,
            config,
        }
    }

    /// Enumerate managed sessions, with a live busy probe per session.
    pub async fn list_sessions(
        &self,
        tag_filter: Option<&str>,
    ) -> Result<Vec<SessionInfo>, DriverError> {
        let mut sessions = self.enumerate_decoded().await?;
        if let Some(tag) = tag_filter {
            sessions.retain(|s| s.tag == tag);
        }
        for session in &mut sessions {
            session.is_busy = self.probe_busy(session).await;
        }
        Ok(sessions)
    }

    /// Run a command in the session for `(project, tag)`, creating the
    /// session first when it does not exist.
    pub async fn execute(&self, params: ExecuteParams) -> Result<ExecuteResult, DriverError> {
        ensure_tag(&params.tag)?;
        let hash = project_hash(params.project_path.as_deref());
        let sessions = self.enumerate_decoded().await?;
        let located = locate_or_create(
            &self.surface,
            &sessions,
            &hash,
            &params.tag,
            self.config.grouping,
            true,
        )
        .await?;
        let session = located.session;
        let focus_wanted = params.focus.resolve(self.config.default_focus);

        let command = params
            .command
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        let Some(command) = command else {
            // Ensure-only: the session exists, nothing to run.
            if focus_wanted {
                self.surface.focus(&session.window_id, &session.tab).await?;
            }
            return Ok(ExecuteResult {
                session,
                output: String::new(),
                exit_code: Some(0),
                pid: None,
                killed_by_timeout: false,
            });
        };

        if !located.created {
            if let Some(occupant) = self.current_foreground(&session).await? {
                if !self.config.reuse_busy {
                    return Err(DriverError::Busy(occupant_label(&occupant)));
                }
                info!(
                    session = %session.identifier,
                    occupant = %occupant.command,
                    "session busy, interrupting before reuse"
                );
                let outcome = interrupt_session(
                    &self.surface,
                    &self.prober,
                    &self.sender,
                    &session,
                    self.config.busy_waits,
                )
                .await?;
                if outcome == Outcome::StillBusy {
                    return Err(DriverError::Busy(format!(
                        "{} survived interrupt escalation",
                        occupant_label(&occupant)
                    )));
                }
            }
        }

        // A brand-new window is already clean.
        if !located.fresh_window {
            self.surface
                .clear_screen(&session.window_id, &session.tab)
                .await?;
        }

        let log = exec_log_path(&self.config.log_dir, &new_exec_log_id());
        if let Some(parent) = log.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let lines = params.lines.unwrap_or(self.config.default_lines);
        let result = match params.mode {
            ExecutionMode::Foreground => {
                self.run_foreground(&session, command, &log, params.timeout, lines)
                    .await?
            }
            ExecutionMode::Background => {
                self.run_background(&session, command, &log, params.timeout, lines)
                    .await?
            }
        };

        if focus_wanted {
            self.surface.focus(&session.window_id, &session.tab).await?;
        }
        Ok(ExecuteResult { session, ..result })
    }

    /// Capture the tail of a session's visible buffer.
    pub async fn read(&self, params: ReadParams) -> Result<(SessionInfo, String), DriverError> {
        ensure_tag(&params.tag)?;
        let session = self
            .locate_existing(params.project_path.as_deref(), &params.tag)
            .await?;
        let lines = params.lines.unwrap_or(self.config.default_lines);
        let output = self
            .surface
            .read_buffer(&session.window_id, &session.tab, lines)
            .await?;
        // Reading is passive; only an explicit request steals focus.
        if params.focus == FocusPreference::Force {
            self.surface.focus(&session.window_id, &session.tab).await?;
        }
        Ok((session, output))
    }

    /// Bring a session's window and tab to the foreground.
    pub async fn focus(&self, params: FocusParams) -> Result<SessionInfo, DriverError> {
        ensure_tag(&params.tag)?;
        let session = self
            .locate_existing(params.project_path.as_deref(), &params.tag)
            .await?;
        self.surface.focus(&session.window_id, &session.tab).await?;
        Ok(session)
    }

    /// Kill whatever occupies the session's foreground, then clear the
    /// screen. Returns a human-readable account of what happened.
    pub async fn kill(&self, params: KillParams) -> Result<(SessionInfo, String), DriverError> {
        ensure_tag(&params.tag)?;
        let session = self
            .locate_existing(params.project_path.as_deref(), &params.tag)
            .await?;
        if params.focus == FocusPreference::Force {
            self.surface.focus(&session.window_id, &session.tab).await?;
        }

        let occupant = self.current_foreground(&session).await?;
        let outcome = interrupt_session(
            &self.surface,
            &self.prober,
            &self.sender,
            &session,
            self.config.kill_waits,
        )
        .await?;

        // The screen is cleared whether or not the occupant died, so the
        // session is visually reset either way.
        if let Err(err) = self
            .surface
            .clear_screen(&session.window_id, &session.tab)
            .await
        {
            warn!(error = %err, "could not clear screen after kill");
        }

        match (outcome, occupant) {
            (Outcome::StillBusy, occupant) => Err(DriverError::Busy(format!(
                "{} survived interrupt escalation",
                occupant.as_ref().map(occupant_label).unwrap_or_else(|| "foreground process".to_string())
            ))),
            (Outcome::Stopped, Some(occupant)) => Ok((
                session,
                format!("interrupted {}", occupant_label(&occupant)),
            )),
            (Outcome::Stopped, None) => {
                Ok((session, "no foreground process to kill".to_string()))
            }
        }
    }

    async fn run_foreground(
        &self,
        session: &SessionInfo,
        command: &str,
        log: &Path,
        timeout: Option<std::time::Duration>,
        lines: u32,
    ) -> Result<ExecuteResult, DriverError> {
        let marker = generate_marker();
        let wrapped = wrap_foreground(command, log, &marker);
        self.surface
            .type_text(&session.window_id, &session.tab, &wrapped)
            .await?;

        let timeout = timeout.unwrap_or(self.config.foreground_timeout);
        match await_marker(log, &marker, timeout).await {
            PollResult::Completed { output } => {
                remove_log(log).await;
                Ok(ExecuteResult {
                    session: session.clone(),
                    output: tail_lines(&output, lines),
                    exit_code: Some(0),
                    pid: None,
                    killed_by_timeout: false,
                })
            }
            PollResult::TimedOut { partial } => {
                // Log retained for post-mortem inspection.
                let pid = self.kill_on_timeout(session).await;
                Ok(ExecuteResult {
                    session: session.clone(),
                    output: tail_lines(&partial, lines),
                    exit_code: None,
                    pid,
                    killed_by_timeout: true,
                })
            }
        }
    }

    async fn run_background(
        &self,
        session: &SessionInfo,
        command: &str,
        log: &Path,
        timeout: Option<std::time::Duration>,
        lines: u32,
    ) -> Result<ExecuteResult, DriverError> {
        let wrapped = wrap_background(command, log);
        self.surface
            .type_text(&session.window_id, &session.tab, &wrapped)
            .await?;

        let startup = timeout.unwrap_or(self.config.background_startup);
        let output = sample_background(log, startup).await;
        // The process runs unsupervised from here; the log is ours to drop.
        remove_log(log).await;

        let pid = match self.current_foreground(session).await {
            Ok(fg) => fg.map(|p| p.pid),
            Err(err) => {
                warn!(error = %err, "could not probe background process");
                None
            }
        };
        Ok(ExecuteResult {
            session: session.clone(),
            output: tail_lines(&output, lines),
            exit_code: None,
            pid,
            killed_by_timeout: false,
        })
    }

    /// Best-effort SIGKILL of the timed-out command's process group.
    async fn kill_on_timeout(&self, session: &SessionInfo) -> Option<u32> {
        let occupant = match self.current_foreground(session).await {
            Ok(fg) => fg,
            Err(err) => {
                warn!(error = %err, "could not probe timed-out process");
                return None;
            }
        };
        let occupant = occupant?;
        debug!(pgid = occupant.pgid, "killing timed-out process group");
        if let Err(err) = self.sender.send(occupant.pgid, Signal::Kill).await {
            warn!(pgid = occupant.pgid, error = %err, "timeout kill failed");
        }
        Some(occupant.pid)
    }

    async fn enumerate_decoded(&self) -> Result<Vec<SessionInfo>, DriverError> {
        let raw = self.surface.enumerate().await?;
        Ok(raw.iter().filter_map(crate::locate::decode_raw).collect())
    }

    async fn locate_existing(
        &self,
        project_path: Option<&Path>,
        tag: &str,
    ) -> Result<SessionInfo, DriverError> {
        let hash = project_hash(project_path);
        let sessions = self.enumerate_decoded().await?;
        let mut session = find_session(&sessions, &hash, tag)
            .cloned()
            .ok_or_else(|| {
                DriverError::SessionNotFound(format!("no session for tag {:?}", tag))
            })?;
        session.is_busy = self.probe_busy(&session).await;
        Ok(session)
    }

    async fn current_foreground(
        &self,
        session: &SessionInfo,
    ) -> Result<Option<ForegroundProcess>, DriverError> {
        let Some(tty) = session.effective_tty() else {
            return Ok(None);
        };
        self.prober
            .foreground(tty)
            .await
            .map_err(|e| DriverError::Internal(e.to_string()))
    }

    /// Busy probe that degrades to "idle" on probe failure: listing must not
    /// fail because one tty disappeared mid-enumeration.
    async fn probe_busy(&self, session: &SessionInfo) -> bool {
        let Some(tty) = session.effective_tty() else {
            return false;
        };
        match self.prober.busy(tty).await {
            Ok(busy) => busy,
            Err(err) => {
                warn!(tty, error = %err, "busy probe failed");
                false
            }
        }
    }
}

fn ensure_tag(tag: &str) -> Result<(), DriverError> {
    if valid_tag(tag) {
        Ok(())
    } else {
        Err(DriverError::InvalidParams(format!(
            "tag {:?} must be 1-40 characters of [A-Za-z0-9_-]",
            tag
        )))
    }
}

fn occupant_label(p: &ForegroundProcess) -> String {
    format!("{} (pgid {})", p.command, p.pgid)
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
