// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interrupt escalation
//!
//! Clears the foreground process group of a session's tty by escalating
//! SIGINT → SIGTERM → SIGKILL, re-probing after each stage and stopping as
//! soon as the tty goes idle. Signals go to the whole process group so
//! pipelines die together. When no tty or no process group is known, the
//! terminal application's interrupt keystroke is the fallback.

use td_backends::TerminalSurface;
use td_core::{DriverError, SessionInfo, SignalWaits};
use td_procs::{ProcessProber, Signal, SignalSender};
use tracing::{debug, warn};

/// Result of one escalation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The tty's foreground is clear (or was never occupied).
    Stopped,
    /// The occupant survived the full escalation sequence.
    StillBusy,
}

/// Escalate signals against the session's foreground process group until the
/// tty is idle or the sequence is exhausted.
///
/// The wait triple differs between callers: reuse of a busy session is
/// impatient, an explicit kill request waits longer at each stage.
pub async fn interrupt_session<B, P, S>(
    surface: &B,
    prober: &P,
    sender: &S,
    session: &SessionInfo,
    waits: SignalWaits,
) -> Result<Outcome, DriverError>
where
    B: TerminalSurface,
    P: ProcessProber,
    S: SignalSender,
{
    let Some(tty) = session.effective_tty() else {
        // Without a tty there is nothing to probe or signal; type the
        // interrupt keystroke and trust the terminal to deliver it.
        warn!(
            session = %session.identifier,
            "no tty known, falling back to interrupt keystroke"
        );
        surface.send_interrupt(&session.window_id, &session.tab).await?;
        tokio::time::sleep(waits.sigint).await;
        return Ok(Outcome::Stopped);
    };

    let initial = match prober.foreground(tty).await {
        Ok(None) => return Ok(Outcome::Stopped),
        Ok(Some(process)) => process,
        Err(err) => {
            // Introspection failed, so no process group can be targeted;
            // the keystroke is the only lever left.
            warn!(tty, error = %err, "process probe failed, falling back to interrupt keystroke");
            return keystroke_fallback(surface, prober, session, tty, waits.sigint).await;
        }
    };
    debug!(
        session = %session.identifier,
        pgid = initial.pgid,
        command = %initial.command,
        "interrupting foreground process group"
    );

    let mut pgid = initial.pgid;
    let stages = [
        (Signal::Int, waits.sigint),
        (Signal::Term, waits.sigterm),
        (Signal::Kill, waits.sigkill),
    ];
    for (signal, wait) in stages {
        if let Err(err) = sender.send(pgid, signal).await {
            // The group may already be gone; the re-probe below decides.
            warn!(pgid, %signal, error = %err, "signal delivery failed");
            if signal == Signal::Int {
                if let Err(err) = surface
                    .send_interrupt(&session.window_id, &session.tab)
                    .await
                {
                    warn!(error = %err, "interrupt keystroke fallback failed");
                }
            }
        }
        tokio::time::sleep(wait).await;
        match prober.foreground(tty).await {
            Ok(None) => return Ok(Outcome::Stopped),
            // A successor may have taken over the tty; retarget.
            Ok(Some(survivor)) => pgid = survivor.pgid,
            Err(err) => {
                warn!(tty, error = %err, "process probe failed mid-escalation");
                return keystroke_fallback(surface, prober, session, tty, waits.sigint).await;
            }
        }
    }

    // Signals did not clear the tty; last resort is the keystroke.
    keystroke_fallback(surface, prober, session, tty, waits.sigint).await
}

/// Type the terminal's interrupt keystroke and decide the outcome from a
/// best-effort recheck. Used when no process group is known, when signals
/// did not clear the tty, and when introspection itself fails.
async fn keystroke_fallback<B, P>(
    surface: &B,
    prober: &P,
    session: &SessionInfo,
    tty: &str,
    wait: std::time::Duration,
) -> Result<Outcome, DriverError>
where
    B: TerminalSurface,
    P: ProcessProber,
{
    if let Err(err) = surface
        .send_interrupt(&session.window_id, &session.tab)
        .await
    {
        warn!(error = %err, "interrupt keystroke fallback failed");
    }
    tokio::time::sleep(wait).await;
    match prober.foreground(tty).await {
        Ok(None) => Ok(Outcome::Stopped),
        Ok(Some(_)) => Ok(Outcome::StillBusy),
        Err(err) => {
            warn!(tty, error = %err, "post-keystroke recheck failed, assuming stopped");
            Ok(Outcome::Stopped)
        }
    }
}

#[cfg(test)]
#[path = "interrupt_tests.rs"]
mod tests;
