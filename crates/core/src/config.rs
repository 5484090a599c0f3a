// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration
//!
//! One [`AppConfig`] value is built per invocation (environment first, CLI
//! flags layered on top by the caller) and passed explicitly into every
//! component constructor. Nothing reads process-wide mutable state after
//! startup.

use std::path::PathBuf;
use std::time::Duration;

/// Placement policy for newly created sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingPolicy {
    /// Always create a new top-level window.
    Off,
    /// Group tabs into a window that already hosts the same project.
    Project,
    /// Like `Project`, but prefer the frontmost window over a new one when
    /// no project window exists.
    #[default]
    Smart,
}

impl GroupingPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Some(GroupingPolicy::Off),
            "project" => Some(GroupingPolicy::Project),
            "smart" => Some(GroupingPolicy::Smart),
            _ => None,
        }
    }
}

/// Wait durations between the stages of the signal escalation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalWaits {
    pub sigint: Duration,
    pub sigterm: Duration,
    pub sigkill: Duration,
}

impl SignalWaits {
    /// Defaults for interrupting a busy session before reuse.
    pub fn busy_defaults() -> Self {
        Self {
            sigint: Duration::from_millis(2000),
            sigterm: Duration::from_millis(2000),
            sigkill: Duration::from_millis(1000),
        }
    }

    /// Defaults for an explicit kill request (more patient).
    pub fn kill_defaults() -> Self {
        Self {
            sigint: Duration::from_millis(3000),
            sigterm: Duration::from_millis(3000),
            sigkill: Duration::from_millis(2000),
        }
    }
}

/// Complete runtime configuration for one invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Target terminal application name (e.g. "Terminal", "iTerm2").
    pub app: String,
    pub grouping: GroupingPolicy,
    /// Default focus behavior when a request says [`FocusPreference::Default`].
    pub default_focus: bool,
    pub foreground_timeout: Duration,
    /// How long a background submission waits for an initial output sample.
    pub background_startup: Duration,
    /// Escalation waits when clearing a busy session for reuse.
    pub busy_waits: SignalWaits,
    /// Escalation waits for an explicit kill request.
    pub kill_waits: SignalWaits,
    /// When false, a busy session fails fast instead of being interrupted.
    pub reuse_busy: bool,
    pub default_lines: u32,
    pub log_dir: PathBuf,
    /// Backend-specific profile name for new windows/tabs (iTerm2).
    pub profile: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: "Terminal".to_string(),
            grouping: GroupingPolicy::default(),
            default_focus: true,
            foreground_timeout: Duration::from_secs(60),
            background_startup: Duration::from_secs(5),
            busy_waits: SignalWaits::busy_defaults(),
            kill_waits: SignalWaits::kill_defaults(),
            reuse_busy: true,
            default_lines: 100,
            log_dir: default_log_dir(),
            profile: None,
        }
    }
}

impl AppConfig {
    /// Build a config from `TD_*` environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            app: env_string("TD_APP").unwrap_or(defaults.app),
            grouping: env_string("TD_GROUPING")
                .and_then(|s| GroupingPolicy::parse(&s))
                .unwrap_or(defaults.grouping),
            default_focus: env_bool("TD_DEFAULT_FOCUS").unwrap_or(defaults.default_focus),
            foreground_timeout: env_duration_ms("TD_FOREGROUND_TIMEOUT_MS")
                .unwrap_or(defaults.foreground_timeout),
            background_startup: env_duration_ms("TD_BACKGROUND_STARTUP_MS")
                .unwrap_or(defaults.background_startup),
            busy_waits: SignalWaits {
                sigint: env_duration_ms("TD_BUSY_SIGINT_WAIT_MS")
                    .unwrap_or(defaults.busy_waits.sigint),
                sigterm: env_duration_ms("TD_BUSY_SIGTERM_WAIT_MS")
                    .unwrap_or(defaults.busy_waits.sigterm),
                sigkill: env_duration_ms("TD_BUSY_SIGKILL_WAIT_MS")
                    .unwrap_or(defaults.busy_waits.sigkill),
            },
            kill_waits: SignalWaits {
                sigint: env_duration_ms("TD_KILL_SIGINT_WAIT_MS")
                    .unwrap_or(defaults.kill_waits.sigint),
                sigterm: env_duration_ms("TD_KILL_SIGTERM_WAIT_MS")
                    .unwrap_or(defaults.kill_waits.sigterm),
                sigkill: env_duration_ms("TD_KILL_SIGKILL_WAIT_MS")
                    .unwrap_or(defaults.kill_waits.sigkill),
            },
            reuse_busy: env_bool("TD_REUSE_BUSY").unwrap_or(defaults.reuse_busy),
            default_lines: env_string("TD_DEFAULT_LINES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_lines),
            log_dir: env_string("TD_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            profile: env_string("TD_PROFILE"),
        }
    }
}

/// Default log directory: `~/.local/state/td/logs` (XDG state dir when the
/// platform exposes one).
pub fn default_log_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local/state")))
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("td")
        .join("logs")
}

fn env_string(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

fn env_bool(var: &str) -> Option<bool> {
    env_string(var).map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_duration_ms(var: &str) -> Option<Duration> {
    env_string(var)
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
