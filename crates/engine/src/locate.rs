// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session lookup and placement
//!
//! Lookup is stateless: every call re-enumerates the terminal application and
//! re-decodes titles. Placement decides where a session that does not exist
//! yet should live — a new window, or a tab inside an existing one —
//! according to the configured grouping policy.

use std::time::Duration;
use td_backends::{RawSession, TerminalSurface};
use td_core::{
    decode_title, encode_title, DriverError, GroupingPolicy, SessionInfo, NO_PROJECT,
};

/// Settle delay after window/tab creation, before the shell is used.
const CREATE_SETTLE: Duration = Duration::from_millis(250);

/// Where a new session should be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    NewWindow,
    NewTab { window_id: String },
}

/// A located or freshly created session.
#[derive(Debug, Clone)]
pub struct Located {
    pub session: SessionInfo,
    /// Creation happened and produced a brand-new window, which is already
    /// clean — the pre-command screen clear can be skipped.
    pub fresh_window: bool,
    pub created: bool,
}

/// Decode an enumerated slot into a managed session, if its title carries
/// the marker and a tag.
pub fn decode_raw(raw: &RawSession) -> Option<SessionInfo> {
    let decoded = decode_title(&raw.title)?;
    let tag = decoded.tag?;
    let project_hash = decoded.project_hash.unwrap_or_else(|| NO_PROJECT.to_string());
    let hash_label = if project_hash == NO_PROJECT {
        "none".to_string()
    } else {
        project_hash.chars().take(8).collect()
    };
    Some(SessionInfo {
        identifier: format!("{}/{}", hash_label, tag),
        project_hash,
        tag,
        title: raw.title.clone(),
        tty: raw.tty.clone(),
        is_busy: false,
        window_id: raw.window_id.clone(),
        tab: raw.tab.clone(),
        tty_from_title: decoded.tty,
        pid_from_title: decoded.pid,
    })
}

/// Exact `(project_hash, tag)` match; first in enumeration order wins.
///
/// Fuzzy fallback: a request without a project path additionally accepts a
/// tag-only match when exactly one session carries that tag, so `td read
/// --tag build` finds the session created from inside the project directory.
pub fn find_session<'a>(
    sessions: &'a [SessionInfo],
    project_hash: &str,
    tag: &str,
) -> Option<&'a SessionInfo> {
    if let Some(exact) = sessions
        .iter()
        .find(|s| s.project_hash == project_hash && s.tag == tag)
    {
        return Some(exact);
    }
    if project_hash == NO_PROJECT {
        let mut tagged = sessions.iter().filter(|s| s.tag == tag);
        if let (Some(only), None) = (tagged.next(), tagged.next()) {
            return Some(only);
        }
    }
    None
}

/// Decide where a new session goes under the grouping policy.
///
/// When several windows host the same project, the first in enumeration
/// order wins; the terminal application guarantees no particular order.
pub fn plan_placement(
    policy: GroupingPolicy,
    sessions: &[SessionInfo],
    frontmost: Option<&str>,
    project_hash: &str,
) -> Placement {
    if policy == GroupingPolicy::Off {
        return Placement::NewWindow;
    }
    if project_hash != NO_PROJECT {
        if let Some(hit) = sessions.iter().find(|s| s.project_hash == project_hash) {
            return Placement::NewTab {
                window_id: hit.window_id.clone(),
            };
        }
    }
    if policy == GroupingPolicy::Smart {
        if let Some(front) = frontmost {
            return Placement::NewTab {
                window_id: front.to_string(),
            };
        }
    }
    Placement::NewWindow
}

/// Find the session for `(project_hash, tag)`, creating it when permitted.
pub async fn locate_or_create<B: TerminalSurface>(
    surface: &B,
    sessions: &[SessionInfo],
    project_hash: &str,
    tag: &str,
    policy: GroupingPolicy,
    allow_create: bool,
) -> Result<Located, DriverError> {
    if let Some(found) = find_session(sessions, project_hash, tag) {
        return Ok(Located {
            session: found.clone(),
            fresh_window: false,
            created: false,
        });
    }
    if !allow_create {
        return Err(DriverError::SessionNotFound(format!(
            "no session for tag {:?} (project hash {})",
            tag, project_hash
        )));
    }

    let placement = plan_placement(policy, sessions, surface.frontmost_window().await?.as_deref(), project_hash);
    let title = encode_title(project_hash, tag, None, None);
    let created = match &placement {
        Placement::NewWindow => surface.create_window(&title).await?,
        Placement::NewTab { window_id } => surface.create_tab(window_id, &title).await?,
    };
    tokio::time::sleep(CREATE_SETTLE).await;

    // Re-encode with the tty discovered during creation so a later
    // invocation can fall back on it without live introspection.
    let final_title = encode_title(project_hash, tag, created.tty.as_deref(), None);
    surface
        .set_title(&created.window_id, &created.tab, &final_title)
        .await?;

    let session = decode_raw(&RawSession {
        title: final_title,
        ..created
    })
    .ok_or_else(|| {
        DriverError::Internal("freshly created session has an undecodable title".to_string())
    })?;

    Ok(Located {
        session,
        fresh_window: placement == Placement::NewWindow,
        created: true,
    })
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;
