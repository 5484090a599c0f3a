// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session identity codec
//!
//! A session's identity is encoded into its window/tab title so that it
//! survives process restarts: every invocation is a fresh process that
//! re-discovers sessions purely by decoding titles it finds in the terminal
//! application. The format is a fixed marker followed by `KEY=value` fields
//! joined by `::`:
//!
//! ```text
//! TD_SESSION::PROJECT_HASH=0a1b2c3d4e5f6071::TAG=build::TTY_PATH=/dev/ttys003::PID=812::
//! ```
//!
//! Other tooling may rely on this format byte-for-byte; change nothing here
//! without bumping the marker.

/// Marker prefix identifying a managed session title.
pub const TITLE_MARKER: &str = "TD_SESSION::";

const FIELD_SEP: &str = "::";
const KEY_PROJECT_HASH: &str = "PROJECT_HASH=";
const KEY_TAG: &str = "TAG=";
const KEY_TTY: &str = "TTY_PATH=";
const KEY_PID: &str = "PID=";

/// Maximum accepted tag length.
pub const MAX_TAG_LEN: usize = 40;

/// Fields recovered from a managed title.
///
/// All fields are optional on the decode side; lookup requires
/// `project_hash` and `tag`, the rest is best-effort fallback data for when
/// live process introspection is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTitle {
    pub project_hash: Option<String>,
    pub tag: Option<String>,
    pub tty: Option<String>,
    pub pid: Option<u32>,
}

/// Encode a session identity into a title string.
///
/// `tty` and `pid` are omitted when unknown. The result always ends with the
/// field separator so that trailing text appended later (e.g. by the terminal
/// application itself) never merges into the last field.
pub fn encode_title(project_hash: &str, tag: &str, tty: Option<&str>, pid: Option<u32>) -> String {
    let mut title = String::with_capacity(64);
    title.push_str(TITLE_MARKER);
    title.push_str(KEY_PROJECT_HASH);
    title.push_str(project_hash);
    title.push_str(FIELD_SEP);
    title.push_str(KEY_TAG);
    title.push_str(tag);
    title.push_str(FIELD_SEP);
    if let Some(tty) = tty {
        title.push_str(KEY_TTY);
        title.push_str(tty);
        title.push_str(FIELD_SEP);
    }
    if let Some(pid) = pid {
        title.push_str(KEY_PID);
        title.push_str(&pid.to_string());
        title.push_str(FIELD_SEP);
    }
    title
}

/// Decode a title back into its identity fields.
///
/// Returns `None` when the marker is absent (the title does not belong to a
/// managed session — fail closed, never guess). Trailing text after the final
/// separator and unknown `KEY=` fields are tolerated.
pub fn decode_title(title: &str) -> Option<DecodedTitle> {
    let start = title.find(TITLE_MARKER)?;
    let fields = &title[start + TITLE_MARKER.len()..];

    let mut decoded = DecodedTitle::default();
    for field in fields.split(FIELD_SEP) {
        if let Some(value) = field.strip_prefix(KEY_PROJECT_HASH) {
            decoded.project_hash = Some(value.to_string());
        } else if let Some(value) = field.strip_prefix(KEY_TAG) {
            decoded.tag = Some(value.to_string());
        } else if let Some(value) = field.strip_prefix(KEY_TTY) {
            decoded.tty = Some(value.to_string());
        } else if let Some(value) = field.strip_prefix(KEY_PID) {
            decoded.pid = value.parse().ok();
        }
        // Unknown fields and trailing junk fall through untouched.
    }
    Some(decoded)
}

/// Check a tag against the accepted grammar: `[A-Za-z0-9_-]{1,40}`.
pub fn valid_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag.len() <= MAX_TAG_LEN
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;
