// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project path hashing
//!
//! Titles carry a stable one-way hash of the project path instead of the raw
//! path: paths can be long, contain the field separator, and leak directory
//! layout into window titles. SHA-256 over the absolute path, truncated to 16
//! hex chars, is stable across process restarts and short enough for a title.

use sha2::{Digest, Sha256};
use std::path::{Component, Path, PathBuf};

/// Sentinel hash for sessions without a project path.
///
/// A fixed word rather than an empty string so that a malformed title with an
/// empty `PROJECT_HASH=` field can never collide with "no project" semantics.
pub const NO_PROJECT: &str = "NO_PROJECT";

const HASH_LEN: usize = 16;

/// Compute the stable project hash for an optional project path.
pub fn project_hash(path: Option<&Path>) -> String {
    match path {
        None => NO_PROJECT.to_string(),
        Some(p) => {
            let abs = absolutize(p);
            let mut hasher = Sha256::new();
            hasher.update(abs.to_string_lossy().as_bytes());
            let digest = hasher.finalize();
            let mut hex = String::with_capacity(HASH_LEN);
            for byte in digest.iter().take(HASH_LEN / 2) {
                hex.push_str(&format!("{:02x}", byte));
            }
            hex
        }
    }
}

/// Human-readable project name for display identifiers.
pub fn project_name(path: Option<&Path>) -> String {
    path.and_then(|p| absolutize(p).file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "none".to_string())
}

/// Resolve a path to an absolute, lexically normalized form.
///
/// Does not hit the filesystem (no symlink resolution): two invocations must
/// agree on the hash even when the directory has been deleted meanwhile.
fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    };
    let mut out = PathBuf::new();
    for comp in joined.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
