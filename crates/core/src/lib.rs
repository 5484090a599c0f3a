// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! td-core: shared types for the Term Driver (td) CLI tool
//!
//! Holds everything the other crates agree on: the session data model, the
//! request/result records, the unified error taxonomy with its exit-code
//! table, the runtime configuration, and the title identity codec. The title
//! string set on a terminal window/tab is the only state that survives a
//! process exit, so the codec in [`title`] is the heart of session identity.

pub mod config;
pub mod error;
pub mod params;
pub mod project;
pub mod session;
pub mod title;

pub use config::{AppConfig, GroupingPolicy, SignalWaits};
pub use error::{DriverError, EXIT_COMMAND_FAILED, EXIT_SUCCESS, EXIT_TIMEOUT};
pub use params::{
    ExecuteParams, ExecuteResult, ExecutionMode, FocusParams, FocusPreference, KillParams,
    ReadParams,
};
pub use project::{project_hash, project_name, NO_PROJECT};
pub use session::{SessionInfo, TabRef};
pub use title::{decode_title, encode_title, valid_tag, DecodedTitle, TITLE_MARKER};
