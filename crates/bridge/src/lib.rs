// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! td-bridge: scripting bridge to the target GUI terminal application
//!
//! Executes textual automation scripts through `osascript` and returns typed
//! values or structured errors. Consumers never see raw subprocess output:
//! stdout is parsed into a [`ScriptValue`] tree and stderr is classified into
//! compilation / execution / permission-denied failures with the originating
//! script text attached.

pub mod permission;
pub mod runner;
pub mod subprocess;
pub mod value;

pub use permission::preflight;
pub use runner::{OsaScript, ScriptError, ScriptRunner};
pub use subprocess::run_with_timeout;
pub use value::{applescript_quote, parse_source, ScriptValue};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRunner;
