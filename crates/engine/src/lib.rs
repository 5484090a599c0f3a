// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! td-engine: session orchestration
//!
//! Ties the backend surface, the process prober, and the signal sender into
//! the five public operations: list, execute, read, focus, kill. Everything
//! in here is generic over those three seams, so the whole engine runs
//! against fakes in tests.

pub mod execute;
pub mod interrupt;
pub mod locate;
pub mod log_paths;
pub mod orchestrator;

pub use execute::{generate_marker, wrap_background, wrap_foreground, PollResult};
pub use interrupt::{interrupt_session, Outcome};
pub use locate::{decode_raw, find_session, locate_or_create, plan_placement, Located, Placement};
pub use log_paths::{exec_log_path, new_exec_log_id};
pub use orchestrator::Orchestrator;
