// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! td-procs: OS process table introspection and signal delivery
//!
//! Answers one question — "what non-shell process currently owns this tty?" —
//! and delivers signals to process groups. Both are point-in-time operations:
//! the occupant of a session can change between any two invocations, so
//! nothing here caches.

pub mod prober;
pub mod signals;

pub use prober::{ForegroundProcess, ProbeError, ProcessProber, PsProber};
pub use signals::{KillSender, Signal, SignalSender};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProber, FakeSender};
