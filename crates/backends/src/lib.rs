// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! td-backends: terminal application adapters
//!
//! One [`TerminalSurface`] implementation per supported terminal application.
//! The two backends differ only in the AppleScript dialect needed to
//! enumerate and create windows, tabs, and (for iTerm2) sessions within
//! tabs — the trait contract is identical, so nothing above this crate ever
//! branches on which application is active.

pub mod apple_terminal;
pub mod iterm;
pub mod select;
pub mod surface;

pub use apple_terminal::AppleTerminal;
pub use iterm::Iterm;
pub use select::{select, Backend};
pub use surface::{tail_lines, RawSession, TerminalSurface};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSurface, SurfaceCall};
