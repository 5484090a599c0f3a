// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake terminal surface for testing
#![cfg_attr(coverage_nightly, coverage(off))]
#![allow(clippy::panic)] // test infrastructure: seeding mistakes should fail loudly

use crate::surface::{tail_lines, RawSession, TerminalSurface};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use td_core::{DriverError, TabRef};

/// Recorded surface call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Enumerate,
    FrontmostWindow,
    CreateWindow { title: String },
    CreateTab { window_id: String, title: String },
    SetTitle { window_id: String, tab: TabRef, title: String },
    TypeText { window_id: String, tab: TabRef, text: String },
    SendInterrupt { window_id: String, tab: TabRef },
    ReadBuffer { window_id: String, tab: TabRef, lines: u32 },
    ClearScreen { window_id: String, tab: TabRef },
    Focus { window_id: String, tab: TabRef },
}

#[derive(Debug, Clone)]
struct FakeTab {
    tab: TabRef,
    title: String,
    tty: Option<String>,
    buffer: String,
}

#[derive(Debug, Clone)]
struct FakeWindow {
    id: String,
    tabs: Vec<FakeTab>,
}

struct FakeSurfaceState {
    windows: Vec<FakeWindow>,
    frontmost: Option<String>,
    calls: Vec<SurfaceCall>,
    next_window: u64,
    next_tty: u64,
}

/// In-memory two-level terminal application for engine tests.
#[derive(Clone)]
pub struct FakeSurface {
    inner: Arc<Mutex<FakeSurfaceState>>,
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeSurfaceState {
                windows: Vec::new(),
                frontmost: None,
                calls: Vec::new(),
                next_window: 100,
                next_tty: 0,
            })),
        }
    }
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a window containing one tab with the given title; returns
    /// `(window_id, tab)`. The newest seeded window becomes frontmost.
    pub fn seed_window(&self, title: &str) -> (String, TabRef) {
        let mut state = self.inner.lock();
        let window_id = state.next_window.to_string();
        state.next_window += 1;
        state.next_tty += 1;
        let tty = format!("/dev/ttys{:03}", state.next_tty);
        let tab = TabRef::Plain("1".to_string());
        state.windows.push(FakeWindow {
            id: window_id.clone(),
            tabs: vec![FakeTab {
                tab: tab.clone(),
                title: title.to_string(),
                tty: Some(tty),
                buffer: String::new(),
            }],
        });
        state.frontmost = Some(window_id.clone());
        (window_id, tab)
    }

    /// Seed an extra tab into an existing window; returns its handle.
    pub fn seed_tab(&self, window_id: &str, title: &str) -> TabRef {
        let mut state = self.inner.lock();
        state.next_tty += 1;
        let tty = format!("/dev/ttys{:03}", state.next_tty);
        let window = state
            .windows
            .iter_mut()
            .find(|w| w.id == window_id)
            .unwrap_or_else(|| panic!("no window {}", window_id));
        let tab = TabRef::Plain((window.tabs.len() + 1).to_string());
        window.tabs.push(FakeTab {
            tab: tab.clone(),
            title: title.to_string(),
            tty: Some(tty),
            buffer: String::new(),
        });
        tab
    }

    pub fn set_frontmost(&self, window_id: Option<&str>) {
        self.inner.lock().frontmost = window_id.map(str::to_string);
    }

    /// Set the buffer contents a `read_buffer` call will see.
    pub fn set_buffer(&self, window_id: &str, tab: &TabRef, contents: &str) {
        let mut state = self.inner.lock();
        if let Some(t) = find_tab(&mut state.windows, window_id, tab) {
            t.buffer = contents.to_string();
        }
    }

    /// The tty seeded/assigned for a given tab.
    pub fn tty_of(&self, window_id: &str, tab: &TabRef) -> Option<String> {
        let mut state = self.inner.lock();
        find_tab(&mut state.windows, window_id, tab).and_then(|t| t.tty.clone())
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.inner.lock().calls.clone()
    }

    /// All text typed into any session, in order.
    pub fn typed(&self) -> Vec<String> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::TypeText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn window_count(&self) -> usize {
        self.inner.lock().windows.len()
    }

    pub fn tab_count(&self, window_id: &str) -> usize {
        self.inner
            .lock()
            .windows
            .iter()
            .find(|w| w.id == window_id)
            .map(|w| w.tabs.len())
            .unwrap_or(0)
    }

    fn record(&self, call: SurfaceCall) {
        self.inner.lock().calls.push(call);
    }
}

fn find_tab<'a>(
    windows: &'a mut [FakeWindow],
    window_id: &str,
    tab: &TabRef,
) -> Option<&'a mut FakeTab> {
    windows
        .iter_mut()
        .find(|w| w.id == window_id)?
        .tabs
        .iter_mut()
        .find(|t| &t.tab == tab)
}

#[async_trait]
impl TerminalSurface for FakeSurface {
    fn app_name(&self) -> &str {
        "FakeTerminal"
    }

    async fn enumerate(&self) -> Result<Vec<RawSession>, DriverError> {
        self.record(SurfaceCall::Enumerate);
        let state = self.inner.lock();
        Ok(state
            .windows
            .iter()
            .flat_map(|w| {
                w.tabs.iter().map(|t| RawSession {
                    window_id: w.id.clone(),
                    tab: t.tab.clone(),
                    title: t.title.clone(),
                    tty: t.tty.clone(),
                })
            })
            .collect())
    }

    async fn frontmost_window(&self) -> Result<Option<String>, DriverError> {
        self.record(SurfaceCall::FrontmostWindow);
        Ok(self.inner.lock().frontmost.clone())
    }

    async fn create_window(&self, title: &str) -> Result<RawSession, DriverError> {
        self.record(SurfaceCall::CreateWindow {
            title: title.to_string(),
        });
        let (window_id, tab) = self.seed_window(title);
        let tty = self.tty_of(&window_id, &tab);
        Ok(RawSession {
            window_id,
            tab,
            title: title.to_string(),
            tty,
        })
    }

    async fn create_tab(
        &self,
        window_id: &str,
        title: &str,
    ) -> Result<RawSession, DriverError> {
        self.record(SurfaceCall::CreateTab {
            window_id: window_id.to_string(),
            title: title.to_string(),
        });
        {
            let state = self.inner.lock();
            if !state.windows.iter().any(|w| w.id == window_id) {
                return Err(DriverError::Internal(format!(
                    "create_tab in unknown window {}",
                    window_id
                )));
            }
        }
        let tab = self.seed_tab(window_id, title);
        let tty = self.tty_of(window_id, &tab);
        Ok(RawSession {
            window_id: window_id.to_string(),
            tab,
            title: title.to_string(),
            tty,
        })
    }

    async fn set_title(
        &self,
        window_id: &str,
        tab: &TabRef,
        title: &str,
    ) -> Result<(), DriverError> {
        self.record(SurfaceCall::SetTitle {
            window_id: window_id.to_string(),
            tab: tab.clone(),
            title: title.to_string(),
        });
        let mut state = self.inner.lock();
        if let Some(t) = find_tab(&mut state.windows, window_id, tab) {
            t.title = title.to_string();
        }
        Ok(())
    }

    async fn type_text(
        &self,
        window_id: &str,
        tab: &TabRef,
        text: &str,
    ) -> Result<(), DriverError> {
        self.record(SurfaceCall::TypeText {
            window_id: window_id.to_string(),
            tab: tab.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_interrupt(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        self.record(SurfaceCall::SendInterrupt {
            window_id: window_id.to_string(),
            tab: tab.clone(),
        });
        Ok(())
    }

    async fn read_buffer(
        &self,
        window_id: &str,
        tab: &TabRef,
        lines: u32,
    ) -> Result<String, DriverError> {
        self.record(SurfaceCall::ReadBuffer {
            window_id: window_id.to_string(),
            tab: tab.clone(),
            lines,
        });
        let mut state = self.inner.lock();
        match find_tab(&mut state.windows, window_id, tab) {
            Some(t) => Ok(tail_lines(&t.buffer, lines)),
            None => Err(DriverError::SessionNotFound(format!(
                "{}/{}",
                window_id, tab
            ))),
        }
    }

    async fn clear_screen(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        self.record(SurfaceCall::ClearScreen {
            window_id: window_id.to_string(),
            tab: tab.clone(),
        });
        Ok(())
    }

    async fn focus(&self, window_id: &str, tab: &TabRef) -> Result<(), DriverError> {
        self.record(SurfaceCall::Focus {
            window_id: window_id.to_string(),
            tab: tab.clone(),
        });
        Ok(())
    }
}
