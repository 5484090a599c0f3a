// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake prober/sender for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::prober::{ForegroundProcess, ProbeError, ProcessProber};
use crate::signals::{Signal, SignalSender};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Fake prober replaying a scripted sequence of foreground snapshots.
///
/// Each `foreground()` call pops the next snapshot; when the script runs out
/// the tty reads as idle. This makes "SIGINT cleared it after one recheck"
/// style sequences easy to express. A scripted entry can also be a query
/// failure, for exercising the paths where introspection itself breaks.
#[derive(Clone, Default)]
pub struct FakeProber {
    snapshots: Arc<Mutex<VecDeque<Result<Option<ForegroundProcess>, String>>>>,
    calls: Arc<Mutex<u32>>,
}

impl FakeProber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: a prober that always reads idle.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Queue the next snapshot returned by `foreground()`.
    pub fn push(&self, snapshot: Option<ForegroundProcess>) {
        self.snapshots.lock().push_back(Ok(snapshot));
    }

    /// Queue a failed query (the next `foreground()` call errors).
    pub fn push_failure(&self, message: &str) {
        self.snapshots.lock().push_back(Err(message.to_string()));
    }

    /// Queue `n` busy snapshots of the same process.
    pub fn push_busy(&self, n: usize, pgid: u32, command: &str) {
        for _ in 0..n {
            self.push(Some(ForegroundProcess {
                pgid,
                pid: pgid,
                command: command.to_string(),
            }));
        }
    }

    pub fn call_count(&self) -> u32 {
        *self.calls.lock()
    }
}

#[async_trait]
impl ProcessProber for FakeProber {
    async fn foreground(&self, _tty: &str) -> Result<Option<ForegroundProcess>, ProbeError> {
        *self.calls.lock() += 1;
        match self.snapshots.lock().pop_front() {
            Some(Ok(snapshot)) => Ok(snapshot),
            Some(Err(message)) => Err(ProbeError::QueryFailed(message)),
            None => Ok(None),
        }
    }
}

/// Fake sender recording every delivered signal in order.
#[derive(Clone, Default)]
pub struct FakeSender {
    sent: Arc<Mutex<Vec<(u32, Signal)>>>,
    fail: Arc<Mutex<bool>>,
}

impl FakeSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent sends fail (introspection worked, delivery did not).
    pub fn fail_all(&self) {
        *self.fail.lock() = true;
    }

    pub fn sent(&self) -> Vec<(u32, Signal)> {
        self.sent.lock().clone()
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.sent.lock().iter().map(|(_, s)| *s).collect()
    }
}

#[async_trait]
impl SignalSender for FakeSender {
    async fn send(&self, pgid: u32, signal: Signal) -> Result<(), ProbeError> {
        self.sent.lock().push((pgid, signal));
        if *self.fail.lock() {
            return Err(ProbeError::SignalFailed(format!(
                "fake failure delivering {} to {}",
                signal, pgid
            )));
        }
        Ok(())
    }
}
