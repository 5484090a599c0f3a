// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake script runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::runner::{ScriptError, ScriptRunner};
use crate::value::ScriptValue;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

struct FakeRunnerState {
    responses: VecDeque<Result<ScriptValue, String>>,
    scripts: Vec<String>,
}

/// Fake bridge that replays queued responses and records every script.
///
/// Errors are queued as strings and rehydrated into
/// [`ScriptError::Execution`] because `ScriptError` is not `Clone`.
#[derive(Clone)]
pub struct FakeRunner {
    inner: Arc<Mutex<FakeRunnerState>>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeRunnerState {
                responses: VecDeque::new(),
                scripts: Vec::new(),
            })),
        }
    }
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, value: ScriptValue) {
        self.inner.lock().responses.push_back(Ok(value));
    }

    pub fn push_err(&self, message: impl Into<String>) {
        self.inner.lock().responses.push_back(Err(message.into()));
    }

    /// Every script run so far, in order.
    pub fn scripts(&self) -> Vec<String> {
        self.inner.lock().scripts.clone()
    }
}

#[async_trait]
impl ScriptRunner for FakeRunner {
    async fn run(&self, script: &str) -> Result<ScriptValue, ScriptError> {
        let mut state = self.inner.lock();
        state.scripts.push(script.to_string());
        match state.responses.pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(ScriptError::Execution {
                message,
                code: 1,
                script: script.to_string(),
            }),
            // Out of scripted responses: succeed with nothing.
            None => Ok(ScriptValue::Null),
        }
    }
}
