// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    int  = { Signal::Int, "-INT", "SIGINT" },
    term = { Signal::Term, "-TERM", "SIGTERM" },
    kill = { Signal::Kill, "-KILL", "SIGKILL" },
)]
fn signal_flags_and_names(signal: Signal, flag: &str, name: &str) {
    assert_eq!(signal.flag(), flag);
    assert_eq!(signal.to_string(), name);
}

#[tokio::test]
async fn sending_to_a_dead_group_reports_failure() {
    // pgid from far outside any plausible live range.
    let sender = KillSender::new();
    let result = sender.send(4_000_000, Signal::Int).await;
    assert!(matches!(result, Err(ProbeError::SignalFailed(_))));
}
