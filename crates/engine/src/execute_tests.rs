// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;
use std::time::Duration;

fn scratch_log(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("run.log")
}

// ============================================================================
// marker
// ============================================================================

#[test]
fn marker_shape() {
    let marker = generate_marker();
    let suffix = marker.strip_prefix("TD_DONE_").unwrap();
    assert_eq!(suffix.len(), 12);
    assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn markers_are_unique() {
    assert_ne!(generate_marker(), generate_marker());
}

// ============================================================================
// wrapping
// ============================================================================

#[test]
fn foreground_wrap_redirects_and_appends_marker() {
    let wrapped = wrap_foreground("make test", Path::new("/tmp/x.log"), "TD_DONE_abc");
    assert_eq!(
        wrapped,
        "( make test ) > \"/tmp/x.log\" 2>&1; printf '%s\\n' 'TD_DONE_abc' >> \"/tmp/x.log\""
    );
}

#[test]
fn background_wrap_detaches_without_marker() {
    let wrapped = wrap_background("npm run dev", Path::new("/tmp/x.log"));
    assert_eq!(wrapped, "( npm run dev ) > \"/tmp/x.log\" 2>&1 &");
    assert!(!wrapped.contains("TD_DONE_"));
}

// ============================================================================
// poll schedule
// ============================================================================

#[yare::parameterized(
    first        = { 0, 200 },
    end_of_tight = { 19, 200 },
    medium       = { 20, 500 },
    end_of_medium = { 99, 500 },
    slow         = { 100, 1000 },
    much_later   = { 5000, 1000 },
)]
fn poll_schedule(iteration: u32, expect_ms: u64) {
    assert_eq!(poll_interval(iteration), Duration::from_millis(expect_ms));
}

// ============================================================================
// completion detection
// ============================================================================

#[tokio::test]
async fn marker_line_completes_with_preceding_output() {
    let dir = tempfile::tempdir().unwrap();
    let log = scratch_log(&dir);
    std::fs::write(&log, "line one\nline two\nTD_DONE_abc\n").unwrap();

    let result = await_marker(&log, "TD_DONE_abc", Duration::from_secs(1)).await;
    assert_eq!(
        result,
        PollResult::Completed {
            output: "line one\nline two".to_string()
        }
    );
}

#[tokio::test]
async fn marker_embedded_in_a_longer_line_does_not_count() {
    let dir = tempfile::tempdir().unwrap();
    let log = scratch_log(&dir);
    std::fs::write(&log, "echo TD_DONE_abc into the void\n").unwrap();

    let result = await_marker(&log, "TD_DONE_abc", Duration::from_millis(50)).await;
    assert!(matches!(result, PollResult::TimedOut { .. }));
}

#[tokio::test]
async fn marker_written_mid_wait_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    let log = scratch_log(&dir);
    let log_clone = log.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        std::fs::write(&log_clone, "done\nTD_DONE_xyz\n").unwrap();
    });

    let result = await_marker(&log, "TD_DONE_xyz", Duration::from_secs(5)).await;
    assert_eq!(
        result,
        PollResult::Completed {
            output: "done".to_string()
        }
    );
}

#[tokio::test]
async fn timeout_returns_partial_output_within_the_deadline() {
    let dir = tempfile::tempdir().unwrap();
    let log = scratch_log(&dir);
    std::fs::write(&log, "still going\n").unwrap();

    let started = std::time::Instant::now();
    let result = await_marker(&log, "TD_DONE_never", Duration::from_millis(120)).await;
    let elapsed = started.elapsed();

    assert_eq!(
        result,
        PollResult::TimedOut {
            partial: "still going\n".to_string()
        }
    );
    // The last sleep is clamped to the remaining time, so the wait never
    // overshoots by a full poll interval.
    assert!(elapsed < Duration::from_millis(500), "took {:?}", elapsed);
}

#[tokio::test]
async fn missing_log_reads_as_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = await_marker(
        &dir.path().join("never-created.log"),
        "TD_DONE_x",
        Duration::from_millis(30),
    )
    .await;
    assert_eq!(
        result,
        PollResult::TimedOut {
            partial: String::new()
        }
    );
}

// ============================================================================
// background sampling
// ============================================================================

#[tokio::test]
async fn background_sample_returns_first_output() {
    let dir = tempfile::tempdir().unwrap();
    let log = scratch_log(&dir);
    let log_clone = log.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        std::fs::write(&log_clone, "server listening on 8080\n").unwrap();
    });

    let sample = sample_background(&log, Duration::from_secs(5)).await;
    assert_eq!(sample, "server listening on 8080\n");
}

#[tokio::test]
async fn silent_background_command_samples_empty() {
    let dir = tempfile::tempdir().unwrap();
    let log = scratch_log(&dir);
    let sample = sample_background(&log, Duration::from_millis(50)).await;
    assert_eq!(sample, "");
}

// ============================================================================
// log cleanup
// ============================================================================

#[tokio::test]
async fn remove_log_deletes_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let log = scratch_log(&dir);
    std::fs::write(&log, "x").unwrap();

    remove_log(&log).await;
    assert!(!log.exists());

    // Second delete is a no-op.
    remove_log(&log).await;
}
