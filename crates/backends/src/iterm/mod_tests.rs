// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use td_bridge::{parse_source, FakeRunner};

#[tokio::test]
async fn enumerate_builds_composite_handles() {
    let runner = FakeRunner::new();
    runner.push_ok(
        parse_source(
            r#"{{"1138", "1", "A1B2", "TD_SESSION::PROJECT_HASH=ff::TAG=build::", "/dev/ttys004"}, {"1138", "2", "C3D4", "shell", missing value}}"#,
        )
        .unwrap(),
    );
    let backend = Iterm::new(runner, None);

    let sessions = backend.enumerate().await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(
        sessions[0].tab,
        TabRef::Nested {
            tab_id: "1".into(),
            session_id: "A1B2".into()
        }
    );
    assert_eq!(sessions[0].tty.as_deref(), Some("/dev/ttys004"));
    assert_eq!(sessions[1].tty, None);
}

#[tokio::test]
async fn create_window_threads_profile_through() {
    let runner = FakeRunner::new();
    runner.push_ok(parse_source(r#"{"1138", "1", "A1B2", "/dev/ttys004"}"#).unwrap());
    let backend = Iterm::new(runner.clone(), Some("Hotkey".into()));

    let created = backend.create_window("TD_SESSION::TAG=t::").await.unwrap();
    assert_eq!(created.window_id, "1138");
    assert_eq!(
        created.tab,
        TabRef::Nested {
            tab_id: "1".into(),
            session_id: "A1B2".into()
        }
    );
    assert!(runner.scripts()[0].contains(r#"with profile "Hotkey""#));
}

#[tokio::test]
async fn plain_handle_is_rejected() {
    let backend = Iterm::new(FakeRunner::new(), None);
    match backend.focus("1138", &TabRef::Plain("1".into())).await {
        Err(DriverError::Internal(msg)) => assert!(msg.contains("three-level")),
        other => panic!("expected Internal, got {:?}", other),
    }
}

#[tokio::test]
async fn short_row_is_an_internal_error() {
    let runner = FakeRunner::new();
    runner.push_ok(parse_source(r#"{{"1138", "1", "A1B2"}}"#).unwrap());
    let backend = Iterm::new(runner, None);
    match backend.enumerate().await {
        Err(DriverError::Internal(msg)) => assert!(msg.contains("3 fields")),
        other => panic!("expected Internal, got {:?}", other),
    }
}

#[tokio::test]
async fn read_buffer_tails_contents() {
    let runner = FakeRunner::new();
    runner.push_ok(ScriptValue::Text("1\n2\n3".into()));
    let backend = Iterm::new(runner, None);
    let tab = TabRef::Nested {
        tab_id: "1".into(),
        session_id: "A1".into(),
    };
    assert_eq!(backend.read_buffer("1138", &tab, 1).await.unwrap(), "3");
}
