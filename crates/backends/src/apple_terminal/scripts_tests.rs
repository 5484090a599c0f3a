// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn enumerate_walks_windows_and_tabs() {
    let script = enumerate();
    assert!(script.contains("repeat with w in windows"));
    assert!(script.contains("repeat with t in tabs of w"));
    assert!(script.contains("custom title of t"));
    assert!(script.contains("tty of t"));
}

#[test]
fn create_window_quotes_the_title() {
    let script = create_window("TD_SESSION::TAG=a \"b\"::");
    assert!(script.contains(r#"do script """#));
    assert!(script.contains(r#"set custom title of newTab to "TD_SESSION::TAG=a \"b\"::""#));
}

#[test]
fn create_tab_uses_command_t_keystroke() {
    let script = create_tab("277", "title");
    assert!(script.contains("window id 277"));
    assert!(script.contains(r#"keystroke "t" using command down"#));
    assert!(script.contains("selected tab of window id 277"));
}

#[test]
fn type_text_targets_the_exact_tab() {
    let script = type_text("277", "2", "echo hi");
    assert_eq!(
        script,
        r#"tell application "Terminal" to do script "echo hi" in tab 2 of window id 277"#
    );
}

#[test]
fn type_text_escapes_embedded_quotes() {
    let script = type_text("277", "1", r#"echo "hi""#);
    assert!(script.contains(r#""echo \"hi\"""#));
}

#[test]
fn interrupt_focuses_then_sends_control_c() {
    let script = send_interrupt("277", "1");
    let focus_pos = script.find("frontmost").unwrap();
    let key_pos = script.find(r#"keystroke "c" using control down"#).unwrap();
    assert!(focus_pos < key_pos);
}

#[test]
fn frontmost_window_handles_zero_windows() {
    assert!(frontmost_window().contains(r#"if (count of windows) is 0 then return """#));
}
