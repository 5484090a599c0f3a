// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use std::time::Duration;

fn clear_td_env() {
    for (key, _) in std::env::vars() {
        if key.starts_with("TD_") {
            std::env::remove_var(&key);
        }
    }
}

#[test]
#[serial(td_env)]
fn defaults_without_env() {
    clear_td_env();
    let config = AppConfig::from_env();
    assert_eq!(config.app, "Terminal");
    assert_eq!(config.grouping, GroupingPolicy::Smart);
    assert!(config.reuse_busy);
    assert_eq!(config.foreground_timeout, Duration::from_secs(60));
    assert_eq!(config.default_lines, 100);
    assert!(config.profile.is_none());
}

#[test]
#[serial(td_env)]
fn env_overrides_are_picked_up() {
    clear_td_env();
    std::env::set_var("TD_APP", "iTerm2");
    std::env::set_var("TD_GROUPING", "off");
    std::env::set_var("TD_REUSE_BUSY", "false");
    std::env::set_var("TD_FOREGROUND_TIMEOUT_MS", "1500");
    std::env::set_var("TD_BUSY_SIGINT_WAIT_MS", "250");
    std::env::set_var("TD_PROFILE", "Hotkey");

    let config = AppConfig::from_env();
    assert_eq!(config.app, "iTerm2");
    assert_eq!(config.grouping, GroupingPolicy::Off);
    assert!(!config.reuse_busy);
    assert_eq!(config.foreground_timeout, Duration::from_millis(1500));
    assert_eq!(config.busy_waits.sigint, Duration::from_millis(250));
    assert_eq!(config.busy_waits.sigterm, Duration::from_millis(2000));
    assert_eq!(config.profile.as_deref(), Some("Hotkey"));
    clear_td_env();
}

#[test]
#[serial(td_env)]
fn unparseable_env_falls_back_to_default() {
    clear_td_env();
    std::env::set_var("TD_GROUPING", "sideways");
    std::env::set_var("TD_FOREGROUND_TIMEOUT_MS", "soon");
    let config = AppConfig::from_env();
    assert_eq!(config.grouping, GroupingPolicy::Smart);
    assert_eq!(config.foreground_timeout, Duration::from_secs(60));
    clear_td_env();
}

#[yare::parameterized(
    off     = { "off", Some(GroupingPolicy::Off) },
    project = { "Project", Some(GroupingPolicy::Project) },
    smart   = { "SMART", Some(GroupingPolicy::Smart) },
    bogus   = { "auto", None },
)]
fn grouping_parse(input: &str, expected: Option<GroupingPolicy>) {
    assert_eq!(GroupingPolicy::parse(input), expected);
}

#[test]
fn kill_waits_are_independent_of_busy_waits() {
    let config = AppConfig::default();
    assert_ne!(config.busy_waits, config.kill_waits);
}
