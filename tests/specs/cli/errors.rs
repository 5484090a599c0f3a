//! CLI error path specs
//!
//! Only paths reachable before any scripting-bridge call: unsupported
//! application names and malformed parameters.

use crate::prelude::*;

#[test]
fn unsupported_terminal_app_is_a_configuration_error() {
    cli()
        .env("TD_APP", "Konsole")
        .args(&["sessions"])
        .fails_with(2)
        .stderr_has("unsupported terminal application");
}

#[test]
fn invalid_tag_is_rejected_with_exit_one() {
    cli()
        .args(&["exec", "--tag", "has spaces", "true"])
        .fails_with(1)
        .stderr_has("tag");
}

#[test]
fn overlong_tag_is_rejected() {
    let tag = "x".repeat(41);
    cli()
        .args(&["read", "--tag", &tag])
        .fails_with(1)
        .stderr_has("1-40 characters");
}

#[test]
fn invalid_tag_beats_unsupported_app() {
    // Parameter validation runs before backend selection is exercised.
    cli()
        .env("TD_APP", "Konsole")
        .args(&["kill", "--tag", "bad tag"])
        .fails_with(1);
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    cli().args(&["frobnicate"]).fails_with(2);
}
