//! CLI help output specs

use crate::prelude::*;

#[test]
fn td_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn td_help_lists_the_five_operations() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("sessions")
        .stdout_has("exec")
        .stdout_has("read")
        .stdout_has("focus")
        .stdout_has("kill");
}

#[test]
fn td_exec_help_shows_usage() {
    cli()
        .args(&["exec", "--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--tag");
}

#[test]
fn td_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
