// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::Parser;

#[derive(Parser)]
struct Harness {
    #[command(flatten)]
    args: ExecArgs,
}

fn parse(argv: &[&str]) -> ExecArgs {
    let mut full = vec!["exec"];
    full.extend_from_slice(argv);
    Harness::try_parse_from(full).unwrap().args
}

#[test]
fn trailing_words_join_into_one_command() {
    let params = parse(&["--tag", "build", "cargo", "test", "--release"]).to_params();
    assert_eq!(params.command.as_deref(), Some("cargo test --release"));
}

#[test]
fn no_trailing_words_means_ensure_only() {
    let params = parse(&["--tag", "build"]).to_params();
    assert_eq!(params.command, None);
}

#[test]
fn background_flag_switches_mode() {
    let params = parse(&["--tag", "dev", "--background", "npm", "run", "dev"]).to_params();
    assert_eq!(params.mode, ExecutionMode::Background);
    let params = parse(&["--tag", "dev", "true"]).to_params();
    assert_eq!(params.mode, ExecutionMode::Foreground);
}

#[test]
fn timeout_is_milliseconds() {
    let params = parse(&["--tag", "build", "--timeout-ms", "2500", "make"]).to_params();
    assert_eq!(params.timeout, Some(Duration::from_millis(2500)));
}

#[yare::parameterized(
    default      = { &[], FocusPreference::Default },
    forced       = { &["--focus"], FocusPreference::Force },
    suppressed   = { &["--no-focus"], FocusPreference::Suppress },
)]
fn focus_flags(flags: &[&str], expect: FocusPreference) {
    let mut argv = vec!["--tag", "build"];
    argv.extend_from_slice(flags);
    assert_eq!(parse(&argv).focus_preference(), expect);
}

#[test]
fn project_path_is_carried_through() {
    let params = parse(&["--tag", "build", "--project", "/tmp/proj", "make"]).to_params();
    assert_eq!(params.project_path.as_deref(), Some(std::path::Path::new("/tmp/proj")));
}
