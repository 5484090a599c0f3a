// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::exit_error::ExitError;

#[test]
fn cli_parses_every_subcommand() {
    for argv in [
        vec!["td", "sessions"],
        vec!["td", "sessions", "--tag", "build"],
        vec!["td", "exec", "--tag", "build", "make", "test"],
        vec!["td", "read", "--tag", "build", "--lines", "50"],
        vec!["td", "focus", "--tag", "build"],
        vec!["td", "kill", "--tag", "build"],
    ] {
        Cli::try_parse_from(&argv).unwrap_or_else(|e| panic!("{:?}: {}", argv, e));
    }
}

#[test]
fn output_flag_is_global() {
    let cli = Cli::try_parse_from(["td", "sessions", "-o", "json"]).unwrap();
    assert_eq!(cli.output, OutputFormat::Json);

    let cli = Cli::try_parse_from(["td", "sessions"]).unwrap();
    assert_eq!(cli.output, OutputFormat::Text);
}

#[test]
fn driver_errors_map_to_their_exit_codes() {
    let err: anyhow::Error = DriverError::SessionNotFound("x".into()).into();
    assert_eq!(exit_code_for(&err), 4);

    let err: anyhow::Error = DriverError::Config("bad app".into()).into();
    assert_eq!(exit_code_for(&err), 2);

    let err: anyhow::Error = ExitError::silent(7).into();
    assert_eq!(exit_code_for(&err), 7);

    let err = anyhow::anyhow!("anything else");
    assert_eq!(exit_code_for(&err), 1);
}

#[test]
fn silent_exit_errors_print_nothing() {
    let err: anyhow::Error = ExitError::silent(6).into();
    assert_eq!(format_error(&err), "");
}

#[test]
fn redundant_chains_are_deduplicated() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
    let err: anyhow::Error = DriverError::Io(io).into();
    let msg = format_error(&err);
    assert_eq!(msg.matches("disk gone").count(), 1);
}
