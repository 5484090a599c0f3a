// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn encode_produces_documented_format() {
    let title = encode_title("0a1b2c3d4e5f6071", "build", Some("/dev/ttys003"), Some(812));
    assert_eq!(
        title,
        "TD_SESSION::PROJECT_HASH=0a1b2c3d4e5f6071::TAG=build::TTY_PATH=/dev/ttys003::PID=812::"
    );
}

#[test]
fn encode_omits_unknown_tty_and_pid() {
    let title = encode_title("NO_PROJECT", "scratch", None, None);
    assert_eq!(title, "TD_SESSION::PROJECT_HASH=NO_PROJECT::TAG=scratch::");
}

#[yare::parameterized(
    full    = { Some("/dev/ttys003"), Some(812) },
    no_pid  = { Some("/dev/ttys003"), None },
    no_tty  = { None, Some(42) },
    minimal = { None, None },
)]
fn round_trip_recovers_hash_and_tag(tty: Option<&str>, pid: Option<u32>) {
    let title = encode_title("cafe0123cafe0123", "deploy-2", tty, pid);
    let decoded = decode_title(&title).unwrap();
    assert_eq!(decoded.project_hash.as_deref(), Some("cafe0123cafe0123"));
    assert_eq!(decoded.tag.as_deref(), Some("deploy-2"));
    assert_eq!(decoded.tty.as_deref(), tty);
    assert_eq!(decoded.pid, pid);
}

#[test]
fn decode_tolerates_trailing_text() {
    let title = format!(
        "{} — bash — 80x24",
        encode_title("cafe0123cafe0123", "build", None, None)
    );
    let decoded = decode_title(&title).unwrap();
    assert_eq!(decoded.tag.as_deref(), Some("build"));
}

#[test]
fn decode_tolerates_leading_text() {
    // Terminal applications may prepend their own text to the custom title.
    let title = format!("1. {}", encode_title("cafe0123cafe0123", "build", None, None));
    let decoded = decode_title(&title).unwrap();
    assert_eq!(decoded.project_hash.as_deref(), Some("cafe0123cafe0123"));
}

#[test]
fn decode_fails_closed_without_marker() {
    assert_eq!(decode_title("bash — 80x24"), None);
    assert_eq!(decode_title(""), None);
    assert_eq!(decode_title("PROJECT_HASH=abc::TAG=x::"), None);
}

#[test]
fn decode_skips_unknown_fields() {
    let title = "TD_SESSION::PROJECT_HASH=ff::EXTRA=zzz::TAG=t::";
    let decoded = decode_title(title).unwrap();
    assert_eq!(decoded.project_hash.as_deref(), Some("ff"));
    assert_eq!(decoded.tag.as_deref(), Some("t"));
}

#[test]
fn decode_ignores_unparseable_pid() {
    let title = "TD_SESSION::TAG=t::PID=notanumber::";
    let decoded = decode_title(title).unwrap();
    assert_eq!(decoded.pid, None);
}

#[test]
fn distinct_identities_never_conflate() {
    let a = decode_title(&encode_title("aaaa", "build", None, None)).unwrap();
    let b = decode_title(&encode_title("bbbb", "build", None, None)).unwrap();
    let c = decode_title(&encode_title("aaaa", "test", None, None)).unwrap();
    assert_ne!((a.project_hash.clone(), a.tag.clone()), (b.project_hash, b.tag));
    assert_ne!((a.project_hash, a.tag), (c.project_hash, c.tag));
}

#[yare::parameterized(
    simple      = { "build", true },
    dashed      = { "deploy-prod", true },
    underscored = { "run_tests", true },
    digits      = { "v2", true },
    max_len     = { "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", true },
    empty       = { "", false },
    too_long    = { "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", false },
    space       = { "my tag", false },
    colon       = { "a:b", false },
    slash       = { "a/b", false },
    unicode     = { "bâtir", false },
)]
fn tag_grammar(tag: &str, ok: bool) {
    assert_eq!(valid_tag(tag), ok, "tag {:?}", tag);
}
