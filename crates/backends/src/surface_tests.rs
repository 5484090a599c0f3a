// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn tail_returns_last_lines() {
    let text = "one\ntwo\nthree\nfour";
    assert_eq!(tail_lines(text, 2), "three\nfour");
}

#[test]
fn tail_shorter_than_requested_returns_all() {
    assert_eq!(tail_lines("a\nb", 10), "a\nb");
}

#[test]
fn tail_zero_lines_is_empty() {
    assert_eq!(tail_lines("a\nb", 0), "");
}

#[test]
fn tail_of_empty_buffer_is_empty() {
    assert_eq!(tail_lines("", 5), "");
}
