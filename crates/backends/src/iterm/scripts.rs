// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AppleScript builders for iTerm2
//!
//! iTerm2 nests three levels: windows contain tabs contain sessions. A
//! session has a stable `unique id`, a `name` (used as the title), a `tty`,
//! and screen `contents`. Unlike Terminal.app it can write text and raw
//! control characters without stealing keyboard focus.

use td_bridge::applescript_quote;

pub fn enumerate() -> String {
    r#"set rows to {}
tell application "iTerm2"
	repeat with w in windows
		set tabIndex to 0
		repeat with t in tabs of w
			set tabIndex to tabIndex + 1
			repeat with s in sessions of t
				set end of rows to {(id of w) as text, tabIndex as text, unique id of s, name of s, tty of s}
			end repeat
		end repeat
	end repeat
end tell
return rows"#
        .to_string()
}

pub fn frontmost_window() -> String {
    r#"tell application "iTerm2"
	if (count of windows) is 0 then return ""
	return (id of current window) as text
end tell"#
        .to_string()
}

/// Profile clause for window/tab creation.
fn profile_clause(profile: Option<&str>) -> String {
    match profile {
        Some(name) => format!("with profile {}", applescript_quote(name)),
        None => "with default profile".to_string(),
    }
}

pub fn create_window(title: &str, profile: Option<&str>) -> String {
    let title = applescript_quote(title);
    let profile = profile_clause(profile);
    format!(
        r#"tell application "iTerm2"
	set w to (create window {profile})
	delay 0.2
	set s to current session of w
	tell s to set name to {title}
	return {{(id of w) as text, "1", unique id of s, tty of s}}
end tell"#
    )
}

pub fn create_tab(window_id: &str, title: &str, profile: Option<&str>) -> String {
    let title = applescript_quote(title);
    let profile = profile_clause(profile);
    format!(
        r#"tell application "iTerm2"
	tell window id {window_id}
		set t to (create tab {profile})
		delay 0.2
		set s to current session of t
		tell s to set name to {title}
		return {{"{window_id}", (count of tabs) as text, unique id of s, tty of s}}
	end tell
end tell"#
    )
}

/// Address a session by window, tab index, and unique session id.
fn session_target(window_id: &str, tab_index: &str, session_id: &str) -> String {
    let session_id = applescript_quote(session_id);
    format!(
        "first session of tab {tab_index} of window id {window_id} whose unique id is {session_id}"
    )
}

pub fn set_title(window_id: &str, tab_index: &str, session_id: &str, title: &str) -> String {
    let target = session_target(window_id, tab_index, session_id);
    let title = applescript_quote(title);
    format!(r#"tell application "iTerm2" to tell ({target}) to set name to {title}"#)
}

pub fn write_text(window_id: &str, tab_index: &str, session_id: &str, text: &str) -> String {
    let target = session_target(window_id, tab_index, session_id);
    let text = applescript_quote(text);
    format!(r#"tell application "iTerm2" to tell ({target}) to write text {text}"#)
}

/// Ctrl-C as a raw ETX byte; no focus change required.
pub fn send_interrupt(window_id: &str, tab_index: &str, session_id: &str) -> String {
    let target = session_target(window_id, tab_index, session_id);
    format!(
        r#"tell application "iTerm2" to tell ({target}) to write text (character id 3) newline NO"#
    )
}

pub fn read_contents(window_id: &str, tab_index: &str, session_id: &str) -> String {
    let target = session_target(window_id, tab_index, session_id);
    format!(r#"tell application "iTerm2" to get contents of ({target})"#)
}

pub fn focus(window_id: &str, tab_index: &str, session_id: &str) -> String {
    let target = session_target(window_id, tab_index, session_id);
    format!(
        r#"tell application "iTerm2"
	activate
	select window id {window_id}
	select tab {tab_index} of window id {window_id}
	select ({target})
end tell"#
    )
}

#[cfg(test)]
#[path = "scripts_tests.rs"]
mod tests;
