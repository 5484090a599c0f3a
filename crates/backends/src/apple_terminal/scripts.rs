// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AppleScript builders for Terminal.app
//!
//! Terminal.app nests two levels: windows contain tabs. Tabs carry a
//! `custom title`, a `tty`, and a full scrollback `history`. There is no
//! scripting verb for "new tab in window", so tab creation goes through a
//! System Events ⌘T keystroke with the window frontmost.

use td_bridge::applescript_quote;

pub fn enumerate() -> String {
    r#"set rows to {}
tell application "Terminal"
	repeat with w in windows
		set tabIndex to 0
		repeat with t in tabs of w
			set tabIndex to tabIndex + 1
			set end of rows to {(id of w) as text, tabIndex as text, custom title of t, tty of t}
		end repeat
	end repeat
end tell
return rows"#
        .to_string()
}

pub fn frontmost_window() -> String {
    r#"tell application "Terminal"
	if (count of windows) is 0 then return ""
	return (id of front window) as text
end tell"#
        .to_string()
}

pub fn create_window(title: &str) -> String {
    let title = applescript_quote(title);
    format!(
        r#"tell application "Terminal"
	set newTab to do script ""
	delay 0.2
	set custom title of newTab to {title}
	return {{(id of front window) as text, "1", tty of newTab}}
end tell"#
    )
}

pub fn create_tab(window_id: &str, title: &str) -> String {
    let title = applescript_quote(title);
    format!(
        r#"tell application "Terminal"
	activate
	set frontmost of window id {window_id} to true
end tell
tell application "System Events" to tell process "Terminal" to keystroke "t" using command down
delay 0.4
tell application "Terminal"
	set newTab to selected tab of window id {window_id}
	set custom title of newTab to {title}
	return {{"{window_id}", (count of tabs of window id {window_id}) as text, tty of newTab}}
end tell"#
    )
}

pub fn set_title(window_id: &str, tab_index: &str, title: &str) -> String {
    let title = applescript_quote(title);
    format!(
        r#"tell application "Terminal" to set custom title of tab {tab_index} of window id {window_id} to {title}"#
    )
}

pub fn type_text(window_id: &str, tab_index: &str, text: &str) -> String {
    let text = applescript_quote(text);
    format!(
        r#"tell application "Terminal" to do script {text} in tab {tab_index} of window id {window_id}"#
    )
}

pub fn send_interrupt(window_id: &str, tab_index: &str) -> String {
    format!(
        r#"tell application "Terminal"
	activate
	set frontmost of window id {window_id} to true
	set selected tab of window id {window_id} to tab {tab_index} of window id {window_id}
end tell
tell application "System Events" to tell process "Terminal" to keystroke "c" using control down"#
    )
}

pub fn read_history(window_id: &str, tab_index: &str) -> String {
    format!(
        r#"tell application "Terminal" to get history of tab {tab_index} of window id {window_id}"#
    )
}

pub fn focus(window_id: &str, tab_index: &str) -> String {
    format!(
        r#"tell application "Terminal"
	activate
	set frontmost of window id {window_id} to true
	set selected tab of window id {window_id} to tab {tab_index} of window id {window_id}
end tell"#
    )
}

#[cfg(test)]
#[path = "scripts_tests.rs"]
mod tests;
