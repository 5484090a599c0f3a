// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn exit_codes_are_stable() {
    assert_eq!(DriverError::InvalidParams("x".into()).exit_code(), 1);
    assert_eq!(DriverError::Config("x".into()).exit_code(), 2);
    assert_eq!(
        DriverError::ScriptCompile {
            message: "syntax error".into(),
            script: "tell".into(),
        }
        .exit_code(),
        3
    );
    assert_eq!(
        DriverError::ScriptExecution {
            message: "boom".into(),
            code: -1728,
            script: "tell".into(),
        }
        .exit_code(),
        3
    );
    assert_eq!(DriverError::SessionNotFound("a/b".into()).exit_code(), 4);
    assert_eq!(DriverError::Busy("vim".into()).exit_code(), 5);
    assert_eq!(DriverError::Timeout("poll".into()).exit_code(), EXIT_TIMEOUT);
    assert_eq!(DriverError::Internal("x".into()).exit_code(), 8);
    assert_eq!(DriverError::TypeConversion("x".into()).exit_code(), 8);
    assert_eq!(
        DriverError::PermissionDenied {
            app: "Terminal".into()
        }
        .exit_code(),
        9
    );
}

#[test]
fn execution_error_message_carries_script_text() {
    let err = DriverError::ScriptExecution {
        message: "Terminal got an error".into(),
        code: -1719,
        script: "tell application \"Terminal\" to count windows".into(),
    };
    let text = err.to_string();
    assert!(text.contains("-1719"));
    assert!(text.contains("count windows"));
}

#[test]
fn permission_error_names_the_app() {
    let err = DriverError::PermissionDenied {
        app: "iTerm2".into(),
    };
    assert!(err.to_string().contains("iTerm2"));
    assert!(err.to_string().contains("Automation"));
}
