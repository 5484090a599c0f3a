// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn only_shells_means_idle() {
    let out = "  312   312 -zsh\n";
    assert_eq!(pick_foreground(out), None);
}

#[test]
fn last_non_shell_row_wins() {
    let out = "\
  312   312 -zsh
  450   450 vim notes.md
  460   461 cargo build
";
    let fg = pick_foreground(out).unwrap();
    assert_eq!(fg.pgid, 460);
    assert_eq!(fg.pid, 461);
    assert_eq!(fg.command, "cargo build");
}

#[test]
fn empty_output_means_idle() {
    assert_eq!(pick_foreground(""), None);
    assert_eq!(pick_foreground("\n\n"), None);
}

#[test]
fn malformed_rows_are_skipped() {
    let out = "garbage line\n  100   101 sleep 60\n";
    let fg = pick_foreground(out).unwrap();
    assert_eq!(fg.command, "sleep 60");
}

#[yare::parameterized(
    login_zsh     = { "-zsh", true },
    bare_bash     = { "bash", true },
    abs_path      = { "/bin/bash", true },
    with_flags    = { "zsh -il", true },
    login_flag    = { "/bin/bash --login", true },
    tmux_client   = { "tmux", true },
    script        = { "bash build.sh", false },
    vim           = { "vim", false },
    cargo         = { "cargo build", false },
    python        = { "python3 serve.py", false },
    fish_script   = { "fish run.fish", false },
)]
fn shell_exclusion(command: &str, excluded: bool) {
    let out = format!("  100   100 {}\n", command);
    assert_eq!(pick_foreground(&out).is_none(), excluded, "{:?}", command);
}

#[tokio::test]
async fn busy_mirrors_foreground_presence() {
    struct Fixed(Option<ForegroundProcess>);
    #[async_trait::async_trait]
    impl ProcessProber for Fixed {
        async fn foreground(&self, _tty: &str) -> Result<Option<ForegroundProcess>, ProbeError> {
            Ok(self.0.clone())
        }
    }

    assert!(!Fixed(None).busy("/dev/ttys000").await.unwrap());
    assert!(Fixed(Some(ForegroundProcess {
        pgid: 1,
        pid: 1,
        command: "sleep 5".into()
    }))
    .busy("/dev/ttys000")
    .await
    .unwrap());
}

#[tokio::test]
async fn ps_prober_handles_unknown_tty() {
    // A tty that cannot exist: ps exits nonzero, which must read as idle.
    let prober = PsProber::new();
    let result = prober.foreground("/dev/ttyzzz99").await.unwrap();
    assert_eq!(result, None);
}
