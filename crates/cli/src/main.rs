// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! td - Term Driver: drive long-running commands in GUI terminal sessions

mod commands;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{exec, focus, kill, read, sessions};
use output::OutputFormat;
use td_core::{AppConfig, DriverError};

#[derive(Parser)]
#[command(
    name = "td",
    version,
    about = "Term Driver - run and supervise commands in GUI terminal sessions"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List managed sessions
    Sessions(sessions::SessionsArgs),
    /// Run a command in a session, creating it when needed
    Exec(exec::ExecArgs),
    /// Capture the tail of a session's buffer
    Read(read::ReadArgs),
    /// Bring a session's window and tab forward
    Focus(focus::FocusArgs),
    /// Interrupt whatever occupies a session's foreground
    Kill(kill::KillArgs),
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(e) = run().await {
        let code = exit_code_for(&e);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Route tracing to stderr, filtered by `TD_LOG`, so stdout stays clean for
/// command output and `-o json`.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("TD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(exit) = err.downcast_ref::<exit_error::ExitError>() {
        return exit.code;
    }
    if let Some(driver) = err.downcast_ref::<DriverError>() {
        return driver.exit_code();
    }
    1
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, skip the
/// "Caused by" chain to avoid noisy duplicate output (common when thiserror
/// variants use `#[error("... {0}")]` with `#[from]`).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }
    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided - print help and exit 0
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let config = AppConfig::from_env();
    match command {
        Commands::Sessions(args) => sessions::handle(args, &config, format).await,
        Commands::Exec(args) => exec::handle(args, &config, format).await,
        Commands::Read(args) => read::handle(args, &config, format).await,
        Commands::Focus(args) => focus::handle(args, &config, format).await,
        Commands::Kill(args) => kill::handle(args, &config, format).await,
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
