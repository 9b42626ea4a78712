use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::AsyncReadExt;

use hookguard::hooks::{self, legacy_exit_code, write_legacy_diagnostics, write_response_line};
use hookguard::session::{JsonlSessionLog, default_data_dir};

/// Command-safety hook for coding agents.
///
/// Invoked once per lifecycle event by the host agent: the event name is
/// the first argument and the event envelope arrives as JSON on stdin.
#[derive(Parser, Debug)]
#[command(name = "hookguard", version, about)]
struct Cli {
    /// Hook event name supplied by the host (e.g. PreToolUse)
    event: String,

    /// Use the legacy exit-code protocol: exit 2 blocks, reasons go to
    /// stderr, nothing structured is written to stdout
    #[arg(long)]
    legacy: bool,

    /// Directory for session logs
    #[arg(long, env = "HOOKGUARD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Single logical thread of control: the only awaits are stdin
    // end-of-stream and the session-log append.
    let exit_code = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main(cli))?;

    std::process::exit(exit_code);
}

async fn async_main(cli: Cli) -> Result<i32> {
    // Diagnostics go to stderr; stdout carries only the response line.
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Accumulate the full input body until end-of-stream.
    let mut raw_input = String::new();
    tokio::io::stdin().read_to_string(&mut raw_input).await?;

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let session_log = Arc::new(JsonlSessionLog::new(data_dir));

    let response = hooks::run(&cli.event, &raw_input, session_log).await;

    if cli.legacy {
        write_legacy_diagnostics(&mut std::io::stderr(), &response)?;
        Ok(legacy_exit_code(&response))
    } else {
        write_response_line(&mut std::io::stdout(), &response)?;
        Ok(0)
    }
}
