//! Logging init: everything to a log file under the XDG state dir, warnings
//! (retry notices included) echoed to stderr. Falls back to stderr only.

use anyhow::Result;
use std::fs;
use std::io;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::writer::{MakeWriterExt, Tee, WithMaxLevel};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,ccfetch=debug,ccfetch_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Full log to `log`, WARN and above also to `console`.
pub fn log_and_console<L, C>(log: L, console: C) -> Tee<L, WithMaxLevel<C>>
where
    L: for<'a> MakeWriter<'a>,
    C: for<'a> MakeWriter<'a>,
{
    log.and(console.with_max_level(Level::WARN))
}

/// Initialize logging to `~/.local/state/ccfetch/ccfetch.log`, with warnings
/// mirrored to stderr so retry notices stay visible.
/// On failure (e.g. state dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ccfetch")?;
    let log_file_path = xdg_dirs.place_state_file("ccfetch.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(log_and_console(Mutex::new(file), io::stderr))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber: {}", e))?;

    tracing::info!("ccfetch logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
