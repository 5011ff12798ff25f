// Logging setup
//
// Report commands log to stderr. The TUI owns the terminal, so it either logs
// to a file or drops log lines entirely; failures it hits are already shown in
// its status bar.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

impl<'a> LogTarget<'a> {
    /// `--log-file` wins; otherwise stderr, except under the TUI where
    /// anything written to stderr would land on the alternate screen
    pub fn select(tui: bool, log_file: Option<&'a Path>) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path),
            None if tui => LogTarget::Discard,
            None => LogTarget::Stderr,
        }
    }
}

/// Install the global subscriber. `filter` uses `EnvFilter` syntax and is
/// overridden by `RUST_LOG` when that is set.
pub fn init(filter: &str, target: LogTarget<'_>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .with_context(|| format!("Invalid log filter {:?}", filter))?;

    subscriber(env_filter, target)?
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn subscriber(
    filter: EnvFilter,
    target: LogTarget<'_>,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let writer = match target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        LogTarget::Discard => BoxMakeWriter::new(std::io::sink),
    };

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(target == LogTarget::Stderr)
        .with_writer(writer)
        .finish())
}
