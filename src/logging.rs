use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log events go
#[derive(Clone, Copy, Debug)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// No subscriber is installed; events are discarded
    Disabled,
}

/// Filter used when `RUST_LOG` is unset. Stderr shares the terminal with
/// command output, so it only gets warnings unless `verbose` is set.
pub fn default_filter(verbose: bool, target: LogTarget<'_>) -> &'static str {
    match (verbose, target) {
        (true, _) => "role_finder=debug",
        (false, LogTarget::Stderr) => "role_finder=warn",
        (false, _) => "role_finder=info",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(verbose: bool, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(verbose, target).into());
    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            registry
                .with(fmt::layer().with_writer(io::stderr))
                .try_init()?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
    }
    Ok(())
}
