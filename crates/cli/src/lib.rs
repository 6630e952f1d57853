//! # MaxCDN CLI
//!
//! Shared plumbing for the `maxcurl`, `maxpurge` and `maxpopular` tools:
//! common options, configuration layering, startup and output formatting.
//!
//! Credentials resolve with precedence argument > environment > config file.

pub mod args;
pub mod output;

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

pub use args::{split_endpoint, CommonArgs, NoSettings};

/// Load `.env`, then install the stderr subscriber, then report how `.env`
/// loading went.
///
/// `.env` comes first so a `RUST_LOG` set there takes effect.
///
/// # Errors
/// Returns an error if `RUST_LOG` holds an invalid filter.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let dotenv = dotenv_outcome(dotenvy::dotenv());
    init_tracing(verbose)?;

    match dotenv {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Ok(None) => {}
        Err(e) => tracing::warn!("Could not load .env file: {e}"),
    }
    Ok(())
}

/// Install the stderr `tracing` subscriber.
///
/// # Errors
/// Returns an error if `RUST_LOG` holds an invalid filter.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = tracing_filter(verbose, std::env::var("RUST_LOG").ok().as_deref())?;
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    Ok(())
}

/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or with
/// `verbose` the client's debug events and the wire dump.
fn tracing_filter(verbose: bool, rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    match rust_log {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid RUST_LOG filter '{directives}'")),
        None if verbose => Ok(EnvFilter::new("warn,maxcdn_infra=debug,maxcdn::wire=info")),
        None => Ok(EnvFilter::new("warn")),
    }
}

/// A missing `.env` is not an error.
fn dotenv_outcome(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
