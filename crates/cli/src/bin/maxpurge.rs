//! `maxpurge`: purge a pull zone's cache, or selected files in it.
//!
//! ```text
//! maxpurge --zone 123456
//! maxpurge --zone 123456 --file /master.css --file /master.js
//! maxpurge --zone 123456 --zone 234567
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use maxcdn_cli::output::purge_lines;
use maxcdn_cli::{init, CommonArgs};
use maxcdn_domain::types::de::lenient_opt_string;
use maxcdn_infra::MaxCdn;
use serde::Deserialize;

/// Exit status when the API rejected at least one purge
const PURGE_FAILED: u8 = 2;

/// Purge every cached file in one or more zones, or the given files in a
/// single zone. Targets are purged concurrently.
#[derive(Debug, Parser)]
#[command(name = "maxpurge", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Zone to purge, repeatable
    #[arg(short, long = "zone", value_name = "ID", env = "MAXCDN_ZONE")]
    zones: Vec<String>,

    /// Cached file to purge, repeatable
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    #[serde(deserialize_with = "lenient_opt_string")]
    zone: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init(cli.common.verbose) {
        eprintln!("maxpurge: {e:#}");
        return ExitCode::FAILURE;
    }

    let start = Instant::now();
    match run(cli).await {
        Ok(true) => {
            println!("Purge successful after: {:.2?}.", start.elapsed());
            ExitCode::SUCCESS
        }
        Ok(false) => {
            eprintln!("Purge failed after {:.2?}.", start.elapsed());
            ExitCode::from(PURGE_FAILED)
        }
        Err(e) => {
            eprintln!("maxpurge: {e:#}\n\nPurge failed after {:.2?}.", start.elapsed());
            ExitCode::FAILURE
        }
    }
}

/// Zones from arguments or `MAXCDN_ZONE`, else the config file.
fn resolve_zones(cli: &Cli, file: FileSettings) -> anyhow::Result<Vec<String>> {
    let zones = if cli.zones.is_empty() { file.zone.into_iter().collect() } else { cli.zones.clone() };

    if zones.is_empty() {
        bail!("--zone is required");
    }
    if !cli.files.is_empty() && zones.len() > 1 {
        bail!("--file purges within a single zone; got {} zones", zones.len());
    }
    Ok(zones)
}

/// Returns whether every purge succeeded.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let (config, file) = cli.common.resolve::<FileSettings>()?;
    let zones = resolve_zones(&cli, file)?;
    let client = MaxCdn::new(config).context("failed to create client")?;

    let report = match (zones.as_slice(), cli.files.as_slice()) {
        ([zone], [file]) => {
            client.purge_file(zone, file).await.with_context(|| format!("zone {zone}"))?;
            return Ok(true);
        }
        ([zone], []) => {
            client.purge_zone(zone).await.with_context(|| format!("zone {zone}"))?;
            return Ok(true);
        }
        ([zone], files) => {
            let report = client.purge_files(zone, files.iter().cloned()).await;
            eprint!("{}", purge_lines("file", &report));
            report
        }
        (zones, _) => {
            let report = client.purge_zones(zones.iter().cloned()).await;
            eprint!("{}", purge_lines("zone", &report));
            report
        }
    };

    Ok(!report.has_failures())
}
