//! `maxcurl`: issue a signed request against any MaxCDN API endpoint.
//!
//! ```text
//! maxcurl -a ALIAS -t TOKEN -s SECRET /account.json
//! maxcurl -X POST "/zones/pull.json?name=newzone&url=http://example.com"
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use maxcdn_cli::output::{format_headers, pretty_json};
use maxcdn_cli::{init, split_endpoint, CommonArgs};
use maxcdn_infra::{MaxCdn, Method};
use serde::Deserialize;

/// Issue a signed request against PATH. A query string on PATH is sent as
/// form parameters.
#[derive(Debug, Parser)]
#[command(name = "maxcurl", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Request method
    #[arg(short = 'X', long, default_value = "GET", value_parser = parse_method)]
    method: Method,

    /// Print response headers before the body
    #[arg(short = 'i', long)]
    headers: bool,

    /// Pretty print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Endpoint path, e.g. /account.json
    path: String,
}

/// Settings read from the config file alongside the credentials
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    pretty: bool,
}

fn parse_method(value: &str) -> Result<Method, String> {
    Method::from_bytes(value.to_ascii_uppercase().as_bytes())
        .map_err(|_| format!("invalid method '{value}'"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init(cli.common.verbose) {
        eprintln!("maxcurl: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("maxcurl: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let (config, file) = cli.common.resolve::<FileSettings>()?;
    let client = MaxCdn::new(config).context("failed to create client")?;

    let (endpoint, form) = split_endpoint(&cli.path);
    let response = client
        .execute_raw(cli.method.clone(), &endpoint, form.as_ref())
        .await
        .with_context(|| format!("{} {endpoint} failed", cli.method))?;

    if cli.headers {
        println!("{}", format_headers(&response.headers));
    }

    if cli.pretty || file.pretty {
        println!("{}", pretty_json(&response.body)?);
    } else {
        println!("{}", response.text());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("maxcurl").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_get() {
        let cli = parse(&["/account.json"]).unwrap();
        assert_eq!(cli.method, Method::GET);
        assert_eq!(cli.path, "/account.json");
        assert!(!cli.headers);
        assert!(!cli.pretty);
    }

    #[test]
    fn method_is_case_insensitive() {
        let cli = parse(&["-X", "delete", "/zones/pull.json/1/cache"]).unwrap();
        assert_eq!(cli.method, Method::DELETE);
        let cli = parse(&["--method=put", "/zones/pull.json/1"]).unwrap();
        assert_eq!(cli.method, Method::PUT);
    }

    #[test]
    fn output_flags_and_credentials() {
        let cli = parse(&["-i", "--pretty", "-a", "alias", "-H", "http://localhost", "/users.json"])
            .unwrap();
        assert!(cli.headers);
        assert!(cli.pretty);
        assert_eq!(cli.common.alias.as_deref(), Some("alias"));
        assert_eq!(cli.common.host.as_deref(), Some("http://localhost"));
    }

    #[test]
    fn rejects_unknown_flags_and_missing_path() {
        assert!(parse(&["--bogus", "/a.json"]).is_err());
        assert!(parse(&["/a.json", "/b.json"]).is_err());
        assert!(parse(&[]).is_err());
    }
}
