//! `maxpopular`: print the most requested files for the account.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use maxcdn_cli::output::popular_table;
use maxcdn_cli::{init, CommonArgs, NoSettings};
use maxcdn_infra::MaxCdn;

/// Print the popular files report as a hits/file table.
#[derive(Debug, Parser)]
#[command(name = "maxpopular", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Show the top N files, 0 shows all
    #[arg(short = 'n', long, value_name = "N", default_value_t = 0)]
    top: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init(cli.common.verbose) {
        eprintln!("maxpopular: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("maxpopular: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let (config, NoSettings {}) = cli.common.resolve::<NoSettings>()?;
    let client = MaxCdn::new(config).context("failed to create client")?;

    let files = client.popular_files(None).await.context("failed to fetch popular files")?;
    print!("{}", popular_table(&files, cli.top));
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("maxpopular").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn top_defaults_to_all() {
        assert_eq!(parse(&[]).unwrap().top, 0);
        assert_eq!(parse(&["-n", "5"]).unwrap().top, 5);
        assert_eq!(parse(&["--top=10"]).unwrap().top, 10);
    }

    #[test]
    fn top_must_be_a_number() {
        assert!(parse(&["--top", "many"]).is_err());
    }
}
