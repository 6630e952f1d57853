//! Common options and configuration layering

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use maxcdn_domain::{ClientConfig, Form, PartialConfig};
use maxcdn_infra::config;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Options shared by every tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct CommonArgs {
    /// TOML or JSON file with alias, token, secret and host
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Consumer alias [env: MAXCDN_ALIAS]
    #[arg(short, long)]
    pub alias: Option<String>,

    /// Consumer token [env: MAXCDN_TOKEN]
    #[arg(short, long)]
    pub token: Option<String>,

    /// Consumer secret [env: MAXCDN_SECRET]
    #[arg(short, long)]
    pub secret: Option<String>,

    /// Override the API host [env: MAXCDN_HOST]
    #[arg(short = 'H', long, value_name = "URL")]
    pub host: Option<String>,

    /// Echo requests and responses to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Tool settings for tools that read nothing beyond the client fields
#[derive(Debug, Default, Deserialize)]
pub struct NoSettings {}

/// Config file contents: client fields plus tool-specific settings
#[derive(Deserialize)]
struct FileLayer<T> {
    #[serde(flatten)]
    client: PartialConfig,
    #[serde(flatten)]
    tool: T,
}

impl CommonArgs {
    /// The command-line configuration layer.
    pub fn layer(&self) -> PartialConfig {
        PartialConfig {
            host: self.host.clone(),
            alias: self.alias.clone(),
            token: self.token.clone(),
            secret: self.secret.clone(),
            timeout_secs: None,
            verbose: self.verbose.then_some(true),
        }
    }

    /// Build the client configuration from file, environment and arguments,
    /// and read the tool's own settings `T` from the same file.
    ///
    /// An explicit `--config` must exist; otherwise the standard locations
    /// are probed and a missing file is fine.
    ///
    /// # Errors
    /// Fails if the file is unreadable or malformed, or credentials are
    /// still incomplete after layering.
    pub fn resolve<T>(&self) -> anyhow::Result<(ClientConfig, T)>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.config.clone().or_else(config::probe_config_paths);
        let file = match path {
            Some(path) => config::load_file::<FileLayer<T>>(&path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => FileLayer { client: PartialConfig::default(), tool: T::default() },
        };

        let env = config::load_from_env().context("invalid environment configuration")?;
        let client = file.client.overlay(env).overlay(self.layer()).into_config().context(
            "alias, token and secret are required (arguments, MAXCDN_* variables or a config file)",
        )?;

        Ok((client, file.tool))
    }
}

/// Split `PATH?query` into the endpoint and its query as form parameters.
pub fn split_endpoint(path: &str) -> (String, Option<Form>) {
    match path.split_once('?') {
        Some((endpoint, query)) => {
            let form = Form::parse(query);
            (endpoint.to_string(), (!form.is_empty()).then_some(form))
        }
        None => (path.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        common: CommonArgs,
        rest: Vec<String>,
    }

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("tool").chain(args.iter().copied()))
    }

    #[test]
    fn short_and_long_flags() {
        let cli = parse(&["-a", "alias", "--token", "tok", "--secret=sec", "-v", "/account.json"])
            .unwrap();
        assert_eq!(cli.common.alias.as_deref(), Some("alias"));
        assert_eq!(cli.common.token.as_deref(), Some("tok"));
        assert_eq!(cli.common.secret.as_deref(), Some("sec"));
        assert!(cli.common.verbose);
        assert_eq!(cli.rest, ["/account.json"]);
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = parse(&["--alias"]).unwrap_err();
        assert!(err.to_string().contains("--alias"));
    }

    #[test]
    fn host_uses_upper_case_short_flag() {
        let cli = parse(&["-H", "http://localhost:8080"]).unwrap();
        let layer = cli.common.layer();
        assert_eq!(layer.host.as_deref(), Some("http://localhost:8080"));
        assert_eq!(layer.alias, None);
        assert_eq!(layer.verbose, None);
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct ToolSettings {
        pretty: bool,
    }

    #[test]
    fn arguments_override_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "alias = \"from-file\"\ntoken = \"t\"\nsecret = \"s\"\npretty = true")
            .unwrap();

        let common = CommonArgs {
            config: Some(file.path().to_path_buf()),
            alias: Some("from-args".into()),
            ..CommonArgs::default()
        };

        let (config, tool) = common.resolve::<ToolSettings>().unwrap();
        assert_eq!(config.alias, "from-args");
        assert_eq!(config.token, "t");
        assert!(tool.pretty);
    }

    #[test]
    fn explicit_config_must_exist() {
        let common = CommonArgs {
            config: Some(PathBuf::from("/nonexistent/maxcdn.toml")),
            ..CommonArgs::default()
        };
        let err = common.resolve::<ToolSettings>().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/maxcdn.toml"));
    }

    #[test]
    fn split_endpoint_moves_query_into_form() {
        let (endpoint, form) = split_endpoint("/reports/popularfiles.json?page_size=5&page=2");
        assert_eq!(endpoint, "/reports/popularfiles.json");
        let form = form.unwrap();
        assert_eq!(form.get("page_size"), Some("5"));
        assert_eq!(form.get("page"), Some("2"));

        assert_eq!(split_endpoint("/account.json"), ("/account.json".to_string(), None));
        assert_eq!(split_endpoint("/account.json?"), ("/account.json".to_string(), None));
    }
}
