//! Configuration loader
//!
//! Loads client configuration from environment variables and files.
//!
//! ## Loading Strategy
//! 1. Read a config file, if one is given or found by probing
//! 2. Overlay environment variables on top of it
//! 3. Callers (the CLI tools) overlay command-line arguments last
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MAXCDN_ALIAS`: Account alias
//! - `MAXCDN_TOKEN`: Consumer key
//! - `MAXCDN_SECRET`: Consumer secret
//! - `MAXCDN_HOST`: API host override
//! - `MAXCDN_TIMEOUT_SECS`: Request timeout in seconds (`0` disables)
//! - `MAXCDN_VERBOSE`: Echo requests and responses (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./maxcdn.toml` or `./maxcdn.json` (current working directory)
//! 2. `$HOME/.maxcdn.toml` or `$HOME/.maxcdn.json`

use std::path::{Path, PathBuf};

use maxcdn_domain::constants::{
    ENV_ALIAS, ENV_HOST, ENV_SECRET, ENV_TIMEOUT_SECS, ENV_TOKEN, ENV_VERBOSE,
};
use maxcdn_domain::{ClientConfig, MaxCdnError, PartialConfig, Result};
use serde::de::DeserializeOwned;

/// Load a complete configuration from the probed file and the environment
///
/// # Errors
/// Returns `MaxCdnError::Config` if a file is unreadable or malformed, or
/// if alias, token or secret is missing from every source.
pub fn load() -> Result<ClientConfig> {
    load_partial(None)?.into_config()
}

/// File layer overlaid with the environment layer, not yet validated
///
/// With `path` set the file must exist. Without it, a missing probe result
/// just means there is no file layer.
///
/// # Errors
/// Returns `MaxCdnError::Config` if the file cannot be read or parsed, or
/// an environment variable has an invalid value.
pub fn load_partial(path: Option<&Path>) -> Result<PartialConfig> {
    let file = match path {
        Some(path) => load_from_file(Some(path.to_path_buf()))?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::debug!("No config file found, using environment only");
                PartialConfig::default()
            }
        },
    };

    Ok(file.overlay(load_from_env()?))
}

/// Load the configuration layer held in environment variables
///
/// Unset variables stay unset so lower layers can fill them.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `MaxCdnError::Config` if `MAXCDN_TIMEOUT_SECS` is not a number.
pub fn load_from_env() -> Result<PartialConfig> {
    let timeout_secs = env_var(ENV_TIMEOUT_SECS)
        .map(|s| {
            s.trim()
                .parse::<u64>()
                .map_err(|e| MaxCdnError::Config(format!("Invalid timeout '{s}': {e}")))
        })
        .transpose()?;

    Ok(PartialConfig {
        host: env_var(ENV_HOST),
        alias: env_var(ENV_ALIAS),
        token: env_var(ENV_TOKEN),
        secret: env_var(ENV_SECRET),
        timeout_secs,
        verbose: env_bool(ENV_VERBOSE),
    })
}

/// Load a configuration layer from a file
///
/// If `path` is `None`, probes the standard locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `MaxCdnError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<PartialConfig> {
    let config_path = match path {
        Some(p) => p,
        None => probe_config_paths().ok_or_else(|| {
            MaxCdnError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    load_file(&config_path)
}

/// Read and deserialize any config-shaped type from a TOML or JSON file
///
/// The CLI tools use this to read their own settings alongside the client
/// fields.
///
/// # Errors
/// Returns `MaxCdnError::Config` if the file is missing, unreadable, or
/// not valid for its extension.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(MaxCdnError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| MaxCdnError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config<T: DeserializeOwned>(contents: &str, path: &Path) -> Result<T> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MaxCdnError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MaxCdnError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(MaxCdnError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard paths for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    candidate_paths(std::env::current_dir().ok(), home_dir()).into_iter().find(|p| p.exists())
}

fn candidate_paths(cwd: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(cwd) = cwd {
        candidates.push(cwd.join("maxcdn.toml"));
        candidates.push(cwd.join("maxcdn.json"));
    }

    if let Some(home) = home {
        candidates.push(home.join(".maxcdn.toml"));
        candidates.push(home.join(".maxcdn.json"));
    }

    candidates
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Non-empty environment variable, if set
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `None` if not set.
fn env_bool(key: &str) -> Option<bool> {
    env_var(key).map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
