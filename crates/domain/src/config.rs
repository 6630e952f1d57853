//! Client configuration
//!
//! [`ClientConfig`] is the validated value a client is built from.
//! [`PartialConfig`] is what each configuration source (file, environment,
//! command line) contributes before the layers are merged.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{DEFAULT_API_HOST, DEFAULT_TIMEOUT_SECS};
use crate::errors::{MaxCdnError, Result};

/// Validated configuration for a MaxCDN client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API host, scheme included (e.g. "https://rws.netdna.com")
    #[serde(default = "default_host")]
    pub host: String,
    /// Account alias, the first path segment of every request
    pub alias: String,
    /// Consumer key
    pub token: String,
    /// Consumer secret
    pub secret: String,
    /// Per-request timeout in seconds; `0` disables the client-side timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Echo every request and response at info level
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    DEFAULT_API_HOST.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Configuration against the default host.
    pub fn new(
        alias: impl Into<String>,
        token: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            host: default_host(),
            alias: alias.into(),
            token: token.into(),
            secret: secret.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verbose: false,
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Request timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Host with any trailing slash removed.
    pub fn normalized_host(&self) -> &str {
        self.host.trim_end_matches('/')
    }

    /// Check that alias, token and secret are present and the host is an
    /// absolute http(s) URL.
    ///
    /// # Errors
    /// Returns `MaxCdnError::Config` naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("alias", &self.alias), ("token", &self.token), ("secret", &self.secret)]
        {
            if value.trim().is_empty() {
                return Err(MaxCdnError::Config(format!("{name} must not be empty")));
            }
        }

        if let Some(c) = self.alias.chars().find(|&c| !is_unreserved(c)) {
            return Err(MaxCdnError::Config(format!(
                "alias must be a single path segment: '{c}' is not allowed in '{}'",
                self.alias
            )));
        }

        let host = Url::parse(self.normalized_host())
            .map_err(|e| MaxCdnError::Config(format!("Invalid host '{}': {e}", self.host)))?;
        if !matches!(host.scheme(), "http" | "https") {
            return Err(MaxCdnError::Config(format!(
                "Unsupported host scheme '{}': expected http or https",
                host.scheme()
            )));
        }

        Ok(())
    }
}

/// Characters that survive in a URL path segment without escaping.
const fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("alias", &self.alias)
            .field("token", &self.token)
            .field("secret", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("verbose", &self.verbose)
            .finish()
    }
}

/// One configuration layer; unset fields fall through to lower layers
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl PartialConfig {
    /// Merge `higher` on top of `self`; set fields in `higher` win. Empty
    /// strings count as unset.
    #[must_use]
    pub fn overlay(self, higher: Self) -> Self {
        fn pick(low: Option<String>, high: Option<String>) -> Option<String> {
            high.filter(|v| !v.is_empty()).or_else(|| low.filter(|v| !v.is_empty()))
        }

        Self {
            host: pick(self.host, higher.host),
            alias: pick(self.alias, higher.alias),
            token: pick(self.token, higher.token),
            secret: pick(self.secret, higher.secret),
            timeout_secs: higher.timeout_secs.or(self.timeout_secs),
            verbose: higher.verbose.or(self.verbose),
        }
    }

    /// Fill defaults and validate.
    ///
    /// # Errors
    /// Returns `MaxCdnError::Config` if a required field is missing or any
    /// field is invalid.
    pub fn into_config(self) -> Result<ClientConfig> {
        let require = |value: Option<String>, name: &str| {
            value.ok_or_else(|| MaxCdnError::Config(format!("Missing required setting: {name}")))
        };

        let config = ClientConfig {
            host: self.host.unwrap_or_else(default_host),
            alias: require(self.alias, "alias")?,
            token: require(self.token, "token")?,
            secret: require(self.secret, "secret")?,
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            verbose: self.verbose.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }
}

impl fmt::Debug for PartialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialConfig")
            .field("host", &self.host)
            .field("alias", &self.alias)
            .field("token", &self.token)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("verbose", &self.verbose)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(alias: Option<&str>, token: Option<&str>, secret: Option<&str>) -> PartialConfig {
        PartialConfig {
            alias: alias.map(str::to_string),
            token: token.map(str::to_string),
            secret: secret.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn new_uses_default_host_and_timeout() {
        let config = ClientConfig::new("alias", "token", "secret");
        assert_eq!(config.host, DEFAULT_API_HOST);
        assert_eq!(config.timeout(), Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_disables_timeout() {
        let config = ClientConfig::new("a", "t", "s").with_timeout_secs(0);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn validate_rejects_empty_credentials() {
        let err = ClientConfig::new("", "token", "secret").validate().unwrap_err();
        assert!(matches!(err, MaxCdnError::Config(msg) if msg.contains("alias")));

        let err = ClientConfig::new("alias", "token", "  ").validate().unwrap_err();
        assert!(matches!(err, MaxCdnError::Config(msg) if msg.contains("secret")));
    }

    #[test]
    fn validate_rejects_alias_that_would_escape_its_segment() {
        for alias in ["acme#x", "acme?x", "a/b", "a b", "acme%2F", "ac\u{e9}me"] {
            let err = ClientConfig::new(alias, "t", "s").validate().unwrap_err();
            assert!(
                matches!(&err, MaxCdnError::Config(msg) if msg.contains("single path segment")),
                "{alias}: {err}"
            );
        }

        assert!(ClientConfig::new("my-alias_1.x~", "t", "s").validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_hosts() {
        let config = ClientConfig::new("a", "t", "s").with_host("not a url");
        assert!(config.validate().is_err());

        let config = ClientConfig::new("a", "t", "s").with_host("ftp://example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn normalized_host_strips_trailing_slash() {
        let config = ClientConfig::new("a", "t", "s").with_host("http://localhost:8080/");
        assert_eq!(config.normalized_host(), "http://localhost:8080");
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", ClientConfig::new("a", "t", "very-secret"));
        assert!(!rendered.contains("very-secret"));

        let partial = layer(None, None, Some("very-secret"));
        assert!(!format!("{partial:?}").contains("very-secret"));
    }

    #[test]
    fn overlay_prefers_higher_layer() {
        let file = layer(Some("file-alias"), Some("file-token"), Some("file-secret"));
        let env = layer(Some("env-alias"), None, Some(""));
        let args = layer(None, Some("arg-token"), None);

        let merged = file.overlay(env).overlay(args);
        assert_eq!(merged.alias.as_deref(), Some("env-alias"));
        assert_eq!(merged.token.as_deref(), Some("arg-token"));
        assert_eq!(merged.secret.as_deref(), Some("file-secret"));
    }

    #[test]
    fn into_config_requires_credentials() {
        let err = layer(Some("a"), None, Some("s")).into_config().unwrap_err();
        assert!(matches!(err, MaxCdnError::Config(msg) if msg.contains("token")));
    }

    #[test]
    fn into_config_fills_defaults() {
        let config = layer(Some("a"), Some("t"), Some("s")).into_config().unwrap();
        assert_eq!(config.host, DEFAULT_API_HOST);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.verbose);
    }

    #[test]
    fn deserializes_from_toml_with_defaults() {
        let config: ClientConfig =
            toml::from_str("alias = \"a\"\ntoken = \"t\"\nsecret = \"s\"\n").unwrap();
        assert_eq!(config.host, DEFAULT_API_HOST);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
