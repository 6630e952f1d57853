//! Client constants
//!
//! Centralized location for the fixed values every request carries.

/// Default API host; every request URL is `{host}/{alias}/{endpoint}`.
pub const DEFAULT_API_HOST: &str = "https://rws.netdna.com";

/// Fixed client identifier sent as `User-Agent`.
pub const USER_AGENT: &str = "Rust MaxCDN API Client";

/// Content type for both query strings and request bodies.
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// Transport defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Environment variables read by the config loader
pub const ENV_ALIAS: &str = "MAXCDN_ALIAS";
pub const ENV_TOKEN: &str = "MAXCDN_TOKEN";
pub const ENV_SECRET: &str = "MAXCDN_SECRET";
pub const ENV_HOST: &str = "MAXCDN_HOST";
pub const ENV_TIMEOUT_SECS: &str = "MAXCDN_TIMEOUT_SECS";
pub const ENV_VERBOSE: &str = "MAXCDN_VERBOSE";
