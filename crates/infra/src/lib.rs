//! # MaxCDN Infrastructure
//!
//! Everything that performs I/O for the MaxCDN API client.
//!
//! This crate contains:
//! - OAuth1 request signing
//! - The swappable HTTP transport and its reqwest implementation
//! - Request assembly, envelope parsing and the [`MaxCdn`] client
//! - Concurrent fan-out for multi-target operations such as purges
//! - Configuration loading from files and the environment
//!
//! ## Architecture
//! - Builds on the types and errors in `maxcdn-domain`
//! - Tests substitute [`http::FixtureTransport`] for the network
//!
//! ```no_run
//! use maxcdn_domain::ClientConfig;
//! use maxcdn_infra::MaxCdn;
//!
//! # async fn run() -> maxcdn_domain::Result<()> {
//! let client = MaxCdn::new(ClientConfig::new("alias", "token", "secret"))?;
//! let report = client.purge_zones(["123456", "234567"]).await;
//! for (zone, err) in report.failures() {
//!     eprintln!("{zone}: {err}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{FanOutReport, MaxCdn, Outcome};
pub use auth::Signer;
pub use http::{PreparedRequest, RawResponse, Transport};
pub use reqwest::Method;
