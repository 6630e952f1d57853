//! HTTP transport
//!
//! The client never talks to reqwest directly. Everything goes through the
//! [`Transport`] trait so tests can swap in [`stub::FixtureTransport`] and
//! assert on exactly what would have been sent.

pub mod client;
pub mod stub;

use async_trait::async_trait;
use maxcdn_domain::Result;
use reqwest::Method;
use url::Url;

pub use client::{ReqwestTransport, ReqwestTransportBuilder};
pub use stub::FixtureTransport;

/// A signed request, ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A response whose body has already been read to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, headers: Vec::new(), body: body.into() }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Body as text, invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, value)| value.as_str())
}

/// Performs one HTTP round trip.
///
/// Implementations read the body to completion before returning, so no
/// caller ever holds an open response stream.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Dispatch `request`.
    ///
    /// # Errors
    /// Returns `MaxCdnError::Transport` when no response was received.
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse>;
}
