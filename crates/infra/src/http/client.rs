use std::time::Duration;

use async_trait::async_trait;
use maxcdn_domain::constants::{DEFAULT_TIMEOUT_SECS, USER_AGENT};
use maxcdn_domain::{MaxCdnError, Result};
use reqwest::{Client as ReqwestClient, Proxy};
use tracing::debug;
use url::Url;

use super::{PreparedRequest, RawResponse, Transport};
use crate::errors::InfraError;

/// [`Transport`] backed by a shared reqwest client.
///
/// One attempt per request; failures are returned as-is.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: ReqwestClient,
}

impl ReqwestTransport {
    /// Start building a new transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Convenience constructor with default configuration.
    ///
    /// # Errors
    /// Returns `MaxCdnError::Transport` if the TLS backend cannot be
    /// initialised.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse> {
        let PreparedRequest { method, url, headers, body } = request;
        debug!(%method, %url, "sending HTTP request");

        let mut builder = self.client.request(method.clone(), url.clone());
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|err| {
            debug!(%method, %url, error = %err, "HTTP request failed");
            MaxCdnError::from(InfraError::from(err))
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.as_str().to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
            })
            .collect();

        // The body is drained here so the connection is released on every path.
        let body = response
            .bytes()
            .await
            .map_err(|err| MaxCdnError::from(InfraError::from(err)))?
            .to_vec();

        debug!(%method, %url, status, bytes = body.len(), "received HTTP response");
        Ok(RawResponse { status, headers, body })
    }
}

/// Builder for [`ReqwestTransport`].
///
/// Proxies come from the usual `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY`
/// variables unless one is set explicitly.
#[derive(Debug)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    proxy: Option<Url>,
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self { timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)), proxy: None }
    }
}

impl ReqwestTransportBuilder {
    /// Total per-request timeout; `None` disables it.
    #[must_use]
    pub const fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send every request through `proxy` instead of the environment's.
    #[must_use]
    pub fn proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// # Errors
    /// Returns `MaxCdnError::Transport` if reqwest rejects the configuration.
    pub fn build(self) -> Result<ReqwestTransport> {
        let mut builder = ReqwestClient::builder().user_agent(USER_AGENT);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy) = self.proxy {
            let proxy = Proxy::all(proxy).map_err(|err| MaxCdnError::from(InfraError::from(err)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|err| MaxCdnError::from(InfraError::from(err)))?;
        Ok(ReqwestTransport { client })
    }
}
