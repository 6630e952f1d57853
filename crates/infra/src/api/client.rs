//! MaxCDN API client
//!
//! Builds a signed request, dispatches it through the configured transport
//! and parses the `{code, data, error}` envelope. No retries and no circuit
//! breaking: every error goes straight back to the caller.

use std::fmt;
use std::sync::Arc;

use maxcdn_domain::{ClientConfig, Envelope, Form, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use url::Url;

use super::envelope::{decode_data, parse_envelope};
use super::request::RequestBuilder;
use crate::auth::Signer;
use crate::http::{PreparedRequest, RawResponse, ReqwestTransport, Transport};

/// Client for one MaxCDN account
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct MaxCdn {
    requests: RequestBuilder,
    transport: Arc<dyn Transport>,
    verbose: bool,
}

impl MaxCdn {
    /// Create a client backed by a reqwest transport.
    ///
    /// # Errors
    /// Returns `MaxCdnError::Config` if the configuration is invalid, or
    /// `MaxCdnError::Transport` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let transport = ReqwestTransport::builder().timeout(config.timeout()).build()?;
        let host = config.normalized_host().to_string();

        Ok(Self {
            requests: RequestBuilder::new(
                host,
                config.alias,
                Signer::new(config.token, config.secret),
            ),
            transport: Arc::new(transport),
            verbose: config.verbose,
        })
    }

    /// Replace the transport, typically with a stub in tests.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Echo every request and response at info level.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn alias(&self) -> &str {
        self.requests.alias()
    }

    pub fn host(&self) -> &str {
        self.requests.host()
    }

    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Fully qualified URL for `endpoint`.
    ///
    /// # Errors
    /// Returns `MaxCdnError::InvalidRequest` if the URL does not parse.
    pub fn url_for(&self, endpoint: &str) -> Result<Url> {
        self.requests.url_for(endpoint)
    }

    /// Sign and dispatch a request, returning the response without envelope
    /// parsing. Non-2xx statuses are not errors at this level.
    ///
    /// # Errors
    /// Returns `MaxCdnError::InvalidRequest` before dispatch if the request
    /// is malformed, or `MaxCdnError::Transport` if no response arrived.
    #[instrument(skip(self, form), fields(alias = %self.alias()))]
    pub async fn execute_raw(
        &self,
        method: Method,
        endpoint: &str,
        form: Option<&Form>,
    ) -> Result<RawResponse> {
        let request = self.requests.build(&method, endpoint, form)?;
        if self.verbose {
            info!(target: "maxcdn::wire", "\n{}", RequestDump(&request));
        }

        let response = self.transport.execute(request).await?;
        if self.verbose {
            info!(target: "maxcdn::wire", "\n{}", ResponseDump(&response));
        }

        debug!(status = response.status, "response received");
        Ok(response)
    }

    /// Dispatch a request and parse the envelope.
    ///
    /// # Errors
    /// Everything [`MaxCdn::execute_raw`] returns, plus `MaxCdnError::Api`,
    /// `MaxCdnError::Http` and `MaxCdnError::Decode` from envelope parsing.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        form: Option<&Form>,
    ) -> Result<Envelope> {
        let response = self.execute_raw(method, endpoint, form).await?;
        parse_envelope(&response)
    }

    /// Dispatch a request and decode `data` into `T`.
    ///
    /// # Errors
    /// Everything [`MaxCdn::request`] returns, plus
    /// `MaxCdnError::UnexpectedShape` when `data` does not fit `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        form: Option<&Form>,
    ) -> Result<T> {
        let envelope = self.request(method, endpoint, form).await?;
        decode_data(&envelope)
    }

    /// GET `endpoint`; the form becomes the query string.
    ///
    /// # Errors
    /// See [`MaxCdn::request`].
    pub async fn get(&self, endpoint: &str, form: Option<&Form>) -> Result<Envelope> {
        self.request(Method::GET, endpoint, form).await
    }

    /// POST `endpoint` with a url-encoded body.
    ///
    /// # Errors
    /// See [`MaxCdn::request`].
    pub async fn post(&self, endpoint: &str, form: Option<&Form>) -> Result<Envelope> {
        self.request(Method::POST, endpoint, form).await
    }

    /// PUT `endpoint` with a url-encoded body.
    ///
    /// # Errors
    /// See [`MaxCdn::request`].
    pub async fn put(&self, endpoint: &str, form: Option<&Form>) -> Result<Envelope> {
        self.request(Method::PUT, endpoint, form).await
    }

    /// DELETE `endpoint`, with an optional url-encoded body.
    ///
    /// # Errors
    /// See [`MaxCdn::request`].
    pub async fn delete(&self, endpoint: &str, form: Option<&Form>) -> Result<Envelope> {
        self.request(Method::DELETE, endpoint, form).await
    }
}

impl fmt::Debug for MaxCdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxCdn")
            .field("host", &self.host())
            .field("alias", &self.alias())
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

struct RequestDump<'a>(&'a PreparedRequest);

impl fmt::Display for RequestDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.0;
        writeln!(f, "{} {}", request.method, request.url)?;
        for (name, value) in &request.headers {
            writeln!(f, "{name}: {value}")?;
        }
        if let Some(body) = &request.body {
            write!(f, "\n{body}")?;
        }
        Ok(())
    }
}

struct ResponseDump<'a>(&'a RawResponse);

impl fmt::Display for ResponseDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.0;
        writeln!(f, "HTTP {}", response.status)?;
        for (name, value) in &response.headers {
            writeln!(f, "{name}: {value}")?;
        }
        write!(f, "\n{}", response.text())
    }
}

#[cfg(test)]
mod tests {
    use maxcdn_domain::types::Account;
    use maxcdn_domain::MaxCdnError;

    use super::*;
    use crate::http::FixtureTransport;

    fn client(transport: FixtureTransport) -> (MaxCdn, Arc<FixtureTransport>) {
        let transport = Arc::new(transport);
        let client = MaxCdn::new(ClientConfig::new("alias", "token", "secret"))
            .unwrap()
            .with_transport(transport.clone());
        (client, transport)
    }

    #[test]
    fn new_rejects_invalid_config() {
        let err = MaxCdn::new(ClientConfig::new("alias", "", "secret")).unwrap_err();
        assert!(matches!(err, MaxCdnError::Config(_)));

        let err = MaxCdn::new(ClientConfig::new("acme#x", "token", "secret")).unwrap_err();
        assert!(matches!(err, MaxCdnError::Config(_)));
    }

    #[test]
    fn host_and_alias_come_from_config() {
        let client = MaxCdn::new(
            ClientConfig::new("alias", "token", "secret").with_host("http://localhost:9000/"),
        )
        .unwrap();
        assert_eq!(client.host(), "http://localhost:9000");
        assert_eq!(client.alias(), "alias");
        assert_eq!(
            client.url_for("account.json").unwrap().as_str(),
            "http://localhost:9000/alias/account.json"
        );
    }

    #[tokio::test]
    async fn get_dispatches_signed_request() {
        let (client, transport) = client(FixtureTransport::new().respond(
            Method::GET,
            "/account.json",
            200,
            r#"{"code":200,"data":{"account":{"alias":"alias"}}}"#,
        ));

        let envelope = client.get("/account.json", None).await.unwrap();
        assert_eq!(envelope.code, 200);

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url.as_str(), "https://rws.netdna.com/alias/account.json");
        assert!(sent[0].header("Authorization").unwrap().starts_with("OAuth "));
    }

    #[tokio::test]
    async fn malformed_get_never_reaches_transport() {
        let (client, transport) = client(FixtureTransport::new());

        let err = client.get("/account.json?foo=bar", None).await.unwrap_err();
        assert!(matches!(err, MaxCdnError::InvalidRequest(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn fetch_decodes_typed_data() {
        let (client, _) = client(FixtureTransport::new().respond(
            Method::GET,
            "/account.json",
            200,
            r#"{"code":200.0,"data":{"account":{"id":32123,"alias":"alias"}}}"#,
        ));

        let account: Account = client.fetch(Method::GET, "account.json", None).await.unwrap();
        assert_eq!(account.account.id, "32123");
    }

    #[tokio::test]
    async fn execute_raw_leaves_error_statuses_alone() {
        let (client, _) = client(FixtureTransport::new().respond(
            Method::GET,
            "/account.json",
            500,
            "oops",
        ));

        let response = client.execute_raw(Method::GET, "/account.json", None).await.unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(response.text(), "oops");
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let (client, _) = client(FixtureTransport::new().fail(
            Method::PUT,
            "/account.json",
            MaxCdnError::Transport("connection reset".into()),
        ));

        let err = client.put("/account.json", None).await.unwrap_err();
        assert_eq!(err, MaxCdnError::Transport("connection reset".into()));
    }

    #[tokio::test]
    async fn verbose_mode_still_returns_response() {
        let (client, _) = client(FixtureTransport::new().respond(
            Method::POST,
            "/zones/pull.json",
            201,
            r#"{"code":201,"data":{}}"#,
        ));
        let client = client.verbose(true);
        assert!(client.is_verbose());

        let form = Form::new().with("name", "zone").with("url", "http://example.com");
        let envelope = client.post("/zones/pull.json", Some(&form)).await.unwrap();
        assert_eq!(envelope.code, 201);
    }

    #[test]
    fn dumps_render_request_and_response() {
        let request = RequestBuilder::new("https://h", "a", Signer::new("t", "s"))
            .build(&Method::DELETE, "/c", Some(&Form::new().with("file", "/x.css")))
            .unwrap();
        let dump = RequestDump(&request).to_string();
        assert!(dump.starts_with("DELETE https://h/a/c\n"));
        assert!(dump.ends_with("\nfile=%2Fx.css"));

        let mut response = RawResponse::new(200, r#"{"code":200}"#);
        response.headers.push(("Content-Type".into(), "application/json".into()));
        let dump = ResponseDump(&response).to_string();
        assert_eq!(dump, "HTTP 200\nContent-Type: application/json\n\n{\"code\":200}");
    }

    #[test]
    fn debug_hides_credentials() {
        let (client, _) = client(FixtureTransport::new());
        let rendered = format!("{client:?}");
        assert!(rendered.contains("alias"));
        assert!(!rendered.contains("secret"));
    }
}
