//! Request assembly
//!
//! Turns `(method, endpoint, form)` into a signed [`PreparedRequest`]. No I/O
//! happens here, so malformed requests fail before anything is dispatched.

use maxcdn_domain::constants::{CONTENT_TYPE, USER_AGENT};
use maxcdn_domain::{Form, MaxCdnError, Result};
use reqwest::Method;
use url::Url;

use crate::auth::Signer;
use crate::errors::InfraError;
use crate::http::PreparedRequest;

/// Builds signed requests against `{host}/{alias}/...`
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    host: String,
    alias: String,
    signer: Signer,
}

impl RequestBuilder {
    pub fn new(host: impl Into<String>, alias: impl Into<String>, signer: Signer) -> Self {
        let host = host.into().trim_end_matches('/').to_string();
        Self { host, alias: alias.into(), signer }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// `{host}/{alias}/{endpoint}`, one leading slash on `endpoint` ignored.
    ///
    /// # Errors
    /// Returns `MaxCdnError::InvalidRequest` if the result is not a valid URL.
    pub fn url_for(&self, endpoint: &str) -> Result<Url> {
        let path = endpoint.strip_prefix('/').unwrap_or(endpoint);
        let raw = format!("{}/{}/{path}", self.host, self.alias);
        Url::parse(&raw).map_err(|err| InfraError::from(err).into())
    }

    /// Assemble and sign a request.
    ///
    /// GET forms travel in the query string, every other method sends them
    /// as a url-encoded body. Only POST forms are part of the signature.
    ///
    /// # Errors
    /// Returns `MaxCdnError::InvalidRequest` for an unsupported method, an
    /// unparseable URL, or a GET endpoint that already carries a query
    /// string.
    pub fn build(
        &self,
        method: &Method,
        endpoint: &str,
        form: Option<&Form>,
    ) -> Result<PreparedRequest> {
        if !matches!(*method, Method::GET | Method::POST | Method::PUT | Method::DELETE) {
            return Err(MaxCdnError::InvalidRequest(format!("unsupported method {method}")));
        }

        let mut url = self.url_for(endpoint)?;
        if *method == Method::GET && url.query().is_some_and(|q| !q.is_empty()) {
            return Err(MaxCdnError::InvalidRequest(format!(
                "url must not contain a query string: {endpoint}"
            )));
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        let form = form.filter(|f| !f.is_empty());
        let signed_form = form.filter(|_| *method == Method::POST);
        let authorization = self.signer.authorization(method, &url, signed_form)?;

        let mut body = None;
        if let Some(form) = form {
            if *method == Method::GET {
                url.set_query(Some(&form.encode()));
            } else {
                body = Some(form.encode());
            }
        }

        Ok(PreparedRequest {
            method: method.clone(),
            url,
            headers: vec![
                ("Authorization".to_string(), authorization),
                ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
                ("User-Agent".to_string(), USER_AGENT.to_string()),
            ],
            body,
        })
    }
}
