//! In-memory transport returning canned fixtures
//!
//! Routes match on method and path suffix (and optionally a fragment of the
//! encoded form), first registration wins. Every request is recorded so
//! tests can assert on what would have gone over the wire.

use async_trait::async_trait;
use maxcdn_domain::{MaxCdnError, Result};
use parking_lot::Mutex;
use reqwest::Method;

use super::{PreparedRequest, RawResponse, Transport};

#[derive(Debug)]
enum Reply {
    Response(RawResponse),
    Error(MaxCdnError),
}

#[derive(Debug)]
struct Route {
    method: Method,
    path_suffix: String,
    form_fragment: Option<String>,
    reply: Reply,
}

impl Route {
    fn matches(&self, request: &PreparedRequest) -> bool {
        if self.method != request.method || !request.url.path().ends_with(&self.path_suffix) {
            return false;
        }
        self.form_fragment.as_deref().map_or(true, |fragment| {
            request.url.query().is_some_and(|q| q.contains(fragment))
                || request.body.as_deref().is_some_and(|b| b.contains(fragment))
        })
    }
}

/// [`super::Transport`] that never touches the network
#[derive(Debug, Default)]
pub struct FixtureTransport {
    routes: Vec<Route>,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method` requests whose path ends with `path_suffix`.
    #[must_use]
    pub fn respond(
        self,
        method: Method,
        path_suffix: impl Into<String>,
        status: u16,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.push(method, path_suffix.into(), None, Reply::Response(RawResponse::new(status, body)))
    }

    /// Like [`FixtureTransport::respond`], but only when the encoded query or
    /// body contains `form_fragment`.
    #[must_use]
    pub fn respond_if(
        self,
        method: Method,
        path_suffix: impl Into<String>,
        form_fragment: impl Into<String>,
        status: u16,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.push(
            method,
            path_suffix.into(),
            Some(form_fragment.into()),
            Reply::Response(RawResponse::new(status, body)),
        )
    }

    /// Fail matching requests with `error` instead of responding.
    #[must_use]
    pub fn fail(self, method: Method, path_suffix: impl Into<String>, error: MaxCdnError) -> Self {
        self.push(method, path_suffix.into(), None, Reply::Error(error))
    }

    fn push(
        mut self,
        method: Method,
        path_suffix: String,
        form_fragment: Option<String>,
        reply: Reply,
    ) -> Self {
        self.routes.push(Route { method, path_suffix, form_fragment, reply });
        self
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse> {
        let route = self.routes.iter().find(|route| route.matches(&request));
        let reply = match route {
            Some(Route { reply: Reply::Response(response), .. }) => Ok(response.clone()),
            Some(Route { reply: Reply::Error(error), .. }) => Err(error.clone()),
            None => Ok(RawResponse::new(
                404,
                format!(
                    r#"{{"code":404,"error":{{"type":"not_found","message":"no fixture for {} {}"}}}}"#,
                    request.method,
                    request.url.path()
                ),
            )),
        };

        self.requests.lock().push(request);
        reply
    }
}
