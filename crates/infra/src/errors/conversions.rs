//! Conversions from external infrastructure errors into domain errors.

use maxcdn_domain::MaxCdnError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MaxCdnError);

impl From<InfraError> for MaxCdnError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MaxCdnError> for InfraError {
    fn from(value: MaxCdnError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoMaxCdnError {
    fn into_maxcdn(self) -> MaxCdnError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → MaxCdnError */
/* -------------------------------------------------------------------------- */

impl IntoMaxCdnError for HttpError {
    fn into_maxcdn(self) -> MaxCdnError {
        if self.is_timeout() {
            return MaxCdnError::Transport("HTTP request timed out".into());
        }

        if self.is_connect() {
            return MaxCdnError::Transport(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return MaxCdnError::InvalidRequest(format!("could not build HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            return MaxCdnError::Http { status: status.as_u16(), body: self.to_string() };
        }

        if self.is_body() || self.is_decode() {
            return MaxCdnError::Transport(format!("failed to read response body: {self}"));
        }

        MaxCdnError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_maxcdn())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → MaxCdnError */
/* -------------------------------------------------------------------------- */

impl IntoMaxCdnError for UrlError {
    fn into_maxcdn(self) -> MaxCdnError {
        MaxCdnError::InvalidRequest(format!("invalid request URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        Self(value.into_maxcdn())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → MaxCdnError */
/* -------------------------------------------------------------------------- */

impl IntoMaxCdnError for JsonError {
    fn into_maxcdn(self) -> MaxCdnError {
        MaxCdnError::Decode(format!("invalid response envelope: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_maxcdn())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
