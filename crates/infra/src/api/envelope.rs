//! Response envelope parsing
//!
//! Decoding is two-tier: the body always decodes into an [`Envelope`] with a
//! schema-less `data` value first; callers wanting a concrete type re-decode
//! `data` through [`decode_data`].

use maxcdn_domain::{Envelope, MaxCdnError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::InfraError;
use crate::http::RawResponse;

/// Parse a fully read response into an envelope.
///
/// A populated `error` object wins over the HTTP status, so an application
/// failure delivered with `200 OK` is still an error. A non-2xx response with
/// an empty `error` object is reported with its status.
///
/// # Errors
/// - `MaxCdnError::Api` when the envelope carries an error type or message
/// - `MaxCdnError::Http` for non-2xx responses without one, including
///   non-JSON error pages
/// - `MaxCdnError::Decode` when a 2xx body is not a valid envelope
pub fn parse_envelope(response: &RawResponse) -> Result<Envelope> {
    // 204/205 carry no body by definition
    if matches!(response.status, 204 | 205) && response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Envelope { code: i64::from(response.status), ..Envelope::default() });
    }

    let body: Value = match serde_json::from_slice(&response.body) {
        Ok(body) => body,
        Err(_) if !response.is_success() => return Err(http_error(response)),
        Err(err) => return Err(InfraError::from(err).into()),
    };

    // Only a JSON object is an envelope; serde would also accept an array
    // positionally.
    if !body.is_object() {
        if !response.is_success() {
            return Err(http_error(response));
        }
        return Err(MaxCdnError::Decode(format!(
            "expected a JSON object envelope, found {}",
            json_kind(&body)
        )));
    }
    let envelope = Envelope::deserialize(body).map_err(InfraError::from)?;

    if let Some(failure) = envelope.failure() {
        return Err(MaxCdnError::api(failure.kind.clone(), failure.message.clone()));
    }

    if !response.is_success() {
        return Err(http_error(response));
    }

    Ok(envelope)
}

/// Re-decode the envelope's `data` into `T`.
///
/// # Errors
/// Returns `MaxCdnError::UnexpectedShape` when `data` does not fit `T`.
pub fn decode_data<T: DeserializeOwned>(envelope: &Envelope) -> Result<T> {
    T::deserialize(&envelope.data).map_err(|err| {
        MaxCdnError::UnexpectedShape(format!(
            "data does not match {}: {err}",
            std::any::type_name::<T>()
        ))
    })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn http_error(response: &RawResponse) -> MaxCdnError {
    MaxCdnError::Http { status: response.status, body: response.text() }
}
