//! Two-legged OAuth1 HMAC-SHA1 signer
//!
//! The signature base string is
//!
//! ```text
//! METHOD & enc(scheme://host[:port]/path) & enc(sorted, encoded params)
//! ```
//!
//! where the params are the `oauth_*` fields, any query already on the URL,
//! and whatever form the caller hands in. The signing key is
//! `enc(consumer_secret) + "&"` since there is no token secret.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use maxcdn_domain::{Form, MaxCdnError, Result};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::Method;
use sha1::Sha1;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 32;

/// Signs requests with a consumer key/secret pair
#[derive(Clone)]
pub struct Signer {
    consumer_key: String,
    consumer_secret: String,
}

impl Signer {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self { consumer_key: consumer_key.into(), consumer_secret: consumer_secret.into() }
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// `Authorization` header value using a fresh nonce and the current time.
    ///
    /// # Errors
    /// Returns `MaxCdnError::Internal` if the MAC cannot be keyed.
    pub fn authorization(&self, method: &Method, url: &Url, form: Option<&Form>) -> Result<String> {
        let nonce: String =
            rand::thread_rng().sample_iter(&Alphanumeric).take(NONCE_LEN).map(char::from).collect();
        self.authorization_with(method, url, form, &nonce, chrono::Utc::now().timestamp())
    }

    /// Deterministic variant of [`Signer::authorization`].
    ///
    /// # Errors
    /// Returns `MaxCdnError::Internal` if the MAC cannot be keyed.
    pub fn authorization_with(
        &self,
        method: &Method,
        url: &Url,
        form: Option<&Form>,
        nonce: &str,
        timestamp: i64,
    ) -> Result<String> {
        let mut oauth = self.oauth_params(nonce, timestamp);
        let signature = self.signature(method, url, form, &oauth)?;
        oauth.push(("oauth_signature", signature));
        oauth.sort_unstable();

        let fields: Vec<String> =
            oauth.iter().map(|(key, value)| format!("{key}=\"{}\"", encode(value))).collect();
        Ok(format!("OAuth {}", fields.join(", ")))
    }

    fn oauth_params(&self, nonce: &str, timestamp: i64) -> Vec<(&'static str, String)> {
        vec![
            ("oauth_consumer_key", self.consumer_key.clone()),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_signature_method", SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp", timestamp.to_string()),
            ("oauth_version", OAUTH_VERSION.to_string()),
        ]
    }

    fn signature(
        &self,
        method: &Method,
        url: &Url,
        form: Option<&Form>,
        oauth: &[(&str, String)],
    ) -> Result<String> {
        let base = base_string(method, url, form, oauth);
        let key = format!("{}&", encode(&self.consumer_secret));

        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| MaxCdnError::Internal(format!("failed to key HMAC-SHA1: {e}")))?;
        mac.update(base.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .finish()
    }
}

/// OAuth1 signature base string.
pub fn base_string(
    method: &Method,
    url: &Url,
    form: Option<&Form>,
    oauth: &[(&str, String)],
) -> String {
    let mut params: Vec<(String, String)> = oauth
        .iter()
        .map(|(key, value)| (encode(key), encode(value)))
        .chain(url.query_pairs().map(|(key, value)| (encode(&key), encode(&value))))
        .collect();
    if let Some(form) = form {
        params.extend(form.pairs().map(|(key, value)| (encode(key), encode(value))));
    }
    params.sort_unstable();

    let normalized: Vec<String> =
        params.into_iter().map(|(key, value)| format!("{key}={value}")).collect();

    format!(
        "{}&{}&{}",
        method.as_str().to_ascii_uppercase(),
        encode(&base_uri(url)),
        encode(&normalized.join("&"))
    )
}

// scheme://host[:port]/path, query and fragment dropped. `Url` already
// lowercases scheme and host and omits default ports.
fn base_uri(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{host}:{port}{}", url.scheme(), url.path()),
        None => format!("{}://{host}{}", url.scheme(), url.path()),
    }
}

// RFC 3986 unreserved characters pass through, everything else is %XX.
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
