//! Shared helpers for the wiremock-backed integration tests
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use maxcdn_domain::{ClientConfig, Form};
use maxcdn_infra::auth::oauth1::base_string;
use maxcdn_infra::MaxCdn;
use sha1::Sha1;
use url::Url;
use wiremock::{MockServer, Request, ResponseTemplate};

pub const ALIAS: &str = "aliasname";
pub const TOKEN: &str = "consumer-token";
pub const SECRET: &str = "consumer-secret";

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> MaxCdn {
    MaxCdn::new(ClientConfig::new(ALIAS, TOKEN, SECRET).with_host(server.uri()))
        .expect("client should build")
}

/// Contents of `tests/fixtures/{name}`.
pub fn fixture(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name].iter().collect();
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("fixture {} should exist: {e}", path.display()))
}

/// 200 response carrying the named fixture as JSON.
pub fn json_fixture(name: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(fixture(name), "application/json")
}

/// `oauth_*` fields of an `Authorization: OAuth ...` header, decoded.
pub fn oauth_fields(request: &Request) -> BTreeMap<String, String> {
    let header = request
        .headers
        .get("authorization")
        .expect("request should carry Authorization")
        .to_str()
        .expect("Authorization should be ASCII");

    header
        .strip_prefix("OAuth ")
        .expect("Authorization should use the OAuth scheme")
        .split(", ")
        .map(|field| {
            let (key, value) = field.split_once('=').expect("field should be key=value");
            let value = urlencoding::decode(value.trim_matches('"')).expect("field should decode");
            (key.to_string(), value.into_owned())
        })
        .collect()
}

/// Recompute the signature the way a server would and compare.
///
/// The signed URL is rebuilt from the server's real origin plus the received
/// path, since wiremock reports requests against `localhost`.
/// `signed_query` says whether the received query string was part of the
/// signed URL; `signed_form` is the form that went into the base string.
pub fn signature_matches(
    server: &MockServer,
    request: &Request,
    signed_query: bool,
    signed_form: Option<&Form>,
) -> bool {
    let mut fields = oauth_fields(request);
    let Some(signature) = fields.remove("oauth_signature") else {
        return false;
    };

    let mut url = Url::parse(&format!("{}{}", server.uri(), request.url.path()))
        .expect("server origin plus path should be a URL");
    if signed_query {
        url.set_query(request.url.query());
    }

    let oauth: Vec<(&str, String)> =
        fields.iter().map(|(key, value)| (key.as_str(), value.clone())).collect();
    let base = base_string(&request.method, &url, signed_form, &oauth);

    let mut mac = Hmac::<Sha1>::new_from_slice(format!("{SECRET}&").as_bytes()).unwrap();
    mac.update(base.as_bytes());
    BASE64.encode(mac.finalize().into_bytes()) == signature
}
