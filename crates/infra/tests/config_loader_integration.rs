//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! building a client from it.

use std::io::Write;

use maxcdn_infra::{config, MaxCdn};
use tempfile::Builder;

#[test]
fn test_load_config_from_toml_file_builds_client() {
    let toml_content = r#"
alias = "aliasname"
token = "consumer-token"
secret = "consumer-secret"
host = "http://localhost:8080/"
timeout_secs = 10
"#;

    let mut temp_file =
        Builder::new().suffix(".toml").tempfile().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let layer = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");
    let client_config = layer.into_config().expect("config should be complete");

    assert_eq!(client_config.alias, "aliasname");
    assert_eq!(client_config.timeout_secs, 10);

    let client = MaxCdn::new(client_config).expect("client should build");
    assert_eq!(client.host(), "http://localhost:8080");
    assert_eq!(
        client.url_for("/account.json").unwrap().as_str(),
        "http://localhost:8080/aliasname/account.json"
    );
}

#[test]
fn test_incomplete_json_file_reports_missing_field() {
    let json_content = r#"{ "alias": "aliasname", "token": "consumer-token" }"#;

    let mut temp_file =
        Builder::new().suffix(".json").tempfile().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let layer = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("partial file should still parse");
    let err = layer.into_config().expect_err("secret is missing");

    assert!(err.to_string().contains("secret"));
}

#[test]
fn test_invalid_host_in_file_is_rejected() {
    let toml_content = "alias = \"a\"\ntoken = \"t\"\nsecret = \"s\"\nhost = \"rws.netdna.com\"\n";

    let mut temp_file =
        Builder::new().suffix(".toml").tempfile().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let layer = config::load_from_file(Some(temp_file.path().to_path_buf())).unwrap();
    assert!(layer.into_config().is_err());
}
