//! End-to-end tests for the godaddy-ddns binary
//!
//! Constraints verified:
//! - Exit status and output streams for success and failure
//! - Validation failures happen without network access
//! - The full scenario against a mock GoDaddy API, including %file arguments

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::tempdir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn godaddy_ddns() -> Command {
    let mut cmd = Command::cargo_bin("godaddy-ddns").unwrap();
    cmd.env_remove("GODADDY_KEY")
        .env_remove("GODADDY_SECRET")
        .env_remove("DDNS_LOG_LEVEL");
    cmd
}

fn record_template(server: &MockServer) -> String {
    format!("{}/v1/domains/{{domain}}/records/{{type}}/{{name}}", server.uri())
}

#[test]
fn version_prints_program_name() {
    godaddy_ddns()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("godaddy-ddns "));
}

#[test]
fn short_hostname_fails_without_network() {
    godaddy_ddns()
        .args(["bad", "--ip-url", "http://127.0.0.1:9/never-called"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "hostname \"bad\" must be in the form HOST.DOMAIN.TOP",
        ));
}

#[test]
fn out_of_range_ip_is_rejected() {
    godaddy_ddns()
        .args(["sub.example.com", "--ip", "999.1.1.1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ip \"999.1.1.1\" is not valid"));
}

#[test]
fn missing_argument_file_is_a_startup_error() {
    godaddy_ddns()
        .args(["%/nonexistent/godaddy-ddns.config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read argument file"));
}

#[test]
fn endpoint_template_without_placeholders_is_a_startup_error() {
    godaddy_ddns()
        .args([
            "sub.example.com",
            "--ip",
            "1.2.3.4",
            "--api-url",
            "https://api.example.invalid/v1/domains",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("GoDaddy API URL must contain {domain}"));
}

#[test]
fn non_http_ip_url_is_a_startup_error() {
    godaddy_ddns()
        .args(["sub.example.com", "--ip-url", "ftp://ip.example.invalid/"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[tokio::test]
async fn full_update_with_argument_file() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/domains/example.com/records/A/sub"))
        .and(header("Authorization", "sso-key K:S"))
        .and(body_json(json!([
            {"type": "A", "name": "sub.example.com", "data": "1.2.3.4", "ttl": 3600}
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let config = dir.path().join("godaddy-ddns.config");
    fs::write(&config, "sub.example.com\n--key\nK\n--secret\nS\n").unwrap();

    let args = vec![
        format!("%{}", config.display()),
        "--ip".to_string(),
        "1.2.3.4".to_string(),
        "--api-url".to_string(),
        record_template(&server),
    ];

    let output = tokio::task::spawn_blocking(move || godaddy_ddns().args(args).output().unwrap())
        .await
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "IP address for sub.example.com set to 1.2.3.4."
    );
}

#[tokio::test]
async fn auto_detected_ip_is_published() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("198.51.100.23\n"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/domains/example.com/records/A/home"))
        .and(body_json(json!([
            {"type": "A", "name": "home.example.com", "data": "198.51.100.23", "ttl": 3600}
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let args = vec![
        "home.example.com".to_string(),
        "--key".to_string(),
        "K".to_string(),
        "--secret".to_string(),
        "S".to_string(),
        "--ip-url".to_string(),
        format!("{}/ip", server.uri()),
        "--api-url".to_string(),
        record_template(&server),
    ];

    let output = tokio::task::spawn_blocking(move || godaddy_ddns().args(args).output().unwrap())
        .await
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("set to 198.51.100.23."));
}

#[tokio::test]
async fn rate_limited_update_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let args = vec![
        "sub.example.com".to_string(),
        "--ip".to_string(),
        "1.2.3.4".to_string(),
        "--api-url".to_string(),
        record_template(&server),
    ];

    let output = tokio::task::spawn_blocking(move || {
        godaddy_ddns()
            .args(args)
            .env("GODADDY_KEY", "K")
            .env("GODADDY_SECRET", "S")
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("too many requests to GoDaddy"));
}

#[tokio::test]
async fn forwarded_ttl_reaches_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(body_json(json!([
            {"type": "A", "name": "sub.example.com", "data": "1.2.3.4", "ttl": 600}
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let args = vec![
        "sub.example.com".to_string(),
        "--ip".to_string(),
        "1.2.3.4".to_string(),
        "--ttl".to_string(),
        "600".to_string(),
        "--forward-ttl".to_string(),
        "--api-url".to_string(),
        record_template(&server),
    ];

    let output = tokio::task::spawn_blocking(move || godaddy_ddns().args(args).output().unwrap())
        .await
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}
