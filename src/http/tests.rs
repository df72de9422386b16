//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.user_agent, format!("sheet-sync/{}", crate::VERSION));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder().user_agent("test-agent/1.0").build();
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_parse_http_url_accepts_http_and_https() {
    assert!(parse_http_url("http://example.com/a.csv").is_ok());
    assert!(parse_http_url("https://docs.google.com/spreadsheets/d/x/export?format=csv").is_ok());
}

#[test]
fn test_parse_http_url_rejects_other_schemes() {
    let err = parse_http_url("ftp://example.com/a.csv").unwrap_err();
    assert!(matches!(err, Error::InvalidScheme { ref scheme, .. } if scheme == "ftp"));

    let err = parse_http_url("not a url").unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_fetch_text_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sheet.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Name,Score\nAlice,10\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let body = client
        .fetch_text(&format!("{}/sheet.csv", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "Name,Score\nAlice,10\n");
}

#[tokio::test]
async fn test_fetch_text_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("User-Agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().user_agent("test-agent/1.0").build();
    let client = HttpClient::with_config(config).unwrap();
    let body = client
        .fetch_text(&format!("{}/ua", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_fetch_text_404_is_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .fetch_text(&format!("{}/missing", mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, reason } => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_text_does_not_follow_redirects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("{}/target", mock_server.uri()).as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/target"))
        .respond_with(ResponseTemplate::new(200).set_body_string("a,b\n1,2\n"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .fetch_text(&format!("{}/moved", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 302, .. }));
}

#[tokio::test]
async fn test_fetch_text_other_success_codes_fail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accepted"))
        .respond_with(ResponseTemplate::new(202).set_body_string("later"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .fetch_text(&format!("{}/accepted", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 202, .. }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_fetch_text_connection_refused() {
    // Bind then drop a listener so the port is closed
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let client = HttpClient::new().unwrap();
    let err = client
        .fetch_text(&format!("{uri}/gone"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_transport());
}
