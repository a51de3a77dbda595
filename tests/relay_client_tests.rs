//! Integration tests for the RelayClient using mockito for HTTP mocking.

mod fixtures;

use actech_site::relay::RelayPayload;
use actech_site::{Config, Metrics, RelayClient, RelayError, SiteConfig, Validate};
use fixtures::{valid_contact, valid_quote};
use mockito::{Matcher, Server};

fn field(name: &str, value: &str) -> Matcher {
    Matcher::Regex(format!(
        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
        regex::escape(name),
        regex::escape(value)
    ))
}

#[test]
fn test_submit_quote_posts_multipart_fields() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/leads")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            field("name", "Maria Silva"),
            field("email", "maria@example.com"),
            field("phone", ""),
            field("projectType", "ecommerce"),
            field("description", "I need an online store for my clothing brand"),
            field("_subject", "Novo Pedido de Orçamento: ecommerce"),
            field("_captcha", "false"),
        ]))
        .with_status(200)
        .with_body("<html>Obrigado</html>")
        .create();

    let client = RelayClient::with_base_url(server.url(), "leads".to_string());
    let payload = RelayPayload::from_submission(&valid_quote().validate().unwrap());

    client.submit(&payload).unwrap();

    mock.assert();
    assert_eq!(client.metrics().relay_requests_total(), 1);
    assert_eq!(client.metrics().relay_errors_total(), 0);
}

#[test]
fn test_submit_contact_subject_line() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/leads")
        .match_body(Matcher::AllOf(vec![
            field("subject", "Hello there"),
            field("_subject", "Contato via Site: Hello there"),
        ]))
        .with_status(200)
        .create();

    let client = RelayClient::with_base_url(server.url(), "leads".to_string());
    let payload = RelayPayload::from_submission(&valid_contact().validate().unwrap());

    assert!(client.submit(&payload).is_ok());
    mock.assert();
}

#[test]
fn test_email_destination_is_last_path_segment() {
    let mut server = Server::new();
    let site = SiteConfig::default();

    let mock = server
        .mock(
            "POST",
            Matcher::Regex(r"^/contato(@|%40)actech\.co\.mz$".to_string()),
        )
        .with_status(200)
        .create();

    let config = Config {
        relay_base_url: server.url(),
        ..Config::default()
    };
    let client = RelayClient::new(&config, site.form_submit_email, Metrics::new());
    let payload = RelayPayload::from_submission(&valid_contact().validate().unwrap());

    client.submit(&payload).unwrap();
    mock.assert();
}

#[test]
fn test_non_error_status_counts_as_delivered() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/leads")
        .with_status(204)
        .create();

    let client = RelayClient::with_base_url(server.url(), "leads".to_string());
    let payload = RelayPayload::from_submission(&valid_contact().validate().unwrap());

    assert!(client.submit(&payload).is_ok());
    mock.assert();
}

#[test]
fn test_error_status_fails_once_without_retry() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/leads")
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create();

    let client = RelayClient::with_base_url(server.url(), "leads".to_string());
    let payload = RelayPayload::from_submission(&valid_quote().validate().unwrap());

    let result = client.submit(&payload);

    mock.assert();
    match result {
        Err(RelayError::StatusError { status }) => assert_eq!(status, 500),
        other => panic!("Expected StatusError, got: {:?}", other),
    }
    assert_eq!(client.metrics().relay_requests_total(), 1);
    assert_eq!(client.metrics().relay_errors_total(), 1);
}

#[test]
fn test_connection_failure_is_an_error() {
    // Nothing listens on port 1
    let client = RelayClient::with_base_url("http://127.0.0.1:1".to_string(), "leads".to_string());
    let payload = RelayPayload::from_submission(&valid_contact().validate().unwrap());

    let result = client.submit(&payload);
    assert!(result.is_err());
    assert_eq!(client.metrics().relay_errors_total(), 1);
}

#[test]
fn test_dropped_connection_is_not_a_timeout() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 1024];
        let _ = std::io::Read::read(&mut stream, &mut buf);
    });

    let client = RelayClient::with_base_url(format!("http://{}", addr), "leads".to_string());
    let payload = RelayPayload::from_submission(&valid_contact().validate().unwrap());

    let result = client.submit(&payload);
    handle.join().unwrap();

    match result {
        Err(RelayError::HttpError(_)) => {}
        other => panic!("Expected HttpError, got: {:?}", other),
    }
}

#[test]
fn test_silent_relay_times_out_when_configured() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (_stream, _) = listener.accept().unwrap();
        std::thread::sleep(std::time::Duration::from_secs(5));
    });

    let config = Config {
        relay_base_url: format!("http://{}", addr),
        request_timeout_secs: 1,
        ..Config::default()
    };
    let client = RelayClient::new(&config, "leads", Metrics::new());
    let payload = RelayPayload::from_submission(&valid_contact().validate().unwrap());

    match client.submit(&payload) {
        Err(RelayError::Timeout) => {}
        other => panic!("Expected Timeout, got: {:?}", other),
    }
}
