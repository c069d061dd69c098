use std::time::Duration;

use mockito::{Matcher, Server};
use qc_core::ports::{NetworkError, ServerStatsPort, ValidationPort};
use qc_core::{Outcome, ValidationStatus};
use qc_infra::HttpValidationClient;

fn client() -> HttpValidationClient {
    HttpValidationClient::new(Some(Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn sends_action_and_encoded_payload_as_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "validate".into()),
            Matcher::UrlEncoded("qr".into(), "INV-42 mesa&3=ok".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"status":"valid","guestName":"Ana","message":"Mesa 3"}"#)
        .expect(1)
        .create_async()
        .await;

    let endpoint = format!("{}/v", server.url());
    let result = client().validate("INV-42 mesa&3=ok", &endpoint).await.unwrap();

    mock.assert_async().await;
    assert_eq!(Outcome::classify(&result), Outcome::Valid);
    assert_eq!(result.guest_name.as_deref(), Some("Ana"));
    assert_eq!(result.message.as_deref(), Some("Mesa 3"));
}

#[tokio::test]
async fn already_used_response_is_parsed() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v")
        .match_query(Matcher::Any)
        .with_body(
            r#"{"success":false,"status":"already_used","guestName":"Luis","scannedAt":"10:02:05"}"#,
        )
        .create_async()
        .await;

    let result = client()
        .validate("X", &format!("{}/v", server.url()))
        .await
        .unwrap();

    assert_eq!(result.status, ValidationStatus::AlreadyUsed);
    assert_eq!(Outcome::classify(&result), Outcome::Duplicate);
    assert_eq!(result.scanned_at.as_deref(), Some("10:02:05"));
}

#[tokio::test]
async fn json_of_unexpected_shape_is_not_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v")
        .match_query(Matcher::Any)
        .with_body(r#"["unexpected"]"#)
        .create_async()
        .await;

    let result = client()
        .validate("X", &format!("{}/v", server.url()))
        .await
        .unwrap();

    assert_eq!(Outcome::classify(&result), Outcome::Invalid);
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client()
        .validate("X", &format!("{}/v", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::Parse(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Port 1 is reserved and refuses connections on loopback.
    let err = client()
        .validate("X", "http://127.0.0.1:1/v")
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::Transport(_)));
}

#[tokio::test]
async fn malformed_endpoint_is_rejected_before_sending() {
    let err = client().validate("X", "not a url").await.unwrap_err();
    assert!(matches!(err, NetworkError::InvalidEndpoint(_)));
}

#[tokio::test]
async fn existing_query_parameters_are_kept() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/exec")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("deployment".into(), "prod".into()),
            Matcher::UrlEncoded("action".into(), "validate".into()),
            Matcher::UrlEncoded("qr".into(), "X".into()),
        ]))
        .with_body(r#"{"success":true,"status":"valid"}"#)
        .create_async()
        .await;

    client()
        .validate("X", &format!("{}/exec?deployment=prod", server.url()))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn stats_are_fetched_with_stats_action() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v")
        .match_query(Matcher::UrlEncoded("action".into(), "stats".into()))
        .with_body(
            r#"{"success":true,"stats":{"scanned":10,"pending":5,"total":15},"timestamp":"2026-10-18T09:00:00Z"}"#,
        )
        .create_async()
        .await;

    let stats = client()
        .fetch_stats(&format!("{}/v", server.url()))
        .await
        .unwrap();

    assert_eq!((stats.scanned, stats.pending, stats.total), (10, 5, 15));
    assert_eq!(stats.timestamp.as_deref(), Some("2026-10-18T09:00:00Z"));
}

#[tokio::test]
async fn unsuccessful_stats_response_is_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v")
        .match_query(Matcher::Any)
        .with_body(r#"{"success":false}"#)
        .create_async()
        .await;

    let err = client()
        .fetch_stats(&format!("{}/v", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::Parse(_)));
}

#[tokio::test]
async fn mistyped_guest_name_still_counts_as_valid() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v")
        .match_query(Matcher::Any)
        .with_body(r#"{"success":true,"status":"valid","guestName":42}"#)
        .create_async()
        .await;

    let result = client()
        .validate("X", &format!("{}/v", server.url()))
        .await
        .unwrap();

    assert_eq!(Outcome::classify(&result), Outcome::Valid);
    assert_eq!(result.guest_name, None);
}
