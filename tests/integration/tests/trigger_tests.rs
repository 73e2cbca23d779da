//! End-to-end trigger tests
//!
//! A real ingress server delivers to a wiremock endpoint standing in for the
//! mirror API.

use std::time::Duration;

use futures::future::join_all;
use integration_tests::{
    assert_json, presence_delete, presence_write, unique_uid, wait_for_requests,
    ReadinessResponse, TestServer, TriggerAck,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mirror_endpoint(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mirror"))
        .respond_with(ResponseTemplate::new(status).set_body_string(r#"{"stored":true}"#))
        .mount(&server)
        .await;
    server
}

fn mirror_url(server: &MockServer) -> String {
    format!("{}/mirror", server.uri())
}

#[tokio::test]
async fn test_presence_write_is_mirrored() -> anyhow::Result<()> {
    let mirror = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mirror"))
        .and(body_json(json!({
            "uid": "abc123",
            "online": true,
            "lastOnline": 1_700_000_000
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mirror)
        .await;

    let server = TestServer::start(Some(mirror_url(&mirror))).await?;
    let response = server
        .trigger(
            "abc123",
            presence_write(json!({ "online": true, "lastOnline": 1_700_000_000 })),
        )
        .await?;

    let ack: TriggerAck = assert_json(response, StatusCode::OK).await?;
    assert_eq!(ack.outcome, "dispatched");

    wait_for_requests(&mirror, 1).await?;
    Ok(())
}

#[tokio::test]
async fn test_missing_online_mirrors_as_offline() -> anyhow::Result<()> {
    let mirror = mirror_endpoint(200).await;
    let server = TestServer::start(Some(mirror_url(&mirror))).await?;
    let uid = unique_uid();

    server
        .trigger(&uid, presence_write(json!({ "lastOnline": 1_700_000_000 })))
        .await?;

    let requests = wait_for_requests(&mirror, 1).await?;
    let body: Value = requests[0].body_json()?;
    assert_eq!(
        body,
        json!({ "uid": uid, "online": false, "lastOnline": 1_700_000_000 })
    );
    Ok(())
}

#[tokio::test]
async fn test_deleted_record_makes_no_call() -> anyhow::Result<()> {
    let mirror = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mirror)
        .await;

    let server = TestServer::start(Some(mirror_url(&mirror))).await?;
    let response = server.trigger("abc123", presence_delete()).await?;

    let ack: TriggerAck = assert_json(response, StatusCode::OK).await?;
    assert_eq!(ack.outcome, "no_data");

    tokio::time::sleep(Duration::from_millis(200)).await;
    mirror.verify().await;
    Ok(())
}

#[tokio::test]
async fn test_malformed_payload_is_noop() -> anyhow::Result<()> {
    let mirror = mirror_endpoint(200).await;
    let server = TestServer::start(Some(mirror_url(&mirror))).await?;

    let response = server.post_raw("/presence/abc123", "{not json").await?;
    let ack: TriggerAck = assert_json(response, StatusCode::OK).await?;
    assert_eq!(ack.outcome, "no_data");

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(mirror.received_requests().await.unwrap_or_default().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unconfigured_mirror_skips_call() -> anyhow::Result<()> {
    let mirror = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mirror"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mirror)
        .await;

    // Configured once: reaches the endpoint
    let configured = TestServer::start(Some(mirror_url(&mirror))).await?;
    let response = configured
        .trigger("abc123", presence_write(json!({ "online": true })))
        .await?;
    let ack: TriggerAck = assert_json(response, StatusCode::OK).await?;
    assert_eq!(ack.outcome, "dispatched");
    wait_for_requests(&mirror, 1).await?;

    // Unset, then cleared to blank: no further calls
    for cleared in [None, Some("   ".to_string())] {
        let server = TestServer::start(cleared).await?;
        let response = server
            .trigger("abc123", presence_write(json!({ "online": true })))
            .await?;

        let ack: TriggerAck = assert_json(response, StatusCode::OK).await?;
        assert_eq!(ack.outcome, "unconfigured");
    }

    tokio::time::sleep(Duration::from_millis(200)).await;
    mirror.verify().await;
    Ok(())
}

#[tokio::test]
async fn test_downstream_error_does_not_fail_trigger() -> anyhow::Result<()> {
    let mirror = mirror_endpoint(500).await;
    let server = TestServer::start(Some(mirror_url(&mirror))).await?;

    let response = server
        .trigger("abc123", presence_write(json!({ "online": true })))
        .await?;

    let ack: TriggerAck = assert_json(response, StatusCode::OK).await?;
    assert_eq!(ack.outcome, "dispatched");

    // Exactly one attempt, no retry
    wait_for_requests(&mirror, 1).await?;
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(mirror.received_requests().await.unwrap_or_default().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_downstream_does_not_fail_trigger() -> anyhow::Result<()> {
    let server = TestServer::start(Some("http://127.0.0.1:1/mirror".to_string())).await?;

    let response = server
        .trigger("abc123", presence_write(json!({ "online": true })))
        .await?;

    let ack: TriggerAck = assert_json(response, StatusCode::OK).await?;
    assert_eq!(ack.outcome, "dispatched");
    Ok(())
}

#[tokio::test]
async fn test_trigger_ack_does_not_wait_for_downstream() -> anyhow::Result<()> {
    let mirror = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mirror)
        .await;

    let server = TestServer::start(Some(mirror_url(&mirror))).await?;

    let started = tokio::time::Instant::now();
    let response = server
        .trigger("abc123", presence_write(json!({ "online": true })))
        .await?;
    let ack: TriggerAck = assert_json(response, StatusCode::OK).await?;

    assert_eq!(ack.outcome, "dispatched");
    assert!(started.elapsed() < Duration::from_secs(4));
    Ok(())
}

#[tokio::test]
async fn test_concurrent_writes_each_mirrored() -> anyhow::Result<()> {
    let mirror = mirror_endpoint(200).await;
    let server = TestServer::start(Some(mirror_url(&mirror))).await?;

    let uids: Vec<String> = (0..5).map(|_| unique_uid()).collect();
    let deliveries = uids
        .iter()
        .map(|uid| server.trigger(uid, presence_write(json!({ "online": true }))));
    for response in join_all(deliveries).await {
        let ack: TriggerAck = assert_json(response?, StatusCode::OK).await?;
        assert_eq!(ack.outcome, "dispatched");
    }

    let requests = wait_for_requests(&mirror, uids.len()).await?;
    let mut mirrored: Vec<String> = requests
        .iter()
        .map(|r| {
            r.body_json::<Value>()
                .map(|b| b["uid"].as_str().unwrap_or_default().to_string())
        })
        .collect::<Result<_, _>>()?;
    mirrored.sort();

    let mut expected = uids.clone();
    expected.sort();
    assert_eq!(mirrored, expected);
    Ok(())
}

#[tokio::test]
async fn test_readiness_reports_mirror_configuration() -> anyhow::Result<()> {
    let configured = TestServer::start(Some("http://127.0.0.1:1/mirror".to_string())).await?;
    let ready: ReadinessResponse =
        assert_json(configured.get("/health/ready").await?, StatusCode::OK).await?;
    assert_eq!(ready.status, "ready");
    assert_eq!(ready.checks.mirror_url, "configured");

    let unconfigured = TestServer::start(None).await?;
    let ready: ReadinessResponse =
        assert_json(unconfigured.get("/health/ready").await?, StatusCode::OK).await?;
    assert_eq!(ready.status, "ready");
    assert_eq!(ready.checks.mirror_url, "unconfigured");
    Ok(())
}
