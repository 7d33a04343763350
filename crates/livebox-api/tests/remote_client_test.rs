#![allow(clippy::unwrap_used)]
// Integration tests for `RemoteClient` and `DirectoryClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use livebox_api::{DirectoryClient, Error, KeyPressMode, RemoteClient, RemoteKey};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, RemoteClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = RemoteClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "result": { "responseCode": "0", "message": "ok", "data": data } })
}

// ── Status tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_status_parses_typed_snapshot() {
    let (server, client) = setup().await;

    let envelope = ok_envelope(json!({
        "activeStandbyState": "0",
        "playedMediaId": "192",
        "playedMediaState": "PLAY",
        "osdContext": "LIVE",
        "friendlyName": "decodeur salon",
        "macAddress": "18:62:2C:00:00:01"
    }));

    Mock::given(method("GET"))
        .and(path("/remoteControl/cmd"))
        .and(query_param("operation", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let status = client.status().await.unwrap();

    assert!(status.is_on());
    assert_eq!(status.played_media_id.as_deref(), Some("192"));
    assert_eq!(status.osd_context.as_deref(), Some("LIVE"));
    assert_eq!(status.friendly_name.as_deref(), Some("decodeur salon"));
}

#[tokio::test]
async fn test_status_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/remoteControl/cmd"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.status().await;

    match result {
        Err(Error::MalformedResponse { ref body, .. }) => {
            assert!(body.contains("not json"), "raw body kept for debugging");
        }
        other => panic!("expected MalformedResponse, got: {other:?}"),
    }
}

// ── Key press tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_press_key_sends_scancode_and_mode() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/remoteControl/cmd"))
        .and(query_param("operation", "01"))
        .and(query_param("key", "115"))
        .and(query_param("mode", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    client
        .press_key(RemoteKey::VolumeUp, KeyPressMode::Single)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refused_operation_surfaces_envelope_error() {
    let (server, client) = setup().await;

    let envelope = json!({
        "result": { "responseCode": "31", "message": "invalid key", "data": null }
    });

    Mock::given(method("GET"))
        .and(path("/remoteControl/cmd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let result = client.press_key(RemoteKey::Ok, KeyPressMode::Single).await;

    match result {
        Err(Error::Command {
            ref code,
            ref message,
            ..
        }) => {
            assert_eq!(code, "31");
            assert!(message.contains("invalid key"));
        }
        other => panic!("expected Command error, got: {other:?}"),
    }
}

// ── Tuning tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_tune_sends_raw_star_padding() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/remoteControl/cmd"))
        .and(query_param("operation", "09"))
        .and(query_param("epg_id", "*******192"))
        .and(query_param("uui", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    client.tune("*******192").await.unwrap();

    // The firmware rejects percent-escaped fillers, so the raw query
    // must contain the literal `*` characters.
    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap();
    assert!(
        query.contains("epg_id=*******192"),
        "filler must not be percent-escaped, got: {query}"
    );
}

#[tokio::test]
async fn test_http_error_is_surfaced() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/remoteControl/cmd"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.tune("*******192").await;

    assert!(
        matches!(result, Err(Error::Status { status: 500, .. })),
        "expected Status error, got: {result:?}"
    );
}

// ── Directory tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_directory_fetch() {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&format!("{}/API/?output=json&withChannels=1", server.uri())).unwrap();
    let client = DirectoryClient::with_client(reqwest::Client::new(), endpoint);

    let body = json!({
        "channels": {
            "channel": [
                { "name": "France 2", "tvIndex": "2", "epgId": "192" },
                { "name": "France 3", "tvIndex": 3, "epgId": 80 },
                { "name": "Barker", "tvIndex": "999" }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/API/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let records = client.fetch_channels().await.unwrap();

    // The record without an epgId is dropped.
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "France 2");
    assert_eq!(records[1].tv_index.as_deref(), Some("3"));
    assert_eq!(records[1].epg_id.as_deref(), Some("80"));
}

#[tokio::test]
async fn test_directory_failure_status() {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&server.uri()).unwrap();
    let client = DirectoryClient::with_client(reqwest::Client::new(), endpoint);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client.fetch_channels().await;

    assert!(
        matches!(result, Err(Error::Status { status: 503, .. })),
        "expected Status error, got: {result:?}"
    );
}
