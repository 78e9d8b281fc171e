#![allow(clippy::unwrap_used)]
// Integration tests for `WyzeClient` using wiremock.

use std::collections::BTreeMap;

use chrono::DateTime;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use wyzely_api::events::EventQuery;
use wyzely_api::models::ActionProperty;
use wyzely_api::{Error, WyzeClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, WyzeClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = WyzeClient::with_base_urls(reqwest::Client::new(), base_url.clone(), base_url);
    (server, client)
}

/// Matches requests whose JSON body carries a numeric `ts` field.
struct HasMillisTs;

impl wiremock::Match for HasMillisTs {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<serde_json::Value>(&request.body)
            .ok()
            .and_then(|body| body.get("ts").and_then(serde_json::Value::as_i64))
            .is_some()
    }
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_login_returns_refresh_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .and(header("Keyid", "ki-123"))
        .and(header("Apikey", "ak-456"))
        .and(body_partial_json(json!({ "email": "user@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at-login",
            "refresh_token": "rt-1",
            "user_id": "u-1"
        })))
        .mount(&server)
        .await;

    let password: secrecy::SecretString = "hashed-password".to_string().into();
    let api_key: secrecy::SecretString = "ak-456".to_string().into();
    let token = client
        .login("user@example.com", &password, "ki-123", &api_key)
        .await
        .unwrap();

    assert_eq!(token, "rt-1");
}

#[tokio::test]
async fn test_login_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errorCode": 1000,
            "description": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let password: secrecy::SecretString = "wrong".to_string().into();
    let api_key: secrecy::SecretString = "ak".to_string().into();
    let result = client.login("user@example.com", &password, "ki", &api_key).await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(
                message.contains("Invalid credentials"),
                "expected vendor description in message, got: {message}"
            );
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_login_without_refresh_token_is_an_error() {
    let (server, client) = setup().await;

    // HTTP 200 but no token -- happens when the account needs 2FA.
    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": "u-1" })))
        .mount(&server)
        .await;

    let password: secrecy::SecretString = "hashed".to_string().into();
    let api_key: secrecy::SecretString = "ak".to_string().into();
    let result = client.login("user@example.com", &password, "ki", &api_key).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_exchange_refresh_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/app/user/refresh_token"))
        .and(body_partial_json(json!({
            "refresh_token": "rt-1",
            "app_ver": "wyze_developer_api",
            "sv": "wyze_developer_api"
        })))
        .and(HasMillisTs)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "1",
            "msg": "",
            "data": { "access_token": "at-1", "refresh_token": "rt-2" }
        })))
        .mount(&server)
        .await;

    let token = client.exchange_refresh_token("rt-1").await.unwrap();
    assert_eq!(token, "at-1");
}

#[tokio::test]
async fn test_exchange_rejected_refresh_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/app/user/refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "2001",
            "msg": "AccessTokenError"
        })))
        .mount(&server)
        .await;

    let result = client.exchange_refresh_token("stale").await;

    match result {
        Err(Error::Api { ref code, ref message }) => {
            assert_eq!(code, "2001");
            assert_eq!(message, "AccessTokenError");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Object list ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_object_list() {
    let (server, client) = setup().await;

    let envelope = json!({
        "code": "1",
        "msg": "",
        "data": {
            "device_list": [
                {
                    "mac": "ABCDEF111111",
                    "nickname": "Desk Lamp",
                    "product_model": "WLPA19C",
                    "product_type": "MeshLight",
                    "conn_state": 1
                },
                {
                    "mac": "ABCDEF222222",
                    "nickname": "Porch Cam",
                    "product_model": "WYZE_CAKP2JFUS",
                    "product_type": "Camera"
                }
            ],
            "device_group_list": [
                {
                    "group_id": 42,
                    "group_name": "Office",
                    "device_list": [ { "device_mac": "ABCDEF111111" } ]
                }
            ]
        }
    });

    Mock::given(method("POST"))
        .and(path("/app/v2/home_page/get_object_list"))
        .and(body_partial_json(json!({ "access_token": "at-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let objects = client.get_object_list("at-1").await.unwrap();

    assert_eq!(objects.device_list.len(), 2);
    assert_eq!(objects.device_list[0].mac, "ABCDEF111111");
    assert_eq!(objects.device_list[0].nickname, "Desk Lamp");
    assert_eq!(objects.device_list[0].product_type, "MeshLight");
    assert_eq!(objects.device_group_list.len(), 1);
    assert_eq!(objects.device_group_list[0].group_name, "Office");
    assert_eq!(objects.device_group_list[0].device_list[0].device_mac, "ABCDEF111111");
}

#[tokio::test]
async fn test_api_error_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/app/v2/home_page/get_object_list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "1001",
            "msg": "ParameterError"
        })))
        .mount(&server)
        .await;

    let result = client.get_object_list("at-1").await;

    match result {
        Err(Error::Api { ref code, ref message }) => {
            assert_eq!(code, "1001");
            assert!(
                message.contains("ParameterError"),
                "expected 'ParameterError' in message, got: {message}"
            );
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_http_error_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/app/v2/home_page/get_object_list"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let result = client.get_object_list("at-1").await;

    match result {
        Err(Error::Api { ref code, .. }) => assert_eq!(code, "502"),
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Properties ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_property_list() {
    let (server, client) = setup().await;

    let envelope = json!({
        "code": "1",
        "msg": "",
        "data": {
            "device_list": [{
                "device_mac": "ABCDEF111111",
                "property_list": [
                    { "pid": "P3", "value": "1" },
                    { "pid": "P1501", "value": "75" }
                ]
            }]
        }
    });

    Mock::given(method("POST"))
        .and(path("/app/v2/device_list/get_property_list"))
        .and(body_partial_json(json!({
            "access_token": "at-1",
            "device_list": ["ABCDEF111111"],
            "target_pid_list": ["P3", "P1501"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let macs = vec!["ABCDEF111111".to_string()];
    let pids = vec!["P3".to_string(), "P1501".to_string()];
    let data = client.get_property_list("at-1", &macs, &pids).await.unwrap();

    assert_eq!(data.device_list.len(), 1);
    assert_eq!(data.device_list[0].device_mac, "ABCDEF111111");
    assert_eq!(data.device_list[0].property_list[0].pid, "P3");
    assert_eq!(data.device_list[0].property_list[0].value, "1");
}

// ── Actions ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_run_action_list() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/app/v2/auto/run_action_list"))
        .and(body_partial_json(json!({
            "sv": "011a04cf25f845f49b8bb6d464fa7f08",
            "action_list": [{
                "action_key": "set_mesh_property",
                "instance_id": "ABCDEF111111",
                "provider_key": "WLPA19C",
                "action_params": {
                    "list": [{
                        "mac": "ABCDEF111111",
                        "plist": [ { "pid": "P3", "pvalue": "1" } ]
                    }]
                }
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "1",
            "msg": "",
            "data": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let targets: BTreeMap<String, String> =
        [("ABCDEF111111".to_string(), "WLPA19C".to_string())].into();
    let plist = vec![ActionProperty {
        pid: "P3".to_string(),
        pvalue: "1".to_string(),
    }];

    client.run_action_list("at-1", &targets, &plist).await.unwrap();
}

// ── Events & downloads ──────────────────────────────────────────────

#[tokio::test]
async fn test_get_event_list() {
    let (server, client) = setup().await;

    let envelope = json!({
        "code": "1",
        "msg": "",
        "data": {
            "event_list": [{
                "event_id": "evt-1",
                "device_mac": "CAM000111222",
                "event_ts": 1_700_000_000_123_i64,
                "file_list": [ { "url": "https://files.example/thumb1.jpg", "type": 1 } ]
            }],
            "total_cnt": 1
        }
    });

    Mock::given(method("POST"))
        .and(path("/app/v2/device/get_event_list"))
        .and(body_partial_json(json!({
            "access_token": "at-1",
            "device_mac_list": ["CAM000111222"],
            "event_tag_list": [101],
            "count": 20,
            "order_by": "1",
            "begin_time": "1699990000000",
            "end_time": "1700000000000"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let query = EventQuery {
        device_macs: vec!["CAM000111222".to_string()],
        tags: vec![101],
        count: 20,
        begin: DateTime::from_timestamp_millis(1_699_990_000_000).unwrap(),
        end: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
    };
    let events = client.get_event_list("at-1", &query).await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].device_mac, "CAM000111222");
    assert_eq!(events[0].event_ts, 1_700_000_000_123);
    assert_eq!(events[0].file_list[0].url, "https://files.example/thumb1.jpg");
}

#[tokio::test]
async fn test_download_file() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/thumb1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpeg-bytes".to_vec()))
        .mount(&server)
        .await;

    let url = format!("{}/thumb1.jpg", server.uri());
    let bytes = client.download_file(&url).await.unwrap();

    assert_eq!(bytes.as_ref(), b"jpeg-bytes");
}

#[tokio::test]
async fn test_download_file_http_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/gone.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/gone.jpg", server.uri());
    let result = client.download_file(&url).await;

    match result {
        Err(Error::Download { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected Download error, got: {other:?}"),
    }
}
