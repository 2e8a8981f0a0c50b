//! Registry client tests against a stubbed HTTP server.

use std::time::Duration;

use camwatch_client::{Credentials, RegistryClient};
use camwatch_core::{CameraStatus, CamwatchError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RegistryClient {
    RegistryClient::builder(Credentials::new("tok", "dev-1", "42"))
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn ips_returns_data_in_order_with_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras-ips"))
        .and(header("x-token", "tok"))
        .and(header("x-id", "dev-1"))
        .and(header("x-unique-number", "42"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": ["10.0.0.2", "10.0.0.1", "192.168.1.50"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ips = client_for(&server).cameras().ips().await.unwrap();
    assert_eq!(ips, vec!["10.0.0.2", "10.0.0.1", "192.168.1.50"]);
}

#[tokio::test]
async fn ips_missing_data_field_is_empty_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras-ips"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .mount(&server)
        .await;

    let ips = client_for(&server).cameras().ips().await.unwrap();
    assert!(ips.is_empty());
}

#[tokio::test]
async fn ips_server_error_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras-ips"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "database down"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).cameras().ips().await.unwrap_err();
    match err {
        CamwatchError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn ips_rejected_credentials_map_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras-ips"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .mount(&server)
        .await;

    let err = client_for(&server).cameras().ips().await.unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn ips_malformed_json_maps_to_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras-ips"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = client_for(&server).cameras().ips().await.unwrap_err();
    assert!(matches!(err, CamwatchError::Json(_)));
}

#[tokio::test]
async fn ips_slow_registry_hits_fetch_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras-ips"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_millis(250)),
        )
        .mount(&server)
        .await;

    let client = RegistryClient::builder(Credentials::new("tok", "dev-1", "42"))
        .base_url(server.uri())
        .list_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.cameras().ips().await.unwrap_err();
    assert!(matches!(err, CamwatchError::Http(_)));
}

#[tokio::test]
async fn report_patches_record_array_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/cameras"))
        .and(header("x-token", "tok"))
        .and(body_json(json!([
            {"ip": "10.0.0.1", "status": true},
            {"ip": "10.0.0.2", "status": false}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"payload": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let records = vec![
        CameraStatus::new("10.0.0.1".to_string(), true),
        CameraStatus::new("10.0.0.2".to_string(), false),
    ];
    client_for(&server).cameras().report(&records).await.unwrap();
}

#[tokio::test]
async fn report_rejection_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/cameras"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "ip is required"})),
        )
        .mount(&server)
        .await;

    let records = vec![CameraStatus::new("10.0.0.1".to_string(), true)];
    let err = client_for(&server)
        .cameras()
        .report(&records)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(422));
}
