// tests/api_client.rs
//! Backend contract tests for the API client, against a mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chemvis::api::{ApiClient, ApiError};
use chemvis::config::ApiConfig;

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    };
    ApiClient::new(&config).unwrap()
}

fn analysis_payload() -> serde_json::Value {
    json!({
        "id": 12,
        "total_equipment": 4,
        "avg_flowrate": 12.5,
        "avg_pressure": 3.25,
        "avg_temperature": 180.0,
        "type_distribution": {"Reactor": 2, "Tank": 2},
        "table": [
            {"Equipment Name": "R-101", "Type": "Reactor", "Flowrate": 10.0, "Pressure": 4.0, "Temperature": 250.0},
            {"Equipment Name": "T-201", "Type": "Storage Tank", "Flowrate": 15.0, "Pressure": 2.5, "Temperature": 110.0}
        ]
    })
}

#[tokio::test]
async fn session_priming_captures_csrf_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/csrf/"))
        .respond_with(ResponseTemplate::new(200).insert_header(
            "set-cookie",
            "csrftoken=tok3n; Max-Age=31449600; Path=/; SameSite=Lax",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.has_session());
    client.init_session().await.unwrap();
    assert!(client.has_session());
}

#[tokio::test]
async fn upload_attaches_csrf_header_after_priming() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/csrf/"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "csrftoken=tok3n; Path=/"),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/upload/"))
        .and(header("X-CSRFToken", "tok3n"))
        .respond_with(ResponseTemplate::new(200).set_body_json(analysis_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.init_session().await.unwrap();

    let result = client
        .upload("plant.csv", b"Equipment Name,Type\n".to_vec())
        .await
        .unwrap();
    assert_eq!(result.id, Some(12));
    assert_eq!(result.total_equipment, 4);
}

#[tokio::test]
async fn upload_result_matches_server_payload_exactly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(analysis_payload()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.upload("plant.csv", vec![1, 2, 3]).await.unwrap();

    // No client-side recomputation: values and order arrive verbatim
    assert_eq!(result.avg_flowrate, 12.5);
    assert_eq!(result.avg_pressure, 3.25);
    let labels: Vec<&str> = result.type_distribution.keys().map(|k| k.as_str()).collect();
    assert_eq!(labels, vec!["Reactor", "Tank"]);
    assert_eq!(result.table[1].equipment_type, "Storage Tank");
}

#[tokio::test]
async fn history_decodes_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/history/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 9, "name": "latest.csv", "total": 8, "uploaded_at": "2025-02-01T09:00:00Z"},
            {"id": 7, "name": "older.csv", "total": 42, "uploaded_at": "2024-11-03T14:22:05Z"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = client.fetch_history().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, 9);
    assert_eq!(entries[1].name, "older.csv");
    assert_eq!(entries[1].total, 42);
}

#[tokio::test]
async fn history_fetch_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/history/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "a.csv", "total": 3, "uploaded_at": "2025-01-01T00:00:00Z"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.fetch_history().await.unwrap();
    let second = client.fetch_history().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn report_payload_arrives_as_opaque_bytes() {
    let server = MockServer::start().await;
    let pdf = b"%PDF-1.7 not really a pdf".to_vec();
    Mock::given(method("GET"))
        .and(path("/api/report/7/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(pdf.clone()),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = client.download_report(7).await.unwrap();
    assert_eq!(payload, pdf);
}

#[tokio::test]
async fn rejected_upload_surfaces_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.upload("plant.csv", vec![0]).await.unwrap_err();
    match err {
        ApiError::Status { ref endpoint, status } => {
            assert!(endpoint.ends_with("/api/upload/"));
            assert_eq!(status.as_u16(), 403);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_report_surfaces_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/report/999/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.download_report(999).await.unwrap_err();
    assert!(err.to_string().contains("404"));
}
