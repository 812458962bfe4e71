//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and the statistics
//! endpoints backed by the aggregation pipeline.


use serde_json::Value;

use test_utils::TestApiServer;

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["datasets"], 2);
    assert_eq!(body["service"], "wardstat-profile-engine");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn datasets_endpoint_lists_loaded_indicators() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/datasets").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["house-ownership", "remittance"]);
}

#[tokio::test]
async fn aggregates_endpoint_merges_and_zero_fills() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/datasets/house-ownership/aggregates").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let aggregates = body["aggregates"].as_array().unwrap();
    assert_eq!(aggregates.len(), 2);

    // Ward 2: duplicate owned rows merged additively, rented zero-filled.
    assert_eq!(aggregates[1]["ward_number"], 2);
    assert_eq!(aggregates[1]["categories"]["owned"], 40.0);
    assert_eq!(aggregates[1]["categories"]["rented"], 0.0);
    assert_eq!(aggregates[1]["total"], 40.0);
}

#[tokio::test]
async fn percentages_endpoint_reports_ward_shares() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/datasets/house-ownership/percentages").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let percentages = body["percentages"].as_array().unwrap();
    assert_eq!(percentages[0]["percentages"]["owned"], 80.0);
    assert_eq!(percentages[0]["percentages"]["rented"], 20.0);
    assert_eq!(percentages[1]["percentages"]["owned"], 100.0);
}

#[tokio::test]
async fn narrative_endpoint_localizes_digits() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/datasets/house-ownership/narrative")
        .add_query_param("locale", "ne")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["locale"], "ne");
    let narrative = body["narrative"].as_str().unwrap();
    assert!(!narrative.chars().any(|c| c.is_ascii_digit()));
    assert!(narrative.contains("निजी स्वामित्व"));
}

#[tokio::test]
async fn narrative_endpoint_defaults_to_configured_locale() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/datasets/house-ownership/narrative").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["locale"], "ne");
}

#[tokio::test]
async fn narrative_endpoint_degrades_to_no_data_sentence() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/datasets/remittance/narrative")
        .add_query_param("locale", "en")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(
        body["narrative"],
        "Data for this indicator is not yet available."
    );
}

#[tokio::test]
async fn chart_endpoint_returns_pie_and_bars() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/datasets/house-ownership/chart")
        .add_query_param("locale", "en")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["title"], "House Ownership");

    let pie = body["pie"].as_array().unwrap();
    assert_eq!(pie[0]["name"], "Owned");
    assert_eq!(pie[0]["value"], 120.0);
    assert_eq!(pie[0]["color"], "#5470c6");

    let bars = body["bars"].as_array().unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0]["ward_number"], 1);
    assert_eq!(bars[0]["data"][0]["percentage"], 80.0);
}

#[tokio::test]
async fn unknown_dataset_returns_not_found() {
    let app = TestApiServer::new().await;
    for path in [
        "/api/datasets/no-such-indicator/aggregates",
        "/api/datasets/no-such-indicator/percentages",
        "/api/datasets/no-such-indicator/narrative",
        "/api/datasets/no-such-indicator/chart",
    ] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), 404, "expected 404 for {}", path);
    }
}

#[tokio::test]
async fn statistics_requests_are_independent() {
    let app = TestApiServer::new().await;
    let first: Value = app
        .server
        .get("/api/datasets/house-ownership/percentages")
        .await
        .json();
    let second: Value = app
        .server
        .get("/api/datasets/house-ownership/percentages")
        .await
        .json();
    assert_eq!(first, second);
}
