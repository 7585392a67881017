mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;

#[tokio::test]
async fn test_stats_after_redirects() {
    let (server, _sink) = common::create_test_server();
    common::create_short_url(
        &server,
        json!({ "url": "https://example.com", "shortcode": "stats1" }),
    )
    .await
    .assert_status(StatusCode::CREATED);

    for i in 1..=5 {
        server
            .get("/stats1")
            .add_header("Referer", format!("https://ref{}.com", i))
            .await;
    }

    let response = server.get("/shorturls/stats1").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["totalClicks"], 5);
    assert_eq!(json["originalUrl"], "https://example.com");

    let clicks = json["clicks"].as_array().unwrap();
    assert_eq!(clicks.len(), 5);
    for (i, click) in clicks.iter().enumerate() {
        assert_eq!(click["referrer"], format!("https://ref{}.com", i + 1));
    }

    let timestamps: Vec<DateTime<Utc>> = clicks
        .iter()
        .map(|c| c["timestamp"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_stats_not_found() {
    let (server, _sink) = common::create_test_server();

    let response = server.get("/shorturls/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_stats_round_trip() {
    let (server, _sink) = common::create_test_server();
    let created = common::create_short_url(
        &server,
        json!({ "url": "https://example.com", "validity": 1, "shortcode": "rt" }),
    )
    .await
    .json::<serde_json::Value>();

    let json = server
        .get("/shorturls/rt")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["originalUrl"], "https://example.com");
    assert_eq!(json["expiry"], created["expiry"]);
    assert_eq!(json["totalClicks"], 0);
    assert!(json["clicks"].as_array().unwrap().is_empty());

    let created_at: DateTime<Utc> = json["createdAt"].as_str().unwrap().parse().unwrap();
    let expiry: DateTime<Utc> = json["expiry"].as_str().unwrap().parse().unwrap();
    assert_eq!(expiry - created_at, Duration::minutes(1));
}
