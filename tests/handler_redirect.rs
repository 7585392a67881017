mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let (server, _sink) = common::create_test_server();
    common::create_short_url(
        &server,
        json!({ "url": "https://example.com/target", "shortcode": "redirect1" }),
    )
    .await
    .assert_status(StatusCode::CREATED);

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _sink) = common::create_test_server();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_expired() {
    let (server, sink) = common::create_test_server();
    common::create_short_url(
        &server,
        json!({ "url": "https://example.com", "validity": 0, "shortcode": "gone" }),
    )
    .await
    .assert_status(StatusCode::CREATED);

    let response = server.get("/gone").await;

    response.assert_status(StatusCode::GONE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "expired");
    assert!(sink.messages().contains(&"Short URL expired".to_string()));

    let stats = server.get("/shorturls/gone").await;
    stats.assert_status_ok();
    assert_eq!(stats.json::<serde_json::Value>()["totalClicks"], 0);
}

#[tokio::test]
async fn test_redirect_records_referrer() {
    let (server, _sink) = common::create_test_server();
    common::create_short_url(
        &server,
        json!({ "url": "https://example.com", "shortcode": "track" }),
    )
    .await
    .assert_status(StatusCode::CREATED);

    server
        .get("/track")
        .add_header("Referer", "https://google.com")
        .await;
    server.get("/track").await;

    let stats = server.get("/shorturls/track").await.json::<serde_json::Value>();
    let clicks = stats["clicks"].as_array().unwrap();

    assert_eq!(clicks.len(), 2);
    assert_eq!(clicks[0]["referrer"], "https://google.com");
    assert!(clicks[1].get("referrer").is_none());
    assert_eq!(clicks[0]["geo"], "India");
}
