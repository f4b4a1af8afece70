// File: tests/integration_tests.rs

use futures::future::join_all;
use envpeek::config_lookup::MapEnv;
use test_helpers::ServerGuard;

#[tokio::test]
async fn test_root_page_over_http() {
    let server = ServerGuard::start(MapEnv::new().with("MAILGUN_SECRET_KEY", "abc123"))
        .await
        .expect("Failed to start server");

    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("<dd>abc123</dd>"));
}

#[tokio::test]
async fn test_secret_changes_are_visible_without_restart() {
    let server = ServerGuard::start(MapEnv::new()).await.expect("Failed to start server");

    let body = reqwest::get(server.url("/")).await.unwrap().text().await.unwrap();
    assert!(body.contains("<dd></dd>"));

    server.env.set("MAILGUN_SECRET_KEY", "rotated");
    let body = reqwest::get(server.url("/")).await.unwrap().text().await.unwrap();
    assert!(body.contains("<dd>rotated</dd>"));
}

#[tokio::test]
async fn test_named_lookup_over_http() {
    let server = ServerGuard::start(MapEnv::new().with("PORT", "8080"))
        .await
        .expect("Failed to start server");

    let hit = reqwest::get(server.url("/port")).await.unwrap();
    assert_eq!(hit.status(), reqwest::StatusCode::OK);
    assert!(hit.text().await.unwrap().contains("<dd>8080</dd>"));

    let miss = reqwest::get(server.url("/nonexistent")).await.unwrap();
    assert_eq!(miss.status(), reqwest::StatusCode::OK);
    assert!(miss.text().await.unwrap().contains("<dt>NONEXISTENT</dt>"));

    // Only the hit is recorded
    assert_eq!(server.sink.len(), 1);
}

#[tokio::test]
async fn test_json_api_over_http() {
    let server = ServerGuard::start(MapEnv::new().with("PORT", "8080"))
        .await
        .expect("Failed to start server");

    let json: serde_json::Value = reqwest::get(server.url("/api/v1/config/Port"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["data"]["key"], "PORT");
    assert_eq!(json["data"]["value"], "8080");
    assert_eq!(json["data"]["resolved"], true);
}

#[tokio::test]
async fn test_concurrent_requests() {
    let server = ServerGuard::start(MapEnv::new().with("PORT", "8080"))
        .await
        .expect("Failed to start server");
    let client = reqwest::Client::new();

    let requests = (0..10).map(|_| {
        let client = client.clone();
        let url = server.url("/port");
        async move { client.get(url).send().await.unwrap().text().await.unwrap() }
    });
    let bodies = join_all(requests).await;

    assert!(bodies.iter().all(|body| body.contains("<dd>8080</dd>")));
    assert_eq!(server.sink.len(), 10);
}
