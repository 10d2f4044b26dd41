//! Integration tests for `pricehistory` lookups and trailing averages.

mod common;

use std::time::{Duration, Instant};

use chrono::{DateTime, Duration as ChronoDuration, Timelike, Utc};
use common::{MockServer, Reply};
use steam_market_sdk::prelude::*;

fn label(at: DateTime<Utc>) -> String {
    format!("{} {:02}: +0", at.format("%b %d %Y"), at.hour())
}

fn history_body(points: &[(DateTime<Utc>, f64, &str)]) -> String {
    let prices: Vec<serde_json::Value> = points
        .iter()
        .map(|(at, price, volume)| serde_json::json!([label(*at), price, volume]))
        .collect();
    serde_json::json!({
        "success": true,
        "price_prefix": "",
        "price_suffix": "€",
        "prices": prices,
    })
    .to_string()
}

fn fast_history_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        base_delay: Duration::from_millis(2),
        max_delay: Duration::from_millis(10),
        respect_retry_after: true,
        min_delay: Duration::ZERO,
        extra_jitter: Duration::ZERO,
    }
}

fn client_for(server: &MockServer) -> SteamMarketClient {
    SteamMarketClient::builder()
        .base_url(&server.base_url())
        .login_secure("76561198000000000%7C%7Ctoken")
        .history_retry(fast_history_retry(3))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_trailing_mean_over_week() {
    let now = Utc::now();
    let body = history_body(&[
        (now - ChronoDuration::days(10), 100.0, "50"),
        (now - ChronoDuration::days(3), 1.0, "3"),
        (now - ChronoDuration::days(1), 5.0, "1"),
        (now - ChronoDuration::hours(2), 9.0, "0"),
    ]);
    let server = MockServer::start(vec![Reply::json(200, &body)]).await;
    let client = client_for(&server);

    let result = client
        .history()
        .trailing_mean("Operation Bravo Case", DEFAULT_WINDOW, LookupOptions::default())
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.volume, 4);
    assert_eq!(result.mean_price, Some(2.0));
    assert!(!result.rate_limited);
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_history_points_are_exposed() {
    let now = Utc::now();
    let body = history_body(&[(now - ChronoDuration::hours(5), 0.28, "1,203")]);
    let server = MockServer::start(vec![Reply::json(200, &body)]).await;
    let client = client_for(&server);

    let history = client
        .history()
        .get("Operation Bravo Case", LookupOptions::default())
        .await
        .unwrap();

    assert!(history.success);
    assert_eq!(history.price_suffix.as_deref(), Some("€"));
    assert_eq!(history.points.len(), 1);
    assert_eq!(history.points[0].volume(), 1203);
    assert!(history.points[0].timestamp_ms().is_some());
}

#[tokio::test]
async fn test_session_cookie_is_sent() {
    let body = history_body(&[(Utc::now(), 1.0, "1")]);
    let server = MockServer::start(vec![Reply::json(200, &body)]).await;
    let client = client_for(&server);

    client
        .history()
        .get("AK-47 | Redline (Field-Tested)", LookupOptions::default())
        .await
        .unwrap();

    let requests = server.requests();
    assert!(requests[0].starts_with(
        "get /market/pricehistory/?appid=730&market_hash_name=ak-47%20%7c%20redline%20%28field-tested%29 http/1.1"
    ));
    assert!(requests[0].contains("cookie: steamloginsecure=76561198000000000%7c%7ctoken"));
}

#[tokio::test]
async fn test_null_body_is_failure() {
    let server = MockServer::start(vec![Reply::json(200, "null")]).await;
    let client = client_for(&server);

    let result = client
        .history()
        .trailing_mean("Operation Bravo Case", DEFAULT_WINDOW, LookupOptions::default())
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.mean_price, None);
    assert_eq!(result.volume, 0);
    assert_eq!(result.failure, Some(FailureReason::Malformed));
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_unsuccessful_body_is_failure() {
    let server = MockServer::start(vec![Reply::json(200, r#"{"success":false}"#)]).await;
    let client = client_for(&server);

    let result = client
        .history()
        .trailing_mean("Operation Bravo Case", DEFAULT_WINDOW, LookupOptions::default())
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.failure, Some(FailureReason::Unsuccessful));
}

#[tokio::test]
async fn test_no_volume_in_window_is_success() {
    let body = history_body(&[(Utc::now() - ChronoDuration::days(20), 3.0, "10")]);
    let server = MockServer::start(vec![Reply::json(200, &body)]).await;
    let client = client_for(&server);

    let result = client
        .history()
        .trailing_mean("Operation Bravo Case", DEFAULT_WINDOW, LookupOptions::default())
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.mean_price, None);
    assert_eq!(result.volume, 0);
}

#[tokio::test]
async fn test_rate_limited_flag_after_exhaustion() {
    let server = MockServer::start(vec![Reply::status(429).header("Retry-After", "0")]).await;
    let client = SteamMarketClient::builder()
        .base_url(&server.base_url())
        .history_retry(fast_history_retry(2))
        .build()
        .unwrap();

    let result = client
        .history()
        .trailing_mean("Operation Bravo Case", DEFAULT_WINDOW, LookupOptions::default())
        .await
        .unwrap();

    assert!(!result.success);
    assert!(result.rate_limited);
    assert_eq!(result.mean_price, None);
    assert_eq!(server.hits(), 3);
}

#[tokio::test]
async fn test_retry_after_is_honoured() {
    let body = history_body(&[(Utc::now(), 4.0, "2")]);
    let server = MockServer::start(vec![
        Reply::status(429).header("Retry-After", "1"),
        Reply::json(200, &body),
    ])
    .await;
    let client = client_for(&server);

    let started = Instant::now();
    let result = client
        .history()
        .trailing_mean("Operation Bravo Case", DEFAULT_WINDOW, LookupOptions::default())
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.mean_price, Some(4.0));
    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn test_forbidden_without_session() {
    let server = MockServer::start(vec![Reply::status(403)]).await;
    let client = SteamMarketClient::builder()
        .base_url(&server.base_url())
        .history_retry(fast_history_retry(3))
        .build()
        .unwrap();
    assert!(!client.session().is_authenticated().await);

    let history = client
        .history()
        .get("Operation Bravo Case", LookupOptions::default())
        .await
        .unwrap();

    assert!(!history.success);
    assert_eq!(history.failure, Some(FailureReason::Unauthorized));
    assert!(!server.requests()[0].contains("steamloginsecure"));
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_cancel_during_history_floor_wait() {
    let server = MockServer::start(vec![Reply::status(503)]).await;
    let client = SteamMarketClient::builder()
        .base_url(&server.base_url())
        .build()
        .unwrap();

    let (handle, token) = cancel_pair();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
    });

    // Default history policy never waits less than 2.5s between attempts.
    let started = Instant::now();
    let result = client
        .history()
        .get("Operation Bravo Case", LookupOptions::new().cancel(token))
        .await;

    assert!(matches!(result, Err(SdkError::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(server.hits(), 1);
}
