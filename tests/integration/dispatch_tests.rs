//! Integration tests for the dispatch engine
//!
//! These tests use wiremock to stand in for the sites queried by network-backed
//! strategies and exercise the full dispatch cycle end-to-end.

use recon_dispatch::config::{parse_config, ClientConfig, Config};
use recon_dispatch::http::fetch_page_limited;
use recon_dispatch::{build_http_client, CustodyEntry, DataPayload, Dispatcher, InvestigationPlan};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration with one site entry pointing at the mock server
fn site_config(name: &str, base_url: &str, timeout_ms: u64) -> Config {
    parse_config(&format!(
        r#"
[client]
timeout-ms = {timeout_ms}
connect-timeout-ms = {timeout_ms}

[[probe]]
name = "{name}"
url-template = "{base_url}/users/{{target}}"
"#
    ))
    .expect("Failed to parse test config")
}

fn default_dispatcher() -> Dispatcher {
    Dispatcher::from_config(&Config::default()).expect("Failed to build dispatcher")
}

#[tokio::test]
async fn test_social_platforms_scenario() {
    let data = default_dispatcher()
        .dispatch("alice", "social_platforms")
        .await;

    assert!(!data.is_error());
    assert_eq!(data.get("profiles_found"), Some(&json!(3)));
    assert_eq!(
        data.get("usernames"),
        Some(&json!(["alice", "alice123", "alice_official"]))
    );
    assert_eq!(data.get("activity_level"), Some(&json!("moderate")));
}

#[tokio::test]
async fn test_public_records_scenario() {
    let data = default_dispatcher().dispatch("bob", "public_records").await;

    assert!(!data.is_error());
    assert_eq!(data.get("records_found"), Some(&json!(2)));
    assert_eq!(data.get("locations").and_then(Value::as_array).map(Vec::len), Some(2));
    assert_eq!(
        data.get("associated_entities")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(2)
    );
}

#[tokio::test]
async fn test_forums_scenario() {
    let data = default_dispatcher().dispatch("carol", "forums").await;

    assert!(!data.is_error());
    assert_eq!(data.get("forums_found"), Some(&json!(5)));
    assert_eq!(data.get("posts"), Some(&json!(47)));
    assert_eq!(data.get("topics").and_then(Value::as_array).map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_unknown_source_scenario() {
    let envelope = default_dispatcher().run("dave", "nonexistent").await;
    let value: Value = serde_json::from_str(&envelope.to_json_line().unwrap()).unwrap();

    assert_eq!(value["source"], "nonexistent");
    assert_eq!(value["data"], json!({ "error": "Unknown source" }));
    assert!(chrono::DateTime::parse_from_rfc3339(value["timestamp"].as_str().unwrap()).is_ok());
    assert_eq!(value.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_site_found_with_title() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                r#"<html><head><title>alice on Example</title></head><body></body></html>"#,
                "text/html",
            ),
        )
        .mount(&mock_server)
        .await;

    let config = site_config("code_hosting", &mock_server.uri(), 5_000);
    let dispatcher = Dispatcher::from_config(&config).expect("Failed to build dispatcher");

    let data = dispatcher.dispatch("alice", "code_hosting").await;

    assert!(!data.is_error(), "unexpected error payload: {:?}", data);
    assert_eq!(data.get("found"), Some(&json!(true)));
    assert_eq!(data.get("status"), Some(&json!(200)));
    assert_eq!(data.get("title"), Some(&json!("alice on Example")));
}

#[tokio::test]
async fn test_site_not_found_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/nobody"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = site_config("code_hosting", &mock_server.uri(), 5_000);
    let dispatcher = Dispatcher::from_config(&config).expect("Failed to build dispatcher");

    let data = dispatcher.dispatch("nobody", "code_hosting").await;

    assert!(!data.is_error());
    assert_eq!(data.get("found"), Some(&json!(false)));
    assert_eq!(data.get("status"), Some(&json!(404)));
}

#[tokio::test]
async fn test_site_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = site_config("code_hosting", &mock_server.uri(), 5_000);
    let dispatcher = Dispatcher::from_config(&config).expect("Failed to build dispatcher");

    let data = dispatcher.dispatch("alice", "code_hosting").await;
    assert_eq!(data.error_message(), Some("Upstream error"));
}

#[tokio::test]
async fn test_site_timeout_resolves_with_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;

    let config = site_config("code_hosting", &mock_server.uri(), 200);
    let dispatcher = Dispatcher::from_config(&config).expect("Failed to build dispatcher");

    let started = Instant::now();
    let data = dispatcher.dispatch("alice", "code_hosting").await;
    let elapsed = started.elapsed();

    assert_eq!(data.error_message(), Some("Network timeout"));
    assert!(
        elapsed < Duration::from_secs(3),
        "dispatch took {:?}, expected close to the 200ms timeout",
        elapsed
    );
}

#[tokio::test]
async fn test_site_unreachable_host() {
    // Bind and release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = site_config("code_hosting", &format!("http://127.0.0.1:{}", port), 2_000);
    let dispatcher = Dispatcher::from_config(&config).expect("Failed to build dispatcher");

    let data = dispatcher.dispatch("alice", "code_hosting").await;
    assert_eq!(data.error_message(), Some("Network unreachable"));

    // The detail carries the underlying transport error, not a fixed label
    let detail = data.get("detail").and_then(Value::as_str).unwrap();
    assert!(detail.contains(&format!("127.0.0.1:{}", port)));
    assert!(
        detail.contains("error sending request"),
        "unexpected detail: {}",
        detail
    );
}

#[tokio::test]
async fn test_plan_fans_out_to_registered_sources() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = site_config("gaming_platforms", &mock_server.uri(), 5_000);
    let dispatcher = Dispatcher::from_config(&config).expect("Failed to build dispatcher");

    let plan = InvestigationPlan::for_target("alice");
    let sources = plan.sources(dispatcher.registry());
    let envelopes = dispatcher.run_many("alice", &sources).await;

    let returned: Vec<&str> = envelopes.iter().map(|e| e.source()).collect();
    assert_eq!(returned, vec!["social_platforms", "forums", "gaming_platforms"]);
    assert!(envelopes.iter().all(|e| !e.data().is_error()));
    assert_eq!(envelopes[2].data().get("found"), Some(&json!(false)));
}

#[tokio::test]
async fn test_custody_matches_for_identical_runs() {
    let dispatcher = default_dispatcher();

    let first = dispatcher.run("erin", "forums").await;
    let second = dispatcher.run("erin", "forums").await;

    let first_entry = CustodyEntry::record(&first).unwrap();
    let second_entry = CustodyEntry::record(&second).unwrap();
    assert_eq!(first_entry.digest, second_entry.digest);

    let unknown = dispatcher.run("erin", "nonexistent").await;
    assert_eq!(unknown.data(), &DataPayload::unknown_source());
    assert_ne!(
        CustodyEntry::record(&unknown).unwrap().digest,
        first_entry.digest
    );
}

#[tokio::test]
async fn test_oversized_body_is_truncated_at_cap() {
    let mock_server = MockServer::start().await;

    let html = format!(
        "<html><head><title>Big page</title></head><body>{}</body></html>",
        "a".repeat(8 * 1024)
    );
    Mock::given(method("GET"))
        .and(path("/users/big"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/small"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<title>Small</title>", "text/html"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&ClientConfig::default()).expect("Failed to build client");

    let big = fetch_page_limited(&client, &format!("{}/users/big", mock_server.uri()), 1024)
        .await
        .expect("Fetch failed");
    assert!(big.truncated);
    assert_eq!(big.body.len(), 1024);
    assert!(big.body.contains("<title>Big page</title>"));

    let small = fetch_page_limited(&client, &format!("{}/users/small", mock_server.uri()), 1024)
        .await
        .expect("Fetch failed");
    assert!(!small.truncated);
    assert_eq!(small.body, "<title>Small</title>");
}
