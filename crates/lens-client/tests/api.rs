//! Integration tests against a stub HTTP server.

use lens_client::{LensError, ShodanClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ShodanClient {
    ShodanClient::builder("test-key").base_url(server.uri()).build()
}

#[tokio::test]
async fn host_lookup_sends_key_and_parses_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shodan/host/8.8.8.8"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip_str": "8.8.8.8",
            "org": "Google LLC",
            "ports": [53, 443],
            "hostnames": ["dns.google"],
            "country_name": "United States",
            "city": "Mountain View",
            "vulns": {"CVE-2023-0001": {}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let host = client_for(&server).search().host("8.8.8.8").await.unwrap();

    assert_eq!(host.ip_str, "8.8.8.8");
    assert_eq!(host.org.as_deref(), Some("Google LLC"));
    assert_eq!(host.ports, vec![53, 443]);
    assert_eq!(host.vulns.identifiers(), vec!["CVE-2023-0001"]);
}

#[tokio::test]
async fn search_sends_query_and_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shodan/host/search"))
        .and(query_param("query", "apache country:FR"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 12345,
            "matches": [
                {"ip_str": "1.2.3.4", "port": 80, "org": "OVH",
                 "location": {"country_name": "France", "city": "Paris"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search()
        .query("apache country:FR")
        .page(2)
        .send()
        .await
        .unwrap();

    assert_eq!(results.total, 12345);
    assert_eq!(results.matches[0].ip_str, "1.2.3.4");
}

#[tokio::test]
async fn blank_key_is_not_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tools/myip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("203.0.113.9")))
        .mount(&server)
        .await;

    let client = ShodanClient::builder("").base_url(server.uri()).build();
    let ip = client.tools().my_ip().await.unwrap();
    assert_eq!(ip.as_str(), "203.0.113.9");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].url.query().unwrap_or("").contains("key="));
}

#[tokio::test]
async fn dns_resolve_joins_hostnames() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dns/resolve"))
        .and(query_param("hostnames", "google.com,nosuch.invalid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "google.com": "142.250.74.46",
            "nosuch.invalid": null
        })))
        .mount(&server)
        .await;

    let res = client_for(&server)
        .dns()
        .resolve(&["google.com", "nosuch.invalid"])
        .await
        .unwrap();

    assert_eq!(res.ip_for("google.com"), Some("142.250.74.46"));
    assert_eq!(res.ip_for("nosuch.invalid"), None);
}

#[tokio::test]
async fn dns_reverse_returns_hostname_lists() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dns/reverse"))
        .and(query_param("ips", "8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "8.8.8.8": ["dns.google"]
        })))
        .mount(&server)
        .await;

    let rev = client_for(&server).dns().reverse(&["8.8.8.8"]).await.unwrap();
    assert_eq!(rev.first_hostname("8.8.8.8"), Some("dns.google"));
}

#[tokio::test]
async fn api_info_parses_credits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plan": "dev",
            "query_credits": 100,
            "scan_credits": 50
        })))
        .mount(&server)
        .await;

    let info = client_for(&server).account().api_info().await.unwrap();
    assert_eq!(info.plan.as_deref(), Some("dev"));
    assert_eq!(info.query_credits, 100);
    assert_eq!(info.scan_credits, 50);
}

#[tokio::test]
async fn unauthorized_maps_to_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-info"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).account().api_info().await.unwrap_err();
    assert!(matches!(err, LensError::Unauthorized));
}

#[tokio::test]
async fn api_error_carries_message_from_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shodan/host/search"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "upstream exploded"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search()
        .query("apache")
        .send()
        .await
        .unwrap_err();

    match err {
        LensError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shodan/host/1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).search().host("1.2.3.4").await.unwrap_err();
    assert!(matches!(err, LensError::Json(_)));
}
