// Integration tests for `StatusPageClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use statuscope_api::Error;
use statuscope_api::status_page::StatusPageClient;
use statuscope_api::status_page::types::{KIND_RESOURCE, KIND_SECTION};

async fn setup() -> (MockServer, StatusPageClient) {
    let server = MockServer::start().await;
    let client = StatusPageClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .expect("valid base url");
    (server, client)
}

#[tokio::test]
async fn fetches_and_parses_document() {
    let (server, client) = setup().await;

    let body = json!({
        "data": {
            "id": "page-1",
            "type": "status_page",
            "attributes": {
                "company_name": "Acme",
                "aggregate_state": "operational"
            },
            "relationships": {
                "sections": { "data": [{ "id": "sec-1", "type": KIND_SECTION }] },
                "resources": { "data": [{ "id": "svc-1", "type": KIND_RESOURCE }] },
                "status_reports": { "data": [] }
            }
        },
        "included": [
            {
                "id": "sec-1",
                "type": KIND_SECTION,
                "attributes": { "name": "Core" }
            },
            {
                "id": "svc-1",
                "type": KIND_RESOURCE,
                "attributes": {
                    "public_name": "API",
                    "status": "operational",
                    "availability": 99.987,
                    "status_history": [{ "day": "2026-08-29", "status": "operational" }]
                },
                "relationships": {
                    "status_page_section": { "data": { "id": "sec-1", "type": KIND_SECTION } }
                }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let doc = client.fetch_status_page().await.expect("document");

    assert_eq!(doc.data.attributes.company_name, "Acme");
    assert_eq!(doc.data.attributes.aggregate_state.as_deref(), Some("operational"));
    assert_eq!(doc.data.relationships.sections.data.len(), 1);
    assert_eq!(doc.included.len(), 2);

    let svc = doc.included.iter().find(|r| r.kind == KIND_RESOURCE).expect("service");
    let attrs: statuscope_api::status_page::types::ServiceAttributes = svc.attributes_as();
    assert_eq!(attrs.public_name.as_deref(), Some("API"));
    assert_eq!(attrs.availability, Some(99.987));
    assert_eq!(attrs.status_history.len(), 1);
}

#[tokio::test]
async fn document_without_included_defaults_to_empty() {
    let (server, client) = setup().await;

    let body = json!({
        "data": {
            "id": "page-1",
            "type": "status_page",
            "attributes": { "company_name": "Acme", "aggregate_state": "downtime" },
            "relationships": {}
        }
    });

    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let doc = client.fetch_status_page().await.expect("document");
    assert!(doc.included.is_empty());
    assert!(doc.data.relationships.sections.data.is_empty());
}

#[tokio::test]
async fn non_success_is_an_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client.fetch_status_page().await.expect_err("should fail");
    match err {
        Error::StatusPage { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_reports_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.fetch_status_page().await.expect_err("should fail");
    assert!(matches!(err, Error::Deserialization { .. }));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;
    let client = StatusPageClient::from_reqwest(
        &format!("{}/status/", server.uri()),
        reqwest::Client::new(),
    )
    .expect("valid base url");

    let body = json!({
        "data": {
            "id": "page-1",
            "type": "status_page",
            "attributes": { "company_name": "Acme" },
            "relationships": {}
        }
    });

    Mock::given(method("GET"))
        .and(path("/status/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let doc = client.fetch_status_page().await.expect("document");
    assert_eq!(doc.data.attributes.company_name, "Acme");
}
