// End-to-end snapshot tests against wiremock upstreams.

use chrono::Local;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use statuscope_core::{AggregateState, CoreError, DayState, MonitorStatus, StatusConfig, Statuscope};

fn config(status_server: &MockServer) -> StatusConfig {
    StatusConfig::new(Url::parse(&status_server.uri()).expect("valid url"))
}

fn config_with_uptime(status_server: &MockServer, uptime_server: &MockServer) -> StatusConfig {
    let mut cfg = config(status_server).with_uptime_token(SecretString::from("test-token"));
    cfg.uptime_api_url = Url::parse(&uptime_server.uri()).expect("valid url");
    cfg
}

/// A minimal document: one section, two services bound by back-reference.
fn two_service_document() -> serde_json::Value {
    json!({
        "data": {
            "id": "page-1",
            "type": "status_page",
            "attributes": { "company_name": "Acme", "aggregate_state": "operational" },
            "relationships": {
                "sections": { "data": [{ "id": "sec-1", "type": "status_page_section" }] },
                "resources": { "data": [
                    { "id": "svc-z", "type": "status_page_resource" },
                    { "id": "svc-a", "type": "status_page_resource" },
                ]},
                "status_reports": { "data": [] }
            }
        },
        "included": [
            { "id": "sec-1", "type": "status_page_section", "attributes": { "name": "Core" } },
            {
                "id": "svc-z",
                "type": "status_page_resource",
                "attributes": { "public_name": "Zebra", "status": "operational" },
                "relationships": {
                    "status_page_section": { "data": { "id": "sec-1", "type": "status_page_section" } }
                }
            },
            {
                "id": "svc-a",
                "type": "status_page_resource",
                "attributes": { "public_name": "API", "status": "degraded", "availability": 98.5 },
                "relationships": {
                    "status_page_section": { "data": { "id": "sec-1", "type": "status_page_section" } }
                }
            }
        ]
    })
}

async fn mount_document(server: &MockServer, body: &serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn end_to_end_snapshot_without_monitors() {
    let status_server = MockServer::start().await;
    mount_document(&status_server, &two_service_document()).await;

    let scope = Statuscope::new(&config(&status_server)).expect("builder");
    let snapshot = scope.snapshot().await.expect("snapshot");

    assert_eq!(snapshot.company_name, "Acme");
    assert_eq!(snapshot.aggregate_state, AggregateState::Operational);
    assert!(snapshot.monitors.is_empty());
    assert!(snapshot.ongoing_incidents.is_empty());
    assert!(snapshot.past_incidents.is_empty());

    assert_eq!(snapshot.sections.len(), 1);
    let section = &snapshot.sections[0];
    assert_eq!(section.name, "Core");
    let names: Vec<&str> = section.services.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["API", "Zebra"]);

    // Every history spans exactly the 90-day window ending today.
    let today = Local::now().date_naive();
    for service in &section.services {
        assert_eq!(service.status_history.len(), 90);
        assert_eq!(service.status_history.last().map(|d| d.day), Some(today));
    }
}

#[tokio::test]
async fn primary_source_failure_is_fatal() {
    let status_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&status_server)
        .await;

    let scope = Statuscope::new(&config(&status_server)).expect("builder");
    let err = scope.snapshot().await.expect_err("should fail");

    match err {
        CoreError::SourceUnavailable { status, .. } => assert_eq!(status, Some(500)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn monitor_list_failure_degrades_to_empty() {
    let status_server = MockServer::start().await;
    let uptime_server = MockServer::start().await;
    mount_document(&status_server, &two_service_document()).await;

    Mock::given(method("GET"))
        .and(path("/monitors"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&uptime_server)
        .await;

    let scope =
        Statuscope::new(&config_with_uptime(&status_server, &uptime_server)).expect("builder");
    let snapshot = scope.snapshot().await.expect("snapshot");

    assert!(snapshot.monitors.is_empty());
    assert_eq!(snapshot.sections.len(), 1);
}

#[tokio::test]
async fn single_monitor_failure_does_not_affect_siblings() {
    let status_server = MockServer::start().await;
    let uptime_server = MockServer::start().await;
    mount_document(&status_server, &two_service_document()).await;

    let monitors = json!({
        "data": [
            { "id": "m-1", "attributes": { "pronounceable_name": "One", "url": "https://one.example.com", "status": "up" } },
            { "id": "m-2", "attributes": { "pronounceable_name": "Two", "url": "https://two.example.com", "status": "up" } },
            { "id": "m-3", "attributes": { "pronounceable_name": "Three", "url": "https://three.example.com", "status": "down" } },
        ]
    });
    Mock::given(method("GET"))
        .and(path("/monitors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&monitors))
        .mount(&uptime_server)
        .await;

    let today = Local::now().date_naive();
    let reports = json!({
        "data": [
            { "attributes": { "availability": 99.95, "created_at": format!("{today}T00:00:00Z") } }
        ]
    });
    for id in ["m-1", "m-3"] {
        Mock::given(method("GET"))
            .and(path(format!("/monitors/{id}/sla-reports")))
            .respond_with(ResponseTemplate::new(200).set_body_json(&reports))
            .mount(&uptime_server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/monitors/m-2/sla-reports"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&uptime_server)
        .await;

    let scope =
        Statuscope::new(&config_with_uptime(&status_server, &uptime_server)).expect("builder");
    let snapshot = scope.snapshot().await.expect("snapshot");

    assert_eq!(snapshot.monitors.len(), 3);
    let ids: Vec<&str> = snapshot.monitors.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m-1", "m-2", "m-3"]);

    let failed = &snapshot.monitors[1];
    assert_eq!(failed.availability, None);
    assert_eq!(failed.status_history.len(), 90);
    assert!(failed.status_history.iter().all(|d| d.status == DayState::NotMonitored));

    let healthy = &snapshot.monitors[0];
    assert_eq!(healthy.availability, Some(99.95));
    assert_eq!(healthy.status, MonitorStatus::Up);
    assert_eq!(
        healthy.status_history.last().map(|d| d.status),
        Some(DayState::Operational)
    );

    assert_eq!(snapshot.monitors[2].status, MonitorStatus::Down);
}

#[tokio::test]
async fn empty_sla_reports_degrade_the_monitor() {
    let status_server = MockServer::start().await;
    let uptime_server = MockServer::start().await;
    mount_document(&status_server, &two_service_document()).await;

    Mock::given(method("GET"))
        .and(path("/monitors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "m-1", "attributes": { "url": "https://one.example.com", "status": "paused" } }]
        })))
        .mount(&uptime_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/monitors/m-1/sla-reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&uptime_server)
        .await;

    let scope =
        Statuscope::new(&config_with_uptime(&status_server, &uptime_server)).expect("builder");
    let snapshot = scope.snapshot().await.expect("snapshot");

    assert_eq!(snapshot.monitors.len(), 1);
    let monitor = &snapshot.monitors[0];
    assert_eq!(monitor.availability, None);
    assert_eq!(monitor.name, "https://one.example.com");
    assert_eq!(monitor.status, MonitorStatus::Paused);
    assert!(monitor.status_history.iter().all(|d| d.status == DayState::NotMonitored));
}

#[tokio::test]
async fn null_availability_reports_leave_days_unmonitored() {
    let status_server = MockServer::start().await;
    let uptime_server = MockServer::start().await;
    mount_document(&status_server, &two_service_document()).await;

    Mock::given(method("GET"))
        .and(path("/monitors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "m-1", "attributes": { "pronounceable_name": "One", "url": "https://one.example.com", "status": "up" } }]
        })))
        .mount(&uptime_server)
        .await;

    let today = Local::now().date_naive();
    let yesterday = today.pred_opt().expect("valid date");
    Mock::given(method("GET"))
        .and(path("/monitors/m-1/sla-reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "attributes": { "availability": 99.9, "created_at": format!("{yesterday}T00:00:00Z") } },
                { "attributes": { "availability": null, "created_at": format!("{today}T00:00:00Z") } },
            ]
        })))
        .mount(&uptime_server)
        .await;

    let scope =
        Statuscope::new(&config_with_uptime(&status_server, &uptime_server)).expect("builder");
    let snapshot = scope.snapshot().await.expect("snapshot");

    let monitor = &snapshot.monitors[0];
    // The chronologically-last report has no measurement.
    assert_eq!(monitor.availability, None);
    let last_two: Vec<DayState> = monitor
        .status_history
        .iter()
        .rev()
        .take(2)
        .map(|d| d.status)
        .collect();
    // Today (null availability) is a gap, not a downtime day.
    assert_eq!(last_two, vec![DayState::NotMonitored, DayState::Operational]);
}

#[tokio::test]
async fn sections_without_back_references_fall_back_to_first_section() {
    let status_server = MockServer::start().await;

    let body = json!({
        "data": {
            "id": "page-1",
            "type": "status_page",
            "attributes": { "company_name": "Acme", "aggregate_state": "degraded" },
            "relationships": {
                "sections": { "data": [
                    { "id": "sec-1", "type": "status_page_section" },
                    { "id": "sec-2", "type": "status_page_section" },
                ]},
                "resources": { "data": [
                    { "id": "svc-1", "type": "status_page_resource" },
                    { "id": "svc-2", "type": "status_page_resource" },
                ]},
                "status_reports": { "data": [] }
            }
        },
        "included": [
            { "id": "sec-1", "type": "status_page_section", "attributes": { "name": "First" } },
            { "id": "sec-2", "type": "status_page_section", "attributes": { "name": "Second" } },
            { "id": "svc-1", "type": "status_page_resource", "attributes": { "public_name": "Alpha" } },
            { "id": "svc-2", "type": "status_page_resource", "attributes": { "public_name": "Beta" } },
        ]
    });
    mount_document(&status_server, &body).await;

    let scope = Statuscope::new(&config(&status_server)).expect("builder");
    let snapshot = scope.snapshot().await.expect("snapshot");

    assert_eq!(snapshot.sections.len(), 2);
    assert_eq!(snapshot.sections[0].services.len(), 2);
    // The second section still appears, empty.
    assert!(snapshot.sections[1].services.is_empty());
}

#[tokio::test]
async fn incidents_are_bucketed_by_ongoing_flag() {
    let status_server = MockServer::start().await;

    let body = json!({
        "data": {
            "id": "page-1",
            "type": "status_page",
            "attributes": { "company_name": "Acme", "aggregate_state": "downtime" },
            "relationships": {
                "sections": { "data": [] },
                "resources": { "data": [] },
                "status_reports": { "data": [
                    { "id": "rep-1", "type": "status_page_report" },
                    { "id": "rep-2", "type": "status_page_report" },
                ]}
            }
        },
        "included": [
            {
                "id": "rep-1",
                "type": "status_page_report",
                "attributes": { "title": "Live outage", "ongoing": true, "created_at": "2026-08-30T08:00:00Z" },
                "relationships": {
                    "status_updates": { "data": [{ "id": "u-1", "type": "status_update" }] }
                }
            },
            {
                "id": "rep-2",
                "type": "status_page_report",
                "attributes": { "title": "Resolved blip", "ongoing": false, "created_at": "2026-08-29T00:00:00Z" }
            },
            {
                "id": "u-1",
                "type": "status_update",
                "attributes": { "message": "Looking into it", "created_at": "2026-08-30T08:05:00Z" }
            }
        ]
    });
    mount_document(&status_server, &body).await;

    let scope = Statuscope::new(&config(&status_server)).expect("builder");
    let snapshot = scope.snapshot().await.expect("snapshot");

    assert_eq!(snapshot.aggregate_state, AggregateState::Downtime);
    assert_eq!(snapshot.ongoing_incidents.len(), 1);
    assert_eq!(snapshot.ongoing_incidents[0].updates.len(), 1);
    assert_eq!(snapshot.past_incidents.len(), 1);
    assert_eq!(snapshot.past_incidents[0].title, "Resolved blip");
}
