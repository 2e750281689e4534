use anyhow::Result;
use mockito::{Mock, Server, ServerGuard};
use serde_json::{json, Value};
use std::sync::Arc;

use ghstatus::app;
use ghstatus::client::{FetchError, StatusClient, StatusSource};
use ghstatus::config::{Endpoints, COMPONENTS_PATH, INCIDENTS_PATH};

fn components_body() -> Value {
    json!({
        "page": {
            "id": "kctbh9vrtdwd",
            "name": "GitHub",
            "url": "https://www.githubstatus.com",
            "time_zone": "Etc/UTC",
            "updated_at": "2024-01-01T12:00:00.000Z"
        },
        "components": [
            {
                "id": "0l2p9nhqnxpd",
                "name": "Visit www.githubstatus.com for more information",
                "status": "operational",
                "created_at": "2017-01-31T20:05:05.370Z",
                "updated_at": "2024-01-01T11:00:00.000Z",
                "position": 8,
                "description": null,
                "showcase": false,
                "start_date": null,
                "group_id": null,
                "page_id": "kctbh9vrtdwd",
                "group": false,
                "only_show_if_degraded": false
            },
            {
                "id": "abc",
                "name": "API",
                "status": "major_outage",
                "created_at": "2017-01-31T20:05:05.370Z",
                "updated_at": "2024-01-01T11:00:00.000Z",
                "position": 2,
                "description": "Requests for GitHub APIs",
                "showcase": false,
                "start_date": null,
                "group_id": null,
                "page_id": "kctbh9vrtdwd",
                "group": false,
                "only_show_if_degraded": false
            }
        ]
    })
}

fn incidents_body(incidents: Value) -> Value {
    json!({
        "page": {
            "id": "kctbh9vrtdwd",
            "name": "GitHub",
            "url": "https://www.githubstatus.com",
            "updated_at": "2024-01-01T12:00:00.000Z"
        },
        "incidents": incidents
    })
}

fn db_incident() -> Value {
    json!({
        "id": "inc1",
        "name": "DB issue",
        "status": "investigating",
        "impact": "critical",
        "shortlink": "https://git.io/x",
        "created_at": "2024-01-01T11:30:00.000Z",
        "updated_at": "2024-01-01T12:00:00Z",
        "incident_updates": [{
            "id": "upd1",
            "incident_id": "inc1",
            "body": "We are looking into it",
            "status": "investigating",
            "created_at": "2024-01-01T12:00:00.000Z",
            "updated_at": "2024-01-01T12:00:00.000Z",
            "display_at": "2024-01-01T12:00:00.000Z"
        }]
    })
}

async fn serve(server: &mut ServerGuard, path: &str, status: usize, body: String) -> Mock {
    server
        .mock("GET", format!("/{path}").as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn client_for(server: &ServerGuard) -> StatusClient {
    StatusClient::new(Endpoints::with_base_url(&server.url()).unwrap()).unwrap()
}

#[tokio::test]
async fn renders_components_without_incidents() -> Result<()> {
    let mut server = Server::new_async().await;
    let components = serve(&mut server, COMPONENTS_PATH, 200, components_body().to_string()).await;
    let incidents = serve(
        &mut server,
        INCIDENTS_PATH,
        200,
        incidents_body(json!([])).to_string(),
    )
    .await;

    let out = app::run(Arc::new(client_for(&server))).await?;
    components.assert_async().await;
    incidents.assert_async().await;

    assert_eq!(out, "=== Components as of 01 Jan 24 12:00 UTC ===\nAPI 🔴\n");
    Ok(())
}

#[tokio::test]
async fn renders_incident_block() -> Result<()> {
    let mut server = Server::new_async().await;
    let _c = serve(&mut server, COMPONENTS_PATH, 200, components_body().to_string()).await;
    let _i = serve(
        &mut server,
        INCIDENTS_PATH,
        200,
        incidents_body(json!([db_incident()])).to_string(),
    )
    .await;

    let out = app::run(Arc::new(client_for(&server))).await?;
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "=== Components as of 01 Jan 24 12:00 UTC ===",
            "API 🔴",
            "",
            "=== Incidents ===",
            "Name:         DB issue",
            "Impact:       🔴 critical",
            "Status:       investigating",
            "Details:      We are looking into it",
            "Link:         https://git.io/x",
            "Last Updated: 01 Jan 24 12:00 UTC",
        ]
    );
    assert!(!out.contains("Visit www.githubstatus.com"));
    Ok(())
}

#[tokio::test]
async fn client_sends_user_agent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("/{COMPONENTS_PATH}").as_str())
        .match_header(
            "user-agent",
            mockito::Matcher::Regex(r"^ghstatus/\d+\.\d+\.\d+$".into()),
        )
        .with_status(200)
        .with_body(components_body().to_string())
        .create_async()
        .await;

    let resp = client_for(&server).components().await.unwrap();
    mock.assert_async().await;
    assert_eq!(resp.components.len(), 2);
    assert_eq!(resp.components[1].description.as_deref(), Some("Requests for GitHub APIs"));
}

#[tokio::test]
async fn server_error_is_reported_as_status() {
    let mut server = Server::new_async().await;
    let _i = serve(&mut server, INCIDENTS_PATH, 503, "unavailable".into()).await;

    let err = client_for(&server).incidents().await.unwrap_err();
    match err {
        FetchError::Status { status, url } => {
            assert_eq!(status.as_u16(), 503);
            assert!(url.path().ends_with("unresolved.json"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    let _c = serve(&mut server, COMPONENTS_PATH, 200, "<html>oops</html>".into()).await;
    let _shape = serve(
        &mut server,
        INCIDENTS_PATH,
        200,
        json!({ "page": {}, "incidents": [] }).to_string(),
    )
    .await;

    let client = client_for(&server);
    assert!(matches!(
        client.components().await,
        Err(FetchError::Decode { .. })
    ));
    assert!(matches!(
        client.incidents().await,
        Err(FetchError::Decode { .. })
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let client = StatusClient::new(Endpoints::with_base_url("http://127.0.0.1:1/").unwrap()).unwrap();
    assert!(matches!(
        client.components().await,
        Err(FetchError::Network { .. })
    ));
}

#[tokio::test]
async fn any_failed_fetch_aborts_the_run() {
    let mut server = Server::new_async().await;
    let _c = serve(&mut server, COMPONENTS_PATH, 200, components_body().to_string()).await;
    let _i = serve(&mut server, INCIDENTS_PATH, 500, String::new()).await;

    let err = app::run(Arc::new(client_for(&server))).await.unwrap_err();
    assert!(err.to_string().contains("failed to fetch incidents"));
    assert!(matches!(
        err.downcast_ref::<FetchError>(),
        Some(FetchError::Status { .. })
    ));
}
