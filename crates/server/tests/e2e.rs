use std::net::SocketAddr;

use configs::DatabaseConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup;

struct TestApp {
    base_url: String,
}

/// Serve the full router on an ephemeral port backed by in-memory SQLite
/// seeded with the demo patients.
async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = DatabaseConfig::with_url("sqlite::memory:");
    cfg.seed_demo_data = true;
    let state = startup::build_state(&cfg).await?;
    let app = startup::build_app(state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = startup::serve(listener, app, std::future::pending()).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_seeded_patient_is_readable() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/get_patient", app.base_url)).query(&[("id", 1)]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["id"], 1);
    assert_eq!(body["full-name"], "Ali");
    assert_eq!(body["age"], "22");

    let all = client().get(format!("{}/patients", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(all.len(), 3);
    Ok(())
}

#[tokio::test]
async fn e2e_full_flow_create_get_delete() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Create
    let res = c
        .post(format!("{}/post_patient", app.base_url))
        .json(&json!({"id": null, "full-name": "Karim", "age": "33"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    assert_eq!(created["full-name"], "Karim");
    assert_eq!(created["age"], "33");
    let id = created["id"].as_i64().expect("numeric id");

    // Read back
    let fetched = c.get(format!("{}/get_patient", app.base_url)).query(&[("id", id)]).send().await?.json::<Value>().await?;
    assert_eq!(fetched, created);

    // Delete twice; both succeed
    for _ in 0..2 {
        let res = c.post(format!("{}/delete_patient", app.base_url)).query(&[("id", id)]).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
        assert!(res.text().await?.is_empty());
    }

    // Gone: empty body, not an error
    let res = c.get(format!("{}/get_patient", app.base_url)).query(&[("id", id)]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_id_returns_empty_body() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/get_patient", app.base_url)).query(&[("id", 9999)]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_save_dto_uses_hyphenated_name() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/save", app.base_url))
        .json(&json!({"name": "Sara", "age": "25"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["id"].is_i64());
    assert_eq!(body["full-name"], "Sara");
    assert_eq!(body["age"], "25");
    assert!(body.get("name").is_none());
    Ok(())
}

#[tokio::test]
async fn e2e_post_with_existing_id_overwrites() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let res = c
        .post(format!("{}/post_patient", app.base_url))
        .json(&json!({"id": 2, "full-name": "Assa", "age": "31"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["id"], 2);

    let all = c.get(format!("{}/patients", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[1]["age"], "31");
    Ok(())
}

#[tokio::test]
async fn e2e_routes_are_also_under_patient_prefix() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/Patient/get_patient", app.base_url)).query(&[("id", 3)]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["full-name"], "Md");
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_input_is_client_error() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/get_patient", app.base_url)).query(&[("id", "abc")]).send().await?;
    assert!(res.status().is_client_error());

    let res = c
        .post(format!("{}/post_patient", app.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert!(res.status().is_client_error());

    let res = c
        .post(format!("{}/save", app.base_url))
        .json(&json!({"age": 25}))
        .send()
        .await?;
    assert!(res.status().is_client_error());
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let doc = client().get(format!("{}/api-docs/openapi.json", app.base_url)).send().await?.json::<Value>().await?;
    assert!(doc["paths"]["/save"].is_object());
    Ok(())
}
