#![allow(dead_code)]

use axum::http::StatusCode;
use http_body_util::BodyExt;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use tower::ServiceExt;

pub const HEADER: [&str; 17] = [
    "id",
    "accountId",
    "currency",
    "absAmount",
    "withdrawal",
    "requestDay",
    "requestDate",
    "eventDay",
    "valueDay",
    "targetFiCode",
    "targetFiAccountId",
    "selfFiCode",
    "selfFiAccountId",
    "statusType",
    "updateActor",
    "updateDate",
    "cashflowId",
];

/// Writes a seed file with one withdrawal row per `(account, status)` pair,
/// ids numbered from 1 in row order.
pub fn generate_seed_csv(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;

    for (i, &(account, status)) in rows.iter().enumerate() {
        let id = (i + 1).to_string();
        let cashflow_id = if status == "PROCESSED" { id.as_str() } else { "" };
        wtr.write_record([
            id.as_str(),
            account,
            "JPY",
            "1000.50",
            "true",
            "2026-10-16",
            "2026-10-16T10:00:00",
            "2026-10-16",
            "2026-10-19",
            "",
            "",
            "",
            "",
            status,
            account,
            "2026-10-16T10:00:00",
            cashflow_id,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
pub async fn get(
    app: axum::Router,
    uri: &str,
    actor: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut req = axum::http::Request::builder().uri(uri);
    if let Some(actor) = actor {
        req = req.header("x-actor-id", actor);
    }
    let req = req.body(axum::body::Body::empty()).unwrap();
    send(app, req).await
}

/// Send a POST request with a JSON body via `oneshot` and return (status, parsed JSON body).
pub async fn post_json(
    app: axum::Router,
    uri: &str,
    actor: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, actor, serde_json::to_vec(&body).unwrap()).await
}

/// Send a POST request with an arbitrary JSON-typed body.
pub async fn post_raw(
    app: axum::Router,
    uri: &str,
    actor: Option<&str>,
    body: Vec<u8>,
) -> (StatusCode, serde_json::Value) {
    let mut req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(actor) = actor {
        req = req.header("x-actor-id", actor);
    }
    let req = req.body(axum::body::Body::from(body)).unwrap();
    send(app, req).await
}

async fn send(
    app: axum::Router,
    req: axum::http::Request<axum::body::Body>,
) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
