//! Stub record store: a loopback axum server speaking the store's REST
//! wire contract, so the HTTP client is tested against real requests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Clone, Default)]
pub struct StubStore {
    pub reports: Arc<Mutex<Vec<Value>>>,
    sequence: Arc<AtomicU32>,
    /// Collection paths (e.g. "ob-entries") that answer 500.
    pub failing: Arc<HashSet<String>>,
    /// When set, report creation answers 400 with this message.
    pub reject_create: Option<String>,
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(collections: &[&str]) -> Self {
        StubStore {
            failing: Arc::new(collections.iter().map(|c| c.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn rejecting(message: &str) -> Self {
        StubStore {
            reject_create: Some(message.to_string()),
            ..Self::default()
        }
    }
}

pub fn sample_collections() -> Value {
    json!({
        "ob-entries": {"obEntries": [
            {"obNumber": "OB-001", "incidentType": "Theft", "status": "Open", "caseClassification": "Criminal"},
            {"obNumber": "OB-002", "type": "Theft", "status": "Closed"},
            {"obNumber": "OB-003", "incidentType": "Assault", "status": "Open", "caseClassification": "Criminal"},
        ]},
        "custodial-records": {"inmates": [
            {"status": "Active", "riskLevel": "High"},
            {"status": "Active", "riskLevel": "Low", "classification": "Medium Security"},
            {"status": "Active"},
            {"status": "Released", "riskLevel": "High"},
            {"status": "Released"},
        ]},
        "evidence": {"evidence": [
            {"type": "Firearm", "storageLocation": "Locker A"},
            {"storageLocation": "Locker A"},
        ]},
        "officers": {"officers": [
            {"status": "Active", "department": "CID", "rank": "Sergeant"},
        ]},
        "police-vehicles": {"vehicles": [
            {"status": "Operational", "type": "Patrol"},
        ]},
    })
}

fn collection_handler(store: &StubStore, path: &'static str) -> Response {
    if store.failing.contains(path) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": format!("{} collection unavailable", path)})),
        )
            .into_response();
    }
    Json(sample_collections()[path].clone()).into_response()
}

async fn get_reports(State(store): State<StubStore>) -> Response {
    if store.failing.contains("reports") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "reports collection unavailable"})),
        )
            .into_response();
    }
    let reports = store.reports.lock().unwrap().clone();
    Json(json!({ "reports": reports })).into_response()
}

async fn create_report(State(store): State<StubStore>, Json(body): Json<Value>) -> Response {
    if let Some(message) = &store.reject_create {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response();
    }

    let seq = store.sequence.fetch_add(1, Ordering::SeqCst) + 1;
    let document = json!({
        "_id": format!("doc-{:04}", seq),
        "reportNumber": format!("RPT-2026-{:04}", seq),
        "metadata": body["metadata"],
        "content": body["content"],
        "status": body["status"],
        "createdAt": body["generatedAt"],
    });
    store.reports.lock().unwrap().push(document.clone());
    (StatusCode::CREATED, Json(document)).into_response()
}

pub fn router(store: StubStore) -> Router {
    Router::new()
        .route("/api/reports", get(get_reports))
        .route("/api/custodial-reports", post(create_report))
        .route(
            "/api/ob-entries",
            get(|State(s): State<StubStore>| async move { collection_handler(&s, "ob-entries") }),
        )
        .route(
            "/api/custodial-records",
            get(|State(s): State<StubStore>| async move {
                collection_handler(&s, "custodial-records")
            }),
        )
        .route(
            "/api/evidence",
            get(|State(s): State<StubStore>| async move { collection_handler(&s, "evidence") }),
        )
        .route(
            "/api/officers",
            get(|State(s): State<StubStore>| async move { collection_handler(&s, "officers") }),
        )
        .route(
            "/api/police-vehicles",
            get(|State(s): State<StubStore>| async move {
                collection_handler(&s, "police-vehicles")
            }),
        )
        .with_state(store)
}

/// Bind the stub store on a loopback port and return its base URL.
pub async fn serve(store: StubStore) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(store);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
