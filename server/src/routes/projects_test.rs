use super::*;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use serde_json::Value;
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::state::test_helpers::test_app_state;

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = api_routes(test_app_state())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn get_project_includes_derived_funding_figures() {
    let (status, body) = get("/api/projects/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Clean Water Initiative");
    assert_eq!(body["status"], "Active");
    assert_eq!(body["category"], "Water & Sanitation");
    assert!((body["funding_percentage"].as_f64().unwrap() - 70.0).abs() < 1e-9);
    assert_eq!(body["remaining"], 15_000);
    assert_eq!(body["timeline"][2]["status"], "In Progress");
}

#[tokio::test]
async fn get_project_unknown_or_malformed_id_is_not_found() {
    for uri in ["/api/projects/99", "/api/projects/0", "/api/projects/abc"] {
        let (status, _) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn list_projects_filters_by_status_case_insensitively() {
    let (status, body) = get("/api/projects?status=completed").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![5]);

    let (_, active) = get("/api/projects?status=Active").await;
    assert_eq!(active.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn list_projects_without_filter_returns_all() {
    let (_, body) = get("/api/projects").await;
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn list_projects_rejects_unknown_status() {
    let (status, _) = get("/api/projects?status=paused").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn project_response_from_record_copies_derived_values() {
    let project = find_project(3).unwrap();
    let response = ProjectResponse::from(project);
    assert!((response.funding_percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(response.remaining, 0);
}
