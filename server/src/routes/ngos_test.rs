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
async fn list_ngos_returns_all_records_in_order() {
    let (status, body) = get("/api/ngos").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|ngo| ngo["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn list_ngos_filters_by_category_label() {
    let (status, body) = get("/api/ngos?category=Healthcare").await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["category"], "Healthcare");
    assert_eq!(records[0]["name"], "Mumbai Health Care Initiative");
}

#[tokio::test]
async fn list_ngos_accepts_all_sentinel_and_encoded_labels() {
    let (_, all) = get("/api/ngos?category=all").await;
    assert_eq!(all.as_array().unwrap().len(), 4);

    let (status, water) = get("/api/ngos?category=Water%20%26%20Sanitation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(water[0]["id"], 2);
}

#[tokio::test]
async fn list_ngos_rejects_unknown_category() {
    let (status, _) = get("/api/ngos?category=Sports").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_ngo_returns_record_or_not_found() {
    let (status, body) = get("/api/ngos/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contact"]["email"], "empower@wemumbai.org");
    assert_eq!(body["urgent_needs"][0], "Sewing Machines");

    let (status, _) = get("/api/ngos/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get("/api/ngos/mumbai").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_ngos_handler_defaults_to_all() {
    let Json(records) = list_ngos(Query(NgoQuery::default())).await.unwrap();
    assert_eq!(records.len(), 4);
}
