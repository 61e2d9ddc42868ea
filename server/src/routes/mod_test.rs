use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use crate::state::test_helpers::test_app_state;

#[test]
fn catalog_error_to_status_maps_unknown_labels_to_bad_request() {
    assert_eq!(
        catalog_error_to_status(CatalogError::UnknownCategory("Sports".into())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        catalog_error_to_status(CatalogError::UnknownStatus("paused".into())),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn catalog_error_to_status_maps_invalid_project_id_to_not_found() {
    assert_eq!(
        catalog_error_to_status(CatalogError::InvalidProjectId("abc".into())),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = api_routes(test_app_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let app = api_routes(test_app_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/volunteers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
