//! NGO directory endpoints.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use catalog::ngo::{CategoryFilter, NgoRecord, all_ngos, filter_ngos, find_ngo};

use super::catalog_error_to_status;

#[derive(Debug, Default, Deserialize)]
pub struct NgoQuery {
    pub category: Option<String>,
}

/// `GET /api/ngos?category=`: NGOs, optionally filtered by category label.
pub async fn list_ngos(
    Query(query): Query<NgoQuery>,
) -> Result<Json<Vec<&'static NgoRecord>>, StatusCode> {
    let filter = match query.category.as_deref() {
        Some(label) => CategoryFilter::from_label(label).map_err(catalog_error_to_status)?,
        None => CategoryFilter::All,
    };
    Ok(Json(filter_ngos(all_ngos(), filter)))
}

/// `GET /api/ngos/{id}`
pub async fn get_ngo(Path(raw_id): Path<String>) -> Result<Json<&'static NgoRecord>, StatusCode> {
    let id = raw_id
        .trim()
        .parse::<u32>()
        .map_err(|_| StatusCode::NOT_FOUND)?;
    find_ngo(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
#[path = "ngos_test.rs"]
mod tests;
