//! Project list and detail endpoints.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use catalog::project::{
    ProjectRecord, ProjectStatusFilter, all_projects, filter_projects, find_project,
    parse_project_id,
};

use super::catalog_error_to_status;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    pub status: Option<String>,
}

/// A project plus the figures derived from it.
#[derive(Serialize)]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: &'static ProjectRecord,
    pub funding_percentage: f64,
    pub remaining: u64,
}

impl From<&'static ProjectRecord> for ProjectResponse {
    fn from(project: &'static ProjectRecord) -> Self {
        Self {
            project,
            funding_percentage: project.funding_percentage(),
            remaining: project.remaining(),
        }
    }
}

/// `GET /api/projects?status=`: projects, optionally filtered by status.
pub async fn list_projects(
    Query(query): Query<ProjectQuery>,
) -> Result<Json<Vec<ProjectResponse>>, StatusCode> {
    let filter = match query.status.as_deref() {
        Some(raw) => ProjectStatusFilter::Only(raw.parse().map_err(catalog_error_to_status)?),
        None => ProjectStatusFilter::All,
    };
    let projects = filter_projects(all_projects(), filter)
        .into_iter()
        .map(ProjectResponse::from)
        .collect();
    Ok(Json(projects))
}

/// `GET /api/projects/{id}`: non-numeric and unknown ids are both 404.
pub async fn get_project(
    Path(raw_id): Path<String>,
) -> Result<Json<ProjectResponse>, StatusCode> {
    let id = parse_project_id(&raw_id).map_err(catalog_error_to_status)?;
    let Some(project) = find_project(id) else {
        tracing::debug!(id, "project not found");
        return Err(StatusCode::NOT_FOUND);
    };
    Ok(Json(project.into()))
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
