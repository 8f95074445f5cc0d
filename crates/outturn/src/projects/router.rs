use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{ProjectRecord, ProjectSubmission};
use super::repository::ProjectStore;
use super::service::{ProjectService, ProjectServiceError};

/// Router builder exposing HTTP endpoints for intake and standings.
pub fn project_router<S>(service: Arc<ProjectService<S>>) -> Router
where
    S: ProjectStore + 'static,
{
    Router::new()
        .route(
            "/api/results",
            post(create_handler::<S>).get(list_handler::<S>),
        )
        .with_state(service)
}

/// Body returned on a successful submission.
///
/// The warning field only appears when the record was stored but the
/// population re-score could not finish.
#[derive(Debug, Serialize)]
pub(crate) struct CreatedProjectResponse {
    #[serde(flatten)]
    pub(crate) project: ProjectRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) recalculation_warning: Option<String>,
}

pub(crate) async fn create_handler<S>(
    State(service): State<Arc<ProjectService<S>>>,
    axum::Json(submission): axum::Json<ProjectSubmission>,
) -> Response
where
    S: ProjectStore + 'static,
{
    match service.submit(submission) {
        Ok(outcome) => {
            let body = CreatedProjectResponse {
                recalculation_warning: outcome.recalculation_warning(),
                project: outcome.record,
            };
            (StatusCode::CREATED, axum::Json(body)).into_response()
        }
        Err(ProjectServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<ProjectService<S>>>,
) -> Response
where
    S: ProjectStore + 'static,
{
    match service.ranked() {
        Ok(standings) => (StatusCode::OK, axum::Json(standings)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
