use crate::infra::AppState;
use crate::page;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Extension;
use axum::Json;
use outturn::projects::{project_router, ProjectService, ProjectStore};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_project_routes<S>(service: Arc<ProjectService<S>>) -> axum::Router
where
    S: ProjectStore + 'static,
{
    project_router(service.clone())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .merge(
            axum::Router::new()
                .route("/", axum::routing::get(standings_page::<S>))
                .with_state(service),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(std::sync::atomic::Ordering::Relaxed) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Browser-facing standings table at the site root.
pub(crate) async fn standings_page<S>(
    State(service): State<Arc<ProjectService<S>>>,
) -> impl IntoResponse
where
    S: ProjectStore + 'static,
{
    match service.ranked() {
        Ok(standings) => (StatusCode::OK, Html(page::render_standings(&standings))),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(page::render_error(&error.to_string())),
        ),
    }
}
