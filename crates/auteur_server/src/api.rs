//! HTTP routes for job submission.

use crate::{AppState, DispatchError, run_job};
use auteur_core::{JobFailure, JobOutcome, parse_job_request};
use auteur_pipeline::aggregate_failure;
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;

/// Path of the job endpoint.
pub const AGENT_PATH: &str = "/api/agent";

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(AGENT_PATH, post(submit_job))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Validate the body, run one job, and map the outcome onto a status code.
///
/// The body is taken as raw bytes so malformed JSON is answered with the
/// envelope rather than a framework rejection.
#[tracing::instrument(skip(state, body), fields(body_bytes = body.len()))]
async fn submit_job(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<JobOutcome>) {
    let request = match parse_job_request(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::info!(error = %e, "Rejected job request");
            return (
                StatusCode::BAD_REQUEST,
                Json(JobFailure::new(e.client_message()).into()),
            );
        }
    };

    match run_job(&state, request).await {
        Ok(success) => {
            tracing::info!(video_id = %success.video_id(), "Job succeeded");
            (StatusCode::OK, Json(success.into()))
        }
        Err(DispatchError::Agent(error)) => {
            tracing::warn!(error = %error, entries = error.logs().len(), "Job failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(aggregate_failure(error).into()),
            )
        }
        Err(error) => {
            tracing::error!(error = %error, "Job failed unexpectedly");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(JobFailure::new(error.client_message()).into()),
            )
        }
    }
}
