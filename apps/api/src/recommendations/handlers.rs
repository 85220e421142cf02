//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::recommendations::normalizer::JobSuggestion;
use crate::recommendations::service::recommend_jobs;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobSuggestion>,
}

/// GET /api/job
///
/// Generates a fresh batch of job suggestions for the caller's profile.
/// Not deterministic: repeated calls may return different suggestions.
pub async fn handle_recommend_jobs(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> Result<Json<JobsResponse>, AppError> {
    let jobs = recommend_jobs(
        caller.as_ref(),
        state.users.as_ref(),
        state.llm.as_ref(),
        state.generation_timeout,
    )
    .await?;

    Ok(Json(JobsResponse { jobs }))
}
