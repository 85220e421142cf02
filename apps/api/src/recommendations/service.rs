//! Recommendation pipeline.
//!
//! Flow: caller identity → profile read → prompt → one bounded generation call →
//! normalize. Any failure short-circuits the remaining steps. No writes.

use std::time::Duration;

use tracing::{info, warn};

use crate::auth::UserIdentity;
use crate::errors::AppError;
use crate::llm_client::{generate_with_timeout, TextGenerator};
use crate::recommendations::normalizer::{normalize_suggestions, JobSuggestion};
use crate::recommendations::prompts::build_recommendation_prompt;
use crate::users::repository::UserRepository;

/// Produces a recommendation batch for the caller.
///
/// Identity, repository, generator and timeout are all passed in so the pipeline
/// runs without a live session or network in tests.
pub async fn recommend_jobs(
    caller: Option<&UserIdentity>,
    users: &dyn UserRepository,
    generator: &dyn TextGenerator,
    generation_timeout: Duration,
) -> Result<Vec<JobSuggestion>, AppError> {
    let identity = caller.ok_or(AppError::Unauthorized)?;

    let profile = users
        .find_profile(identity)
        .await?
        .ok_or(AppError::ProfileNotFound)?;

    let prompt = build_recommendation_prompt(&profile);

    let raw = generate_with_timeout(generator, &prompt, generation_timeout)
        .await
        .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

    let jobs = normalize_suggestions(&raw).map_err(|e| {
        warn!("Unusable recommendation output for {}: {raw}", identity.user_id);
        AppError::InvalidResponseFormat(e.to_string())
    })?;

    info!(
        "Generated {} job suggestions for {}",
        jobs.len(),
        identity.user_id
    );
    Ok(jobs)
}
