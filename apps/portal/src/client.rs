//! HTTP client for the recommendation and saved-job endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{JobCard, SaveJobRequest};

const DEFAULT_FETCH_ERROR: &str = "Failed to fetch job suggestions";
const NETWORK_ERROR: &str = "Network error while fetching jobs";

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl PortalError {
    /// Message shown to the user when the initial load fails.
    pub fn user_message(&self) -> String {
        match self {
            PortalError::Http(_) => NETWORK_ERROR.to_string(),
            PortalError::Api { message, .. } => message.clone(),
            PortalError::Malformed(_) => DEFAULT_FETCH_ERROR.to_string(),
        }
    }
}

/// Anything that can produce the full recommendation batch in one call.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch_recommendations(&self) -> Result<Vec<JobCard>, PortalError>;
}

/// One-shot notification describing the outcome of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Saved,
    SaveFailed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::Saved => "Job saved to favorites!",
            Notification::SaveFailed => "Could not save job. Are you signed in?",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Clone)]
pub struct PortalClient {
    client: Client,
    base_url: String,
    session_token: String,
}

impl PortalClient {
    pub fn new(
        base_url: &str,
        session_token: String,
        timeout: Duration,
    ) -> Result<Self, PortalError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_token,
        })
    }

    /// Persists a suggestion. Fire-and-forget: no retry, the caller only shows
    /// the returned notification.
    pub async fn save_job(&self, job: &JobCard) -> Notification {
        let result = self
            .client
            .post(format!("{}/api/saved-job", self.base_url))
            .bearer_auth(&self.session_token)
            .json(&SaveJobRequest::from(job))
            .send()
            .await;

        match result {
            Ok(response) => {
                let outcome = save_outcome(response.status());
                if outcome == Notification::Saved {
                    debug!("Saved job '{}'", job.job_title);
                } else {
                    warn!("Save failed with status {}", response.status());
                }
                outcome
            }
            Err(e) => {
                warn!("Save request failed: {e}");
                Notification::SaveFailed
            }
        }
    }
}

/// Maps the save endpoint's status to the notification shown to the user.
pub fn save_outcome(status: StatusCode) -> Notification {
    if status.is_success() {
        Notification::Saved
    } else {
        Notification::SaveFailed
    }
}

#[async_trait]
impl RecommendationSource for PortalClient {
    async fn fetch_recommendations(&self) -> Result<Vec<JobCard>, PortalError> {
        let response = self
            .client
            .get(format!("{}/api/job", self.base_url))
            .bearer_auth(&self.session_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_jobs_response(status, &body)
    }
}

/// Interprets a recommendation response. A non-2xx status or a `jobs` value
/// that is not an array is an error; the server's `error` text is surfaced.
pub fn parse_jobs_response(status: StatusCode, body: &str) -> Result<Vec<JobCard>, PortalError> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| DEFAULT_FETCH_ERROR.to_string());
        return Err(PortalError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| PortalError::Malformed(e.to_string()))?;
    match value.get("jobs") {
        Some(jobs @ Value::Array(_)) => serde_json::from_value(jobs.clone())
            .map_err(|e| PortalError::Malformed(e.to_string())),
        _ => Err(PortalError::Malformed("`jobs` is not an array".to_string())),
    }
}
