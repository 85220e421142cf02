//! Axum route handlers for user bootstrap and saved jobs.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::models::saved_job::NewSavedJob;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SavedJobResponse {
    pub id: Uuid,
}

/// POST /api/create-user
///
/// Idempotently creates the user row for the signed-in caller.
pub async fn handle_create_user(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> Result<Json<Value>, AppError> {
    let identity = caller.ok_or(AppError::Unauthorized)?;
    state.users.ensure_user(&identity).await?;
    Ok(Json(json!({ "success": true })))
}

/// POST /api/saved-job
///
/// Persists a job suggestion the caller chose to keep.
pub async fn handle_save_job(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(request): Json<NewSavedJob>,
) -> Result<(StatusCode, Json<SavedJobResponse>), AppError> {
    let identity = caller.ok_or(AppError::Unauthorized)?;

    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
    }

    let row = state.users.save_job(&identity, &request).await?;
    info!("Saved job '{}' for {}", row.job_title, identity.user_id);

    Ok((StatusCode::CREATED, Json(SavedJobResponse { id: row.id })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    use super::*;
    use crate::routes::build_router;
    use crate::test_support::{react_profile, test_state, CannedGenerator, MockUsers};

    async fn post(
        users: Arc<MockUsers>,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        let app = build_router(test_state(users, Arc::new(CannedGenerator::ok("[]"))));
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = app
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn save_body() -> Value {
        json!({
            "jobTitle": "Frontend Developer",
            "reason": "Strong React skills",
            "keySkills": ["React", "CSS"],
            "salaryRange": "4-6 LPA"
        })
    }

    #[tokio::test]
    async fn test_create_user_requires_session() {
        let users = Arc::new(MockUsers::default());
        let (status, _) = post(users.clone(), "/api/create-user", None, json!({})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(users.profiles.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_user_is_idempotent() {
        let users = Arc::new(MockUsers::default());
        for _ in 0..2 {
            let (status, body) = post(
                users.clone(),
                "/api/create-user",
                Some("valid:new_user"),
                json!({}),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "success": true }));
        }
        assert_eq!(users.profiles.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_job_persists_request_fields() {
        let users = Arc::new(MockUsers::with_profile("user_1", react_profile()));
        let (status, body) = post(
            users.clone(),
            "/api/saved-job",
            Some("valid:user_1"),
            save_body(),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body["id"].is_string());
        let saved = users.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1.job_title, "Frontend Developer");
        assert_eq!(saved[0].1.key_skills, vec!["React", "CSS"]);
    }

    #[tokio::test]
    async fn test_save_job_without_session_is_401() {
        let users = Arc::new(MockUsers::with_profile("user_1", react_profile()));
        let (status, _) = post(users.clone(), "/api/saved-job", None, save_body()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(users.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_job_with_blank_title_is_400() {
        let users = Arc::new(MockUsers::with_profile("user_1", react_profile()));
        let (status, _) = post(
            users,
            "/api/saved-job",
            Some("valid:user_1"),
            json!({ "jobTitle": "  " }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_job_storage_failure_is_500() {
        let users = Arc::new(MockUsers {
            fail_saves: true,
            ..MockUsers::with_profile("user_1", react_profile())
        });
        let (status, body) =
            post(users, "/api/saved-job", Some("valid:user_1"), save_body()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Could not save job" }));
    }
}
