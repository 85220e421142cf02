//! User persistence: profile reads, user bootstrap and saved jobs.
//!
//! Handlers depend on `UserRepository`; `PgUserRepository` is the production backend.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::auth::UserIdentity;
use crate::errors::AppError;
use crate::models::saved_job::{NewSavedJob, SavedJobRow};
use crate::models::user::Profile;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Loads the recommendation profile for an identity. `None` if the user has no row.
    async fn find_profile(&self, identity: &UserIdentity) -> Result<Option<Profile>, AppError>;

    /// Creates the user row if missing. Returns `true` when a row was inserted.
    async fn ensure_user(&self, identity: &UserIdentity) -> Result<bool, AppError>;

    /// Persists a saved job. Fails with `ProfileNotFound` if the user has no row.
    async fn save_job(
        &self,
        identity: &UserIdentity,
        job: &NewSavedJob,
    ) -> Result<SavedJobRow, AppError>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_profile(&self, identity: &UserIdentity) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT u.skills, u.industry, u.experience,
                   (SELECT a.quiz_score
                      FROM assessments a
                     WHERE a.user_id = u.id
                     ORDER BY a.created_at DESC
                     LIMIT 1) AS latest_score
              FROM users u
             WHERE u.clerk_user_id = $1
            "#,
        )
        .bind(&identity.user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn ensure_user(&self, identity: &UserIdentity) -> Result<bool, AppError> {
        let result = sqlx::query(
            "INSERT INTO users (clerk_user_id) VALUES ($1) ON CONFLICT (clerk_user_id) DO NOTHING",
        )
        .bind(&identity.user_id)
        .execute(&self.pool)
        .await?;

        let created = result.rows_affected() == 1;
        if created {
            info!("Created user row for {}", identity.user_id);
        }
        Ok(created)
    }

    async fn save_job(
        &self,
        identity: &UserIdentity,
        job: &NewSavedJob,
    ) -> Result<SavedJobRow, AppError> {
        let row = sqlx::query_as::<_, SavedJobRow>(
            r#"
            INSERT INTO saved_jobs (user_id, job_title, reason, key_skills, salary_range)
            SELECT id, $2, $3, $4, $5
              FROM users
             WHERE clerk_user_id = $1
            RETURNING *
            "#,
        )
        .bind(&identity.user_id)
        .bind(&job.job_title)
        .bind(&job.reason)
        .bind(&job.key_skills)
        .bind(&job.salary_range)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(e.to_string()))?;

        row.ok_or(AppError::ProfileNotFound)
    }
}
