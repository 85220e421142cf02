use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedJobRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_title: String,
    pub reason: String,
    pub key_skills: Vec<String>,
    pub salary_range: String,
    pub created_at: DateTime<Utc>,
}

/// Wire shape of a save request, as sent by the job portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedJob {
    pub job_title: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub key_skills: Vec<String>,
    #[serde(default)]
    pub salary_range: String,
}
