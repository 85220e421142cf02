//! Shared test doubles for handler and pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::auth::{IdentityResolver, UserIdentity};
use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::saved_job::{NewSavedJob, SavedJobRow};
use crate::models::user::Profile;
use crate::state::AppState;
use crate::users::repository::UserRepository;

/// In-memory repository keyed by provider user id.
#[derive(Default)]
pub struct MockUsers {
    pub profiles: Mutex<Vec<(String, Profile)>>,
    pub saved: Mutex<Vec<(String, NewSavedJob)>>,
    pub fail_saves: bool,
}

impl MockUsers {
    pub fn with_profile(user_id: &str, profile: Profile) -> Self {
        let users = Self::default();
        users
            .profiles
            .lock()
            .unwrap()
            .push((user_id.to_string(), profile));
        users
    }
}

#[async_trait]
impl UserRepository for MockUsers {
    async fn find_profile(&self, identity: &UserIdentity) -> Result<Option<Profile>, AppError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| *id == identity.user_id)
            .map(|(_, p)| p.clone()))
    }

    async fn ensure_user(&self, identity: &UserIdentity) -> Result<bool, AppError> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|(id, _)| *id == identity.user_id) {
            return Ok(false);
        }
        profiles.push((identity.user_id.clone(), Profile::default()));
        Ok(true)
    }

    async fn save_job(
        &self,
        identity: &UserIdentity,
        job: &NewSavedJob,
    ) -> Result<SavedJobRow, AppError> {
        if self.fail_saves {
            return Err(AppError::Persistence("connection reset".into()));
        }
        if self.find_profile(identity).await?.is_none() {
            return Err(AppError::ProfileNotFound);
        }
        self.saved
            .lock()
            .unwrap()
            .push((identity.user_id.clone(), job.clone()));
        Ok(SavedJobRow {
            id: uuid::Uuid::new_v4(),
            user_id: uuid::Uuid::new_v4(),
            job_title: job.job_title.clone(),
            reason: job.reason.clone(),
            key_skills: job.key_skills.clone(),
            salary_range: job.salary_range.clone(),
            created_at: chrono::Utc::now(),
        })
    }
}

/// Generator returning a canned response and counting calls.
pub struct CannedGenerator {
    pub response: Result<String, u16>,
    pub calls: AtomicUsize,
    pub last_prompt: Mutex<Option<String>>,
}

impl CannedGenerator {
    pub fn ok(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            response: Err(status),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(LlmError::Api {
                status: *status,
                message: "upstream unavailable".into(),
            }),
        }
    }
}

pub fn react_profile() -> Profile {
    Profile {
        skills: vec!["React".into()],
        industry: Some("IT".into()),
        experience: Some(1),
        latest_score: None,
    }
}

pub fn identity(user_id: &str) -> UserIdentity {
    UserIdentity {
        user_id: user_id.to_string(),
    }
}


/// Accepts tokens of the form `valid:<user_id>`.
pub struct PrefixIdentity;

impl IdentityResolver for PrefixIdentity {
    fn resolve(&self, token: &str) -> Option<UserIdentity> {
        token.strip_prefix("valid:").map(identity)
    }
}

pub fn test_state(users: Arc<MockUsers>, llm: Arc<CannedGenerator>) -> AppState {
    AppState {
        users,
        llm,
        identity: Arc::new(PrefixIdentity),
        generation_timeout: Duration::from_secs(30),
    }
}
