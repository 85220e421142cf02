use std::sync::Arc;
use std::time::Duration;

use crate::auth::IdentityResolver;
use crate::llm_client::TextGenerator;
use crate::users::repository::UserRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub llm: Arc<dyn TextGenerator>,
    pub identity: Arc<dyn IdentityResolver>,
    /// Upper bound on a single generation call, including the HTTP round trip.
    pub generation_timeout: Duration,
}
