pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::notes::handlers::handle_generate_notes;
use crate::pdf::handlers::handle_download_pdf;
use crate::recommendations::handlers::handle_recommend_jobs;
use crate::state::AppState;
use crate::users::handlers::{handle_create_user, handle_save_job};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job portal
        .route("/api/job", get(handle_recommend_jobs))
        .route("/api/saved-job", post(handle_save_job))
        // Interview notes
        .route("/api/generate-notes", post(handle_generate_notes))
        .route("/api/download-pdf", post(handle_download_pdf))
        // Account bootstrap
        .route("/api/create-user", post(handle_create_user))
        .with_state(state)
}
