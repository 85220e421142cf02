//! Axum route handlers for study notes.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::generate_with_timeout;
use crate::notes::prompts::build_notes_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateNotesRequest {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateNotesResponse {
    pub notes: String,
}

/// POST /api/generate-notes
///
/// One generation call per request; the model's text is returned as-is.
pub async fn handle_generate_notes(
    State(state): State<AppState>,
    Json(request): Json<GenerateNotesRequest>,
) -> Result<Json<GenerateNotesResponse>, AppError> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return Err(AppError::Validation(
            "Please provide a topic in the request body.".to_string(),
        ));
    }

    let prompt = build_notes_prompt(topic);
    let notes = generate_with_timeout(state.llm.as_ref(), &prompt, state.generation_timeout)
        .await
        .map_err(|e| AppError::Llm(format!("notes generation failed: {e}")))?;

    info!("Generated {} bytes of notes for topic '{topic}'", notes.len());
    Ok(Json(GenerateNotesResponse { notes }))
}
