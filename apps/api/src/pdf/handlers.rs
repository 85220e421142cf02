//! Axum route handler for notes PDF export.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::pdf::render::{render_notes_pdf, A4_NOTES_LAYOUT, DEFAULT_TITLE};

#[derive(Debug, Deserialize)]
pub struct DownloadPdfRequest {
    pub title: Option<String>,
    pub notes: Option<String>,
}

/// POST /api/download-pdf
///
/// Renders the supplied notes to an A4 PDF and returns it as an attachment.
pub async fn handle_download_pdf(
    Json(request): Json<DownloadPdfRequest>,
) -> Result<Response, AppError> {
    let notes = request
        .notes
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Notes content required".to_string()))?;
    let title = request
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let pdf = {
        let title = title.clone();
        tokio::task::spawn_blocking(move || render_notes_pdf(&title, &notes, &A4_NOTES_LAYOUT))
            .await
            .map_err(|e| AppError::Internal(e.into()))?
            .map_err(|e| AppError::Pdf(e.to_string()))?
    };
    info!("Rendered notes PDF '{title}' ({} bytes)", pdf.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.pdf\"", attachment_name(&title)),
            ),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}

/// Header-safe file stem: ASCII only, no quotes or separators.
fn attachment_name(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' | ';' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}
