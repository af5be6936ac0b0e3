//! Axum route handler for report downloads.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::report::pdf::render_pdf;
use crate::report::{ReportFormat, ReportKind};

const DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub text: String,
}

/// POST /api/v1/reports/:kind/:format
///
/// Serializes review text as a downloadable `.txt` or `.pdf` attachment.
pub async fn handle_download_report(
    Path((kind, format)): Path<(ReportKind, ReportFormat)>,
    Json(request): Json<ReportRequest>,
) -> Result<Response, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let body = match format {
        ReportFormat::Txt => request.text.into_bytes(),
        ReportFormat::Pdf => {
            let generated_at = Local::now().format(DATE_FORMAT).to_string();
            render_pdf(kind, &request.text, &generated_at)?
        }
    };

    let file_name = kind.file_name(format);
    info!(file_name, bytes = body.len(), "Report generated");

    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ),
    ];

    Ok((headers, body).into_response())
}
