//! Multipart intake shared by every résumé-taking endpoint.
//!
//! Accepted fields:
//! - `resume`         : PDF file
//! - `resume_text`    : already-extracted résumé text (used when no file is sent)
//! - `job_description`: plain text
//! - `mode`           : `substring` (default) | `word_boundary`

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::MatchMode;
use crate::review::pdf::extract_pdf_text;

#[derive(Debug)]
pub struct ResumeFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl ResumeFile {
    fn is_pdf(&self) -> bool {
        let by_name = self
            .file_name
            .as_deref()
            .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false);
        let by_type = self.content_type.as_deref() == Some("application/pdf");
        by_name || by_type
    }
}

/// Raw multipart fields, before validation.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub resume_file: Option<ResumeFile>,
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
    pub mode: Option<String>,
}

/// Validated input for the match and review flows.
#[derive(Debug)]
pub struct ReviewInput {
    pub resume_text: String,
    pub job_description: String,
    pub mode: MatchMode,
}

/// Drains the multipart body into an `UploadForm`. Unknown fields are skipped.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                form.resume_file = Some(ResumeFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            "resume_text" => form.resume_text = Some(field.text().await.map_err(multipart_error)?),
            "job_description" => {
                form.job_description = Some(field.text().await.map_err(multipart_error)?)
            }
            "mode" => form.mode = Some(field.text().await.map_err(multipart_error)?),
            other => debug!("Ignoring unknown multipart field '{other}'"),
        }
    }

    Ok(form)
}

impl UploadForm {
    /// Résumé text from the uploaded PDF, or from `resume_text` when no file
    /// was sent. A PDF with no extractable text gives an empty string, which
    /// the matcher treats as a valid zero-match résumé.
    pub async fn resume_text(&mut self) -> Result<String, AppError> {
        if let Some(file) = self.resume_file.take() {
            if !file.is_pdf() {
                return Err(AppError::Validation(
                    "Only PDF files are allowed".to_string(),
                ));
            }
            if file.data.is_empty() {
                return Err(AppError::Validation("resume file is empty".to_string()));
            }
            return extract_pdf_text(file.data).await;
        }

        self.resume_text.take().ok_or_else(|| {
            AppError::Validation("Please upload the resume (PDF) or send resume_text".to_string())
        })
    }

    /// Validates the form for the match and review flows.
    pub async fn into_review_input(mut self) -> Result<ReviewInput, AppError> {
        let job_description = self
            .job_description
            .take()
            .filter(|jd| !jd.trim().is_empty())
            .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;

        let mode = parse_mode(self.mode.as_deref())?;
        let resume_text = self.resume_text().await?;

        Ok(ReviewInput {
            resume_text,
            job_description,
            mode,
        })
    }
}

fn parse_mode(raw: Option<&str>) -> Result<MatchMode, AppError> {
    match raw.map(str::trim) {
        None | Some("") | Some("substring") => Ok(MatchMode::Substring),
        Some("word_boundary") => Ok(MatchMode::WordBoundary),
        Some(other) => Err(AppError::Validation(format!(
            "Unknown mode '{other}', expected 'substring' or 'word_boundary'"
        ))),
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}
