//! PDF text extraction for uploaded résumés.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

/// Extracts plain text from an in-memory PDF.
///
/// `pdf-extract` is CPU-bound and can panic on malformed documents, so it runs
/// on the blocking pool; a panic surfaces as an unreadable-PDF error instead of
/// taking the worker down. A PDF without a text layer yields an empty string.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let size = data.len();
    let extracted = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| {
        warn!("PDF extraction aborted: {e}");
        AppError::UnprocessableEntity("Error reading PDF: extraction aborted".to_string())
    })?
    .map_err(|e| AppError::UnprocessableEntity(format!("Error reading PDF: {e}")))?;

    let text = tidy_extracted_text(&extracted);
    debug!(bytes = size, chars = text.chars().count(), "Extracted résumé text");
    Ok(text)
}

/// Strips trailing whitespace per line, drops runs of blank lines, trims the ends.
fn tidy_extracted_text(raw: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = false;
    for line in raw.lines().map(str::trim_end) {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(if blank { "" } else { line });
        previous_blank = blank;
    }
    lines.join("\n").trim().to_string()
}
