//! Axum route handlers for the review and match flows.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{build_prompt, MATCH_INSTRUCTION, REVIEW_INSTRUCTION};
use crate::matching::{self, MatchBand, MatchMode};
use crate::report::ReportKind;
use crate::review::upload::{read_upload, ReviewInput};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub resume_text: String,
    pub char_count: usize,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub match_percentage: f64,
    pub band: MatchBand,
    pub mode: MatchMode,
    pub keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub highlighted_resume: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: String,
    /// Which report to request when downloading this text
    pub report_kind: ReportKind,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/extract
///
/// Returns the plain text extracted from an uploaded résumé PDF, for preview.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut form = read_upload(multipart).await?;
    let resume_text = form.resume_text().await?;

    Ok(Json(ExtractResponse {
        char_count: resume_text.chars().count(),
        resume_text,
    }))
}

/// POST /api/v1/match
///
/// Deterministic keyword match: percentage, matched/missing keywords and the
/// résumé with matched keywords highlighted. No LLM call.
pub async fn handle_match(multipart: Multipart) -> Result<Json<MatchResponse>, AppError> {
    let input = read_upload(multipart).await?.into_review_input().await?;
    Ok(Json(build_match_response(&input)))
}

/// POST /api/v1/review
///
/// Free-form AI review of the résumé against the job description.
pub async fn handle_review(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ReviewResponse>, AppError> {
    let input = read_upload(multipart).await?.into_review_input().await?;
    run_review(&state, &input, ReportKind::Review).await.map(Json)
}

/// POST /api/v1/match/analysis
///
/// ATS-style AI analysis: missing keywords and concrete improvements.
pub async fn handle_match_analysis(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ReviewResponse>, AppError> {
    let input = read_upload(multipart).await?.into_review_input().await?;
    run_review(&state, &input, ReportKind::Match).await.map(Json)
}

// ────────────────────────────────────────────────────────────────────────────
// Flow helpers
// ────────────────────────────────────────────────────────────────────────────

fn build_match_response(input: &ReviewInput) -> MatchResponse {
    let keywords = matching::extract_keywords_with(&input.job_description, input.mode);
    let result = matching::compute_match_with(&input.resume_text, &input.job_description, input.mode);
    let highlighted_resume = matching::highlight(&input.resume_text, &result.matched_keywords);

    let missing_keywords = keywords
        .difference(&result.matched_keywords)
        .cloned()
        .collect();

    info!(
        percentage = result.percentage,
        matched = result.matched_keywords.len(),
        total = keywords.len(),
        "Résumé match computed"
    );

    MatchResponse {
        match_percentage: result.percentage,
        band: MatchBand::from_percentage(result.percentage),
        mode: input.mode,
        keywords: keywords.into_iter().collect(),
        matched_keywords: result.matched_keywords.into_iter().collect(),
        missing_keywords,
        highlighted_resume,
    }
}

async fn run_review(
    state: &AppState,
    input: &ReviewInput,
    kind: ReportKind,
) -> Result<ReviewResponse, AppError> {
    let instruction = match kind {
        ReportKind::Review => REVIEW_INSTRUCTION,
        ReportKind::Match => MATCH_INSTRUCTION,
    };
    let prompt = build_prompt(instruction, &input.resume_text, &input.job_description);

    let review = state
        .reviewer
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("{kind:?} generation failed: {e}")))?;

    info!(?kind, chars = review.len(), "AI review generated");

    Ok(ReviewResponse {
        review,
        report_kind: kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(resume: &str, jd: &str, mode: MatchMode) -> ReviewInput {
        ReviewInput {
            resume_text: resume.to_string(),
            job_description: jd.to_string(),
            mode,
        }
    }

    #[test]
    fn test_match_response_lists_are_sorted_and_disjoint() {
        let response = build_match_response(&input(
            "Docker and Python on AWS",
            "Python, Docker, Kubernetes, AWS",
            MatchMode::Substring,
        ));
        assert_eq!(response.keywords, vec!["aws", "docker", "kubernetes", "python"]);
        assert_eq!(response.matched_keywords, vec!["aws", "docker", "python"]);
        assert_eq!(response.missing_keywords, vec!["kubernetes"]);
        assert_eq!(response.match_percentage, 75.0);
        assert_eq!(response.band, MatchBand::Strong);
        assert_eq!(
            response.highlighted_resume,
            "**Docker** and **Python** on **AWS**"
        );
    }

    #[test]
    fn test_match_response_empty_resume() {
        let response = build_match_response(&input("", "Python and SQL", MatchMode::Substring));
        assert_eq!(response.match_percentage, 0.0);
        assert_eq!(response.band, MatchBand::Weak);
        assert_eq!(response.missing_keywords, vec!["python", "sql"]);
        assert_eq!(response.highlighted_resume, "");
    }

    #[test]
    fn test_match_response_reports_mode() {
        let response = build_match_response(&input(
            "MySQL admin",
            "SQL required",
            MatchMode::WordBoundary,
        ));
        assert_eq!(response.mode, MatchMode::WordBoundary);
        assert_eq!(response.match_percentage, 0.0);
    }
}
