pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::report::handlers as report_handlers;
use crate::review::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé intake
        .route("/api/v1/resumes/extract", post(handlers::handle_extract))
        // Match flow
        .route("/api/v1/match", post(handlers::handle_match))
        .route(
            "/api/v1/match/analysis",
            post(handlers::handle_match_analysis),
        )
        // Review flow
        .route("/api/v1/review", post(handlers::handle_review))
        // Report downloads
        .route(
            "/api/v1/reports/:kind/:format",
            post(report_handlers::handle_download_report),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::prompts::{MATCH_INSTRUCTION, REVIEW_INSTRUCTION};
    use crate::llm_client::{LlmError, ReviewGenerator};

    const BOUNDARY: &str = "reviewer-test-boundary";

    /// Returns a fixed reply and remembers the last prompt it was given.
    #[derive(Default)]
    struct CannedReviewer {
        fail: bool,
        last_prompt: Mutex<Option<String>>,
    }

    #[async_trait]
    impl ReviewGenerator for CannedReviewer {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            if let Ok(mut slot) = self.last_prompt.lock() {
                *slot = Some(prompt.to_string());
            }
            if self.fail {
                Err(LlmError::EmptyContent)
            } else {
                Ok("Strengths: solid SQL.\nImprove: add metrics.".to_string())
            }
        }
    }

    fn test_config(max_upload_bytes: usize) -> Config {
        Config {
            google_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            max_upload_bytes,
            llm_timeout_secs: 5,
        }
    }

    fn app_with(reviewer: Arc<CannedReviewer>, max_upload_bytes: usize) -> Router {
        build_router(AppState {
            config: test_config(max_upload_bytes),
            reviewer,
        })
    }

    fn app() -> Router {
        app_with(Arc::new(CannedReviewer::default()), 1024 * 1024)
    }

    enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, &'a [u8]),
    }

    fn multipart_request(uri: &str, parts: &[Part]) -> Request<Body> {
        let mut body: Vec<u8> = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File(name, file_name, data) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                             Content-Type: application/pdf\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(data);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_match_with_resume_text() {
        let request = multipart_request(
            "/api/v1/match",
            &[
                Part::Text(
                    "resume_text",
                    "Experienced Python engineer, worked in SQL databases, strong collaboration skills",
                ),
                Part::Text(
                    "job_description",
                    "Looking for a Python developer with SQL and teamwork skills",
                ),
            ],
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["match_percentage"], 100.0);
        assert_eq!(body["band"], "strong");
        assert_eq!(body["mode"], "substring");
        assert_eq!(
            body["matched_keywords"],
            serde_json::json!(["python", "sql", "teamwork"])
        );
        assert_eq!(body["missing_keywords"], serde_json::json!([]));
        let highlighted = body["highlighted_resume"].as_str().unwrap();
        assert!(highlighted.contains("**Python**"));
        assert!(highlighted.contains("**SQL**"));
    }

    #[tokio::test]
    async fn test_match_word_boundary_mode() {
        let request = multipart_request(
            "/api/v1/match",
            &[
                Part::Text("resume_text", "MySQL administrator"),
                Part::Text("job_description", "SQL required"),
                Part::Text("mode", "word_boundary"),
            ],
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["mode"], "word_boundary");
        assert_eq!(body["match_percentage"], 0.0);
        assert_eq!(body["band"], "weak");
    }

    #[tokio::test]
    async fn test_match_without_job_description_is_400() {
        let request = multipart_request(
            "/api/v1/match",
            &[Part::Text("resume_text", "Python developer")],
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_with_unreadable_pdf_is_422() {
        let request = multipart_request(
            "/api/v1/match",
            &[
                Part::File("resume", "cv.pdf", b"this is not a pdf"),
                Part::Text("job_description", "Python"),
            ],
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_extract_passes_resume_text_through() {
        let request = multipart_request(
            "/api/v1/resumes/extract",
            &[Part::Text("resume_text", "Jane Doe")],
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["resume_text"], "Jane Doe");
        assert_eq!(body["char_count"], 8);
    }

    #[tokio::test]
    async fn test_review_sends_review_prompt() {
        let reviewer = Arc::new(CannedReviewer::default());
        let request = multipart_request(
            "/api/v1/review",
            &[
                Part::Text("resume_text", "Python developer"),
                Part::Text("job_description", "Backend role"),
            ],
        );
        let response = app_with(reviewer.clone(), 1024 * 1024)
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["report_kind"], "review");
        assert!(body["review"].as_str().unwrap().starts_with("Strengths"));

        let prompt = reviewer.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.starts_with(REVIEW_INSTRUCTION));
        assert!(prompt.contains("Resume Content:\nPython developer"));
        assert!(prompt.ends_with("Additional Context:\nBackend role"));
    }

    #[tokio::test]
    async fn test_match_analysis_sends_match_prompt() {
        let reviewer = Arc::new(CannedReviewer::default());
        let request = multipart_request(
            "/api/v1/match/analysis",
            &[
                Part::Text("resume_text", "Python developer"),
                Part::Text("job_description", "Backend role"),
            ],
        );
        let response = app_with(reviewer.clone(), 1024 * 1024)
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["report_kind"], "match");

        let prompt = reviewer.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.starts_with(MATCH_INSTRUCTION));
    }

    #[tokio::test]
    async fn test_review_llm_failure_is_502() {
        let reviewer = Arc::new(CannedReviewer {
            fail: true,
            ..Default::default()
        });
        let request = multipart_request(
            "/api/v1/review",
            &[
                Part::Text("resume_text", "Python developer"),
                Part::Text("job_description", "Backend role"),
            ],
        );
        let response = app_with(reviewer, 1024 * 1024)
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_oversized_upload_is_413() {
        let big = "x".repeat(4096);
        let request = multipart_request(
            "/api/v1/match",
            &[
                Part::Text("resume_text", &big),
                Part::Text("job_description", "Python"),
            ],
        );
        let response = app_with(Arc::new(CannedReviewer::default()), 512)
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_text_report_download() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/reports/review/txt",
                r#"{"text": "Great resume."}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Resume_Review.txt\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Great resume.");
    }

    #[tokio::test]
    async fn test_pdf_report_download() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/reports/match/pdf",
                r#"{"text": "Missing keywords: Docker"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Resume_Match_Report.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_empty_report_text_is_400() {
        let response = app()
            .oneshot(json_request("/api/v1/reports/review/pdf", r#"{"text": "  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_report_format_is_rejected() {
        let response = app()
            .oneshot(json_request("/api/v1/reports/review/docx", r#"{"text": "x"}"#))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
