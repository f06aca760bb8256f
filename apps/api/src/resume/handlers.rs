//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::models::job::{CandidateProfile, JobListing};
use crate::models::resume::ResumeData;
use crate::resume::extract::{classify_upload, extract_text};
use crate::resume::parse_resume_text;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub text: String,
    pub file_name: String,
    pub file_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeMatchesResponse {
    pub resume: ResumeData,
    pub profile: CandidateProfile,
    pub jobs: Vec<JobListing>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/extract
///
/// Multipart upload with a single `file` field (PDF or plain text).
pub async fn handle_extract(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, AppError> {
    let mut multipart = multipart?;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let kind = classify_upload(field.content_type(), &file_name)?;
        let bytes = field.bytes().await?;

        let limit = state.config.max_upload_bytes;
        if bytes.len() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "File is {} bytes; the limit is {limit}",
                bytes.len()
            )));
        }

        let file_size = bytes.len();
        let text = extract_text(kind, bytes.to_vec()).await?;
        info!(file_name = %file_name, file_size, chars = text.len(), ?kind, "Resume text extracted");

        return Ok(Json(ExtractResponse {
            success: true,
            text,
            file_name,
            file_size,
        }));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

/// POST /api/v1/resume/parse
pub async fn handle_parse(
    AppJson(req): AppJson<ResumeTextRequest>,
) -> Result<Json<ResumeData>, AppError> {
    let text = require_text(&req.text)?;
    Ok(Json(parse_resume_text(text)))
}

/// POST /api/v1/resume/matches
///
/// Parses the resume, derives a candidate profile and runs the weighted recommender.
pub async fn handle_matches(
    State(state): State<AppState>,
    AppJson(req): AppJson<ResumeTextRequest>,
) -> Result<Json<ResumeMatchesResponse>, AppError> {
    let text = require_text(&req.text)?;
    let resume = parse_resume_text(text);
    let profile = resume.candidate_profile();
    let jobs = state.jobs.recommend_advanced(&profile).await;

    info!(
        skills = profile.skills.len(),
        matches = jobs.len(),
        "Resume matched against catalog"
    );

    Ok(Json(ResumeMatchesResponse {
        count: jobs.len(),
        resume,
        profile,
        jobs,
    }))
}

fn require_text(text: &str) -> Result<&str, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Resume text must not be empty".into()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::routes::test_support::{read_json, test_app, test_app_with};

    const BOUNDARY: &str = "X-CAREERS-BOUNDARY";

    fn multipart_request(file_name: &str, content_type: &str, content: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/v1/resume/extract")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extract_plain_text_upload() {
        let response = test_app()
            .oneshot(multipart_request("cv.txt", "text/plain", b"Jane Doe\nPython\n"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: ExtractResponse = read_json(response).await;
        assert!(body.success);
        assert_eq!(body.text, "Jane Doe\nPython");
        assert_eq!(body.file_name, "cv.txt");
        assert_eq!(body.file_size, 16);
    }

    #[tokio::test]
    async fn test_extract_rejects_unsupported_type() {
        let response = test_app()
            .oneshot(multipart_request("photo.png", "image/png", b"\x89PNG"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_extract_rejects_oversized_file() {
        let config = Config {
            max_upload_bytes: 8,
            ..Config::default()
        };
        let response = test_app_with(config)
            .oneshot(multipart_request("cv.txt", "text/plain", b"way more than eight bytes"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_extract_unreadable_pdf() {
        let response = test_app()
            .oneshot(multipart_request("cv.pdf", "application/pdf", b"not a pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_parse_endpoint() {
        let response = test_app()
            .oneshot(json_request(
                "/api/v1/resume/parse",
                r#"{"text":"Jane Doe\njane@example.com\nSkills: Python, Docker"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let resume: ResumeData = read_json(response).await;
        assert_eq!(resume.personal_info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.skills, vec!["Python", "Docker"]);
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let app = test_app();
        for uri in ["/api/v1/resume/parse", "/api/v1/resume/matches"] {
            let response = app
                .clone()
                .oneshot(json_request(uri, r#"{"text":"   "}"#))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_matches_endpoint_scores_jobs() {
        let text = "Jane Doe\nBackend Engineer - Acme Corp - 3 years\nSkills: Python, Docker, AWS";
        let body = serde_json::json!({ "text": text }).to_string();
        let response = test_app()
            .oneshot(json_request("/api/v1/resume/matches", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let matches: ResumeMatchesResponse = read_json(response).await;
        assert_eq!(matches.profile.experience, "3 years");
        assert_eq!(matches.profile.skills, vec!["Python", "AWS", "Docker"]);
        assert_eq!(matches.count, matches.jobs.len());
        assert!(matches.jobs.iter().all(|j| j.match_score.is_some()));
    }

    #[tokio::test]
    async fn test_rejections_use_error_envelope() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/v1/resume/parse")
                    .header("content-type", "text/plain")
                    .body(Body::from("Jane Doe"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let response = app
            .oneshot(
                Request::post("/api/v1/resume/extract")
                    .body(Body::from("no multipart here"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
