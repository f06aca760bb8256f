//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::extractors::{AppJson, AppQuery};
use crate::jobs::analytics::AnalyticsSummary;
use crate::jobs::salary::estimate_salary_from_labels;
use crate::jobs::search::{SearchFilters, SortBy};
use crate::models::job::{CandidateProfile, CompanyTier, JobListing, JobType, SalaryBand};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw query string. Values that do not parse are dropped, never rejected.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub remote: Option<String>,
    /// Comma-separated, e.g. `skills=React,Node.js`.
    pub skills: Option<String>,
    pub sort: Option<String>,
}

impl SearchParams {
    pub fn to_filters(&self) -> (SearchFilters, SortBy) {
        let job_type = self.job_type.as_deref().and_then(|raw| {
            let parsed = raw.parse::<JobType>().ok();
            if parsed.is_none() && !raw.trim().is_empty() {
                debug!(value = raw, "Ignoring malformed job type filter");
            }
            parsed
        });

        let remote = self.remote.as_deref().and_then(|raw| {
            match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Some(true),
                "false" | "0" | "no" => Some(false),
                "" => None,
                _ => {
                    debug!(value = raw, "Ignoring malformed remote filter");
                    None
                }
            }
        });

        let sort = self
            .sort
            .as_deref()
            .and_then(|raw| raw.parse::<SortBy>().ok())
            .unwrap_or_default();

        let skills = self
            .skills
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let filters = SearchFilters {
            location: self.location.clone(),
            job_type,
            experience: self.experience.clone(),
            remote,
            skills,
        };
        (filters, sort)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobListing>,
    pub count: usize,
}

impl From<Vec<JobListing>> for JobListResponse {
    fn from(jobs: Vec<JobListing>) -> Self {
        Self {
            count: jobs.len(),
            jobs,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SalaryParams {
    pub tier: CompanyTier,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SalaryEstimateResponse {
    pub tier: CompanyTier,
    pub experience: String,
    pub category: String,
    pub salary: SalaryBand,
    pub salary_range: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> Json<JobListResponse> {
    let (filters, sort) = params.to_filters();
    let query = params.q.unwrap_or_default();
    let jobs = state.jobs.search(&query, &filters, sort).await;
    Json(jobs.into())
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobListing>, AppError> {
    state
        .jobs
        .get_by_id(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// GET /api/v1/jobs/featured
pub async fn handle_featured(State(state): State<AppState>) -> Json<JobListResponse> {
    Json(state.jobs.featured().await.into())
}

/// GET /api/v1/jobs/urgent
pub async fn handle_urgent(State(state): State<AppState>) -> Json<JobListResponse> {
    Json(state.jobs.urgent().await.into())
}

/// GET /api/v1/companies/:name/jobs
pub async fn handle_company_jobs(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<JobListResponse> {
    Json(state.jobs.by_company(&name).await.into())
}

/// GET /api/v1/jobs/analytics
pub async fn handle_analytics(State(state): State<AppState>) -> Json<AnalyticsSummary> {
    Json(state.jobs.analytics())
}

/// POST /api/v1/jobs/recommendations
///
/// Skill-overlap ranking. `experience` is accepted but does not affect the order.
pub async fn handle_recommend(
    State(state): State<AppState>,
    AppJson(profile): AppJson<CandidateProfile>,
) -> Json<JobListResponse> {
    Json(state.jobs.recommend(&profile.skills).await.into())
}

/// POST /api/v1/jobs/recommendations/advanced
///
/// Weighted ranking; every returned listing carries `match_score`.
pub async fn handle_recommend_advanced(
    State(state): State<AppState>,
    AppJson(profile): AppJson<CandidateProfile>,
) -> Json<JobListResponse> {
    Json(state.jobs.recommend_advanced(&profile).await.into())
}

/// GET /api/v1/salary/estimate?tier=&experience=&category=
///
/// Unknown experience or category labels fall back to a neutral weight.
pub async fn handle_salary_estimate(
    AppQuery(params): AppQuery<SalaryParams>,
) -> Json<SalaryEstimateResponse> {
    let salary = estimate_salary_from_labels(params.tier, &params.experience, &params.category);
    Json(SalaryEstimateResponse {
        tier: params.tier,
        experience: params.experience,
        category: params.category,
        salary_range: salary.to_string(),
        salary,
    })
}
