pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Headroom over the file limit for multipart framing and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route("/api/v1/jobs", get(jobs::handle_search))
        .route("/api/v1/jobs/featured", get(jobs::handle_featured))
        .route("/api/v1/jobs/urgent", get(jobs::handle_urgent))
        .route("/api/v1/jobs/analytics", get(jobs::handle_analytics))
        .route(
            "/api/v1/jobs/recommendations",
            post(jobs::handle_recommend),
        )
        .route(
            "/api/v1/jobs/recommendations/advanced",
            post(jobs::handle_recommend_advanced),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route(
            "/api/v1/companies/:name/jobs",
            get(jobs::handle_company_jobs),
        )
        .route("/api/v1/salary/estimate", get(jobs::handle_salary_estimate))
        // Resume API
        .route("/api/v1/resume/extract", post(resume::handle_extract))
        .route("/api/v1/resume/parse", post(resume::handle_parse))
        .route("/api/v1/resume/matches", post(resume::handle_matches))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{body::to_bytes, response::Response, Router};
    use serde::de::DeserializeOwned;

    use super::build_router;
    use crate::config::Config;
    use crate::jobs::{JobService, LatencyProfile};
    use crate::state::AppState;

    pub const TEST_SEED: u64 = 42;

    pub fn test_app() -> Router {
        test_app_with(Config::default())
    }

    pub fn test_app_with(config: Config) -> Router {
        let jobs = JobService::new(Some(TEST_SEED), LatencyProfile::Disabled);
        build_router(AppState {
            jobs: Arc::new(jobs),
            config,
        })
    }

    pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
