use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; the catalog inside is read-only from then on.
    pub jobs: Arc<JobService>,
    pub config: Config,
}
