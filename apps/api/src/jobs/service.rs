//! `JobService` owns the generated catalog and exposes the async job API.
//!
//! The catalog is built once in the constructor and only read afterwards, so the
//! service is shared as `Arc<JobService>` with no locking. Every async method
//! computes its result synchronously and then sleeps for a simulated network
//! latency. The jitter is drawn before the await, so no RNG is held across it.

use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::jobs::analytics::{compute_analytics, AnalyticsSummary};
use crate::jobs::catalog::generate_catalog;
use crate::jobs::recommend::{recommend_by_skills, recommend_weighted};
use crate::jobs::search::{search_sorted, SearchFilters, SortBy};
use crate::models::job::{CandidateProfile, JobListing};

const FEATURED_CAP: usize = 15;
const URGENT_CAP: usize = 12;
const COMPANY_CAP: usize = 25;

const SEARCH_LATENCY_MS: RangeInclusive<u64> = 400..=700;
const RECOMMEND_LATENCY_MS: u64 = 500;
const ADVANCED_LATENCY_MS: u64 = 600;
const LOOKUP_LATENCY_MS: u64 = 100;
const HIGHLIGHTS_LATENCY_MS: u64 = 200;
const COMPANY_LATENCY_MS: u64 = 250;

/// Whether async calls pause to emulate a remote job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyProfile {
    Simulated,
    Disabled,
}

impl LatencyProfile {
    fn fixed(self, ms: u64) -> Duration {
        match self {
            LatencyProfile::Simulated => Duration::from_millis(ms),
            LatencyProfile::Disabled => Duration::ZERO,
        }
    }

    fn jittered(self, range_ms: RangeInclusive<u64>) -> Duration {
        match self {
            LatencyProfile::Simulated => {
                Duration::from_millis(rand::thread_rng().gen_range(range_ms))
            }
            LatencyProfile::Disabled => Duration::ZERO,
        }
    }
}

pub struct JobService {
    catalog: Vec<JobListing>,
    latency: LatencyProfile,
}

impl JobService {
    /// Generates the catalog now. `seed` pins it; `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>, latency: LatencyProfile) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let today = Utc::now().date_naive();
        let catalog = generate_catalog(&mut rng, today);
        info!(
            listings = catalog.len(),
            seeded = seed.is_some(),
            "Job catalog generated"
        );
        Self::with_catalog(catalog, latency)
    }

    /// Wraps an existing catalog, assumed to already be in canonical order.
    pub fn with_catalog(catalog: Vec<JobListing>, latency: LatencyProfile) -> Self {
        Self { catalog, latency }
    }

    pub fn catalog(&self) -> &[JobListing] {
        &self.catalog
    }

    pub async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
        sort: SortBy,
    ) -> Vec<JobListing> {
        let results = search_sorted(&self.catalog, query, filters, sort);
        debug!(query, results = results.len(), ?sort, "Job search");
        self.pause(self.latency.jittered(SEARCH_LATENCY_MS)).await;
        results
    }

    pub async fn recommend(&self, skills: &[String]) -> Vec<JobListing> {
        let results = recommend_by_skills(&self.catalog, skills);
        self.pause(self.latency.fixed(RECOMMEND_LATENCY_MS)).await;
        results
    }

    pub async fn recommend_advanced(&self, profile: &CandidateProfile) -> Vec<JobListing> {
        let results = recommend_weighted(&self.catalog, profile);
        debug!(
            skills = profile.skills.len(),
            results = results.len(),
            "Advanced recommendations computed"
        );
        self.pause(self.latency.fixed(ADVANCED_LATENCY_MS)).await;
        results
    }

    pub async fn get_by_id(&self, id: &str) -> Option<JobListing> {
        let job = self.catalog.iter().find(|j| j.id == id).cloned();
        self.pause(self.latency.fixed(LOOKUP_LATENCY_MS)).await;
        job
    }

    pub async fn featured(&self) -> Vec<JobListing> {
        let jobs = self.take_where(|j| j.featured, FEATURED_CAP);
        self.pause(self.latency.fixed(HIGHLIGHTS_LATENCY_MS)).await;
        jobs
    }

    pub async fn urgent(&self) -> Vec<JobListing> {
        let jobs = self.take_where(|j| j.urgent, URGENT_CAP);
        self.pause(self.latency.fixed(HIGHLIGHTS_LATENCY_MS)).await;
        jobs
    }

    /// Case-insensitive substring match on the company name.
    pub async fn by_company(&self, name: &str) -> Vec<JobListing> {
        let needle = name.trim().to_lowercase();
        let jobs = self.take_where(|j| j.company.to_lowercase().contains(&needle), COMPANY_CAP);
        self.pause(self.latency.fixed(COMPANY_LATENCY_MS)).await;
        jobs
    }

    pub fn analytics(&self) -> AnalyticsSummary {
        compute_analytics(&self.catalog)
    }

    fn take_where(&self, pred: impl Fn(&JobListing) -> bool, cap: usize) -> Vec<JobListing> {
        self.catalog
            .iter()
            .filter(|j| pred(j))
            .take(cap)
            .cloned()
            .collect()
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
