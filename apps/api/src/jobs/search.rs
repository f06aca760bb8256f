//! Search & Filter Engine.
//!
//! 1. Free-text query: keep listings where any token is a substring of the
//!    searchable text, ordered by relevance (stable, so ties keep catalog order).
//! 2. Structured filters, AND-combined.
//! 3. Cap at `SEARCH_RESULT_CAP`, then apply the optional re-sort.

use std::cmp::Reverse;

use crate::jobs::relevance::{relevance_score, tokenize};
use crate::models::job::{JobListing, JobType};

pub const SEARCH_RESULT_CAP: usize = 60;

/// Structured search filters. `None` / empty means "not applied".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub experience: Option<String>,
    pub remote: Option<bool>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Relevance,
    Date,
    Salary,
    Company,
    Rating,
}

impl std::str::FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortBy::Relevance),
            "date" => Ok(SortBy::Date),
            "salary" => Ok(SortBy::Salary),
            "company" => Ok(SortBy::Company),
            "rating" => Ok(SortBy::Rating),
            _ => Err(()),
        }
    }
}

pub fn search(catalog: &[JobListing], query: &str, filters: &SearchFilters) -> Vec<JobListing> {
    let mut hits: Vec<&JobListing> = if query.trim().is_empty() {
        catalog.iter().collect()
    } else {
        let tokens = tokenize(query);
        let mut matched: Vec<&JobListing> = catalog
            .iter()
            .filter(|job| {
                let text = searchable_text(job);
                tokens.iter().any(|t| text.contains(t.as_str()))
            })
            .collect();
        matched.sort_by_cached_key(|job| Reverse(relevance_score(job, &tokens)));
        matched
    };

    hits.retain(|job| matches_filters(job, filters));
    hits.into_iter().take(SEARCH_RESULT_CAP).cloned().collect()
}

/// `search` followed by a stable re-sort of the capped page.
pub fn search_sorted(
    catalog: &[JobListing],
    query: &str,
    filters: &SearchFilters,
    sort: SortBy,
) -> Vec<JobListing> {
    let mut results = search(catalog, query, filters);
    match sort {
        SortBy::Relevance => {}
        SortBy::Date => results.sort_by(|a, b| b.posted_date.cmp(&a.posted_date)),
        SortBy::Salary => results.sort_by(|a, b| b.salary.min_lpa.cmp(&a.salary.min_lpa)),
        SortBy::Company => results.sort_by(|a, b| a.company.cmp(&b.company)),
        SortBy::Rating => results.sort_by(|a, b| b.company_rating.total_cmp(&a.company_rating)),
    }
    results
}

fn searchable_text(job: &JobListing) -> String {
    format!(
        "{} {} {} {} {}",
        job.title,
        job.company,
        job.description,
        job.skills.join(" "),
        job.location
    )
    .to_lowercase()
}

pub fn matches_filters(job: &JobListing, filters: &SearchFilters) -> bool {
    if let Some(location) = non_blank(&filters.location) {
        if !contains_ci(&job.location, location) {
            return false;
        }
    }
    if let Some(job_type) = filters.job_type {
        if job.job_type != job_type {
            return false;
        }
    }
    if let Some(experience) = non_blank(&filters.experience) {
        if !contains_ci(job.experience.label(), experience) {
            return false;
        }
    }
    if let Some(remote) = filters.remote {
        if job.remote != remote {
            return false;
        }
    }
    let wanted: Vec<&str> = filters
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !wanted.is_empty() && !wanted.iter().any(|w| job.skills.iter().any(|s| skills_overlap(s, w))) {
        return false;
    }
    true
}

/// Case-insensitive substring match in either direction.
pub fn skills_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
