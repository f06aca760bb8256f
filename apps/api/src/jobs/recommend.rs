//! Recommendation Engine.
//!
//! Two rankings over the same read-only catalog:
//! - `recommend_by_skills`: listings sharing at least one skill with the candidate,
//!   featured → verified → overlap count.
//! - `recommend_weighted`: composite 0–100 `match_score` from skills, experience
//!   proximity, company quality, recency and salary. Scores are written to
//!   clones; the catalog itself is never touched.

use std::cmp::Reverse;

use crate::jobs::search::skills_overlap;
use crate::models::job::{CandidateProfile, JobListing};

pub const SIMPLE_RESULT_CAP: usize = 25;
pub const WEIGHTED_RESULT_CAP: usize = 20;
/// Listings must score strictly above this to be recommended.
pub const MATCH_THRESHOLD: u8 = 30;

/// Point budget of each factor in the weighted ranking.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationWeights {
    pub skills: f64,
    pub experience: f64,
    pub experience_penalty_per_year: f64,
    pub verified: f64,
    pub featured: f64,
    pub top_rating: f64,
    pub good_rating: f64,
    pub recency: f64,
    pub recency_penalty_per_day: f64,
    pub high_salary: f64,
    pub mid_salary: f64,
}

pub const DEFAULT_WEIGHTS: RecommendationWeights = RecommendationWeights {
    skills: 40.0,
    experience: 25.0,
    experience_penalty_per_year: 5.0,
    verified: 10.0,
    featured: 8.0,
    top_rating: 10.0,
    good_rating: 5.0,
    recency: 10.0,
    recency_penalty_per_day: 0.5,
    high_salary: 5.0,
    mid_salary: 3.0,
};

const TOP_RATING_THRESHOLD: f32 = 4.5;
const GOOD_RATING_THRESHOLD: f32 = 4.0;
const HIGH_SALARY_LPA: u32 = 25;
const MID_SALARY_LPA: u32 = 15;

/// Per-factor contribution to a listing's match score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub company: f64,
    pub recency: f64,
    pub salary: f64,
}

impl MatchBreakdown {
    /// Rounded sum, clamped to 0–100.
    pub fn total(&self) -> u8 {
        let sum = self.skills + self.experience + self.company + self.recency + self.salary;
        sum.round().clamp(0.0, 100.0) as u8
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Simple skill-overlap ranking
// ────────────────────────────────────────────────────────────────────────────

pub fn recommend_by_skills(catalog: &[JobListing], skills: &[String]) -> Vec<JobListing> {
    let mut matched: Vec<(&JobListing, usize)> = catalog
        .iter()
        .map(|job| (job, matching_skill_count(job, skills)))
        .filter(|(_, overlap)| *overlap > 0)
        .collect();

    matched.sort_by_key(|(job, overlap)| (Reverse(job.featured), Reverse(job.verified), Reverse(*overlap)));

    matched
        .into_iter()
        .take(SIMPLE_RESULT_CAP)
        .map(|(job, _)| job.clone())
        .collect()
}

/// Number of listing skills that overlap any candidate skill.
pub fn matching_skill_count(job: &JobListing, skills: &[String]) -> usize {
    job.skills
        .iter()
        .filter(|job_skill| {
            skills
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .any(|s| skills_overlap(job_skill, s))
        })
        .count()
}

// ────────────────────────────────────────────────────────────────────────────
// Weighted multi-factor ranking
// ────────────────────────────────────────────────────────────────────────────

pub fn recommend_weighted(catalog: &[JobListing], profile: &CandidateProfile) -> Vec<JobListing> {
    recommend_weighted_with(catalog, profile, &DEFAULT_WEIGHTS)
}

pub fn recommend_weighted_with(
    catalog: &[JobListing],
    profile: &CandidateProfile,
    weights: &RecommendationWeights,
) -> Vec<JobListing> {
    let candidate_years = first_integer(&profile.experience);

    let mut scored: Vec<JobListing> = catalog
        .iter()
        .filter_map(|job| {
            let score = score_listing(job, &profile.skills, candidate_years, weights).total();
            (score > MATCH_THRESHOLD).then(|| JobListing {
                match_score: Some(score),
                ..job.clone()
            })
        })
        .collect();

    scored.sort_by_key(|job| Reverse(job.match_score));
    scored.truncate(WEIGHTED_RESULT_CAP);
    scored
}

pub fn score_listing(
    job: &JobListing,
    skills: &[String],
    candidate_years: u32,
    weights: &RecommendationWeights,
) -> MatchBreakdown {
    let skill_ratio = matching_skill_count(job, skills) as f64 / job.skills.len().max(1) as f64;

    let year_gap = f64::from(job.experience.min_years().abs_diff(candidate_years));
    let experience =
        (weights.experience - weights.experience_penalty_per_year * year_gap).max(0.0);

    let mut company = 0.0;
    if job.verified {
        company += weights.verified;
    }
    if job.featured {
        company += weights.featured;
    }
    if job.company_rating > TOP_RATING_THRESHOLD {
        company += weights.top_rating;
    } else if job.company_rating > GOOD_RATING_THRESHOLD {
        company += weights.good_rating;
    }

    let recency = (weights.recency
        - weights.recency_penalty_per_day * f64::from(job.posted_days_ago))
    .max(0.0);

    let salary = if job.salary.min_lpa > HIGH_SALARY_LPA {
        weights.high_salary
    } else if job.salary.min_lpa > MID_SALARY_LPA {
        weights.mid_salary
    } else {
        0.0
    };

    MatchBreakdown {
        skills: skill_ratio * weights.skills,
        experience,
        company,
        recency,
        salary,
    }
}

/// First run of ASCII digits in `text`; 0 when there is none or it overflows.
pub fn first_integer(text: &str) -> u32 {
    text.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}
