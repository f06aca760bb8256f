//! Relevance scorer for free-text search hits. Never stored on the listing.
//!
//! Per token: title > skills > company > description > location. Every term is
//! a non-negative addition, so more matching tokens never lowers a score.
//! Listing bonuses only reorder hits of equal standing: all of them together stay
//! below the gap between a title hit and a description or location hit.

use crate::models::job::JobListing;

pub const TITLE_WEIGHT: u32 = 50;
pub const SKILL_WEIGHT: u32 = 40;
pub const COMPANY_WEIGHT: u32 = 30;
pub const DESCRIPTION_WEIGHT: u32 = 15;
pub const LOCATION_WEIGHT: u32 = 10;

const FEATURED_BONUS: u32 = 5;
const URGENT_BONUS: u32 = 4;
const VERIFIED_BONUS: u32 = 3;
const TOP_RATED_BONUS: u32 = 2;
const MAX_BONUS: u32 = FEATURED_BONUS + URGENT_BONUS + VERIFIED_BONUS + TOP_RATED_BONUS;
const TOP_RATED_THRESHOLD: f32 = 4.5;

/// Lowercases `query`, splits on whitespace, drops tokens of one char or less.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Tokens are expected lowercase (see `tokenize`).
pub fn relevance_score(job: &JobListing, tokens: &[String]) -> u32 {
    let title = job.title.to_lowercase();
    let company = job.company.to_lowercase();
    let description = job.description.to_lowercase();
    let location = job.location.to_lowercase();
    let skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();

    let mut score = 0;
    for token in tokens {
        let token = token.as_str();
        if title.contains(token) {
            score += TITLE_WEIGHT;
        }
        if skills.iter().any(|s| s.contains(token)) {
            score += SKILL_WEIGHT;
        }
        if company.contains(token) {
            score += COMPANY_WEIGHT;
        }
        if description.contains(token) {
            score += DESCRIPTION_WEIGHT;
        }
        if location.contains(token) {
            score += LOCATION_WEIGHT;
        }
    }

    if job.featured {
        score += FEATURED_BONUS;
    }
    if job.urgent {
        score += URGENT_BONUS;
    }
    if job.verified {
        score += VERIFIED_BONUS;
    }
    if job.company_rating > TOP_RATED_THRESHOLD {
        score += TOP_RATED_BONUS;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::test_support::listing;

    #[test]
    fn test_tokenize_drops_short_tokens_and_lowercases() {
        assert_eq!(tokenize("  React a  NODE.js "), vec!["react", "node.js"]);
        assert!(tokenize("a b c").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_weight_classes_are_strictly_ordered() {
        assert!(TITLE_WEIGHT > SKILL_WEIGHT);
        assert!(SKILL_WEIGHT > COMPANY_WEIGHT);
        assert!(COMPANY_WEIGHT > DESCRIPTION_WEIGHT);
        assert!(DESCRIPTION_WEIGHT > LOCATION_WEIGHT);
    }

    #[test]
    fn test_bonuses_cannot_lift_a_body_hit_over_a_title_hit() {
        assert!(TITLE_WEIGHT > DESCRIPTION_WEIGHT + LOCATION_WEIGHT + MAX_BONUS);

        let tokens = tokenize("designer");
        let plain_title = listing("job-1", "UI/UX Designer", &["Figma"]);
        let mut boosted_body = listing("job-2", "Frontend Developer", &["React"]);
        boosted_body.description = "Work closely with designers.".to_string();
        boosted_body.featured = true;
        boosted_body.urgent = true;
        boosted_body.verified = true;
        boosted_body.company_rating = 4.9;

        assert_eq!(
            relevance_score(&boosted_body, &tokens),
            DESCRIPTION_WEIGHT + MAX_BONUS
        );
        assert!(relevance_score(&plain_title, &tokens) > relevance_score(&boosted_body, &tokens));
    }

    #[test]
    fn test_title_hit_outranks_description_hit() {
        let tokens = tokenize("kafka");
        let mut in_title = listing("job-1", "Kafka Engineer", &["Java"]);
        in_title.description = "Streams.".to_string();
        let mut in_description = listing("job-2", "Backend Engineer", &["Java"]);
        in_description.description = "You will run Kafka clusters.".to_string();

        assert_eq!(relevance_score(&in_title, &tokens), TITLE_WEIGHT);
        assert_eq!(relevance_score(&in_description, &tokens), DESCRIPTION_WEIGHT);
    }

    #[test]
    fn test_skill_match_is_case_insensitive_substring() {
        let job = listing("job-1", "Engineer", &["PostgreSQL"]);
        assert_eq!(relevance_score(&job, &tokenize("postgres")), SKILL_WEIGHT);
    }

    #[test]
    fn test_more_matching_tokens_never_lower_the_score() {
        let job = listing("job-1", "Senior Rust Engineer", &["Rust", "Tokio"]);
        let one = relevance_score(&job, &tokenize("rust"));
        let two = relevance_score(&job, &tokenize("rust tokio"));
        let with_miss = relevance_score(&job, &tokenize("rust tokio haskell"));
        assert!(two >= one);
        assert!(with_miss >= two);
    }

    #[test]
    fn test_quality_bonuses() {
        let mut job = listing("job-1", "Engineer", &[]);
        job.featured = true;
        job.urgent = true;
        job.verified = true;
        job.company_rating = 4.8;
        assert_eq!(relevance_score(&job, &[]), MAX_BONUS);

        job.company_rating = 4.5;
        assert_eq!(
            relevance_score(&job, &[]),
            FEATURED_BONUS + URGENT_BONUS + VERIFIED_BONUS
        );
    }
}
