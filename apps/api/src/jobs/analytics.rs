use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::job::{CompanyTier, JobListing};

const TOP_SKILLS: usize = 15;
const TOP_COMPANIES: usize = 15;
const TOP_LOCATIONS: usize = 12;
const AVERAGE_SALARY: &str = "₹18-45L";
const GROWTH_RATE: &str = "+28%";
/// Share of the catalog reported as posted this week.
const NEW_THIS_WEEK_FRACTION: f64 = 0.15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

/// Dashboard view over the catalog. Counts reflect the catalog at computation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_jobs: usize,
    pub featured_jobs: usize,
    pub urgent_jobs: usize,
    pub verified_jobs: usize,
    pub remote_jobs: usize,
    pub top_skills: Vec<CountEntry>,
    pub top_companies: Vec<CountEntry>,
    pub top_locations: Vec<CountEntry>,
    pub average_salary: String,
    pub growth_rate: String,
    pub new_jobs_this_week: usize,
    pub flagship_jobs: usize,
    pub unicorn_jobs: usize,
}

pub fn compute_analytics(catalog: &[JobListing]) -> AnalyticsSummary {
    let total_jobs = catalog.len();
    let count = |pred: fn(&JobListing) -> bool| catalog.iter().filter(|j| pred(j)).count();

    AnalyticsSummary {
        total_jobs,
        featured_jobs: count(|j| j.featured),
        urgent_jobs: count(|j| j.urgent),
        verified_jobs: count(|j| j.verified),
        remote_jobs: count(|j| j.remote),
        top_skills: top_n(
            catalog.iter().flat_map(|j| j.skills.iter().map(String::as_str)),
            TOP_SKILLS,
        ),
        top_companies: top_n(catalog.iter().map(|j| j.company.as_str()), TOP_COMPANIES),
        top_locations: top_n(catalog.iter().map(|j| j.location.as_str()), TOP_LOCATIONS),
        average_salary: AVERAGE_SALARY.to_string(),
        growth_rate: GROWTH_RATE.to_string(),
        new_jobs_this_week: (total_jobs as f64 * NEW_THIS_WEEK_FRACTION).floor() as usize,
        flagship_jobs: count(|j| j.company_tier == CompanyTier::Flagship),
        unicorn_jobs: count(|j| j.funding_stage == "Unicorn"),
    }
}

/// Most frequent values, ties broken by first appearance.
fn top_n<'a>(values: impl Iterator<Item = &'a str>, n: usize) -> Vec<CountEntry> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<CountEntry> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(value, entries.len());
                entries.push(CountEntry {
                    name: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // stable: equal counts stay in first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::jobs::catalog::generate_catalog;
    use crate::jobs::test_support::listing;

    #[test]
    fn test_counts_are_consistent_with_catalog() {
        let catalog = generate_catalog(
            &mut StdRng::seed_from_u64(42),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        );
        let summary = compute_analytics(&catalog);

        assert_eq!(summary.total_jobs, 825);
        assert_eq!(summary.featured_jobs, catalog.iter().filter(|j| j.featured).count());
        assert_eq!(summary.remote_jobs, catalog.iter().filter(|j| j.remote).count());
        assert_eq!(summary.verified_jobs, (5 * 4 + 7 * 3) * 15);
        assert_eq!(summary.flagship_jobs, 5 * 4 * 15);
        assert_eq!(summary.new_jobs_this_week, 123);
        assert_eq!(summary.top_skills.len(), 15);
        assert_eq!(summary.top_companies.len(), 15);
        assert_eq!(summary.top_locations.len(), 12);
        assert_eq!(summary.top_companies[0].count, 60);
    }

    #[test]
    fn test_top_n_orders_by_count_then_first_seen() {
        let values = ["b", "a", "c", "a", "c", "d"];
        let top = top_n(values.into_iter(), 3);
        let names: Vec<&str> = top.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "b"]);
        assert_eq!(top[0].count, 2);
    }

    #[test]
    fn test_empty_catalog() {
        let summary = compute_analytics(&[]);
        assert_eq!(summary.total_jobs, 0);
        assert_eq!(summary.new_jobs_this_week, 0);
        assert!(summary.top_skills.is_empty());
        assert_eq!(summary.average_salary, "₹18-45L");
    }

    #[test]
    fn test_skill_frequency() {
        let catalog = vec![
            listing("job-1", "A", &["Rust", "SQL"]),
            listing("job-2", "B", &["SQL"]),
        ];
        let summary = compute_analytics(&catalog);
        assert_eq!(
            summary.top_skills[0],
            CountEntry {
                name: "SQL".to_string(),
                count: 2
            }
        );
    }
}
