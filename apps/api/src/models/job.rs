use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment type of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl FromStr for JobType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "internship" => Ok(JobType::Internship),
            _ => Err(()),
        }
    }
}

/// Job board a listing was (nominally) sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    Linkedin,
    Indeed,
    Glassdoor,
    Naukri,
    Angellist,
}

/// Company-quality classification. Drives salary base and verification.
///
/// Variants are declared lowest tier first so the derived `Ord` follows tier rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyTier {
    Service,
    Startup,
    Unicorn,
    Flagship,
}

impl CompanyTier {
    /// Flagship and unicorn companies are verified employers.
    pub fn is_verified(self) -> bool {
        matches!(self, CompanyTier::Flagship | CompanyTier::Unicorn)
    }
}

/// Functional category of a role; weights the salary estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Engineering,
    Data,
    Product,
    Design,
    Marketing,
    Business,
    Sales,
}

impl FromStr for RoleCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "engineering" => Ok(RoleCategory::Engineering),
            "data" => Ok(RoleCategory::Data),
            "product" => Ok(RoleCategory::Product),
            "design" => Ok(RoleCategory::Design),
            "marketing" => Ok(RoleCategory::Marketing),
            "business" => Ok(RoleCategory::Business),
            "sales" => Ok(RoleCategory::Sales),
            _ => Err(()),
        }
    }
}

/// Experience bracket of a role, e.g. "2-5 years".
///
/// Declared in ascending order of years so the derived `Ord` is the bracket rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceBracket {
    #[serde(rename = "0-1 years")]
    ZeroToOne,
    #[serde(rename = "0-2 years")]
    ZeroToTwo,
    #[serde(rename = "0-3 years")]
    ZeroToThree,
    #[serde(rename = "1-3 years")]
    OneToThree,
    #[serde(rename = "1-4 years")]
    OneToFour,
    #[serde(rename = "2-4 years")]
    TwoToFour,
    #[serde(rename = "2-5 years")]
    TwoToFive,
    #[serde(rename = "2-6 years")]
    TwoToSix,
    #[serde(rename = "3-5 years")]
    ThreeToFive,
    #[serde(rename = "3-6 years")]
    ThreeToSix,
    #[serde(rename = "5+ years")]
    FivePlus,
}

impl ExperienceBracket {
    pub const ALL: [ExperienceBracket; 11] = [
        ExperienceBracket::ZeroToOne,
        ExperienceBracket::ZeroToTwo,
        ExperienceBracket::ZeroToThree,
        ExperienceBracket::OneToThree,
        ExperienceBracket::OneToFour,
        ExperienceBracket::TwoToFour,
        ExperienceBracket::TwoToFive,
        ExperienceBracket::TwoToSix,
        ExperienceBracket::ThreeToFive,
        ExperienceBracket::ThreeToSix,
        ExperienceBracket::FivePlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceBracket::ZeroToOne => "0-1 years",
            ExperienceBracket::ZeroToTwo => "0-2 years",
            ExperienceBracket::ZeroToThree => "0-3 years",
            ExperienceBracket::OneToThree => "1-3 years",
            ExperienceBracket::OneToFour => "1-4 years",
            ExperienceBracket::TwoToFour => "2-4 years",
            ExperienceBracket::TwoToFive => "2-5 years",
            ExperienceBracket::TwoToSix => "2-6 years",
            ExperienceBracket::ThreeToFive => "3-5 years",
            ExperienceBracket::ThreeToSix => "3-6 years",
            ExperienceBracket::FivePlus => "5+ years",
        }
    }

    /// Lower bound of the bracket in whole years.
    pub fn min_years(self) -> u32 {
        match self {
            ExperienceBracket::ZeroToOne
            | ExperienceBracket::ZeroToTwo
            | ExperienceBracket::ZeroToThree => 0,
            ExperienceBracket::OneToThree | ExperienceBracket::OneToFour => 1,
            ExperienceBracket::TwoToFour
            | ExperienceBracket::TwoToFive
            | ExperienceBracket::TwoToSix => 2,
            ExperienceBracket::ThreeToFive | ExperienceBracket::ThreeToSix => 3,
            ExperienceBracket::FivePlus => 5,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ExperienceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Annual salary band in lakhs per annum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub min_lpa: u32,
    pub max_lpa: u32,
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}-{} LPA", self.min_lpa, self.max_lpa)
    }
}

/// One synthetic job posting. Immutable once the catalog is built;
/// `match_score` is only ever set on copies returned by the advanced recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub company_tier: CompanyTier,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub experience: ExperienceBracket,
    pub category: RoleCategory,
    pub salary: SalaryBand,
    /// Display form of `salary`, e.g. "₹39-130 LPA".
    pub salary_range: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub posted_date: NaiveDate,
    pub posted_days_ago: u32,
    /// Display form of `posted_days_ago`, e.g. "3 days ago".
    pub posted: String,
    pub url: String,
    pub logo: String,
    pub remote: bool,
    pub source: JobSource,
    pub company_rating: f32,
    pub featured: bool,
    pub urgent: bool,
    pub verified: bool,
    pub benefits: Vec<String>,
    pub team_size: String,
    pub funding_stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
}

/// "1 day ago" / "N days ago".
pub fn posted_label(days_ago: u32) -> String {
    if days_ago == 1 {
        "1 day ago".to_string()
    } else {
        format!("{days_ago} days ago")
    }
}

/// Caller-side inputs to the recommendation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free text such as "3 years" or "2-4 years"; the first integer is used.
    #[serde(default)]
    pub experience: String,
}
