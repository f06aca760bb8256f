//! Salary Estimator: (tier, experience bracket, role category) → LPA band.
//!
//! `band = round(base × experience multiplier × category multiplier)` for both
//! ends. Multipliers are monotonic in bracket rank and base bands are monotonic
//! in tier rank, so the estimate never drops when either rank goes up.

use crate::models::job::{CompanyTier, ExperienceBracket, RoleCategory, SalaryBand};

/// Base (min, max) LPA band for a company tier.
fn base_band(tier: CompanyTier) -> (f64, f64) {
    match tier {
        CompanyTier::Flagship => (30.0, 100.0),
        CompanyTier::Unicorn => (20.0, 60.0),
        CompanyTier::Startup => (12.0, 40.0),
        CompanyTier::Service => (6.0, 30.0),
    }
}

pub fn experience_multiplier(bracket: ExperienceBracket) -> f64 {
    match bracket {
        ExperienceBracket::ZeroToOne => 0.6,
        ExperienceBracket::ZeroToTwo => 0.7,
        ExperienceBracket::ZeroToThree => 0.8,
        ExperienceBracket::OneToThree => 0.9,
        ExperienceBracket::OneToFour => 1.0,
        ExperienceBracket::TwoToFour => 1.2,
        ExperienceBracket::TwoToFive => 1.4,
        ExperienceBracket::TwoToSix => 1.5,
        ExperienceBracket::ThreeToFive => 1.6,
        ExperienceBracket::ThreeToSix => 1.8,
        ExperienceBracket::FivePlus => 2.2,
    }
}

pub fn category_multiplier(category: RoleCategory) -> f64 {
    match category {
        RoleCategory::Engineering => 1.3,
        RoleCategory::Data => 1.4,
        RoleCategory::Product => 1.2,
        RoleCategory::Design => 1.1,
        RoleCategory::Marketing => 1.0,
        RoleCategory::Business => 0.9,
        RoleCategory::Sales => 0.8,
    }
}

/// Typed estimate used by the catalog generator.
pub fn estimate_salary(
    tier: CompanyTier,
    experience: ExperienceBracket,
    category: RoleCategory,
) -> SalaryBand {
    band_with(
        tier,
        experience_multiplier(experience),
        category_multiplier(category),
    )
}

/// Label-based estimate. Unrecognized bracket or category labels weigh 1.0.
pub fn estimate_salary_from_labels(tier: CompanyTier, experience: &str, category: &str) -> SalaryBand {
    let exp_mult = ExperienceBracket::from_label(experience)
        .map(experience_multiplier)
        .unwrap_or(1.0);
    let cat_mult = category
        .parse::<RoleCategory>()
        .map(category_multiplier)
        .unwrap_or(1.0);
    band_with(tier, exp_mult, cat_mult)
}

fn band_with(tier: CompanyTier, exp_mult: f64, cat_mult: f64) -> SalaryBand {
    let (base_min, base_max) = base_band(tier);
    let min_lpa = (base_min * exp_mult * cat_mult).round().max(0.0) as u32;
    let max_lpa = (base_max * exp_mult * cat_mult).round().max(0.0) as u32;
    SalaryBand {
        min_lpa,
        max_lpa: max_lpa.max(min_lpa),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [CompanyTier; 4] = [
        CompanyTier::Service,
        CompanyTier::Startup,
        CompanyTier::Unicorn,
        CompanyTier::Flagship,
    ];

    const CATEGORIES: [RoleCategory; 7] = [
        RoleCategory::Engineering,
        RoleCategory::Data,
        RoleCategory::Product,
        RoleCategory::Design,
        RoleCategory::Marketing,
        RoleCategory::Business,
        RoleCategory::Sales,
    ];

    #[test]
    fn test_min_never_exceeds_max() {
        for tier in TIERS {
            for bracket in ExperienceBracket::ALL {
                for category in CATEGORIES {
                    let band = estimate_salary(tier, bracket, category);
                    assert!(band.min_lpa <= band.max_lpa, "{tier:?} {bracket} {category:?}");
                }
            }
        }
    }

    #[test]
    fn test_band_is_monotonic_in_experience() {
        for tier in TIERS {
            for category in CATEGORIES {
                for pair in ExperienceBracket::ALL.windows(2) {
                    let lower = estimate_salary(tier, pair[0], category);
                    let higher = estimate_salary(tier, pair[1], category);
                    assert!(higher.min_lpa >= lower.min_lpa, "{pair:?}");
                    assert!(higher.max_lpa >= lower.max_lpa, "{pair:?}");
                }
            }
        }
    }

    #[test]
    fn test_band_is_monotonic_in_tier() {
        for bracket in ExperienceBracket::ALL {
            for category in CATEGORIES {
                for pair in TIERS.windows(2) {
                    let lower = estimate_salary(pair[0], bracket, category);
                    let higher = estimate_salary(pair[1], bracket, category);
                    assert!(higher.min_lpa >= lower.min_lpa);
                    assert!(higher.max_lpa >= lower.max_lpa);
                }
            }
        }
    }

    #[test]
    fn test_senior_flagship_engineering_beats_entry_level() {
        let senior = estimate_salary(
            CompanyTier::Flagship,
            ExperienceBracket::FivePlus,
            RoleCategory::Engineering,
        );
        let entry = estimate_salary(
            CompanyTier::Flagship,
            ExperienceBracket::ZeroToOne,
            RoleCategory::Engineering,
        );
        assert!(senior.min_lpa > entry.min_lpa);
        assert!(senior.max_lpa > entry.max_lpa);
        // 30 × 2.2 × 1.3 = 85.8, 100 × 2.2 × 1.3 = 286
        assert_eq!(senior.to_string(), "₹86-286 LPA");
        assert_eq!(entry.to_string(), "₹23-78 LPA");
    }

    #[test]
    fn test_unrecognized_labels_default_to_unit_multiplier() {
        let band = estimate_salary_from_labels(CompanyTier::Startup, "a decade", "astrology");
        assert_eq!(band, SalaryBand { min_lpa: 12, max_lpa: 40 });
    }

    #[test]
    fn test_labels_match_typed_estimate() {
        let from_labels = estimate_salary_from_labels(CompanyTier::Unicorn, "2-5 years", "data");
        let typed = estimate_salary(
            CompanyTier::Unicorn,
            ExperienceBracket::TwoToFive,
            RoleCategory::Data,
        );
        assert_eq!(from_labels, typed);
    }
}
