//! Catalog generator: builds the full synthetic listing set once per process.
//!
//! Structure is fixed (every company × every role, N postings per pair by tier);
//! per-posting attributes are drawn from the injected RNG so tests can pin them
//! with a seeded `StdRng`.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::jobs::salary::estimate_salary;
use crate::models::job::{
    posted_label, CompanyTier, ExperienceBracket, JobListing, JobSource, JobType, RoleCategory,
};

// ────────────────────────────────────────────────────────────────────────────
// Static reference data
// ────────────────────────────────────────────────────────────────────────────

pub struct CompanyProfile {
    pub name: &'static str,
    pub tier: CompanyTier,
    pub rating: f32,
    pub benefits: &'static [&'static str],
    pub team_size: &'static str,
    pub funding_stage: &'static str,
}

pub struct RoleProfile {
    pub title: &'static str,
    pub category: RoleCategory,
    pub experience: ExperienceBracket,
    pub skills: &'static [&'static str],
    pub description: &'static str,
    pub requirements: &'static [&'static str],
}

pub const COMPANIES: &[CompanyProfile] = &[
    CompanyProfile {
        name: "Google India",
        tier: CompanyTier::Flagship,
        rating: 4.8,
        benefits: &["Health Insurance", "Stock Options", "Learning Budget", "Flexible Hours"],
        team_size: "10,000+",
        funding_stage: "Public",
    },
    CompanyProfile {
        name: "Microsoft India",
        tier: CompanyTier::Flagship,
        rating: 4.7,
        benefits: &["Health Insurance", "Stock Options", "Remote Work", "Professional Development"],
        team_size: "10,000+",
        funding_stage: "Public",
    },
    CompanyProfile {
        name: "Amazon India",
        tier: CompanyTier::Flagship,
        rating: 4.6,
        benefits: &["Health Insurance", "Stock Options", "Career Growth", "Global Opportunities"],
        team_size: "10,000+",
        funding_stage: "Public",
    },
    CompanyProfile {
        name: "Meta India",
        tier: CompanyTier::Flagship,
        rating: 4.5,
        benefits: &["Health Insurance", "Stock Options", "Innovation Time", "World-class Facilities"],
        team_size: "5,000+",
        funding_stage: "Public",
    },
    CompanyProfile {
        name: "Apple India",
        tier: CompanyTier::Flagship,
        rating: 4.9,
        benefits: &["Health Insurance", "Stock Options", "Product Discounts", "Premium Benefits"],
        team_size: "1,000+",
        funding_stage: "Public",
    },
    CompanyProfile {
        name: "Flipkart",
        tier: CompanyTier::Unicorn,
        rating: 4.4,
        benefits: &["Health Insurance", "ESOPs", "Learning Budget", "Flexible Work"],
        team_size: "50,000+",
        funding_stage: "Unicorn",
    },
    CompanyProfile {
        name: "Paytm",
        tier: CompanyTier::Unicorn,
        rating: 4.2,
        benefits: &["Health Insurance", "ESOPs", "Meal Allowance", "Transport"],
        team_size: "20,000+",
        funding_stage: "Public",
    },
    CompanyProfile {
        name: "Zomato",
        tier: CompanyTier::Unicorn,
        rating: 4.3,
        benefits: &["Health Insurance", "ESOPs", "Food Credits", "Flexible Hours"],
        team_size: "5,000+",
        funding_stage: "Public",
    },
    CompanyProfile {
        name: "Swiggy",
        tier: CompanyTier::Unicorn,
        rating: 4.4,
        benefits: &["Health Insurance", "ESOPs", "Food Allowance", "Learning Budget"],
        team_size: "10,000+",
        funding_stage: "Unicorn",
    },
    CompanyProfile {
        name: "BYJU'S",
        tier: CompanyTier::Unicorn,
        rating: 4.1,
        benefits: &["Health Insurance", "ESOPs", "Education Benefits", "Career Growth"],
        team_size: "50,000+",
        funding_stage: "Unicorn",
    },
    CompanyProfile {
        name: "Razorpay",
        tier: CompanyTier::Unicorn,
        rating: 4.6,
        benefits: &["Health Insurance", "ESOPs", "Learning Budget", "Remote Work"],
        team_size: "3,000+",
        funding_stage: "Unicorn",
    },
    CompanyProfile {
        name: "PhonePe",
        tier: CompanyTier::Unicorn,
        rating: 4.5,
        benefits: &["Health Insurance", "ESOPs", "Wellness Programs", "Flexible Work"],
        team_size: "5,000+",
        funding_stage: "Unicorn",
    },
    CompanyProfile {
        name: "Freshworks",
        tier: CompanyTier::Startup,
        rating: 4.5,
        benefits: &["Health Insurance", "ESOPs", "Learning Budget", "Global Exposure"],
        team_size: "5,000+",
        funding_stage: "Public",
    },
    CompanyProfile {
        name: "Zoho",
        tier: CompanyTier::Startup,
        rating: 4.3,
        benefits: &["Health Insurance", "Profit Sharing", "Learning Budget", "Work-Life Balance"],
        team_size: "12,000+",
        funding_stage: "Bootstrapped",
    },
    CompanyProfile {
        name: "InMobi",
        tier: CompanyTier::Startup,
        rating: 4.2,
        benefits: &["Health Insurance", "ESOPs", "Innovation Time", "Global Opportunities"],
        team_size: "1,500+",
        funding_stage: "Series D",
    },
    CompanyProfile {
        name: "Unacademy",
        tier: CompanyTier::Startup,
        rating: 4.1,
        benefits: &["Health Insurance", "ESOPs", "Education Benefits", "Flexible Hours"],
        team_size: "3,000+",
        funding_stage: "Unicorn",
    },
    CompanyProfile {
        name: "Tata Consultancy Services",
        tier: CompanyTier::Service,
        rating: 4.0,
        benefits: &["Health Insurance", "Provident Fund", "Training Programs", "Global Projects"],
        team_size: "500,000+",
        funding_stage: "Public",
    },
    CompanyProfile {
        name: "Infosys",
        tier: CompanyTier::Service,
        rating: 4.1,
        benefits: &["Health Insurance", "Provident Fund", "Learning Platform", "Global Opportunities"],
        team_size: "300,000+",
        funding_stage: "Public",
    },
    CompanyProfile {
        name: "Wipro",
        tier: CompanyTier::Service,
        rating: 3.9,
        benefits: &["Health Insurance", "Provident Fund", "Skill Development", "Career Growth"],
        team_size: "250,000+",
        funding_stage: "Public",
    },
];

pub const ROLES: &[RoleProfile] = &[
    RoleProfile {
        title: "Senior Software Engineer",
        category: RoleCategory::Engineering,
        experience: ExperienceBracket::ThreeToFive,
        skills: &["JavaScript", "React", "Node.js", "System Design", "AWS"],
        description: "Build scalable systems that serve millions of users. Work with cutting-edge technologies and collaborate with world-class engineers to solve complex problems.",
        requirements: &["5+ years experience", "Strong system design skills", "Experience with microservices", "Cloud platforms knowledge"],
    },
    RoleProfile {
        title: "Full Stack Developer",
        category: RoleCategory::Engineering,
        experience: ExperienceBracket::TwoToFour,
        skills: &["React", "Node.js", "MongoDB", "Express.js", "TypeScript"],
        description: "Develop end-to-end web applications using modern technologies. Join a fast-paced team building products that impact millions of users.",
        requirements: &["3+ years full-stack experience", "React/Node.js expertise", "Database design skills", "API development"],
    },
    RoleProfile {
        title: "Frontend Developer",
        category: RoleCategory::Engineering,
        experience: ExperienceBracket::OneToThree,
        skills: &["React", "TypeScript", "CSS", "HTML", "JavaScript"],
        description: "Create beautiful, responsive user interfaces that delight users. Work closely with designers and product teams to bring ideas to life.",
        requirements: &["2+ years React experience", "Strong CSS skills", "Responsive design expertise", "Performance optimization"],
    },
    RoleProfile {
        title: "Backend Developer",
        category: RoleCategory::Engineering,
        experience: ExperienceBracket::TwoToFive,
        skills: &["Node.js", "Python", "PostgreSQL", "AWS", "Docker"],
        description: "Build robust, scalable backend systems and APIs. Design and implement microservices architecture for high-traffic applications.",
        requirements: &["3+ years backend experience", "Database design skills", "API development", "Cloud platforms"],
    },
    RoleProfile {
        title: "DevOps Engineer",
        category: RoleCategory::Engineering,
        experience: ExperienceBracket::TwoToSix,
        skills: &["Docker", "Kubernetes", "AWS", "Jenkins", "Terraform"],
        description: "Automate deployment pipelines and manage cloud infrastructure. Ensure high availability and performance of production systems.",
        requirements: &["3+ years DevOps experience", "Container orchestration", "CI/CD pipelines", "Infrastructure as Code"],
    },
    RoleProfile {
        title: "Mobile App Developer",
        category: RoleCategory::Engineering,
        experience: ExperienceBracket::TwoToFour,
        skills: &["React Native", "Flutter", "iOS", "Android", "JavaScript"],
        description: "Build cross-platform mobile applications that provide exceptional user experiences. Work on apps used by millions of users.",
        requirements: &["2+ years mobile development", "Cross-platform frameworks", "App store deployment", "Performance optimization"],
    },
    RoleProfile {
        title: "Data Scientist",
        category: RoleCategory::Data,
        experience: ExperienceBracket::OneToFour,
        skills: &["Python", "Machine Learning", "SQL", "TensorFlow", "Statistics"],
        description: "Extract insights from large datasets to drive business decisions. Build machine learning models that power product features.",
        requirements: &["2+ years data science experience", "ML/AI expertise", "Statistical analysis", "Python/R proficiency"],
    },
    RoleProfile {
        title: "Machine Learning Engineer",
        category: RoleCategory::Data,
        experience: ExperienceBracket::TwoToFive,
        skills: &["Python", "PyTorch", "MLOps", "AWS", "Deep Learning"],
        description: "Deploy and scale machine learning models in production. Work on cutting-edge AI projects that shape the future.",
        requirements: &["3+ years ML experience", "Production ML systems", "MLOps practices", "Deep learning frameworks"],
    },
    RoleProfile {
        title: "Data Analyst",
        category: RoleCategory::Data,
        experience: ExperienceBracket::ZeroToThree,
        skills: &["SQL", "Python", "Tableau", "Excel", "Statistics"],
        description: "Analyze business data to uncover trends and insights. Create dashboards and reports that guide strategic decisions.",
        requirements: &["1+ years analytics experience", "SQL proficiency", "Data visualization", "Business acumen"],
    },
    RoleProfile {
        title: "Product Manager",
        category: RoleCategory::Product,
        experience: ExperienceBracket::ThreeToSix,
        skills: &["Product Strategy", "Analytics", "User Research", "Agile", "SQL"],
        description: "Drive product strategy and roadmap for features used by millions. Collaborate with engineering, design, and business teams.",
        requirements: &["3+ years product management", "Technical background", "Data-driven approach", "User-centric mindset"],
    },
    RoleProfile {
        title: "UI/UX Designer",
        category: RoleCategory::Design,
        experience: ExperienceBracket::TwoToFive,
        skills: &["Figma", "User Research", "Prototyping", "Design Systems", "Adobe Creative Suite"],
        description: "Design intuitive user experiences that solve real problems. Create design systems and conduct user research.",
        requirements: &["3+ years design experience", "Portfolio of work", "User research skills", "Design system experience"],
    },
    RoleProfile {
        title: "Product Designer",
        category: RoleCategory::Design,
        experience: ExperienceBracket::TwoToFour,
        skills: &["Design Thinking", "Figma", "User Testing", "Prototyping", "Research"],
        description: "Own the end-to-end design process from research to implementation. Work closely with product and engineering teams.",
        requirements: &["2+ years product design", "End-to-end design process", "User research", "Prototyping skills"],
    },
    RoleProfile {
        title: "Digital Marketing Manager",
        category: RoleCategory::Marketing,
        experience: ExperienceBracket::TwoToFive,
        skills: &["SEO", "Google Ads", "Analytics", "Content Marketing", "Social Media"],
        description: "Drive digital marketing strategy across multiple channels. Optimize campaigns for maximum ROI and user acquisition.",
        requirements: &["3+ years digital marketing", "Performance marketing", "Analytics tools", "Growth mindset"],
    },
    RoleProfile {
        title: "Business Analyst",
        category: RoleCategory::Business,
        experience: ExperienceBracket::OneToFour,
        skills: &["Analytics", "SQL", "Business Intelligence", "Excel", "Tableau"],
        description: "Analyze business processes and identify improvement opportunities. Work with stakeholders to drive data-driven decisions.",
        requirements: &["2+ years business analysis", "SQL proficiency", "Process improvement", "Stakeholder management"],
    },
    RoleProfile {
        title: "Sales Executive",
        category: RoleCategory::Sales,
        experience: ExperienceBracket::ZeroToThree,
        skills: &["Sales", "CRM", "Communication", "Negotiation", "Lead Generation"],
        description: "Drive revenue growth through strategic sales initiatives. Build relationships with enterprise clients and close deals.",
        requirements: &["1+ years sales experience", "CRM tools", "Communication skills", "Target achievement"],
    },
];

/// On-site locations. Remote postings use `REMOTE_LOCATION` instead.
pub const LOCATIONS: &[&str] = &[
    "Bangalore, Karnataka",
    "Mumbai, Maharashtra",
    "Delhi NCR",
    "Hyderabad, Telangana",
    "Chennai, Tamil Nadu",
    "Pune, Maharashtra",
    "Kolkata, West Bengal",
    "Ahmedabad, Gujarat",
    "Noida, Uttar Pradesh",
    "Gurgaon, Haryana",
    "Kochi, Kerala",
    "Indore, Madhya Pradesh",
    "Jaipur, Rajasthan",
    "Coimbatore, Tamil Nadu",
    "Bhubaneswar, Odisha",
];

pub const REMOTE_LOCATION: &str = "Remote, India";

const GENERATED_SOURCES: [JobSource; 5] = [
    JobSource::Linkedin,
    JobSource::Indeed,
    JobSource::Glassdoor,
    JobSource::Naukri,
    JobSource::Angellist,
];

const REMOTE_PROBABILITY: f64 = 0.40;
const URGENT_PROBABILITY: f64 = 0.15;
const FEATURED_PROBABILITY: f64 = 0.20;
const CONTRACT_PROBABILITY: f64 = 0.15;
const MAX_POSTED_DAYS_AGO: u32 = 21;

/// Larger companies post more openings per role.
pub fn postings_per_role(tier: CompanyTier) -> usize {
    match tier {
        CompanyTier::Flagship => 4,
        CompanyTier::Unicorn => 3,
        CompanyTier::Startup | CompanyTier::Service => 2,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates the full catalog relative to `today`, in canonical order.
pub fn generate_catalog<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Vec<JobListing> {
    let mut listings = Vec::new();
    let mut next_id = 1u32;

    for company in COMPANIES {
        for role in ROLES {
            for _ in 0..postings_per_role(company.tier) {
                listings.push(generate_listing(rng, today, next_id, company, role));
                next_id += 1;
            }
        }
    }

    sort_canonical(&mut listings);
    listings
}

fn generate_listing<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    id: u32,
    company: &CompanyProfile,
    role: &RoleProfile,
) -> JobListing {
    let remote = rng.gen_bool(REMOTE_PROBABILITY);
    let location = if remote {
        REMOTE_LOCATION
    } else {
        LOCATIONS.choose(rng).copied().unwrap_or(LOCATIONS[0])
    };
    let urgent = rng.gen_bool(URGENT_PROBABILITY);
    let featured = rng.gen_bool(FEATURED_PROBABILITY);
    let job_type = if rng.gen_bool(CONTRACT_PROBABILITY) {
        JobType::Contract
    } else {
        JobType::FullTime
    };
    let posted_days_ago = rng.gen_range(1..=MAX_POSTED_DAYS_AGO);
    let source = GENERATED_SOURCES
        .choose(rng)
        .copied()
        .unwrap_or(JobSource::Linkedin);
    let salary = estimate_salary(company.tier, role.experience, role.category);
    let company_slug = company_slug(company.name);

    JobListing {
        id: format!("job-{id}"),
        title: role.title.to_string(),
        company: company.name.to_string(),
        company_tier: company.tier,
        location: location.to_string(),
        job_type,
        experience: role.experience,
        category: role.category,
        salary,
        salary_range: salary.to_string(),
        description: role.description.to_string(),
        requirements: to_strings(role.requirements),
        skills: to_strings(role.skills),
        posted_date: today - Duration::days(i64::from(posted_days_ago)),
        posted_days_ago,
        posted: posted_label(posted_days_ago),
        url: format!(
            "https://careers.{company_slug}.com/jobs/{}",
            role.title.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
        ),
        logo: format!("https://logo.clearbit.com/{company_slug}.com"),
        remote,
        source,
        company_rating: company.rating,
        featured,
        urgent,
        verified: company.tier.is_verified(),
        benefits: to_strings(company.benefits),
        team_size: company.team_size.to_string(),
        funding_stage: company.funding_stage.to_string(),
        match_score: None,
    }
}

/// featured → urgent → verified → most recent first. Stable, so equal keys keep
/// generation order.
pub fn sort_canonical(listings: &mut [JobListing]) {
    listings.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then(b.urgent.cmp(&a.urgent))
            .then(b.verified.cmp(&a.verified))
            .then(b.posted_date.cmp(&a.posted_date))
    });
}

/// "Tata Consultancy Services" → "tataconsultancyservices", "BYJU'S" → "byjus".
fn company_slug(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '\'')
        .flat_map(char::to_lowercase)
        .collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
