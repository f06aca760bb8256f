//! Heuristic resume text parser.
//!
//! Everything here is best-effort pattern matching over plain text; a field
//! that cannot be recovered is left empty rather than reported as an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{EducationItem, ExperienceItem, PersonalInfo, ResumeData};

const MAX_EXPERIENCE: usize = 5;
const MAX_EDUCATION: usize = 3;
const NAME_SCAN_LINES: usize = 10;

/// Skills recognised in free text, reported in this order.
pub const COMMON_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "Angular",
    "Vue.js",
    "HTML",
    "CSS",
    "TypeScript",
    "MongoDB",
    "MySQL",
    "PostgreSQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "Linux",
    "Windows",
    "Project Management",
    "Leadership",
    "Communication",
    "Problem Solving",
];

const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "profile", "about"];

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static RE_PHONES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        r"\+\d{1,3}\s?\d{3}\s?\d{3}\s?\d{4}",
        r"\d{10}",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// A standalone 19xx/20xx group inside a phone candidate means we hit a date span.
static RE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\D)(?:19|20)\d{2}(?:\D|$)").unwrap());

static RE_NAME_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s-]+$").unwrap());

static RE_LINKEDIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap());

static RE_GITHUB: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)github\.com/[\w-]+").unwrap());

static RE_SUMMARIES: Lazy<Vec<Regex>> = Lazy::new(|| {
    SUMMARY_KEYWORDS
        .iter()
        .map(|kw| Regex::new(&format!(r"(?i){kw}[:\s]*([^\n]{{50,300}})")).unwrap())
        .collect()
});

static RE_SKILLS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    COMMON_SKILLS
        .iter()
        .map(|skill| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(skill));
            (*skill, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// `title - company - duration`, one entry per line. Dashes of any width or a pipe separate.
static RE_EXPERIENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*([A-Za-z][A-Za-z &,.]*?)[ \t]*[-–—|][ \t]*([A-Za-z][A-Za-z &,.]*?)[ \t]*[-–—|][ \t]*([A-Za-z0-9 \-–—]+?)[ \t\r]*$",
    )
    .unwrap()
});

static RE_EDUCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(bachelor|master|phd|b\.?s\.?|m\.?s\.?|b\.?a\.?|m\.?a\.?)[^\w\n][^\n]*?([A-Za-z .&]*(?:university|college|institute)[A-Za-z .&]*)[^\n]*?(\d{4})",
    )
    .unwrap()
});

pub fn parse_resume_text(text: &str) -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            name: extract_name(text),
            email: RE_EMAIL.find(text).map(|m| m.as_str().to_string()),
            phone: extract_phone(text),
            location: None,
            summary: extract_summary(text),
            linkedin: RE_LINKEDIN.find(text).map(|m| format!("https://{}", m.as_str())),
            github: RE_GITHUB.find(text).map(|m| format!("https://{}", m.as_str())),
        },
        experience: extract_experience(text),
        education: extract_education(text),
        skills: extract_skills(text),
    }
}

fn extract_phone(text: &str) -> Option<String> {
    RE_PHONES.iter().find_map(|re| {
        re.find_iter(text)
            .map(|m| m.as_str().trim())
            .find(|candidate| !RE_YEAR.is_match(candidate))
            .map(String::from)
    })
}

fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| {
            let len = line.chars().count();
            (4..50).contains(&len)
                && RE_NAME_LINE.is_match(line)
                && line.split_whitespace().count() >= 2
        })
        .map(String::from)
}

fn extract_summary(text: &str) -> Option<String> {
    RE_SUMMARIES.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

fn extract_skills(text: &str) -> Vec<String> {
    RE_SKILLS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

fn extract_experience(text: &str) -> Vec<ExperienceItem> {
    RE_EXPERIENCE
        .captures_iter(text)
        .filter_map(|caps| {
            let title = caps.get(1)?.as_str().trim();
            let company = caps.get(2)?.as_str().trim();
            let duration = caps.get(3)?.as_str().trim();
            let title_ok = (4..100).contains(&title.chars().count());
            let company_ok = (3..100).contains(&company.chars().count());
            (title_ok && company_ok).then(|| ExperienceItem {
                title: title.to_string(),
                company: company.to_string(),
                duration: duration.to_string(),
                description: String::new(),
            })
        })
        .take(MAX_EXPERIENCE)
        .collect()
}

fn extract_education(text: &str) -> Vec<EducationItem> {
    RE_EDUCATION
        .captures_iter(text)
        .filter_map(|caps| {
            Some(EducationItem {
                degree: caps.get(1)?.as_str().trim().to_string(),
                institution: caps.get(2)?.as_str().trim().to_string(),
                year: caps.get(3)?.as_str().to_string(),
                gpa: None,
            })
        })
        .take(MAX_EDUCATION)
        .collect()
}
