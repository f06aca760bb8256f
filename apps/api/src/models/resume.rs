use serde::{Deserialize, Serialize};

use crate::models::job::CandidateProfile;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub gpa: Option<String>,
}

/// Structured resume as recovered from free text. Every field is best-effort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<String>,
}

impl ResumeData {
    /// Skills plus the first experience entry's duration text.
    pub fn candidate_profile(&self) -> CandidateProfile {
        CandidateProfile {
            skills: self.skills.clone(),
            experience: self
                .experience
                .first()
                .map(|e| e.duration.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_profile_uses_first_experience_duration() {
        let resume = ResumeData {
            skills: vec!["Rust".to_string()],
            experience: vec![
                ExperienceItem {
                    title: "Backend Engineer".to_string(),
                    company: "Acme".to_string(),
                    duration: "4 years".to_string(),
                    description: String::new(),
                },
                ExperienceItem {
                    title: "Intern".to_string(),
                    company: "Initech".to_string(),
                    duration: "6 months".to_string(),
                    description: String::new(),
                },
            ],
            ..Default::default()
        };
        let profile = resume.candidate_profile();
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
        assert_eq!(profile.experience, "4 years");
    }

    #[test]
    fn test_candidate_profile_without_experience_is_empty_text() {
        let profile = ResumeData::default().candidate_profile();
        assert!(profile.experience.is_empty());
        assert!(profile.skills.is_empty());
    }
}
