//! Resume response shape. Field names mirror the schema block in
//! `llm_client::prompts::RESUME_SYSTEM_PROMPT`.
//!
//! Everything is optional or defaulted: the remote model extracts best-effort
//! and the handlers never reject a reply for missing fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    /// Tolerates integer or fractional answers from the model.
    #[serde(default)]
    pub total_years: Option<f64>,
    #[serde(default)]
    pub job_roles: Vec<JobRole>,
    #[serde(default)]
    pub industry_background: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRole {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degrees: Vec<String>,
    #[serde(default)]
    pub institutions: Vec<String>,
    #[serde(default)]
    pub tier_ranking: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_info_full_deserializes_correctly() {
        let json = r#"{
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "+44 20 7946 0958",
            "technical_skills": ["Rust", "PostgreSQL"],
            "soft_skills": ["mentoring"],
            "experience": {
                "total_years": 7.5,
                "job_roles": [
                    {"company": "Analytical Engines Ltd", "title": "Engineer", "duration": "3 years"}
                ],
                "industry_background": "fintech"
            },
            "education": {
                "degrees": ["BSc Mathematics"],
                "institutions": ["University of London"],
                "tier_ranking": "tier 1"
            },
            "projects": [
                {"name": "notes", "technologies": ["Rust"], "description": "a compiler"}
            ]
        }"#;

        let parsed: ResumeInfo = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(parsed.technical_skills, vec!["Rust", "PostgreSQL"]);
        assert_eq!(parsed.experience.total_years, Some(7.5));
        assert_eq!(parsed.experience.job_roles.len(), 1);
        assert_eq!(
            parsed.experience.job_roles[0].company.as_deref(),
            Some("Analytical Engines Ltd")
        );
        assert_eq!(parsed.education.degrees, vec!["BSc Mathematics"]);
        assert_eq!(parsed.projects[0].technologies, vec!["Rust"]);
    }

    #[test]
    fn test_resume_info_tolerates_sparse_reply() {
        // The model may omit anything it could not find.
        let parsed: ResumeInfo = serde_json::from_str("{}").unwrap();
        assert!(parsed.name.is_none());
        assert!(parsed.technical_skills.is_empty());
        assert!(parsed.experience.job_roles.is_empty());
        assert!(parsed.projects.is_empty());
    }

    #[test]
    fn test_resume_info_ignores_unknown_keys() {
        let parsed: ResumeInfo =
            serde_json::from_str(r#"{"name": "Ada", "confidence": 0.93}"#).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Ada"));
    }
}
