//! Job-description response shape. Field names mirror the schema block in
//! `llm_client::prompts::JOB_DESCRIPTION_SYSTEM_PROMPT`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub experience_requirements: ExperienceRequirements,
    #[serde(default)]
    pub education_requirements: EducationRequirements,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceRequirements {
    #[serde(default)]
    pub minimum_years: Option<f64>,
    #[serde(default)]
    pub domain_experience: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationRequirements {
    #[serde(default)]
    pub minimum_degree: Option<String>,
    #[serde(default)]
    pub preferred_fields: Vec<String>,
}
