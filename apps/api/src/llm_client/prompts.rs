// Extraction prompt templates.
// The JSON keys inside these prompts are a wire contract with the completion
// endpoint: they must match the `models` structs exactly. Renaming a key here
// silently changes the response shape.

pub const RESUME_SYSTEM_PROMPT: &str = r#"You are an expert resume parser. Extract the following information from the resume text:
1. Name of the candidate
2. Email address
3. Phone number
4. Technical skills (list)
5. Soft skills (list)
6. Experience details:
   - Total years of experience
   - Job roles (list with company, title, duration)
   - Industry background
7. Education details:
   - Degree(s)
   - University/Institution(s)
   - Tier ranking (if identifiable)
8. Projects:
   - Name
   - Technologies used
   - Brief description

Return the data in a structured JSON format with these exact keys:
{
    "name": "string",
    "email": "string",
    "phone": "string",
    "technical_skills": ["skill1", "skill2", ...],
    "soft_skills": ["skill1", "skill2", ...],
    "experience": {
        "total_years": number,
        "job_roles": [
            {"company": "string", "title": "string", "duration": "string"}
        ],
        "industry_background": "string"
    },
    "education": {
        "degrees": ["string"],
        "institutions": ["string"],
        "tier_ranking": "string"
    },
    "projects": [
        {
            "name": "string",
            "technologies": ["string"],
            "description": "string"
        }
    ]
}"#;

pub const JOB_DESCRIPTION_SYSTEM_PROMPT: &str = r#"You are an expert job description analyzer. Extract the following information from the job description text:
1. Job title
2. Company name
3. Required skills (list)
4. Preferred/nice-to-have skills (list)
5. Experience requirements:
   - Minimum years required
   - Specific domain experience needed
6. Education requirements:
   - Minimum degree required
   - Preferred fields of study
7. Key responsibilities (list)

Return the data in a structured JSON format with these exact keys:
{
    "title": "string",
    "company": "string",
    "required_skills": ["skill1", "skill2", ...],
    "preferred_skills": ["skill1", "skill2", ...],
    "experience_requirements": {
        "minimum_years": number,
        "domain_experience": ["string"]
    },
    "education_requirements": {
        "minimum_degree": "string",
        "preferred_fields": ["string"]
    },
    "responsibilities": ["string"]
}"#;

/// Selects the fixed instruction template for the document type.
pub fn system_prompt(is_resume: bool) -> &'static str {
    if is_resume {
        RESUME_SYSTEM_PROMPT
    } else {
        JOB_DESCRIPTION_SYSTEM_PROMPT
    }
}
