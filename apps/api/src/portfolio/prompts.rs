// All LLM prompt constants for the portfolio module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Role line for portfolio generation. Joined with `JSON_ONLY_SYSTEM`.
pub const PORTFOLIO_SYSTEM_ROLE: &str = "You are a professional career advisor and portfolio \
    writer. You turn a person's free-text description of themselves into a complete, \
    realistic professional portfolio.";

/// Portfolio generation prompt template. Replace `{description}` before sending.
pub const PORTFOLIO_PROMPT_TEMPLATE: &str = r#"Create a professional portfolio from the description below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "personalInfo": {
    "fullName": "string",
    "title": "string",
    "email": "string",
    "phone": "string",
    "location": "string",
    "website": "string",
    "linkedin": "string",
    "github": "string",
    "twitter": "string",
    "bio": "string (3-4 sentences)"
  },
  "experience": [
    {
      "position": "string",
      "company": "string",
      "location": "string",
      "startDate": "YYYY-MM",
      "endDate": "YYYY-MM or empty string if current",
      "current": false,
      "description": "string (2-3 sentences with measurable impact)"
    }
  ],
  "education": [
    {"degree": "string", "institution": "string", "location": "string", "year": "string", "gpa": "string"}
  ],
  "skills": [
    {"name": "string", "category": "Technical | Soft Skills | Tools | Languages | Other", "level": "Beginner | Intermediate | Advanced | Expert"}
  ],
  "projects": [
    {"name": "string", "description": "string", "technologies": "comma-separated string", "liveUrl": "string", "githubUrl": "string"}
  ],
  "certifications": [
    {"name": "string", "issuer": "string", "year": "string", "credentialUrl": "string"}
  ]
}

Rules:
- Use details from the description wherever they exist; invent plausible details only to fill gaps.
- If the description names the person, use that name for fullName. Otherwise use "Your Name".
- Include 2-3 experience entries, 8-12 skills and 2-3 projects.
- Use empty strings for unknown contact details. Never use HTML.

DESCRIPTION:
{description}"#;

/// Role line shared by the refine / describe / suggest calls.
pub const ADVISOR_SYSTEM_ROLE: &str = "You are a professional career advisor helping refine \
    portfolio content. Be concise, authentic, and professional. Avoid cliches and \
    AI-sounding language.";

pub const REFINE_BIO_INSTRUCTION: &str = "Refine this professional bio to be compelling and \
    concise (max 150 words). Make it sound natural and human, not AI-generated:";

pub const REFINE_DESCRIPTION_INSTRUCTION: &str = "Improve this description to be clear, \
    professional, and engaging (max 200 words). Keep it authentic:";

pub const REFINE_TITLE_INSTRUCTION: &str =
    "Refine this professional title to be clear and impactful (max 10 words):";

pub const REFINE_GENERAL_INSTRUCTION: &str = "Improve this text to be more professional and \
    well-written while maintaining authenticity:";

/// Refinement prompt template. Replace `{instruction}` and `{text}`.
pub const REFINE_PROMPT_TEMPLATE: &str = "{instruction}\n\n{text}";

/// Project description prompt template. Replace `{name}` and `{technologies}`.
pub const PROJECT_DESCRIPTION_PROMPT_TEMPLATE: &str = "Create a brief, professional \
    description (2-3 sentences) for a project called \"{name}\" built with {technologies}. \
    Focus on what problem it solves and its value.";

/// Skill suggestion prompt template. Replace `{experience}` and `{education}`.
pub const SUGGEST_SKILLS_PROMPT_TEMPLATE: &str = "Based on this background, suggest 8-12 \
    relevant professional skills. Return only a comma-separated list of skill names.\n\
    Experience: {experience}\nEducation: {education}";
