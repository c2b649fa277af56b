// LLM prompt constants for the structuring module.

/// System prompt for CV structuring. Enforces JSON-only output.
pub const CV_STRUCTURE_SYSTEM: &str = "You are an expert résumé parser. \
    Convert raw résumé text into a structured record. \
    Copy wording from the source; never invent employers, dates or achievements. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// CV structuring prompt template. Replace `{cv_text}` before sending.
pub const CV_STRUCTURE_PROMPT_TEMPLATE: &str = r#"Structure the following résumé text.

Return a JSON object with this EXACT schema (no extra fields):
{
  "personalInfo": {
    "fullName": "Jane Doe",
    "title": "Software Engineer",
    "email": "jane@example.com",
    "phone": "+1 555 123 4567",
    "linkedin": "https://www.linkedin.com/in/janedoe",
    "github": "https://github.com/janedoe",
    "summary": "Backend engineer with eight years of experience..."
  },
  "experiences": [
    {
      "position": "Software Engineer",
      "company": "Acme Corp",
      "startDate": "Jan 2020",
      "endDate": "Present",
      "current": true,
      "description": "Owned the billing platform.",
      "achievements": ["Cut invoice latency by 40%"]
    }
  ],
  "education": [
    {"degree": "Bachelor of Science", "field": "Computer Science", "school": "MIT", "endDate": "2016"}
  ],
  "skills": [
    {"name": "Rust", "category": "Languages"}
  ],
  "projects": [
    {"name": "Resume Parser", "description": "Structures PDF text.", "achievements": []}
  ]
}

Rules:
- "category" is one of: Languages, Frameworks, Databases, Tools, Other.
- "current" is true only when the role's end date reads as present/current.
- Keep achievements in document order, without bullet markers.
- Use empty strings or empty arrays for anything the text does not contain.

Résumé text:
{cv_text}"#;
