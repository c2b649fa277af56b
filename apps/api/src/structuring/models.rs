//! CV record: the structured output shared by the heuristic engine, the AI
//! structuring path, the editor and the exporters.
//!
//! Field names serialize in camelCase to match the editor/persistence format.
//! Every field carries `#[serde(default)]` so partially-populated JSON (e.g. from
//! the hosted model) still deserializes; `CvRecord::normalized` then restores the
//! id and placeholder invariants.

use serde::{Deserialize, Serialize};

/// Shown in the editor when no name line could be recovered.
pub const PLACEHOLDER_NAME: &str = "Your Name";

/// Shown in the editor when no summary paragraph could be recovered.
pub const PLACEHOLDER_SUMMARY: &str =
    "Add a professional summary highlighting your experience, strengths and goals.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvRecord {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<Skill>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            full_name: PLACEHOLDER_NAME.to_string(),
            title: String::new(),
            email: String::new(),
            phone: String::new(),
            linkedin: String::new(),
            github: String::new(),
            summary: PLACEHOLDER_SUMMARY.to_string(),
        }
    }
}

/// Closed skill taxonomy. Anything unmatched lands in `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Databases,
    Tools,
    #[default]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub position: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    /// True when the end date reads as "present"/"current".
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub field: String,
    pub school: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub achievements: Vec<String>,
}

/// Sequential id for the `n`-th (0-based) item of a list, e.g. `exp-1`.
pub(crate) fn sequential_id(prefix: &str, n: usize) -> String {
    format!("{prefix}-{}", n + 1)
}

impl CvRecord {
    /// Re-assigns sequential ids and restores placeholders for blank identity
    /// fields. Consumes the record and returns the normalized copy.
    pub fn normalized(self) -> Self {
        let CvRecord {
            personal_info,
            experiences,
            education,
            skills,
            projects,
        } = self;

        let personal_info = PersonalInfo {
            full_name: non_blank_or(personal_info.full_name, PLACEHOLDER_NAME),
            summary: non_blank_or(personal_info.summary, PLACEHOLDER_SUMMARY),
            ..personal_info
        };

        CvRecord {
            personal_info,
            experiences: experiences
                .into_iter()
                .enumerate()
                .map(|(i, e)| ExperienceEntry {
                    id: sequential_id("exp", i),
                    ..e
                })
                .collect(),
            education: education
                .into_iter()
                .enumerate()
                .map(|(i, e)| EducationEntry {
                    id: sequential_id("edu", i),
                    ..e
                })
                .collect(),
            skills: skills
                .into_iter()
                .filter(|s| !s.name.trim().is_empty())
                .enumerate()
                .map(|(i, s)| Skill {
                    id: sequential_id("skill", i),
                    ..s
                })
                .collect(),
            projects: projects
                .into_iter()
                .enumerate()
                .map(|(i, p)| ProjectEntry {
                    id: sequential_id("proj", i),
                    ..p
                })
                .collect(),
        }
    }
}

fn non_blank_or(value: String, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}
