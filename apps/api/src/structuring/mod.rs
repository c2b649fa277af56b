//! Résumé structuring engine: raw text extracted from a PDF → `CvRecord`.
//!
//! Pipeline:
//! 1. `lines`: rebuild logical lines from flattened extractor output
//! 2. `personal`: name, title, contacts and summary from the top of the text
//! 3. `sections`: locate the Summary/Skills/Experience/Education/Projects spans
//! 4. per-section extractors; the three record sections share `machine`
//!
//! The engine is total: any input, including the empty string, produces a
//! structurally valid record. Sparse input yields a degraded record with
//! placeholders and empty lists, never an error.

pub mod dates;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod lines;
pub mod machine;
pub mod models;
pub mod personal;
pub mod projects;
pub mod prompts;
pub mod sections;
pub mod skills;
pub mod structurer;
pub mod taxonomy;
pub mod thresholds;

use tracing::debug;

pub use models::{
    CvRecord, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, Skill, SkillCategory,
};
pub use sections::SectionKind;
pub use thresholds::Thresholds;

use education::extract_education;
use experience::extract_experiences;
use lines::reconstruct_lines;
use personal::extract_personal_info;
use projects::extract_projects;
use sections::locate_sections;
use skills::extract_skills;

/// Structures `raw` with the default thresholds.
pub fn extract_cv(raw: &str) -> CvRecord {
    extract_cv_with(raw, &Thresholds::default())
}

/// Structures `raw` with caller-supplied thresholds.
pub fn extract_cv_with(raw: &str, thresholds: &Thresholds) -> CvRecord {
    let lines = reconstruct_lines(raw);
    let personal_info = extract_personal_info(raw, &lines, thresholds);
    let sections = locate_sections(&lines, thresholds);
    let content = |kind: SectionKind| sections.content(kind, &lines);

    let record = CvRecord {
        personal_info,
        skills: extract_skills(&content(SectionKind::Skills), thresholds),
        experiences: extract_experiences(&content(SectionKind::Experience), thresholds),
        education: extract_education(&content(SectionKind::Education), thresholds),
        projects: extract_projects(&content(SectionKind::Projects), thresholds),
    };

    debug!(
        lines = lines.len(),
        skills = record.skills.len(),
        experiences = record.experiences.len(),
        education = record.education.len(),
        projects = record.projects.len(),
        "Structured CV text"
    );

    record
}
