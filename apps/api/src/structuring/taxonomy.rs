//! Keyword tables that drive every heuristic in the structuring engine.
//!
//! Traversal code never embeds literals; it looks words up here. Bump
//! `TAXONOMY_VERSION` whenever a table changes so stored records can be traced
//! back to the vocabulary that produced them.

use crate::structuring::models::SkillCategory;
use crate::structuring::sections::SectionKind;

pub const TAXONOMY_VERSION: u32 = 1;

// ────────────────────────────────────────────────────────────────────────────
// Line reconstruction
// ────────────────────────────────────────────────────────────────────────────

/// Keywords that get a line break inserted before them when they are glued to
/// preceding text. Multi-word phrases come first so "Work Experience" stays on
/// one line.
pub const HEADER_BREAK_KEYWORDS: &[&str] = &[
    "professional experience",
    "work experience",
    "employment history",
    "professional summary",
    "technical skills",
    "personal projects",
    "experience",
    "education",
    "skills",
    "projects",
    "summary",
];

/// Words ending in a period that do not end a sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "inc", "ltd", "corp", "co", "jr", "sr", "dr", "mr", "mrs", "ms", "st", "vs", "etc", "no",
    "dept", "univ", "approx",
];

/// Glyphs that always start a list item.
pub const ROUND_BULLETS: &[char] = &['•', '●', '▪', '◦', '■', '‣', '·'];

/// Dash-like glyphs that start a list item when followed by whitespace.
pub const DASH_BULLETS: &[char] = &['-', '–', '—', '*'];

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Header aliases per recognized section, lower-case.
pub const SECTION_ALIASES: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Summary,
        &[
            "summary",
            "professional summary",
            "objective",
            "career objective",
            "profile",
            "about me",
        ],
    ),
    (
        SectionKind::Skills,
        &["skills", "technical skills", "core competencies", "competencies"],
    ),
    (
        SectionKind::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment history",
            "employment",
            "work history",
        ],
    ),
    (
        SectionKind::Education,
        &["education", "academic background", "academics"],
    ),
    (
        SectionKind::Projects,
        &["projects", "personal projects", "key projects", "side projects"],
    ),
];

/// Headers that close the preceding section but are not extracted.
pub const BOUNDARY_HEADERS: &[&str] = &[
    "certifications",
    "certificates",
    "languages",
    "awards",
    "honors",
    "interests",
    "hobbies",
    "references",
    "publications",
    "volunteer",
    "volunteering",
];

/// Words that may follow a boundary header on its own line
/// ("Honors and Awards", "Volunteer Experience").
pub const BOUNDARY_HEADER_QUALIFIERS: &[&str] = &[
    "and",
    "experience",
    "work",
    "activities",
    "achievements",
    "licenses",
    "affiliations",
];

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

/// A name line never contains any of these words.
pub const NAME_STOPWORDS: &[&str] = &["skills", "experience", "education", "resume", "cv"];

/// Words that mark a line as a job title near the top of the document.
pub const JOB_TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "designer",
    "manager",
    "analyst",
    "architect",
    "lead",
    "senior",
];

/// Words that introduce the summary paragraph.
pub const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "profile", "about"];

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

/// Role words that make a capitalized line an experience title.
pub const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "programmer",
    "manager",
    "analyst",
    "designer",
    "architect",
    "consultant",
    "intern",
    "lead",
    "director",
    "specialist",
    "scientist",
    "administrator",
    "coordinator",
    "officer",
    "head",
    "technician",
    "associate",
    "assistant",
    "founder",
    "president",
    "executive",
    "researcher",
    "teacher",
    "instructor",
    "owner",
    "contractor",
    "freelancer",
];

/// Terms that identify an educational institution rather than an employer.
pub const INSTITUTION_TERMS: &[&str] = &[
    "university",
    "college",
    "school",
    "institute",
    "academy",
    "bachelor",
    "master",
    "phd",
];

/// Degree words and abbreviations.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "bachelors",
    "master",
    "masters",
    "phd",
    "ph.d",
    "doctorate",
    "doctor of",
    "mba",
    "b.s",
    "b.sc",
    "bsc",
    "bs",
    "b.a",
    "ba",
    "m.s",
    "m.sc",
    "msc",
    "m.a",
    "b.tech",
    "m.tech",
    "b.eng",
    "m.eng",
    "beng",
    "meng",
    "associate degree",
    "diploma",
];

/// End-of-range words meaning the role is ongoing.
pub const PRESENT_WORDS: &[&str] = &["present", "current", "now", "ongoing", "today"];

/// Keywords per skill category, checked in order; the first hit wins.
pub const SKILL_CATEGORIES: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Languages,
        &[
            "javascript",
            "typescript",
            "python",
            "java",
            "c",
            "c++",
            "c#",
            "go",
            "golang",
            "rust",
            "ruby",
            "php",
            "swift",
            "kotlin",
            "scala",
            "r",
            "matlab",
            "perl",
            "dart",
            "elixir",
            "haskell",
            "lua",
            "objective-c",
            "sql",
            "html",
            "css",
            "bash",
            "shell",
        ],
    ),
    (
        SkillCategory::Frameworks,
        &[
            "react",
            "angular",
            "vue",
            "svelte",
            "next.js",
            "nuxt",
            "node.js",
            "nodejs",
            "express",
            "django",
            "flask",
            "fastapi",
            "spring",
            "spring boot",
            "rails",
            "ruby on rails",
            "laravel",
            ".net",
            "asp.net",
            "tensorflow",
            "pytorch",
            "keras",
            "scikit-learn",
            "pandas",
            "numpy",
            "flutter",
            "react native",
            "tailwind",
            "bootstrap",
            "jquery",
            "axum",
            "actix",
            "tokio",
        ],
    ),
    (
        SkillCategory::Databases,
        &[
            "postgresql",
            "postgres",
            "mysql",
            "mariadb",
            "sqlite",
            "mongodb",
            "redis",
            "cassandra",
            "dynamodb",
            "elasticsearch",
            "oracle",
            "sql server",
            "firebase",
            "neo4j",
            "couchdb",
            "snowflake",
            "bigquery",
        ],
    ),
    (
        SkillCategory::Tools,
        &[
            "git",
            "github",
            "gitlab",
            "docker",
            "kubernetes",
            "k8s",
            "jenkins",
            "terraform",
            "ansible",
            "aws",
            "azure",
            "gcp",
            "google cloud",
            "linux",
            "jira",
            "figma",
            "webpack",
            "vite",
            "npm",
            "postman",
            "grafana",
            "prometheus",
            "kafka",
            "rabbitmq",
            "nginx",
            "ci/cd",
            "vs code",
        ],
    ),
];

/// True when `keyword` appears in `haystack` as a whole word. Both sides are
/// expected lower-case. Word characters are ASCII alphanumerics plus `+` and
/// `#`, so "c" does not match inside "c++" and "java" not inside "javascript".
pub fn contains_word(haystack: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    haystack.match_indices(keyword).any(|(start, _)| {
        let end = start + keyword.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}

/// True when any of `keywords` appears in `haystack` as a whole word.
pub fn contains_any_word(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_word(haystack, k))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '#'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_word_respects_boundaries() {
        assert!(contains_word("java, spring", "java"));
        assert!(!contains_word("javascript", "java"));
        assert!(!contains_word("c++", "c"));
        assert!(contains_word("c++", "c++"));
        assert!(contains_word("ruby on rails", "rails"));
        assert!(!contains_word("leadership", "lead"));
    }

    #[test]
    fn test_contains_word_handles_dotted_keywords() {
        assert!(contains_word("b.s. computer science", "b.s"));
        assert!(contains_word("node.js", "node.js"));
        assert!(!contains_word("jobs", "bs"));
    }

    #[test]
    fn test_every_section_has_aliases() {
        for kind in SectionKind::ALL {
            assert!(
                SECTION_ALIASES.iter().any(|(k, a)| *k == kind && !a.is_empty()),
                "{kind:?} has no aliases"
            );
        }
    }

    #[test]
    fn test_tables_are_lower_case() {
        let tables: [&[&str]; 7] = [
            HEADER_BREAK_KEYWORDS,
            BOUNDARY_HEADERS,
            BOUNDARY_HEADER_QUALIFIERS,
            ROLE_KEYWORDS,
            DEGREE_KEYWORDS,
            JOB_TITLE_KEYWORDS,
            PRESENT_WORDS,
        ];
        for word in tables.iter().flat_map(|t| t.iter()) {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
