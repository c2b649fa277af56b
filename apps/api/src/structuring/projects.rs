//! Projects extraction.
//!
//! A capitalized line opens a project only once the open project has a body,
//! so a name that wrapped onto two lines is not split into two projects.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::structuring::education::is_degree_line;
use crate::structuring::machine::{
    is_bullet, starts_lowercase, starts_uppercase, Draft, Grammar, Rule, RuleInput, Transition,
    TriggerInput,
};
use crate::structuring::models::{sequential_id, ProjectEntry};
use crate::structuring::thresholds::Thresholds;

/// "Tech Stack: ...", "Link: ...": metadata, not a project name.
static LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z /&]{0,20}:").unwrap());

const RULES: &[Rule] = &[
    Rule {
        when: bulleted,
        then: Transition::Achievement,
    },
    Rule {
        when: describes,
        then: Transition::Description,
    },
    Rule {
        when: before_body,
        then: Transition::ExtendTitle,
    },
    Rule {
        when: wraps,
        then: Transition::ExtendText,
    },
    Rule {
        when: long_line,
        then: Transition::Achievement,
    },
];

pub const GRAMMAR: Grammar = Grammar {
    trigger: is_project_name,
    open: Draft::titled,
    rules: RULES,
};

pub fn extract_projects(content: &[&str], thresholds: &Thresholds) -> Vec<ProjectEntry> {
    GRAMMAR
        .run(content, thresholds)
        .into_iter()
        .enumerate()
        .map(|(i, draft)| ProjectEntry {
            id: sequential_id("proj", i),
            name: draft.title,
            description: draft.description,
            achievements: draft.achievements,
        })
        .collect()
}

fn is_project_name(input: &TriggerInput) -> bool {
    let line = input.line;
    let len = line.chars().count();
    starts_uppercase(line)
        && (input.thresholds.trigger_min_len..=input.thresholds.trigger_max_len).contains(&len)
        && !is_degree_line(line)
        && !LABEL_RE.is_match(line)
        && input.open.map_or(true, Draft::has_body)
}

fn bulleted(input: &RuleInput) -> bool {
    is_bullet(input.line)
}

fn describes(input: &RuleInput) -> bool {
    !input.draft.has_description()
        && input.line_len() > input.thresholds.project_description_min_len
}

fn before_body(input: &RuleInput) -> bool {
    !input.draft.has_body()
}

fn wraps(input: &RuleInput) -> bool {
    starts_lowercase(input.line)
}

fn long_line(input: &RuleInput) -> bool {
    input.line_len() > input.thresholds.project_description_min_len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(lines: &[&str]) -> Vec<ProjectEntry> {
        extract_projects(lines, &Thresholds::default())
    }

    #[test]
    fn test_name_description_and_bullets() {
        let entries = extract(&[
            "Resume Parser",
            "A library that turns extracted PDF text into structured records",
            "- Handles five section types",
            "- Degrades gracefully on noisy input",
        ]);
        assert_eq!(entries.len(), 1);
        let p = &entries[0];
        assert_eq!(p.id, "proj-1");
        assert_eq!(p.name, "Resume Parser");
        assert_eq!(
            p.description,
            "A library that turns extracted PDF text into structured records"
        );
        assert_eq!(
            p.achievements,
            vec!["Handles five section types", "Degrades gracefully on noisy input"]
        );
    }

    #[test]
    fn test_wrapped_name_is_not_split() {
        let entries = extract(&[
            "Distributed Task Queue",
            "(Open Source)",
            "A Redis-backed job runner used by three internal teams",
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Distributed Task Queue (Open Source)");
    }

    #[test]
    fn test_next_project_starts_after_body() {
        let entries = extract(&[
            "Weather Dashboard",
            "Live forecasts rendered with WebGL and served from the edge",
            "Chess Engine",
            "- Bitboard move generation",
            "Budget Tracker",
        ]);
        let names: Vec<_> = entries.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Weather Dashboard", "Chess Engine", "Budget Tracker"]);
        assert_eq!(entries[2].id, "proj-3");
        assert!(entries[2].description.is_empty());
    }

    #[test]
    fn test_label_lines_stay_in_project() {
        let entries = extract(&[
            "Portfolio Site",
            "Personal site with a blog and project gallery",
            "Tech Stack: Astro, Tailwind, Netlify",
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].achievements, vec!["Tech Stack: Astro, Tailwind, Netlify"]);
    }

    #[test]
    fn test_degree_lines_never_become_projects() {
        assert!(extract(&["Bachelor of Science, MIT, 2020"]).is_empty());
    }
}
