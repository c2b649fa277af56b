//! Experience extraction.
//!
//! Trigger: a capitalized line of plausible title length that names a role
//! ("Software Engineer") and is neither an education line nor a sentence.
//! Continuation, first match wins:
//! 1. no company yet: company (text before any dates) and dates
//! 2. bullet: achievement
//! 3. short year-bearing line while dates are missing: dates
//! 4. long line while no description: description
//! 5. line starting lowercase: wraps the previous text
//! 6. remaining long lines: unmarked achievements

use crate::structuring::dates::contains_year;
use crate::structuring::machine::{
    is_bullet, split_heading, starts_lowercase, starts_uppercase, take_dates, Draft, Grammar, Rule,
    RuleInput, Transition, TriggerInput,
};
use crate::structuring::models::{sequential_id, ExperienceEntry};
use crate::structuring::taxonomy::{contains_any_word, INSTITUTION_TERMS, ROLE_KEYWORDS};
use crate::structuring::thresholds::Thresholds;

const HEADING_SEPARATORS: &[&str] = &[" at ", " | ", " @ "];

const RULES: &[Rule] = &[
    Rule {
        when: lacks_company,
        then: Transition::Organization,
    },
    Rule {
        when: bulleted,
        then: Transition::Achievement,
    },
    Rule {
        when: fills_dates,
        then: Transition::Dates,
    },
    Rule {
        when: describes,
        then: Transition::Description,
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
    trigger: is_position_line,
    open: open_position,
    rules: RULES,
};

pub fn extract_experiences(content: &[&str], thresholds: &Thresholds) -> Vec<ExperienceEntry> {
    GRAMMAR
        .run(content, thresholds)
        .into_iter()
        .enumerate()
        .map(|(i, draft)| into_entry(i, draft))
        .collect()
}

fn into_entry(index: usize, draft: Draft) -> ExperienceEntry {
    let dates = draft.dates.unwrap_or_default();
    ExperienceEntry {
        id: sequential_id("exp", index),
        position: draft.title,
        company: draft.organization,
        start_date: dates.start,
        end_date: dates.end,
        current: dates.current,
        description: draft.description,
        achievements: draft.achievements,
    }
}

fn is_position_line(input: &TriggerInput) -> bool {
    let line = input.line;
    let len = line.chars().count();
    let lower = line.to_lowercase();
    starts_uppercase(line)
        && (input.thresholds.trigger_min_len..=input.thresholds.trigger_max_len).contains(&len)
        && contains_any_word(&lower, ROLE_KEYWORDS)
        && !contains_any_word(&lower, INSTITUTION_TERMS)
        && !line.ends_with('.')
}

/// "Software Engineer at Google, 2019 - 2021" opens a fully populated heading.
fn open_position(line: &str) -> Draft {
    let (text, dates) = take_dates(line);
    let (position, company) = split_heading(text, HEADING_SEPARATORS);
    let title = if position.is_empty() { line.trim() } else { position };
    Draft {
        title: title.to_string(),
        organization: company.unwrap_or_default().to_string(),
        dates,
        ..Draft::default()
    }
}

fn lacks_company(input: &RuleInput) -> bool {
    !input.draft.has_organization()
}

fn bulleted(input: &RuleInput) -> bool {
    is_bullet(input.line)
}

fn fills_dates(input: &RuleInput) -> bool {
    input.draft.dates.is_none()
        && input.line_len() <= input.thresholds.dates_line_max_len
        && contains_year(input.line)
}

fn describes(input: &RuleInput) -> bool {
    !input.draft.has_description()
        && input.line_len() > input.thresholds.experience_description_min_len
}

fn wraps(input: &RuleInput) -> bool {
    starts_lowercase(input.line)
}

fn long_line(input: &RuleInput) -> bool {
    input.line_len() > input.thresholds.experience_description_min_len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(lines: &[&str]) -> Vec<ExperienceEntry> {
        extract_experiences(lines, &Thresholds::default())
    }

    #[test]
    fn test_single_entry_with_company_dates_and_bullets() {
        let entries = extract(&[
            "Software Engineer",
            "Acme Corp 2020 - Present",
            "- Built X",
            "- Shipped Y",
            "- Fixed Z",
        ]);
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.id, "exp-1");
        assert_eq!(e.position, "Software Engineer");
        assert_eq!(e.company, "Acme Corp");
        assert_eq!(e.start_date, "2020");
        assert_eq!(e.end_date, "Present");
        assert!(e.current);
        assert_eq!(e.achievements, vec!["Built X", "Shipped Y", "Fixed Z"]);
    }

    #[test]
    fn test_current_detection_any_casing() {
        for end in ["PRESENT", "current", "Current"] {
            let org = format!("Initech Jan 2021 – {end}");
            let entries = extract(&["Data Analyst", org.as_str()]);
            assert!(entries[0].current, "{end}");
            assert_eq!(entries[0].end_date, end);
        }
    }

    #[test]
    fn test_past_role_is_not_current() {
        let entries = extract(&["Data Analyst", "Initech 2016 - 2019"]);
        assert!(!entries[0].current);
        assert_eq!(entries[0].end_date, "2019");
    }

    #[test]
    fn test_multiple_entries_in_order() {
        let entries = extract(&[
            "Senior Backend Engineer",
            "Globex 2021 - Present",
            "- Led migration to Rust",
            "Backend Developer",
            "Initech 2018 - 2021",
            "- Maintained billing service",
        ]);
        let positions: Vec<_> = entries.iter().map(|e| e.position.as_str()).collect();
        assert_eq!(positions, vec!["Senior Backend Engineer", "Backend Developer"]);
        assert_eq!(entries[1].id, "exp-2");
        assert_eq!(entries[1].company, "Initech");
        assert_eq!(entries[1].achievements, vec!["Maintained billing service"]);
    }

    #[test]
    fn test_trigger_without_body_is_still_emitted() {
        let entries = extract(&["Product Manager"]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "");
        assert!(entries[0].achievements.is_empty());
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn test_company_without_year_takes_whole_line() {
        let entries = extract(&["QA Engineer", "- Hooli", "Jan 2019 - Dec 2020", "- Wrote tests"]);
        let e = &entries[0];
        assert_eq!(e.company, "Hooli");
        assert_eq!(e.start_date, "Jan 2019");
        assert_eq!(e.end_date, "Dec 2020");
        assert_eq!(e.achievements, vec!["Wrote tests"]);
    }

    #[test]
    fn test_description_and_wrapped_achievement() {
        let entries = extract(&[
            "Platform Engineer",
            "Umbrella 2019 - 2020",
            "Owned the internal deployment platform for 40 teams",
            "- Cut deploy time from 30 minutes",
            "to under 5 minutes",
        ]);
        let e = &entries[0];
        assert_eq!(e.description, "Owned the internal deployment platform for 40 teams");
        assert_eq!(e.achievements, vec!["Cut deploy time from 30 minutes to under 5 minutes"]);
    }

    #[test]
    fn test_heading_with_company_and_dates() {
        let entries = extract(&["Software Engineer at Google, 2019 - 2021", "- Built search"]);
        let e = &entries[0];
        assert_eq!(e.position, "Software Engineer");
        assert_eq!(e.company, "Google");
        assert_eq!(e.start_date, "2019");
        assert_eq!(e.achievements, vec!["Built search"]);
    }

    #[test]
    fn test_education_lines_do_not_trigger() {
        let entries = extract(&["Teaching Assistant, Stanford University"]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_sentences_do_not_trigger() {
        let entries = extract(&[
            "Site Reliability Engineer",
            "Hooli 2020 - 2022",
            "Managed a rotation of six engineers across two regions.",
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].description,
            "Managed a rotation of six engineers across two regions."
        );
    }
}
