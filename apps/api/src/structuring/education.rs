//! Education extraction.
//!
//! Trigger: a line naming a degree ("Bachelor of Science", "M.Sc", "PhD").
//! The first following line is the school (with its dates when present); a
//! later short line may still supply a missing year.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::structuring::dates::contains_year;
use crate::structuring::machine::{
    split_heading, take_dates, trim_separators, Draft, Grammar, Rule, RuleInput, Transition,
    TriggerInput,
};
use crate::structuring::models::{sequential_id, EducationEntry};
use crate::structuring::taxonomy::{contains_any_word, DEGREE_KEYWORDS};
use crate::structuring::thresholds::Thresholds;

const HEADING_SEPARATORS: &[&str] = &[", ", " | ", " at ", " from ", " - ", " – "];

static FIELD_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+in\s+").unwrap());

const RULES: &[Rule] = &[
    Rule {
        when: lacks_school,
        then: Transition::Organization,
    },
    Rule {
        when: fills_year,
        then: Transition::Dates,
    },
];

pub const GRAMMAR: Grammar = Grammar {
    trigger: is_degree_trigger,
    open: open_degree,
    rules: RULES,
};

pub fn extract_education(content: &[&str], thresholds: &Thresholds) -> Vec<EducationEntry> {
    GRAMMAR
        .run(content, thresholds)
        .into_iter()
        .enumerate()
        .map(|(i, draft)| into_entry(i, draft))
        .collect()
}

/// True for lines that mention a degree, whatever their position.
pub fn is_degree_line(line: &str) -> bool {
    contains_any_word(&line.to_lowercase(), DEGREE_KEYWORDS)
}

fn into_entry(index: usize, draft: Draft) -> EducationEntry {
    let (degree, field) = split_degree(&draft.title);
    let end_date = draft
        .dates
        .map(|d| if d.end.is_empty() { d.start } else { d.end })
        .unwrap_or_default();
    EducationEntry {
        id: sequential_id("edu", index),
        degree,
        field,
        school: draft.organization,
        end_date,
    }
}

/// "B.S. in Computer Science" → ("B.S.", "Computer Science").
fn split_degree(title: &str) -> (String, String) {
    match FIELD_SPLIT_RE.splitn(title, 2).collect::<Vec<_>>().as_slice() {
        [degree, field] if !degree.trim().is_empty() => (
            trim_separators(degree).to_string(),
            trim_separators(field).to_string(),
        ),
        _ => (title.to_string(), String::new()),
    }
}

fn is_degree_trigger(input: &TriggerInput) -> bool {
    input.line.chars().count() < input.thresholds.degree_line_max_len && is_degree_line(input.line)
}

/// "Bachelor of Science, MIT, 2020" carries its school and year inline.
fn open_degree(line: &str) -> Draft {
    let (text, dates) = take_dates(line);
    let (degree, school) = split_heading(text, HEADING_SEPARATORS);
    let title = if degree.is_empty() { line.trim() } else { degree };
    Draft {
        title: title.to_string(),
        organization: school.unwrap_or_default().to_string(),
        dates,
        ..Draft::default()
    }
}

fn lacks_school(input: &RuleInput) -> bool {
    !input.draft.has_organization()
}

fn fills_year(input: &RuleInput) -> bool {
    input.draft.dates.is_none()
        && input.line_len() <= input.thresholds.dates_line_max_len
        && contains_year(input.line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(lines: &[&str]) -> Vec<EducationEntry> {
        extract_education(lines, &Thresholds::default())
    }

    #[test]
    fn test_degree_then_school_with_year() {
        let entries = extract(&["Bachelor of Science", "MIT 2016"]);
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.id, "edu-1");
        assert_eq!(e.degree, "Bachelor of Science");
        assert_eq!(e.school, "MIT");
        assert_eq!(e.end_date, "2016");
    }

    #[test]
    fn test_single_line_entry() {
        let entries = extract(&["Bachelor of Science, MIT, 2020"]);
        let e = &entries[0];
        assert_eq!(e.degree, "Bachelor of Science");
        assert_eq!(e.school, "MIT");
        assert_eq!(e.end_date, "2020");
    }

    #[test]
    fn test_field_is_split_from_degree() {
        let entries = extract(&["B.S. in Computer Science", "Stanford University", "2012 - 2016"]);
        let e = &entries[0];
        assert_eq!(e.degree, "B.S.");
        assert_eq!(e.field, "Computer Science");
        assert_eq!(e.school, "Stanford University");
        assert_eq!(e.end_date, "2016");
    }

    #[test]
    fn test_multiple_degrees() {
        let entries = extract(&[
            "Master of Science in Data Science",
            "ETH Zurich 2019",
            "Bachelor of Engineering",
            "TU Delft 2017",
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].field, "Data Science");
        assert_eq!(entries[0].school, "ETH Zurich");
        assert_eq!(entries[1].id, "edu-2");
        assert_eq!(entries[1].school, "TU Delft");
    }

    #[test]
    fn test_degree_without_details_is_still_emitted() {
        let entries = extract(&["PhD"]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "PhD");
        assert_eq!(entries[0].school, "");
        assert_eq!(entries[0].end_date, "");
    }

    #[test]
    fn test_lines_without_degree_are_ignored_until_trigger() {
        let entries = extract(&["Relevant coursework", "GPA 3.9"]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_degree_line_detection() {
        assert!(is_degree_line("Bachelor of Arts"));
        assert!(is_degree_line("M.Sc. Physics"));
        assert!(is_degree_line("MBA, Wharton"));
        assert!(!is_degree_line("Weather App"));
        assert!(!is_degree_line("Jobs board"));
    }
}
