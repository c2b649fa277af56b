//! Personal-info extraction: name, title, contact details and summary from
//! the top of the document.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::structuring::models::{PersonalInfo, PLACEHOLDER_NAME, PLACEHOLDER_SUMMARY};
use crate::structuring::sections::classify_header;
use crate::structuring::taxonomy::{
    contains_any_word, JOB_TITLE_KEYWORDS, NAME_STOPWORDS, SUMMARY_KEYWORDS,
};
use crate::structuring::thresholds::Thresholds;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").unwrap());

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\(?\d{1,4}\)?(?:[ \t.\-]?\(?\d{1,4}\)?){2,4}").unwrap());

static LINKEDIN_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/([A-Za-z0-9_%\-]+)").unwrap());

static LINKEDIN_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\blinkedin\s*:\s*@?([A-Za-z0-9_\-]+)").unwrap());

static GITHUB_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)github\.com/([A-Za-z0-9_\-]+)").unwrap());

static GITHUB_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bgithub\s*:\s*@?([A-Za-z0-9_\-]+)").unwrap());

pub fn extract_personal_info(raw: &str, lines: &[String], thresholds: &Thresholds) -> PersonalInfo {
    let email = find_email(raw).unwrap_or_default();
    let email_line = (!email.is_empty())
        .then(|| lines.iter().position(|l| l.contains(email.as_str())))
        .flatten();

    let name_index = find_name_index(lines, email_line, thresholds);
    let full_name = name_index
        .and_then(|i| lines.get(i))
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());

    PersonalInfo {
        full_name,
        title: find_title(lines, name_index, thresholds).unwrap_or_default(),
        email,
        phone: find_phone(raw).unwrap_or_default(),
        linkedin: find_linkedin(raw).unwrap_or_default(),
        github: find_github(raw).unwrap_or_default(),
        summary: find_summary(lines, thresholds)
            .unwrap_or_else(|| PLACEHOLDER_SUMMARY.to_string()),
    }
}

pub fn find_email(raw: &str) -> Option<String> {
    EMAIL_RE.find(raw).map(|m| m.as_str().to_string())
}

/// First number shaped like a phone: enough digits that year ranges
/// ("2016-2020") do not qualify.
pub fn find_phone(raw: &str) -> Option<String> {
    PHONE_RE
        .find_iter(raw)
        .map(|m| m.as_str().trim())
        .find(|candidate| {
            let digits = candidate.chars().filter(char::is_ascii_digit).count();
            (10..=15).contains(&digits) || (candidate.starts_with('+') && (8..=15).contains(&digits))
        })
        .map(String::from)
}

pub fn find_linkedin(raw: &str) -> Option<String> {
    first_handle(raw, &LINKEDIN_URL_RE, &LINKEDIN_LABEL_RE)
        .map(|handle| format!("https://www.linkedin.com/in/{handle}"))
}

pub fn find_github(raw: &str) -> Option<String> {
    first_handle(raw, &GITHUB_URL_RE, &GITHUB_LABEL_RE).map(|handle| format!("https://github.com/{handle}"))
}

fn first_handle<'a>(raw: &'a str, url: &Regex, label: &Regex) -> Option<&'a str> {
    url.captures(raw)
        .or_else(|| label.captures(raw))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Scans the lines above the email (or the first few lines) for a name.
fn find_name_index(lines: &[String], email_line: Option<usize>, t: &Thresholds) -> Option<usize> {
    let scan = match email_line {
        Some(i) if i > 0 => i,
        _ => t.name_scan_lines.min(lines.len()),
    };
    lines[..scan]
        .iter()
        .position(|line| is_name_candidate(line, t))
}

fn is_name_candidate(line: &str, t: &Thresholds) -> bool {
    let len = line.chars().count();
    let lower = line.to_lowercase();
    (t.name_min_len..=t.name_max_len).contains(&len)
        && !line.contains('@')
        && longest_digit_run(line) < t.name_digit_run
        && !contains_any_word(&lower, NAME_STOPWORDS)
        && !lower.contains("://")
        && !lower.contains("linkedin")
        && !lower.contains("github")
        && classify_header(line, t).is_none()
}

fn longest_digit_run(line: &str) -> usize {
    line.split(|c: char| !c.is_ascii_digit())
        .map(str::len)
        .max()
        .unwrap_or(0)
}

fn find_title(lines: &[String], name_index: Option<usize>, t: &Thresholds) -> Option<String> {
    lines
        .iter()
        .take(t.title_scan_lines)
        .enumerate()
        .filter(|(i, _)| Some(*i) != name_index)
        .map(|(_, line)| line)
        .find(|line| {
            line.chars().count() < t.title_max_len
                && contains_any_word(&line.to_lowercase(), JOB_TITLE_KEYWORDS)
        })
        .cloned()
}

/// Finds a short "Summary"/"Objective"/"Profile"/"About" line and joins the
/// long lines that follow it, stopping at the next section header.
fn find_summary(lines: &[String], t: &Thresholds) -> Option<String> {
    let header = lines.iter().take(t.summary_scan_lines).position(|line| {
        line.chars().count() < t.summary_header_max_len
            && contains_any_word(&line.to_lowercase(), SUMMARY_KEYWORDS)
    })?;

    let paragraph = lines[header + 1..]
        .iter()
        .take_while(|line| classify_header(line, t).is_none())
        .filter(|line| line.chars().count() > t.summary_line_min_len)
        .take(t.summary_max_lines)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let summary: String = paragraph.chars().take(t.summary_max_chars).collect();
    let summary = summary.trim().to_string();
    (!summary.is_empty()).then_some(summary)
}
