//! Line reconstruction: turns extractor output into one logical line per
//! header, list item or sentence run.
//!
//! PDF/DOCX text extraction routinely glues headers and list items onto the
//! previous line. Three rewrites restore the breaks, in this order:
//! 1. a break before glued section-header keywords,
//! 2. a break before bullet markers,
//! 3. a break after sentence-ending punctuation followed by a capital letter.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::structuring::dates::is_date_token;
use crate::structuring::sections::is_header_tail;
use crate::structuring::taxonomy::{
    ABBREVIATIONS, BOUNDARY_HEADERS, DASH_BULLETS, HEADER_BREAK_KEYWORDS, ROUND_BULLETS,
};

static HEADER_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = HEADER_BREAK_KEYWORDS
        .iter()
        .map(|k| regex::escape(k).replace(' ', r"[ \t]+"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)[ \t]+({alternation})\b")).unwrap()
});

static BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    let round: String = ROUND_BULLETS.iter().collect();
    let dash: String = DASH_BULLETS.iter().map(|c| regex::escape(&c.to_string())).collect();
    Regex::new(&format!(r"[ \t]+([{round}]|[{dash}][ \t])")).unwrap()
});

static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?])[ \t]+([A-Z])").unwrap());

/// Splits raw document text into trimmed, non-empty logical lines.
///
/// Deterministic; any input with at least one non-whitespace character yields
/// at least one line.
pub fn reconstruct_lines(raw: &str) -> Vec<String> {
    let text = break_before_headers(raw);
    let text = break_before_bullets(&text);
    let text = break_after_sentences(&text);

    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

fn break_before_headers(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for caps in HEADER_BREAK_RE.captures_iter(text) {
        let (Some(whole), Some(keyword)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // "experience in Rust" and "User Experience Designer" stay put,
        // "EXPERIENCE Software Engineer" is a header.
        if !is_header_tail(keyword.as_str(), &text[keyword.end()..])
            || qualifies_boundary(&text[..whole.start()])
        {
            continue;
        }
        out.push_str(&text[last..whole.start()]);
        out.push('\n');
        out.push_str(keyword.as_str());
        last = keyword.end();
    }
    out.push_str(&text[last..]);
    out
}

/// "Volunteer Experience" names one boundary section, not two.
fn qualifies_boundary(before: &str) -> bool {
    before
        .rsplit(char::is_whitespace)
        .next()
        .is_some_and(|word| BOUNDARY_HEADERS.contains(&word.to_ascii_lowercase().as_str()))
}

fn break_before_bullets(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for caps in BULLET_RE.captures_iter(text) {
        let (Some(whole), Some(marker)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let is_dash = marker
            .as_str()
            .chars()
            .next()
            .is_some_and(|c| DASH_BULLETS.contains(&c));
        // "2020 - Present" and "Jan – Mar 2021" are ranges, not list items.
        if is_dash && ends_with_date_token(&text[..whole.start()]) {
            continue;
        }
        out.push_str(&text[last..whole.start()]);
        out.push('\n');
        last = marker.start();
    }
    out.push_str(&text[last..]);
    out
}

fn break_after_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for caps in SENTENCE_RE.captures_iter(text) {
        let (Some(whole), Some(punct), Some(capital)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if punct.as_str() == "." && is_abbreviation(last_word(&text[..whole.start()])) {
            continue;
        }
        out.push_str(&text[last..punct.end()]);
        out.push('\n');
        last = capital.start();
    }
    out.push_str(&text[last..]);
    out
}

fn last_word(prefix: &str) -> &str {
    prefix
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
}

fn ends_with_date_token(prefix: &str) -> bool {
    is_date_token(last_word(prefix))
}

/// Initials ("J"), dotted abbreviations ("B.S") and known short forms ("Inc").
fn is_abbreviation(word: &str) -> bool {
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() || word.chars().count() == 1 || word.contains('.') {
        return true;
    }
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}
