//! Date-range recognition for experience and education lines.
//!
//! Dates are kept as the literal text found in the document; only the
//! "ongoing" flag is interpreted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::structuring::taxonomy::PRESENT_WORDS;

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

fn date_pattern() -> String {
    format!(r"(?:{MONTH}\.?,?\s+)?(?:\d{{1,2}}/)?(?:19|20)\d{{2}}")
}

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    let date = date_pattern();
    let present = PRESENT_WORDS.join("|");
    Regex::new(&format!(
        r"(?i)\b({date})\s*(?:-|–|—|to|until)\s*({date}|{present})\b"
    ))
    .unwrap()
});

static SINGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b{}\b", date_pattern())).unwrap());

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

static DATE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?:{MONTH}\.?|(?:\d{{1,2}}/)?\d{{4}})$")).unwrap()
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
    /// The end of the range reads as "present"/"current".
    pub current: bool,
}

/// A date range found inside a line, with the byte span it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct DateMatch {
    pub range: DateRange,
    pub start: usize,
    pub end: usize,
}

/// Finds the first `start – end` range in `line`, falling back to a single
/// date (recorded as the start).
pub fn find_dates(line: &str) -> Option<DateMatch> {
    if let Some(caps) = RANGE_RE.captures(line) {
        let whole = caps.get(0)?;
        let start = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
        let end = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
        let current = PRESENT_WORDS.contains(&end.to_lowercase().as_str());
        return Some(DateMatch {
            range: DateRange {
                start,
                end,
                current,
            },
            start: whole.start(),
            end: whole.end(),
        });
    }

    SINGLE_RE.find(line).map(|m| DateMatch {
        range: DateRange {
            start: m.as_str().trim().to_string(),
            end: String::new(),
            current: false,
        },
        start: m.start(),
        end: m.end(),
    })
}

/// True when the line mentions a four-digit year.
pub fn contains_year(line: &str) -> bool {
    YEAR_RE.is_match(line)
}

/// True when a single word reads as part of a date ("2020", "Jan", "03/2019").
pub fn is_date_token(word: &str) -> bool {
    let word = word.trim_matches(|c: char| matches!(c, ',' | ';' | ':' | '(' | ')'));
    !word.is_empty() && DATE_TOKEN_RE.is_match(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range() {
        let m = find_dates("Acme Corp 2018 - 2020").unwrap();
        assert_eq!(m.range.start, "2018");
        assert_eq!(m.range.end, "2020");
        assert!(!m.range.current);
        assert_eq!(&"Acme Corp 2018 - 2020"[..m.start], "Acme Corp ");
    }

    #[test]
    fn test_month_range_with_en_dash() {
        let m = find_dates("Globex, Jan 2019 – Mar 2021, Berlin").unwrap();
        assert_eq!(m.range.start, "Jan 2019");
        assert_eq!(m.range.end, "Mar 2021");
    }

    #[test]
    fn test_present_and_current_any_casing() {
        for end in ["Present", "PRESENT", "current", "Current"] {
            let line = format!("Initech 2020 - {end}");
            let m = find_dates(&line).unwrap();
            assert!(m.range.current, "{end}");
            assert_eq!(m.range.end, end);
        }
    }

    #[test]
    fn test_to_keyword_and_full_month_names() {
        let m = find_dates("September 2015 to June 2017").unwrap();
        assert_eq!(m.range.start, "September 2015");
        assert_eq!(m.range.end, "June 2017");
    }

    #[test]
    fn test_single_date_is_recorded_as_start() {
        let m = find_dates("MIT 2016").unwrap();
        assert_eq!(m.range.start, "2016");
        assert_eq!(m.range.end, "");
        assert_eq!(m.start, 4);
    }

    #[test]
    fn test_no_dates() {
        assert!(find_dates("Built a thing for 300 users").is_none());
        assert!(!contains_year("Built a thing for 300 users"));
        assert!(contains_year("Since 2019"));
    }

    #[test]
    fn test_date_tokens() {
        assert!(is_date_token("2020"));
        assert!(is_date_token("Jan"));
        assert!(is_date_token("Sept."));
        assert!(is_date_token("03/2019,"));
        assert!(!is_date_token("Corp"));
        assert!(!is_date_token(""));
    }
}
