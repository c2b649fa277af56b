//! Section locator: finds which lines belong to Summary, Skills, Experience,
//! Education and Projects.
//!
//! A header is a short line that equals, or starts with, one of the section's
//! aliases. Boundary headers must stand alone: "Languages: Python, Java" is a
//! skills line, not the start of a Languages section. Each section owns the
//! lines after its first header up to the next header of any kind, capped by
//! the section's lookahead. Missing sections yield no content.

use serde::{Deserialize, Serialize};

use crate::structuring::taxonomy::{
    contains_any_word, BOUNDARY_HEADERS, BOUNDARY_HEADER_QUALIFIERS, ROLE_KEYWORDS,
    SECTION_ALIASES,
};
use crate::structuring::thresholds::Thresholds;

/// Max length for boundary-only headers ("Certifications", "Languages", ...).
const BOUNDARY_HEADER_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Summary,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Projects,
    ];

    pub fn aliases(self) -> &'static [&'static str] {
        SECTION_ALIASES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[])
    }
}

/// What a header line announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Section(SectionKind),
    /// A section this engine does not extract; it only closes the previous one.
    Boundary,
}

/// A header match: its kind and the byte length of the alias that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub kind: HeaderKind,
    pub alias_len: usize,
}

/// Half-open range `[start, end)` of content line indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSpan {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedSection {
    pub kind: SectionKind,
    /// Index of the header line.
    pub header: usize,
    pub alias_len: usize,
    pub span: SectionSpan,
}

/// All sections found in a document.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    located: Vec<LocatedSection>,
}

impl Sections {
    pub fn get(&self, kind: SectionKind) -> Option<&LocatedSection> {
        self.located.iter().find(|s| s.kind == kind)
    }

    /// Lines owned by `kind`, starting with any text that shares the header
    /// line ("Skills: Rust, Go" contributes "Rust, Go").
    pub fn content<'a>(&self, kind: SectionKind, lines: &'a [String]) -> Vec<&'a str> {
        let Some(section) = self.get(kind) else {
            return Vec::new();
        };
        let inline = lines
            .get(section.header)
            .and_then(|line| header_remainder(line, section.alias_len));
        let end = section.span.end.min(lines.len());
        let start = section.span.start.min(end);
        inline
            .into_iter()
            .chain(lines[start..end].iter().map(String::as_str))
            .collect()
    }
}

/// Locates every recognized section in `lines`.
pub fn locate_sections(lines: &[String], thresholds: &Thresholds) -> Sections {
    let headers: Vec<(usize, Header)> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| classify_header(line, thresholds).map(|h| (i, h)))
        .collect();
    let header_lines: Vec<usize> = headers.iter().map(|(i, _)| *i).collect();

    let located = SectionKind::ALL
        .iter()
        .filter_map(|&kind| {
            let (header, found) = headers
                .iter()
                .find(|(_, h)| h.kind == HeaderKind::Section(kind))?;
            let next_header = header_lines
                .iter()
                .copied()
                .find(|&i| i > *header)
                .unwrap_or(lines.len());
            let start = header + 1;
            let end = next_header
                .min(start + thresholds.section(kind).max_lookahead)
                .min(lines.len());
            Some(LocatedSection {
                kind,
                header: *header,
                alias_len: found.alias_len,
                span: SectionSpan { start, end },
            })
        })
        .collect();

    Sections { located }
}

/// Classifies a line as a section header, a boundary header, or neither.
pub fn classify_header(line: &str, thresholds: &Thresholds) -> Option<Header> {
    let len = line.chars().count();

    for kind in SectionKind::ALL {
        if len >= thresholds.section(kind).max_header_len {
            continue;
        }
        if let Some(alias_len) = longest_matching_alias(line, kind.aliases()) {
            return Some(Header {
                kind: HeaderKind::Section(kind),
                alias_len,
            });
        }
    }

    if len < BOUNDARY_HEADER_MAX_LEN {
        if let Some(alias_len) = standalone_boundary(line) {
            return Some(Header {
                kind: HeaderKind::Boundary,
                alias_len,
            });
        }
    }

    None
}

fn longest_matching_alias(line: &str, aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .filter(|alias| starts_with_header(line, alias))
        .map(|alias| alias.len())
        .max()
}

fn starts_with_header(line: &str, alias: &str) -> bool {
    line.get(..alias.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(alias))
        && is_header_tail(&line[..alias.len()], &line[alias.len()..])
}

/// A line made only of boundary words ("Languages:", "Hobbies & Interests"),
/// optionally ending in a colon. Returns the length of the leading word.
fn standalone_boundary(line: &str) -> Option<usize> {
    let bare = line.trim().trim_end_matches(':').trim_end();
    let mut words = bare
        .split(|c: char| c.is_whitespace() || matches!(c, '&' | '/' | ','))
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase);
    let first = words.next()?;
    let boundary = BOUNDARY_HEADERS.contains(&first.as_str())
        && words.all(|w| {
            BOUNDARY_HEADERS.contains(&w.as_str()) || BOUNDARY_HEADER_QUALIFIERS.contains(&w.as_str())
        });
    boundary.then_some(first.len())
}

/// True when `rest`, the text following the header keyword `keyword`, still
/// reads as a header. End of line and a colon always do. Otherwise:
/// - punctuation or a lowercase word after the keyword makes it prose;
/// - a shouted keyword ("EXPERIENCE") heads the line unless the next word is
///   shouted too ("USER EXPERIENCE DESIGNER");
/// - any other keyword heads the line unless a role word follows it
///   ("Customer Experience Manager", "Education Coordinator").
pub fn is_header_tail(keyword: &str, rest: &str) -> bool {
    if rest.starts_with(|c: char| c.is_alphanumeric() || matches!(c, '.' | ',' | ';' | ')')) {
        return false;
    }
    let rest = rest.trim_start_matches([' ', '\t']);
    if rest.is_empty() || rest.starts_with(['\n', '\r', ':']) {
        return true;
    }
    let tail = rest.lines().next().unwrap_or_default();
    if tail
        .chars()
        .find(|c| c.is_alphanumeric())
        .is_some_and(char::is_lowercase)
    {
        return false;
    }
    if is_shouted(keyword) {
        let next_word = tail
            .split_whitespace()
            .find(|w| w.chars().any(char::is_alphabetic));
        !next_word.is_some_and(is_shouted)
    } else {
        !contains_any_word(&tail.to_lowercase(), ROLE_KEYWORDS)
    }
}

/// All letters upper-case, with at least two of them.
fn is_shouted(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

fn header_remainder(line: &str, alias_len: usize) -> Option<&str> {
    let rest = line
        .get(alias_len..)?
        .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '-' | '–' | '—' | '|'))
        .trim();
    (!rest.is_empty()).then_some(rest)
}
