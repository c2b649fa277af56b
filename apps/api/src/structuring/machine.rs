//! Table-driven record state machine shared by the Experience, Education and
//! Projects extractors.
//!
//! Each section supplies a `Grammar`: a trigger predicate that opens a new
//! entry, a constructor for the entry's heading line, and an ordered rule table
//! mapping continuation lines to a `Transition`. The machine folds over the
//! section's lines by value; the open entry is flushed when the next trigger
//! fires and once more at the end of the section.

use crate::structuring::dates::{find_dates, DateRange};
use crate::structuring::taxonomy::{DASH_BULLETS, ROUND_BULLETS};
use crate::structuring::thresholds::Thresholds;

/// An entry under construction. Sections map it onto their own record type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub organization: String,
    pub dates: Option<DateRange>,
    pub description: String,
    pub achievements: Vec<String>,
}

impl Draft {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            ..Self::default()
        }
    }

    pub fn has_organization(&self) -> bool {
        !self.organization.is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    /// True once anything beyond the heading has been collected.
    pub fn has_body(&self) -> bool {
        self.has_description() || !self.achievements.is_empty()
    }
}

/// What one line does to the open entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Close the open entry and start a new one headed by this line.
    Start,
    /// Organization or school, optionally followed by a date range.
    Organization,
    /// Fill in a missing date range.
    Dates,
    Achievement,
    Description,
    /// Second line of a heading that wrapped.
    ExtendTitle,
    /// Wrapped continuation of the last achievement or the description.
    ExtendText,
    Ignore,
}

/// Input to a trigger predicate.
pub struct TriggerInput<'a> {
    pub line: &'a str,
    pub open: Option<&'a Draft>,
    pub thresholds: &'a Thresholds,
}

/// Input to a continuation rule; only evaluated while an entry is open.
pub struct RuleInput<'a> {
    pub line: &'a str,
    pub draft: &'a Draft,
    pub thresholds: &'a Thresholds,
}

impl RuleInput<'_> {
    pub fn line_len(&self) -> usize {
        self.line.chars().count()
    }
}

pub struct Rule {
    pub when: fn(&RuleInput) -> bool,
    pub then: Transition,
}

pub struct Grammar {
    pub trigger: fn(&TriggerInput) -> bool,
    pub open: fn(&str) -> Draft,
    pub rules: &'static [Rule],
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Open(Draft),
}

#[derive(Debug, Default)]
struct Machine {
    done: Vec<Draft>,
    state: State,
}

impl Machine {
    fn open(&self) -> Option<&Draft> {
        match &self.state {
            State::Open(draft) => Some(draft),
            State::Idle => None,
        }
    }

    fn step(self, grammar: &Grammar, line: &str, transition: Transition) -> Machine {
        let Machine { mut done, state } = self;
        let state = match (state, transition) {
            (State::Open(draft), Transition::Start) => {
                done.push(draft);
                State::Open((grammar.open)(line))
            }
            (State::Idle, Transition::Start) => State::Open((grammar.open)(line)),
            (State::Open(draft), transition) => State::Open(apply(draft, line, transition)),
            (State::Idle, _) => State::Idle,
        };
        Machine { done, state }
    }

    fn finish(self) -> Vec<Draft> {
        let Machine { mut done, state } = self;
        if let State::Open(draft) = state {
            done.push(draft);
        }
        done
    }
}

impl Grammar {
    /// Picks the transition for `line`: a trigger always wins, otherwise the
    /// first matching rule.
    pub fn classify(&self, line: &str, open: Option<&Draft>, thresholds: &Thresholds) -> Transition {
        if (self.trigger)(&TriggerInput {
            line,
            open,
            thresholds,
        }) {
            return Transition::Start;
        }
        let Some(draft) = open else {
            return Transition::Ignore;
        };
        let input = RuleInput {
            line,
            draft,
            thresholds,
        };
        self.rules
            .iter()
            .find(|rule| (rule.when)(&input))
            .map_or(Transition::Ignore, |rule| rule.then)
    }

    /// Folds the section's lines into finished drafts, in document order.
    pub fn run(&self, lines: &[&str], thresholds: &Thresholds) -> Vec<Draft> {
        lines
            .iter()
            .fold(Machine::default(), |machine, line| {
                let transition = self.classify(line, machine.open(), thresholds);
                machine.step(self, line, transition)
            })
            .finish()
    }
}

fn apply(draft: Draft, line: &str, transition: Transition) -> Draft {
    match transition {
        Transition::Organization => with_organization(draft, strip_bullet(line)),
        Transition::Dates => Draft {
            dates: find_dates(line).map(|m| m.range).or(draft.dates),
            ..draft
        },
        Transition::Achievement => {
            let mut achievements = draft.achievements;
            achievements.push(strip_bullet(line).to_string());
            Draft {
                achievements,
                ..draft
            }
        }
        Transition::Description => Draft {
            description: line.to_string(),
            ..draft
        },
        Transition::ExtendTitle => Draft {
            title: join(&draft.title, line),
            ..draft
        },
        Transition::ExtendText => extend_text(draft, line),
        Transition::Start | Transition::Ignore => draft,
    }
}

/// "Acme Corp 2020 - Present": the text before the dates is the organization.
fn with_organization(draft: Draft, text: &str) -> Draft {
    match find_dates(text) {
        Some(found) => Draft {
            organization: trim_separators(&text[..found.start]).to_string(),
            dates: draft.dates.or(Some(found.range)),
            ..draft
        },
        None => Draft {
            organization: trim_separators(text).to_string(),
            ..draft
        },
    }
}

fn extend_text(draft: Draft, line: &str) -> Draft {
    if draft.achievements.is_empty() {
        return Draft {
            description: join(&draft.description, line),
            ..draft
        };
    }
    let mut achievements = draft.achievements;
    if let Some(last) = achievements.last_mut() {
        *last = join(last, line);
    }
    Draft {
        achievements,
        ..draft
    }
}

fn join(head: &str, tail: &str) -> String {
    if head.is_empty() {
        tail.to_string()
    } else {
        format!("{head} {tail}")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Line predicates shared by the section grammars
// ────────────────────────────────────────────────────────────────────────────

pub fn is_bullet(line: &str) -> bool {
    line.starts_with(|c: char| DASH_BULLETS.contains(&c) || ROUND_BULLETS.contains(&c))
}

pub fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| {
        c.is_whitespace() || DASH_BULLETS.contains(&c) || ROUND_BULLETS.contains(&c)
    })
    .trim_end()
}

pub fn starts_uppercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}

pub fn starts_lowercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_lowercase)
}

/// Trims whitespace and the punctuation that glues names to dates.
pub fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, ',' | '|' | '-' | '–' | '—' | '(' | ')' | '·' | ':' | '@')
    })
}

/// Splits "Title at Org" / "Title | Org" / "Title @ Org" into its parts.
pub fn split_heading<'a>(text: &'a str, separators: &[&str]) -> (&'a str, Option<&'a str>) {
    separators
        .iter()
        .filter_map(|sep| {
            let idx = text.to_ascii_lowercase().find(sep)?;
            text.get(..idx)
                .zip(text.get(idx + sep.len()..))
                .map(|parts| (idx, parts))
        })
        .min_by_key(|(idx, _)| *idx)
        .map(|(_, (head, tail))| (trim_separators(head), Some(trim_separators(tail))))
        .filter(|(head, tail)| !head.is_empty() && tail.is_some_and(|t| !t.is_empty()))
        .unwrap_or((trim_separators(text), None))
}

/// Removes the date range from a heading line, returning the remaining text
/// and the dates. Text after the dates is used only when nothing precedes them.
pub fn take_dates(line: &str) -> (&str, Option<DateRange>) {
    match find_dates(line) {
        Some(found) => {
            let before = trim_separators(&line[..found.start]);
            let text = if before.is_empty() {
                trim_separators(&line[found.end..])
            } else {
                before
            };
            (text, Some(found.range))
        }
        None => (line.trim(), None),
    }
}
