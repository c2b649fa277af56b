//! Boundary constants for the structuring heuristics.
//!
//! These values were tuned empirically against real uploads. They are plain
//! data so callers can experiment with them without touching traversal code.

use serde::{Deserialize, Serialize};

use crate::structuring::sections::SectionKind;

/// Header length cap and lookahead for one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionLimits {
    /// A header line must be strictly shorter than this (in characters).
    pub max_header_len: usize,
    /// Maximum number of content lines owned by the section when no later
    /// header closes it.
    pub max_lookahead: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub summary_section: SectionLimits,
    pub skills_section: SectionLimits,
    pub experience_section: SectionLimits,
    pub education_section: SectionLimits,
    pub projects_section: SectionLimits,

    /// Lines scanned for the name when no email is found.
    pub name_scan_lines: usize,
    pub name_min_len: usize,
    pub name_max_len: usize,
    /// A digit run this long disqualifies a name candidate.
    pub name_digit_run: usize,

    pub title_scan_lines: usize,
    pub title_max_len: usize,

    pub summary_scan_lines: usize,
    pub summary_header_max_len: usize,
    pub summary_line_min_len: usize,
    pub summary_max_lines: usize,
    pub summary_max_chars: usize,

    pub skill_min_len: usize,
    pub skill_max_len: usize,

    pub trigger_min_len: usize,
    pub trigger_max_len: usize,
    pub degree_line_max_len: usize,
    /// A year-bearing line at most this long may fill missing dates.
    pub dates_line_max_len: usize,

    pub experience_description_min_len: usize,
    pub project_description_min_len: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            summary_section: SectionLimits {
                max_header_len: 50,
                max_lookahead: 15,
            },
            skills_section: SectionLimits {
                max_header_len: 50,
                max_lookahead: 20,
            },
            experience_section: SectionLimits {
                max_header_len: 100,
                max_lookahead: 50,
            },
            education_section: SectionLimits {
                max_header_len: 50,
                max_lookahead: 20,
            },
            projects_section: SectionLimits {
                max_header_len: 50,
                max_lookahead: 30,
            },
            name_scan_lines: 3,
            name_min_len: 2,
            name_max_len: 50,
            name_digit_run: 3,
            title_scan_lines: 8,
            title_max_len: 100,
            summary_scan_lines: 20,
            summary_header_max_len: 50,
            summary_line_min_len: 50,
            summary_max_lines: 5,
            summary_max_chars: 500,
            skill_min_len: 2,
            skill_max_len: 50,
            trigger_min_len: 5,
            trigger_max_len: 150,
            degree_line_max_len: 150,
            dates_line_max_len: 40,
            experience_description_min_len: 20,
            project_description_min_len: 20,
        }
    }
}

impl Thresholds {
    pub fn section(&self, kind: SectionKind) -> SectionLimits {
        match kind {
            SectionKind::Summary => self.summary_section,
            SectionKind::Skills => self.skills_section,
            SectionKind::Experience => self.experience_section,
            SectionKind::Education => self.education_section,
            SectionKind::Projects => self.projects_section,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_limits_stay_within_documented_ranges() {
        let t = Thresholds::default();
        for kind in SectionKind::ALL {
            let limits = t.section(kind);
            assert!((50..=100).contains(&limits.max_header_len));
            assert!((15..=50).contains(&limits.max_lookahead));
        }
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let t: Thresholds = serde_json::from_str(r#"{"summary_max_chars": 200}"#).unwrap();
        assert_eq!(t.summary_max_chars, 200);
        assert_eq!(t.trigger_max_len, Thresholds::default().trigger_max_len);
    }
}
