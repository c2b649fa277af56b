//! Skill tokenizer and categorizer.

use std::collections::HashSet;

use crate::structuring::models::{sequential_id, Skill, SkillCategory};
use crate::structuring::taxonomy::{contains_any_word, DASH_BULLETS, ROUND_BULLETS, SKILL_CATEGORIES};
use crate::structuring::thresholds::Thresholds;

/// Splits the Skills section into categorized tokens, in document order.
/// Repeated tokens (case-insensitive) are kept once.
pub fn extract_skills(content: &[&str], thresholds: &Thresholds) -> Vec<Skill> {
    let joined = content.join("\n");
    let mut seen = HashSet::new();

    joined
        .split(is_separator)
        .filter_map(clean_token)
        .filter(|token| {
            let len = token.chars().count();
            (thresholds.skill_min_len..=thresholds.skill_max_len).contains(&len)
        })
        .filter(|token| seen.insert(token.to_lowercase()))
        .enumerate()
        .map(|(i, name)| Skill {
            id: sequential_id("skill", i),
            category: categorize(name),
            name: name.to_string(),
        })
        .collect()
}

/// First category whose keyword table matches the token; `Other` otherwise.
pub fn categorize(token: &str) -> SkillCategory {
    let lower = token.to_lowercase();
    SKILL_CATEGORIES
        .iter()
        .find(|(_, keywords)| contains_any_word(&lower, keywords))
        .map_or(SkillCategory::Other, |(category, _)| *category)
}

fn is_separator(c: char) -> bool {
    matches!(c, ',' | ';' | '\n' | '|') || ROUND_BULLETS.contains(&c)
}

/// Strips bullet markers and "Label:" prefixes. `None` when nothing is left.
fn clean_token(raw: &str) -> Option<&str> {
    let token = raw.trim_start_matches(|c: char| c.is_whitespace() || DASH_BULLETS.contains(&c));
    let token = match token.split_once(':') {
        Some((_, value)) => value,
        None => token,
    };
    let token = token.trim().trim_end_matches('.').trim();
    (!token.is_empty()).then_some(token)
}
