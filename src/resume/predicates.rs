//! Pure predicates and text derivations over the canonical document.
//!
//! Everything here is stateless and total; these functions back both the
//! preview renderer (entry visibility) and the scoring engine (text
//! features).

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::resume::model::{
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument,
};

/// Percentage, bare digit run, multiplier (3x) or thousands count (10k).
static NUMERIC_IMPACT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s?%|\b\d+\b|\d+[xX]|\d+\s?[kK]").unwrap());

/// Closed verb set for bullet guidance; exact case-sensitive match.
pub const ACTION_VERBS: [&str; 9] = [
    "Built",
    "Developed",
    "Designed",
    "Implemented",
    "Led",
    "Improved",
    "Created",
    "Optimized",
    "Automated",
];

fn any_non_blank(fields: &[&str]) -> bool {
    fields.iter().any(|value| !value.trim().is_empty())
}

/// An education entry is shown when any field is non-blank.
#[must_use]
pub fn is_meaningful_education(entry: &EducationEntry) -> bool {
    any_non_blank(&[&entry.school, &entry.degree, &entry.year])
}

/// Completeness is stricter than visibility: all three fields must be
/// non-blank.
#[must_use]
pub fn is_complete_education(entry: &EducationEntry) -> bool {
    !entry.school.trim().is_empty()
        && !entry.degree.trim().is_empty()
        && !entry.year.trim().is_empty()
}

#[must_use]
pub fn is_meaningful_experience(entry: &ExperienceEntry) -> bool {
    any_non_blank(&[&entry.company, &entry.role, &entry.duration, &entry.highlights])
}

/// A project also counts as meaningful when only its tech stack is filled.
#[must_use]
pub fn is_meaningful_project(entry: &ProjectEntry) -> bool {
    any_non_blank(&[
        &entry.title,
        &entry.description,
        &entry.live_url,
        &entry.github_url,
        &entry.highlights,
    ]) || !entry.tech_stack.is_empty()
}

/// Whitespace-delimited token count; blank text counts zero.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// One bullet per line: trimmed, blank lines dropped, order preserved.
#[must_use]
pub fn split_bullets(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Turn a dense description into sentence bullets: split on periods, drop
/// blanks, re-append the trailing period.
#[must_use]
pub fn split_description_points(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| format!("{part}."))
        .collect()
}

/// Split the legacy comma-delimited skills string.
#[must_use]
pub fn split_skills(skills: &str) -> Vec<&str> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Pattern test for measurable impact: "32%", "3x", "10k" or a bare
/// number. Not a semantic parse.
#[must_use]
pub fn contains_numeric_impact(text: &str) -> bool {
    NUMERIC_IMPACT_REGEX.is_match(text)
}

/// True when the trimmed line equals or begins with one of
/// [`ACTION_VERBS`] followed by a space. No stemming.
#[must_use]
pub fn starts_with_action_verb(line: &str) -> bool {
    let trimmed = line.trim();
    ACTION_VERBS.iter().any(|verb| {
        trimmed == *verb
            || trimmed
                .strip_prefix(verb)
                .is_some_and(|rest| rest.starts_with(' '))
    })
}

/// Ordered union of the three category lists plus the legacy skills
/// string, deduplicated ignoring case. First-seen casing wins.
#[must_use]
pub fn all_skills(doc: &ResumeDocument) -> Vec<String> {
    let categories = &doc.skills_by_category;
    categories
        .technical
        .iter()
        .chain(&categories.soft)
        .chain(&categories.tools)
        .map(String::as_str)
        .chain(split_skills(&doc.skills))
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .unique_by(|skill| skill.to_lowercase())
        .map(str::to_string)
        .collect()
}

/// True when the document renders anything at all in the preview.
#[must_use]
pub fn has_any_preview_content(doc: &ResumeDocument) -> bool {
    any_non_blank(&[
        &doc.personal.name,
        &doc.personal.email,
        &doc.personal.phone,
        &doc.personal.location,
        &doc.summary,
        &doc.github,
        &doc.linkedin,
    ]) || doc.education.iter().any(is_meaningful_education)
        || doc.experience.iter().any(is_meaningful_experience)
        || doc.projects.iter().any(is_meaningful_project)
        || !all_skills(doc).is_empty()
}
