//! ATS readiness scoring.
//!
//! A fixed deterministic heuristic: additive points per criterion, capped
//! at 100, with fixed human-readable suggestions for the unmet criteria.
//! The point table sums to 80; the headroom below 100 is deliberate and
//! carried over from the original weighting, not rescaled.

use serde::Serialize;

use crate::resume::model::{ExperienceEntry, ProjectEntry, ResumeDocument};
use crate::resume::predicates::{
    all_skills, contains_numeric_impact, count_words, is_complete_education,
    is_meaningful_experience, is_meaningful_project, split_bullets,
};

pub const SUMMARY_POINTS: u8 = 15;
pub const PROJECTS_POINTS: u8 = 10;
pub const EXPERIENCE_POINTS: u8 = 10;
pub const SKILLS_POINTS: u8 = 10;
pub const LINK_POINTS: u8 = 10;
pub const IMPACT_POINTS: u8 = 15;
pub const EDUCATION_POINTS: u8 = 10;

pub const SUMMARY_WORDS_MIN: usize = 40;
pub const SUMMARY_WORDS_MAX: usize = 120;
pub const PROJECTS_TARGET: usize = 2;
pub const SKILLS_TARGET: usize = 8;

/// At most this many suggestions are surfaced at once.
pub const MAX_SUGGESTIONS: usize = 3;

const MSG_SUMMARY: &str = "Write a stronger summary (40-120 words).";
const MSG_PROJECTS: &str = "Add at least 2 projects.";
const MSG_IMPACT: &str = "Add measurable impact (numbers) in bullets.";
const MSG_SKILLS: &str = "Add more skills (target 8+).";
const MSG_LINK: &str = "Add GitHub or LinkedIn link.";
const MSG_EXPAND_SUMMARY: &str = "Expand summary to at least 40 words.";
const MSG_EXPERIENCE: &str = "Add internship or project-based experience.";

/// Readiness score with explainable suggestions. Derived on demand, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsResult {
    pub score: u8,
    pub suggestions: Vec<String>,
    pub all_criteria_met: bool,
}

/// Raw quantities the criteria are evaluated against. Exposed so the CLI
/// can print a breakdown without re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub summary_words: usize,
    pub meaningful_projects: usize,
    pub meaningful_experience: usize,
    pub skill_count: usize,
    pub has_link: bool,
    pub has_impact_numbers: bool,
    pub complete_education: bool,
}

impl ScoreBreakdown {
    #[must_use]
    pub const fn summary_in_range(&self) -> bool {
        self.summary_words >= SUMMARY_WORDS_MIN && self.summary_words <= SUMMARY_WORDS_MAX
    }
}

/// Derive the raw criterion inputs from a document.
#[must_use]
pub fn breakdown(doc: &ResumeDocument) -> ScoreBreakdown {
    let projects: Vec<&ProjectEntry> =
        doc.projects.iter().filter(|p| is_meaningful_project(p)).collect();
    let experience: Vec<&ExperienceEntry> = doc
        .experience
        .iter()
        .filter(|e| is_meaningful_experience(e))
        .collect();

    ScoreBreakdown {
        summary_words: count_words(&doc.summary),
        meaningful_projects: projects.len(),
        meaningful_experience: experience.len(),
        skill_count: all_skills(doc).len(),
        has_link: !doc.github.trim().is_empty() || !doc.linkedin.trim().is_empty(),
        has_impact_numbers: has_impact_numbers(&experience, &projects),
        complete_education: doc.education.iter().any(is_complete_education),
    }
}

/// Impact lines are the bullets of meaningful experience and project
/// highlights, plus each meaningful project's description.
fn has_impact_numbers(experience: &[&ExperienceEntry], projects: &[&ProjectEntry]) -> bool {
    experience
        .iter()
        .flat_map(|entry| split_bullets(&entry.highlights))
        .chain(projects.iter().flat_map(|entry| split_bullets(&entry.highlights)))
        .any(contains_numeric_impact)
        || projects
            .iter()
            .any(|entry| contains_numeric_impact(&entry.description))
}

/// Compute the 0-100 readiness score and ranked suggestions.
#[must_use]
pub fn score(doc: &ResumeDocument) -> AtsResult {
    let b = breakdown(doc);

    let mut score = 0u32;
    if b.summary_in_range() {
        score += u32::from(SUMMARY_POINTS);
    }
    if b.meaningful_projects >= PROJECTS_TARGET {
        score += u32::from(PROJECTS_POINTS);
    }
    if b.meaningful_experience >= 1 {
        score += u32::from(EXPERIENCE_POINTS);
    }
    if b.skill_count >= SKILLS_TARGET {
        score += u32::from(SKILLS_POINTS);
    }
    if b.has_link {
        score += u32::from(LINK_POINTS);
    }
    if b.has_impact_numbers {
        score += u32::from(IMPACT_POINTS);
    }
    if b.complete_education {
        score += u32::from(EDUCATION_POINTS);
    }

    // Fixed priority order: summary, projects, impact, skills, link.
    // Education completeness scores points but never triggers a suggestion.
    let mut suggestions = Vec::new();
    if !b.summary_in_range() {
        suggestions.push(MSG_SUMMARY.to_string());
    }
    if b.meaningful_projects < PROJECTS_TARGET {
        suggestions.push(MSG_PROJECTS.to_string());
    }
    if !b.has_impact_numbers {
        suggestions.push(MSG_IMPACT.to_string());
    }
    if b.skill_count < SKILLS_TARGET {
        suggestions.push(MSG_SKILLS.to_string());
    }
    if !b.has_link {
        suggestions.push(MSG_LINK.to_string());
    }

    // all_criteria_met reflects the unsliced set, not the 3-item cap.
    let all_criteria_met = suggestions.is_empty();
    suggestions.truncate(MAX_SUGGESTIONS);

    AtsResult {
        score: score.min(100) as u8,
        suggestions,
        all_criteria_met,
    }
}

/// Secondary improvement list with its own priority order; distinct from
/// the suggestion list, not a slice of it. The summary trigger here is the
/// lower bound only.
#[must_use]
pub fn top_improvements(doc: &ResumeDocument) -> Vec<String> {
    let b = breakdown(doc);

    let mut items = Vec::new();
    if b.meaningful_projects < PROJECTS_TARGET {
        items.push(MSG_PROJECTS.to_string());
    }
    if !b.has_impact_numbers {
        items.push(MSG_IMPACT.to_string());
    }
    if b.summary_words < SUMMARY_WORDS_MIN {
        items.push(MSG_EXPAND_SUMMARY.to_string());
    }
    if b.skill_count < SKILLS_TARGET {
        items.push(MSG_SKILLS.to_string());
    }
    if b.meaningful_experience == 0 {
        items.push(MSG_EXPERIENCE.to_string());
    }
    items.truncate(MAX_SUGGESTIONS);
    items
}
