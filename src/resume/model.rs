//! Canonical resume document model.
//!
//! Every [`ResumeDocument`] produced by this module or by
//! [`crate::resume::normalize`] satisfies the document invariants: list
//! fields are never empty (a single all-blank entry stands in for "no
//! data"), string fields are never absent, skill lists carry no blank or
//! case-insensitive duplicate entries, and project descriptions never
//! exceed [`DESCRIPTION_MAX_LEN`] characters.
//!
//! The serde field names match the legacy persisted JSON format
//! (`skillsByCategory`, `techStack`, ...) so documents written by older
//! versions of the tool rehydrate without a migration step.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CvError;

/// Upper bound on a project description, enforced at mutation time rather
/// than at render time.
pub const DESCRIPTION_MAX_LEN: usize = 200;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub year: String,
}

/// One position. `highlights` is free text; each line is one bullet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub highlights: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    /// Set-like: unique ignoring case, insertion order preserved.
    pub tech_stack: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub highlights: String,
}

impl ProjectEntry {
    /// Replace the description, truncating to [`DESCRIPTION_MAX_LEN`]
    /// characters.
    pub fn set_description(&mut self, description: &str) {
        self.description = truncate_description(description);
    }

    /// Add a technology with unique-push semantics. Returns false when the
    /// value was blank or already present.
    pub fn add_tech(&mut self, tech: &str) -> bool {
        unique_push(&mut self.tech_stack, tech)
    }

    /// Remove a technology by exact match.
    pub fn remove_tech(&mut self, tech: &str) {
        self.tech_stack.retain(|item| item != tech);
    }
}

/// Skill lists grouped by category. Each list is unique ignoring case,
/// blank-free, insertion-ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillCategories {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

impl SkillCategories {
    #[must_use]
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Tools => &self.tools,
        }
    }

    pub fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty() && self.tools.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Technical,
    Soft,
    Tools,
}

impl SkillCategory {
    pub const ALL: [Self; 3] = [Self::Technical, Self::Soft, Self::Tools];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Soft => "soft",
            Self::Tools => "tools",
        }
    }

    /// Display label matching the form headings of the original UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical Skills",
            Self::Soft => "Soft Skills",
            Self::Tools => "Tools & Technologies",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = CvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Ok(Self::Technical),
            "soft" => Ok(Self::Soft),
            "tools" => Ok(Self::Tools),
            other => Err(CvError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preview template choice, persisted as its own record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Template {
    #[default]
    Classic,
    Modern,
    Minimal,
}

impl Template {
    pub const ALL: [Self; 3] = [Self::Classic, Self::Modern, Self::Minimal];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Modern => "modern",
            Self::Minimal => "minimal",
        }
    }

    /// Lenient parse for stored bytes: anything unrecognized falls back to
    /// the default template.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        Self::from_str(raw).unwrap_or_default()
    }
}

impl FromStr for Template {
    type Err = CvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "modern" => Ok(Self::Modern),
            "minimal" => Ok(Self::Minimal),
            other => Err(CvError::UnknownTemplate(other.to_string())),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical, always-valid resume representation.
///
/// `skills` is the legacy comma-delimited skills field predating the
/// per-category lists; it is preserved verbatim for backward compatibility
/// and folded into skill derivations by
/// [`crate::resume::predicates::all_skills`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills_by_category: SkillCategories,
    pub skills: String,
    pub github: String,
    pub linkedin: String,
}

impl ResumeDocument {
    /// The all-blank document: every list holds a single placeholder entry.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            personal: PersonalInfo::default(),
            summary: String::new(),
            education: vec![EducationEntry::default()],
            experience: vec![ExperienceEntry::default()],
            projects: vec![ProjectEntry::default()],
            skills_by_category: SkillCategories::default(),
            skills: String::new(),
            github: String::new(),
            linkedin: String::new(),
        }
    }

    /// Add a skill to one category with unique-push semantics.
    pub fn add_skill(&mut self, category: SkillCategory, skill: &str) -> bool {
        unique_push(self.skills_by_category.get_mut(category), skill)
    }

    /// Remove a skill from one category by exact match.
    pub fn remove_skill(&mut self, category: SkillCategory, skill: &str) {
        self.skills_by_category
            .get_mut(category)
            .retain(|item| item != skill);
    }
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self::blank()
    }
}

/// Append a trimmed value unless it is blank or already present ignoring
/// case. First occurrence wins; order is preserved.
pub fn unique_push(items: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    let lowered = value.to_lowercase();
    if items.iter().any(|item| item.to_lowercase() == lowered) {
        return false;
    }
    items.push(value.to_string());
    true
}

/// Truncate a description to [`DESCRIPTION_MAX_LEN`] characters.
#[must_use]
pub fn truncate_description(text: &str) -> String {
    text.chars().take(DESCRIPTION_MAX_LEN).collect()
}
