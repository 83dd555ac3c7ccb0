//! Total normalization of untrusted input into a canonical document.
//!
//! [`normalize`] never fails: unrecognized or malformed input degrades to
//! blank fields instead of raising an error. Malformed list elements become
//! blank entries rather than being dropped, so array length is preserved.
//! The function is idempotent, and serializing its output and normalizing
//! again yields an equal document.

use serde_json::{Map, Value};

use crate::resume::model::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, SkillCategories,
    truncate_description, unique_push,
};

type JsonObject = Map<String, Value>;

/// Coerce arbitrary input into a canonical [`ResumeDocument`].
#[must_use]
pub fn normalize(input: &Value) -> ResumeDocument {
    let Some(raw) = input.as_object() else {
        return ResumeDocument::blank();
    };

    let personal = raw.get("personal").and_then(Value::as_object);
    let skills = field_text(raw, "skills");

    ResumeDocument {
        personal: PersonalInfo {
            name: personal.map_or_else(String::new, |p| field_text(p, "name")),
            email: personal.map_or_else(String::new, |p| field_text(p, "email")),
            phone: personal.map_or_else(String::new, |p| field_text(p, "phone")),
            location: personal.map_or_else(String::new, |p| field_text(p, "location")),
        },
        summary: field_text(raw, "summary"),
        education: normalize_education(raw.get("education")),
        experience: normalize_experience(raw.get("experience")),
        projects: normalize_projects(raw.get("projects")),
        skills_by_category: normalize_skill_categories(raw.get("skillsByCategory"), &skills),
        skills,
        github: field_text(raw, "github"),
        linkedin: field_text(raw, "linkedin"),
    }
}

/// String-or-empty coercion: strings verbatim, numbers and booleans
/// rendered to text, everything else (absent, null, array, object) is "".
fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn field_text(obj: &JsonObject, key: &str) -> String {
    obj.get(key).map_or_else(String::new, coerce_text)
}

/// Map a raw list field element-wise, substituting the single blank entry
/// when the value is not a non-empty array.
fn normalize_list<T: Default>(raw: Option<&Value>, from_value: impl Fn(&Value) -> T) -> Vec<T> {
    match raw.and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items.iter().map(from_value).collect(),
        _ => vec![T::default()],
    }
}

fn normalize_education(raw: Option<&Value>) -> Vec<EducationEntry> {
    normalize_list(raw, |item| {
        item.as_object().map_or_else(EducationEntry::default, |obj| EducationEntry {
            school: field_text(obj, "school"),
            degree: field_text(obj, "degree"),
            year: field_text(obj, "year"),
        })
    })
}

fn normalize_experience(raw: Option<&Value>) -> Vec<ExperienceEntry> {
    normalize_list(raw, |item| {
        item.as_object().map_or_else(ExperienceEntry::default, |obj| ExperienceEntry {
            company: field_text(obj, "company"),
            role: field_text(obj, "role"),
            duration: field_text(obj, "duration"),
            highlights: field_text(obj, "highlights"),
        })
    })
}

/// The two known persisted project shapes. Legacy entries predate tech
/// stacks and links and carry `name` instead of `title`.
enum ProjectShape<'a> {
    Modern(&'a JsonObject),
    Legacy(&'a JsonObject),
    Malformed,
}

fn classify_project(item: &Value) -> ProjectShape<'_> {
    let Some(obj) = item.as_object() else {
        return ProjectShape::Malformed;
    };
    let modern_keys = ["title", "techStack", "liveUrl", "githubUrl"];
    if modern_keys.iter().any(|key| obj.contains_key(*key)) {
        ProjectShape::Modern(obj)
    } else {
        ProjectShape::Legacy(obj)
    }
}

fn normalize_projects(raw: Option<&Value>) -> Vec<ProjectEntry> {
    normalize_list(raw, |item| match classify_project(item) {
        ProjectShape::Modern(obj) => ProjectEntry {
            title: project_title(obj),
            description: truncate_description(&field_text(obj, "description")),
            tech_stack: normalize_string_set(obj.get("techStack")),
            live_url: field_text(obj, "liveUrl"),
            github_url: field_text(obj, "githubUrl"),
            highlights: field_text(obj, "highlights"),
        },
        ProjectShape::Legacy(obj) => ProjectEntry {
            title: project_title(obj),
            description: truncate_description(&field_text(obj, "description")),
            highlights: field_text(obj, "highlights"),
            ..ProjectEntry::default()
        },
        ProjectShape::Malformed => ProjectEntry::default(),
    })
}

/// `title` falls back to the legacy `name` key when absent.
fn project_title(obj: &JsonObject) -> String {
    if obj.contains_key("title") {
        field_text(obj, "title")
    } else {
        field_text(obj, "name")
    }
}

/// Coerce a raw array into a trimmed, blank-free, case-insensitively
/// deduplicated list. Non-arrays yield an empty list.
fn normalize_string_set(raw: Option<&Value>) -> Vec<String> {
    let mut items = Vec::new();
    if let Some(values) = raw.and_then(Value::as_array) {
        for value in values {
            unique_push(&mut items, &coerce_text(value));
        }
    }
    items
}

/// Category arrays win when any category holds a non-blank entry; otherwise
/// the legacy comma-delimited skills string is split into `technical`.
fn normalize_skill_categories(raw: Option<&Value>, legacy: &str) -> SkillCategories {
    let obj = raw.and_then(Value::as_object);
    let mut categories = SkillCategories {
        technical: normalize_string_set(obj.and_then(|o| o.get("technical"))),
        soft: normalize_string_set(obj.and_then(|o| o.get("soft"))),
        tools: normalize_string_set(obj.and_then(|o| o.get("tools"))),
    };

    if categories.is_empty() {
        for part in legacy.split(',') {
            unique_push(&mut categories.technical, part);
        }
    }
    categories
}
