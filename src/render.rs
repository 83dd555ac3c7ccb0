//! Plain-text preview rendering.
//!
//! Produces the printable view of a document for one of the three
//! templates. Entry visibility follows the predicate library: entries that
//! are not meaningful are hidden rather than rendered blank.

use std::fmt::Write as _;

use crate::resume::model::{ResumeDocument, SkillCategory, Template};
use crate::resume::predicates::{
    has_any_preview_content, is_meaningful_education, is_meaningful_experience,
    is_meaningful_project, split_bullets, split_description_points,
};

const WRAP_WIDTH: usize = 72;

/// Shown instead of an empty sheet.
pub const EMPTY_PREVIEW: &str = "Start filling the form to generate a live preview.";

/// Render the printable preview for a document.
#[must_use]
pub fn render(doc: &ResumeDocument, template: Template) -> String {
    if !has_any_preview_content(doc) {
        return format!("{EMPTY_PREVIEW}\n");
    }

    let mut out = String::new();
    render_header(&mut out, doc, template);

    if !doc.summary.trim().is_empty() {
        section(&mut out, "Summary", template);
        for line in textwrap::wrap(doc.summary.trim(), WRAP_WIDTH) {
            let _ = writeln!(out, "{line}");
        }
    }

    let education: Vec<_> = doc.education.iter().filter(|e| is_meaningful_education(e)).collect();
    if !education.is_empty() {
        section(&mut out, "Education", template);
        for entry in education {
            let mut line = join_non_blank(&[&entry.degree, &entry.school], " - ");
            if !entry.year.trim().is_empty() {
                let _ = write!(line, " ({})", entry.year.trim());
            }
            let _ = writeln!(out, "{line}");
        }
    }

    let experience: Vec<_> =
        doc.experience.iter().filter(|e| is_meaningful_experience(e)).collect();
    if !experience.is_empty() {
        section(&mut out, "Experience", template);
        for entry in experience {
            let mut line = join_non_blank(&[&entry.role, &entry.company], " - ");
            if !entry.duration.trim().is_empty() {
                let _ = write!(line, " ({})", entry.duration.trim());
            }
            let _ = writeln!(out, "{line}");
            for bullet in split_bullets(&entry.highlights) {
                let _ = writeln!(out, "  - {bullet}");
            }
        }
    }

    let projects: Vec<_> = doc.projects.iter().filter(|p| is_meaningful_project(p)).collect();
    if !projects.is_empty() {
        section(&mut out, "Projects", template);
        for entry in projects {
            if !entry.title.trim().is_empty() {
                let _ = writeln!(out, "{}", entry.title.trim());
            }
            for point in split_description_points(&entry.description) {
                let _ = writeln!(out, "  - {point}");
            }
            if !entry.tech_stack.is_empty() {
                let _ = writeln!(out, "  [{}]", entry.tech_stack.join(", "));
            }
            if !entry.live_url.trim().is_empty() {
                let _ = writeln!(out, "  Live: {}", entry.live_url.trim());
            }
            if !entry.github_url.trim().is_empty() {
                let _ = writeln!(out, "  Code: {}", entry.github_url.trim());
            }
        }
    }

    if !crate::resume::predicates::all_skills(doc).is_empty() {
        section(&mut out, "Skills", template);
        for category in SkillCategory::ALL {
            let list = doc.skills_by_category.get(category);
            if !list.is_empty() {
                let _ = writeln!(out, "{}: {}", category.label(), list.join(", "));
            }
        }
        if doc.skills_by_category.is_empty() && !doc.skills.trim().is_empty() {
            let legacy = crate::resume::predicates::split_skills(&doc.skills);
            let _ = writeln!(out, "{}", legacy.join(", "));
        }
    }

    if !doc.github.trim().is_empty() || !doc.linkedin.trim().is_empty() {
        section(&mut out, "Links", template);
        if !doc.github.trim().is_empty() {
            let _ = writeln!(out, "GitHub: {}", doc.github.trim());
        }
        if !doc.linkedin.trim().is_empty() {
            let _ = writeln!(out, "LinkedIn: {}", doc.linkedin.trim());
        }
    }

    out
}

fn render_header(out: &mut String, doc: &ResumeDocument, template: Template) {
    let name = doc.personal.name.trim();
    let contact = join_non_blank(
        &[&doc.personal.email, &doc.personal.phone, &doc.personal.location],
        " | ",
    );
    if name.is_empty() && contact.is_empty() {
        return;
    }

    if !name.is_empty() {
        let _ = writeln!(out, "{name}");
        match template {
            Template::Classic => {
                let _ = writeln!(out, "{}", "=".repeat(name.chars().count()));
            }
            Template::Modern => {
                let _ = writeln!(out, "{}", "─".repeat(WRAP_WIDTH));
            }
            Template::Minimal => {}
        }
    }
    if !contact.is_empty() {
        let _ = writeln!(out, "{contact}");
    }
}

fn section(out: &mut String, title: &str, template: Template) {
    let _ = writeln!(out);
    match template {
        Template::Classic => {
            let _ = writeln!(out, "{title}");
            let _ = writeln!(out, "{}", "-".repeat(title.len()));
        }
        Template::Modern => {
            let _ = writeln!(out, "{}", title.to_uppercase());
        }
        Template::Minimal => {
            let _ = writeln!(out, "{title}:");
        }
    }
}

fn join_non_blank(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
