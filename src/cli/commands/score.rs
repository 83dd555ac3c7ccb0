//! cvkit score - ATS readiness score, suggestions, and improvements

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;
use crate::resume::ats::{
    self, EDUCATION_POINTS, EXPERIENCE_POINTS, IMPACT_POINTS, LINK_POINTS, PROJECTS_POINTS,
    PROJECTS_TARGET, SKILLS_POINTS, SKILLS_TARGET, SUMMARY_POINTS, ScoreBreakdown,
};
use crate::resume::model::ResumeDocument;
use crate::resume::predicates::{
    contains_numeric_impact, is_meaningful_experience, is_meaningful_project, split_bullets,
    starts_with_action_verb,
};

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Show per-bullet guidance (action verbs, numeric impact)
    #[arg(long)]
    pub guidance: bool,
}

pub fn run(ctx: &mut AppContext, args: &ScoreArgs) -> Result<()> {
    let doc = ctx.store.load_document();
    let result = ats::score(&doc);
    let breakdown = ats::breakdown(&doc);
    let improvements = ats::top_improvements(&doc);

    if ctx.robot_mode {
        let json = serde_json::json!({
            "score": result.score,
            "suggestions": result.suggestions,
            "allCriteriaMet": result.all_criteria_met,
            "topImprovements": improvements,
            "breakdown": breakdown,
        });
        println!("{}", serde_json::to_string(&json)?);
        return Ok(());
    }

    let score_text = format!("{}/100", result.score);
    let score_colored = match result.score {
        0..=39 => score_text.red().bold(),
        40..=74 => score_text.yellow().bold(),
        _ => score_text.green().bold(),
    };
    println!("{} {score_colored}", "ATS readiness:".bold());
    println!();

    println!("{}", "Criteria".bold());
    println!("{}", "─".repeat(44).dimmed());
    for (met, label, points) in criteria(&breakdown) {
        let marker = if met { "✓".green() } else { "·".dimmed() };
        println!("{marker} {label:<38} {points:>2}");
    }

    if result.all_criteria_met {
        println!();
        println!("{}", "All suggestion criteria met.".green());
    } else if !result.suggestions.is_empty() {
        println!();
        println!("{}", "Suggestions".bold());
        println!("{}", "─".repeat(44).dimmed());
        for suggestion in &result.suggestions {
            println!("- {suggestion}");
        }
    }

    if !improvements.is_empty() {
        println!();
        println!("{}", "Top improvements".bold());
        println!("{}", "─".repeat(44).dimmed());
        for item in &improvements {
            println!("- {item}");
        }
    }

    if args.guidance {
        print_guidance(&doc);
    }

    Ok(())
}

fn criteria(b: &ScoreBreakdown) -> [(bool, String, u8); 7] {
    [
        (
            b.summary_in_range(),
            format!("Summary length (40-120 words): {}", b.summary_words),
            SUMMARY_POINTS,
        ),
        (
            b.meaningful_projects >= PROJECTS_TARGET,
            format!("Projects (2+): {}", b.meaningful_projects),
            PROJECTS_POINTS,
        ),
        (
            b.meaningful_experience >= 1,
            format!("Experience (1+): {}", b.meaningful_experience),
            EXPERIENCE_POINTS,
        ),
        (
            b.skill_count >= SKILLS_TARGET,
            format!("Skills (8+): {}", b.skill_count),
            SKILLS_POINTS,
        ),
        (b.has_link, "GitHub or LinkedIn link".to_string(), LINK_POINTS),
        (
            b.has_impact_numbers,
            "Measurable impact in bullets".to_string(),
            IMPACT_POINTS,
        ),
        (
            b.complete_education,
            "Complete education entry".to_string(),
            EDUCATION_POINTS,
        ),
    ]
}

/// Per-bullet writing hints for meaningful experience and project entries.
fn print_guidance(doc: &ResumeDocument) {
    let mut lines: Vec<(String, &str)> = Vec::new();
    for entry in doc.experience.iter().filter(|e| is_meaningful_experience(e)) {
        let owner = if entry.company.trim().is_empty() {
            "experience"
        } else {
            entry.company.trim()
        };
        for bullet in split_bullets(&entry.highlights) {
            lines.push((format!("{owner}: {bullet}"), bullet));
        }
    }
    for entry in doc.projects.iter().filter(|p| is_meaningful_project(p)) {
        let owner = if entry.title.trim().is_empty() {
            "project"
        } else {
            entry.title.trim()
        };
        for bullet in split_bullets(&entry.highlights) {
            lines.push((format!("{owner}: {bullet}"), bullet));
        }
    }

    let flagged: Vec<_> = lines
        .iter()
        .filter(|(_, bullet)| {
            !starts_with_action_verb(bullet) || !contains_numeric_impact(bullet)
        })
        .collect();
    if flagged.is_empty() {
        return;
    }

    println!();
    println!("{}", "Bullet guidance".bold());
    println!("{}", "─".repeat(44).dimmed());
    for (label, bullet) in flagged {
        let mut hints = Vec::new();
        if !starts_with_action_verb(bullet) {
            hints.push("start with an action verb");
        }
        if !contains_numeric_impact(bullet) {
            hints.push("add a number");
        }
        println!("- {label}");
        println!("  {}", hints.join(", ").yellow());
    }
}
