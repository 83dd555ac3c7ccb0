use serde_json::json;

use cvkit::resume::ats::{breakdown, score, top_improvements};
use cvkit::resume::model::ResumeDocument;
use cvkit::resume::normalize::normalize;

/// The worked example from the scoring design: 50-word summary, two
/// meaningful projects, one experience entry with a "40%" highlight,
/// eight distinct skills, a GitHub link, one complete education entry.
fn ninety_point_document() -> ResumeDocument {
    normalize(&json!({
        "summary": (0..50).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" "),
        "education": [{ "school": "State", "degree": "B.S.", "year": "2024" }],
        "experience": [{
            "company": "Acme",
            "role": "Engineer",
            "duration": "2023",
            "highlights": "Improved throughput by 40%"
        }],
        "projects": [
            { "title": "One", "description": "", "highlights": "" },
            { "title": "Two", "description": "", "highlights": "" }
        ],
        "skillsByCategory": {
            "technical": ["Rust", "SQL", "React", "Go", "Python", "C"],
            "tools": ["Git", "Docker"]
        },
        "github": "https://github.com/x"
    }))
}

#[test]
fn worked_example_scores_ninety() {
    let result = score(&ninety_point_document());
    assert_eq!(result.score, 90);
    assert!(result.suggestions.is_empty());
    assert!(result.all_criteria_met);
}

#[test]
fn blank_document_gets_the_first_three_suggestions() {
    let result = score(&ResumeDocument::blank());
    assert_eq!(result.score, 0);
    assert_eq!(
        result.suggestions,
        vec![
            "Write a stronger summary (40-120 words).",
            "Add at least 2 projects.",
            "Add measurable impact (numbers) in bullets.",
        ]
    );
    assert!(!result.all_criteria_met);
}

#[test]
fn suggestions_never_exceed_three() {
    let mut doc = ninety_point_document();
    doc.summary.clear();
    doc.projects.truncate(1);
    doc.experience[0].highlights = "Shipped features".into();
    doc.skills_by_category.technical.clear();
    doc.github.clear();
    let result = score(&doc);
    assert_eq!(result.suggestions.len(), 3);
    assert!(!result.all_criteria_met);
}

#[test]
fn each_criterion_contributes_once() {
    let mut doc = ninety_point_document();
    // Pile on extra qualifying material; the score must not move.
    doc.projects.push(doc.projects[0].clone());
    doc.experience.push(doc.experience[0].clone());
    doc.linkedin = "https://linkedin.com/in/x".into();
    assert_eq!(score(&doc).score, 90);
}

#[test]
fn placeholder_entries_never_score() {
    // A document full of blank placeholder rows is still worth zero.
    let doc = normalize(&json!({
        "education": [{}, {}],
        "experience": [{}],
        "projects": [{}, {}, {}]
    }));
    assert_eq!(score(&doc).score, 0);
}

#[test]
fn impact_found_only_in_meaningful_entries() {
    // The "40%" bullet sits in an otherwise-blank experience entry... but a
    // highlights field alone already makes the entry meaningful, so it
    // counts.
    let doc = normalize(&json!({
        "experience": [{ "highlights": "Improved speed by 40%" }]
    }));
    assert!(breakdown(&doc).has_impact_numbers);
}

#[test]
fn rich_project_description_counts_toward_impact() {
    let doc = normalize(&json!({
        "projects": [{ "title": "T", "description": "Cut build times 3x" }]
    }));
    assert!(breakdown(&doc).has_impact_numbers);
}

#[test]
fn improvements_use_their_own_priority_order() {
    let items = top_improvements(&ResumeDocument::blank());
    assert_eq!(
        items,
        vec![
            "Add at least 2 projects.",
            "Add measurable impact (numbers) in bullets.",
            "Expand summary to at least 40 words.",
        ]
    );
}

#[test]
fn long_summary_fails_suggestions_but_not_improvements() {
    let mut doc = ninety_point_document();
    doc.summary = (0..200).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let result = score(&doc);
    assert_eq!(result.score, 75);
    assert_eq!(result.suggestions, vec!["Write a stronger summary (40-120 words)."]);
    // The improvements list only cares about the lower bound.
    assert!(top_improvements(&doc).is_empty());
}

#[test]
fn result_serializes_with_legacy_field_names() {
    let json = serde_json::to_value(score(&ResumeDocument::blank())).unwrap();
    assert!(json.get("allCriteriaMet").is_some());
    assert!(json.get("suggestions").is_some());
}
