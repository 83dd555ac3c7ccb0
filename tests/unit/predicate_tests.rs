use cvkit::resume::model::{
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument, SkillCategories,
};
use cvkit::resume::predicates::{
    all_skills, contains_numeric_impact, count_words, has_any_preview_content,
    is_complete_education, is_meaningful_experience, is_meaningful_project, split_bullets,
    split_description_points, starts_with_action_verb,
};

#[test]
fn count_words_handles_odd_whitespace() {
    assert_eq!(count_words(""), 0);
    assert_eq!(count_words("\t \n"), 0);
    assert_eq!(count_words("a b  c"), 3);
    assert_eq!(count_words("  leading and trailing  "), 3);
}

#[test]
fn split_bullets_drops_blank_lines_and_preserves_order() {
    assert_eq!(split_bullets("a\n\nb \n"), vec!["a", "b"]);
    assert_eq!(
        split_bullets("third\r\nfirst\nsecond"),
        vec!["third", "first", "second"]
    );
}

#[test]
fn split_bullets_is_restartable() {
    let text = "one\ntwo";
    assert_eq!(split_bullets(text), split_bullets(text));
}

#[test]
fn description_points_regain_their_periods() {
    assert_eq!(
        split_description_points("Did a thing. Did another"),
        vec!["Did a thing.", "Did another."]
    );
    assert!(split_description_points("  ").is_empty());
}

#[test]
fn numeric_impact_patterns() {
    assert!(contains_numeric_impact("Improved speed by 32%"));
    assert!(contains_numeric_impact("Improved speed by 32 %"));
    assert!(contains_numeric_impact("Cut time 3x"));
    assert!(contains_numeric_impact("Scaled to 40K users"));
    assert!(contains_numeric_impact("shipped 7 features"));
    assert!(!contains_numeric_impact("Improved speed"));
    assert!(!contains_numeric_impact("many percent faster"));
}

#[test]
fn action_verbs_are_a_closed_case_sensitive_set() {
    assert!(starts_with_action_verb("Optimized the hot path"));
    assert!(starts_with_action_verb("Automated"));
    assert!(!starts_with_action_verb("optimized the hot path"));
    assert!(!starts_with_action_verb("Optimizes the hot path"));
    assert!(!starts_with_action_verb("Refactored the parser"));
}

#[test]
fn education_completeness_requires_all_three_fields() {
    let complete = EducationEntry {
        school: "State".into(),
        degree: "B.S.".into(),
        year: "2024".into(),
    };
    assert!(is_complete_education(&complete));

    for blank_field in 0..3 {
        let mut entry = complete.clone();
        match blank_field {
            0 => entry.school = " ".into(),
            1 => entry.degree = " ".into(),
            _ => entry.year = " ".into(),
        }
        assert!(!is_complete_education(&entry));
    }
}

#[test]
fn whitespace_only_entries_are_not_meaningful() {
    let entry = ExperienceEntry {
        company: "  ".into(),
        role: "\t".into(),
        duration: String::new(),
        highlights: " \n ".into(),
    };
    assert!(!is_meaningful_experience(&entry));

    let project = ProjectEntry {
        title: "  ".into(),
        ..ProjectEntry::default()
    };
    assert!(!is_meaningful_project(&project));
}

#[test]
fn all_skills_first_seen_casing_wins() {
    let doc = ResumeDocument {
        skills_by_category: SkillCategories {
            technical: vec!["React".into()],
            ..SkillCategories::default()
        },
        skills: "react, REACT, Vue".into(),
        ..ResumeDocument::blank()
    };
    assert_eq!(all_skills(&doc), vec!["React", "Vue"]);
}

#[test]
fn preview_content_detection_covers_every_section() {
    assert!(!has_any_preview_content(&ResumeDocument::blank()));

    let with = |f: fn(&mut ResumeDocument)| {
        let mut doc = ResumeDocument::blank();
        f(&mut doc);
        has_any_preview_content(&doc)
    };
    assert!(with(|d| d.personal.phone = "555".into()));
    assert!(with(|d| d.summary = "Hi.".into()));
    assert!(with(|d| d.education[0].year = "2020".into()));
    assert!(with(|d| d.experience[0].role = "Engineer".into()));
    assert!(with(|d| d.projects[0].tech_stack.push("Rust".into())));
    assert!(with(|d| d.skills = "one".into()));
    assert!(with(|d| d.github = "gh".into()));
}
