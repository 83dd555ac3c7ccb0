use proptest::prelude::*;
use serde_json::{Map, Value, json};

use cvkit::resume::normalize::normalize;
use cvkit::resume::predicates::count_words;

/// Arbitrary JSON, biased toward the field names the normalizer knows so
/// the interesting branches actually get exercised.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        ".{0,40}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        let key = prop_oneof![
            Just("personal".to_string()),
            Just("summary".to_string()),
            Just("education".to_string()),
            Just("experience".to_string()),
            Just("projects".to_string()),
            Just("skills".to_string()),
            Just("skillsByCategory".to_string()),
            Just("technical".to_string()),
            Just("school".to_string()),
            Just("name".to_string()),
            Just("title".to_string()),
            Just("techStack".to_string()),
            Just("highlights".to_string()),
            "[a-z]{1,8}",
        ];
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((key, inner), 0..6).prop_map(|entries| {
                Value::Object(entries.into_iter().collect::<Map<_, _>>())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn normalize_never_violates_invariants(input in arb_json()) {
        let doc = normalize(&input);
        prop_assert!(!doc.education.is_empty());
        prop_assert!(!doc.experience.is_empty());
        prop_assert!(!doc.projects.is_empty());
        for project in &doc.projects {
            prop_assert!(project.description.chars().count() <= 200);
        }
        for category in [
            &doc.skills_by_category.technical,
            &doc.skills_by_category.soft,
            &doc.skills_by_category.tools,
        ] {
            prop_assert!(category.iter().all(|s| !s.trim().is_empty() && s.trim() == s));
            let lowered: Vec<String> = category.iter().map(|s| s.to_lowercase()).collect();
            let unique: std::collections::HashSet<&String> = lowered.iter().collect();
            prop_assert_eq!(lowered.len(), unique.len());
        }
    }

    #[test]
    fn normalize_is_idempotent(input in arb_json()) {
        let once = normalize(&input);
        let twice = normalize(&serde_json::to_value(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn scoring_is_total_and_bounded(input in arb_json()) {
        let doc = normalize(&input);
        let result = cvkit::resume::ats::score(&doc);
        prop_assert!(result.score <= 100);
        prop_assert!(result.suggestions.len() <= 3);
        // allCriteriaMet can only hold when nothing was suggested.
        if result.all_criteria_met {
            prop_assert!(result.suggestions.is_empty());
        }
    }

    #[test]
    fn count_words_matches_split_whitespace(text in ".{0,80}") {
        prop_assert_eq!(count_words(&text), text.split_whitespace().count());
    }
}
