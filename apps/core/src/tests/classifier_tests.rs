//! Classifier Tests
//!
//! Scenario tests for the composed classifier plus property tests for
//! totality, determinism and case-insensitivity.

use crate::classifier::{
    classify_task, detect_category, detect_priority, extract_entities, suggested_actions,
    Category, ClassificationResult, ExtractedEntities, Priority, SuggestedActions,
};
use proptest::prelude::*;
use serde_json::json;

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_meeting_with_person_and_place() {
        let result = classify_task("Schedule a meeting with John Doe today at Site Office 2pm");

        assert_eq!(result.category, Category::Scheduling);
        assert_eq!(result.priority, Priority::High);

        let entities = &result.extracted_entities;
        assert!(entities.dates.contains(&"today".to_string()));
        assert!(entities.dates.contains(&"2pm".to_string()));
        assert!(entities.people.contains(&"John Doe".to_string()));
        assert!(entities.locations.contains(&"Site Office".to_string()));

        assert_eq!(
            result.suggested_actions.actions,
            vec!["Block calendar", "Send invite", "Prepare agenda", "Set reminder"]
        );
    }

    #[test]
    fn test_technical_incident() {
        let result = classify_task("Urgent: fix the error in Server Room B by tomorrow 9am");

        assert_eq!(
            result,
            ClassificationResult {
                category: Category::Technical,
                priority: Priority::High,
                extracted_entities: ExtractedEntities {
                    dates: vec!["tomorrow".into(), "9am".into()],
                    people: vec![],
                    locations: vec!["Server Room".into()],
                    action_verbs: vec!["fix".into()],
                },
                suggested_actions: SuggestedActions::for_category(Category::Technical),
            }
        );
    }

    #[test]
    fn test_empty_description_json() {
        let json = serde_json::to_value(classify_task("")).unwrap();

        assert_eq!(
            json,
            json!({
                "category": "general",
                "priority": "low",
                "extracted_entities": {
                    "dates": [],
                    "people": [],
                    "locations": [],
                    "actionVerbs": []
                },
                "suggested_actions": { "category": "general", "actions": [] }
            })
        );
    }

    #[test]
    fn test_suggested_actions_for_every_named_category() {
        for (description, category) in [
            ("Set up a call", Category::Scheduling),
            ("Approve the expense report", Category::Finance),
            ("Install the new router", Category::Technical),
            ("Compliance walkthrough", Category::Safety),
        ] {
            let result = classify_task(description);
            assert_eq!(result.category, category, "category for '{}'", description);
            assert_eq!(result.suggested_actions.category, category);
            assert_eq!(result.suggested_actions.actions, suggested_actions(category));
            assert_eq!(result.suggested_actions.actions.len(), 4);
        }
    }

    #[test]
    fn test_hostile_input_does_not_panic() {
        let nasty =
            "((([*]+?)$^|\\ ünïcödé 日本語 🚀 with Ünal Şahin at Ärztehaus ".repeat(500);
        let result = classify_task(&nasty);

        assert_eq!(result.category, Category::General);
        assert!(result.extracted_entities.people.is_empty());
    }
}

proptest! {
    #[test]
    fn prop_classification_is_deterministic(text in "\\PC{0,200}") {
        let first = serde_json::to_string(&classify_task(&text)).unwrap();
        let second = serde_json::to_string(&classify_task(&text)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_suggested_category_matches_category(text in "\\PC{0,200}") {
        let result = classify_task(&text);
        prop_assert_eq!(result.suggested_actions.category, result.category);
    }

    #[test]
    fn prop_detection_ignores_ascii_case(text in "[ -~]{0,80}") {
        let category = detect_category(&text);
        prop_assert_eq!(category, detect_category(&text.to_uppercase()));
        prop_assert_eq!(category, detect_category(&text.to_lowercase()));

        let priority = detect_priority(&text);
        prop_assert_eq!(priority, detect_priority(&text.to_uppercase()));
        prop_assert_eq!(priority, detect_priority(&text.to_lowercase()));
    }

    #[test]
    fn prop_keyword_injection_is_detected(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
        let text = format!("{} deadline {}", prefix, suffix);
        prop_assert_eq!(detect_category(&text), Category::Scheduling);

        let text = format!("{} EMERGENCY {}", prefix, suffix);
        prop_assert_eq!(detect_priority(&text), Priority::High);
    }

    #[test]
    fn prop_entities_are_deduplicated(text in "[A-Za-z0-9 :/-]{0,120}") {
        let entities = extract_entities(&text);
        for list in [&entities.dates, &entities.people, &entities.locations] {
            let mut unique = list.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), list.len());
        }
    }
}
