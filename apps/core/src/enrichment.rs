//! Task enrichment workflow.
//!
//! [`TaskDraft::enrich`] turns a caller's draft into a [`NewTask`]: the description is
//! classified only when present, and only the fields the caller left empty
//! are filled from the classification. Remaining gaps get the store defaults
//! (`pending`, `general`, `low`).

use tracing::debug;
use validator::Validate;

use crate::classifier::TaskClassifier;
use crate::error::AppError;
use crate::models::{NewTask, TaskDraft};

impl TaskDraft {
    /// Validates the draft, then fills missing fields from its description.
    pub fn enrich(self, classifier: &TaskClassifier) -> Result<NewTask, AppError> {
        self.validate()?;

        let TaskDraft {
            title,
            description,
            mut category,
            mut priority,
            status,
            assigned_to,
            due_date,
            mut extracted_entities,
            mut suggested_actions,
        } = self;

        if let Some(text) = description.as_deref().filter(|text| !text.is_empty()) {
            let enrichment = classifier.classify(text);

            category.get_or_insert(enrichment.category);
            priority.get_or_insert(enrichment.priority);
            extracted_entities.get_or_insert(enrichment.extracted_entities);
            suggested_actions.get_or_insert(enrichment.suggested_actions);
        } else {
            debug!("No description on draft '{}', skipping classification", title);
        }

        Ok(NewTask {
            title,
            description,
            category: category.unwrap_or_default(),
            priority: priority.unwrap_or_default(),
            status: status.unwrap_or_default(),
            assigned_to,
            due_date,
            extracted_entities,
            suggested_actions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Category, Priority};
    use crate::models::TaskStatus;

    #[test]
    fn test_fills_from_description() {
        let draft = TaskDraft::new("Pump").with_description("Urgent: repair the pump");
        let task = draft.enrich(&TaskClassifier::new()).unwrap();

        assert_eq!(task.category, Category::Technical);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(
            task.suggested_actions.map(|s| s.category),
            Some(Category::Technical)
        );
    }

    #[test]
    fn test_defaults_without_description() {
        let task = TaskDraft::new("Minimal Task").enrich(&TaskClassifier::new()).unwrap();

        assert_eq!(task.category, Category::General);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.extracted_entities.is_none());
        assert!(task.suggested_actions.is_none());
    }

    #[test]
    fn test_rejects_invalid_draft() {
        let err = TaskDraft::new("").enrich(&TaskClassifier::new()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
