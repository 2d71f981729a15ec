//! Classification Result - Output structure for task enrichment.

use serde::{Deserialize, Serialize};

use super::actions::SuggestedActions;
use super::category::Category;
use super::entities::ExtractedEntities;
use super::priority::Priority;

/// Complete enrichment for one task description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub priority: Priority,
    pub extracted_entities: ExtractedEntities,
    pub suggested_actions: SuggestedActions,
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            category: Category::General,
            priority: Priority::Low,
            extracted_entities: ExtractedEntities::default(),
            suggested_actions: SuggestedActions::for_category(Category::General),
        }
    }
}

impl ClassificationResult {
    /// Get a summary for logging
    pub fn summary(&self) -> String {
        let entities = &self.extracted_entities;
        format!(
            "Category: {}, Priority: {}, Dates: {}, People: {}, Locations: {}, Verbs: {}",
            self.category,
            self.priority,
            entities.dates.len(),
            entities.people.len(),
            entities.locations.len(),
            entities.action_verbs.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_general_low() {
        let result = ClassificationResult::default();

        assert_eq!(result.category, Category::General);
        assert_eq!(result.priority, Priority::Low);
        assert!(result.extracted_entities.is_empty());
        assert_eq!(result.suggested_actions.category, Category::General);
        assert!(result.suggested_actions.actions.is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = ClassificationResult::default().summary();

        assert!(summary.contains("Category: general"));
        assert!(summary.contains("Priority: low"));
    }
}
