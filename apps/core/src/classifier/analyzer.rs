//! Task Classifier - composition root for description enrichment.
//!
//! Runs category detection, priority detection and entity extraction on the
//! same raw description, then looks up suggested actions for the category.
//! Every step has a defined default, so classification never fails.

use tracing::debug;

use super::actions::SuggestedActions;
use super::category::CategoryDetector;
use super::entities::EntityExtractor;
use super::priority::PriorityDetector;
use super::result::ClassificationResult;

/// Orchestrates all classification components
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskClassifier {
    category_detector: CategoryDetector,
    priority_detector: PriorityDetector,
    entity_extractor: EntityExtractor,
}

impl TaskClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a classifier around a custom category detector
    pub fn with_category_detector(category_detector: CategoryDetector) -> Self {
        Self {
            category_detector,
            ..Self::default()
        }
    }

    /// Classify a task description
    pub fn classify(&self, description: &str) -> ClassificationResult {
        let category = self.category_detector.detect(description);
        let priority = self.priority_detector.detect(description);
        let extracted_entities = self.entity_extractor.extract(description);
        let suggested_actions = SuggestedActions::for_category(category);

        let result = ClassificationResult {
            category,
            priority,
            extracted_entities,
            suggested_actions,
        };

        debug!("Classified description: {}", result.summary());
        result
    }
}

/// Classifies `description` with the default rule tables.
pub fn classify_task(description: &str) -> ClassificationResult {
    TaskClassifier::new().classify(description)
}
