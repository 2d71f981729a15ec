//! # Classifier Module
//!
//! Heuristic enrichment of free-text task descriptions.
//! Pure functions only: no I/O, no shared mutable state.
//!
//! ## Components
//! - `rules`: ordered keyword tables with first-match-wins evaluation
//! - `category`: category detection (scheduling, finance, technical, safety)
//! - `priority`: urgency detection (high, medium, low)
//! - `entities`: dates, people, locations and action verbs
//! - `actions`: canned next actions per category
//! - `ordered_set`: unique values in first-seen order
//! - `result`: output data structure
//! - `analyzer`: composition root

pub mod actions;
pub mod analyzer;
pub mod category;
pub mod entities;
pub mod ordered_set;
pub mod priority;
pub mod result;
pub mod rules;

pub use actions::{suggested_actions, suggested_actions_for, SuggestedActions};
pub use analyzer::{classify_task, TaskClassifier};
pub use category::{detect_category, Category, CategoryDetector};
pub use entities::{extract_entities, EntityExtractor, ExtractedEntities};
pub use ordered_set::OrderedSet;
pub use priority::{detect_priority, Priority, PriorityDetector};
pub use result::ClassificationResult;
pub use rules::KeywordRule;
