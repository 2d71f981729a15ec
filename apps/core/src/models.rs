use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::classifier::{Category, ExtractedEntities, Priority, SuggestedActions};

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// Task payload as supplied by a caller, before enrichment.
///
/// Every optional field the caller fills in takes precedence over the value
/// the classifier would infer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_contact_fields"))]
pub struct TaskDraft {
    /// Short task title. Must not be empty.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Free-text description fed to the classifier.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Email of the assignee; an empty string means unassigned.
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// RFC 3339 timestamp; an empty string means no due date.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub extracted_entities: Option<ExtractedEntities>,
    #[serde(default)]
    pub suggested_actions: Option<SuggestedActions>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_contact_fields(draft: &TaskDraft) -> Result<(), ValidationError> {
    if let Some(assignee) = &draft.assigned_to {
        if !assignee.is_empty() && !assignee.validate_email() {
            return Err(field_error("assigned_to", "assigned_to must be an email address"));
        }
    }

    if let Some(due_date) = &draft.due_date {
        if !due_date.is_empty() && DateTime::parse_from_rfc3339(due_date).is_err() {
            return Err(field_error("due_date", "due_date must be an RFC 3339 timestamp"));
        }
    }

    Ok(())
}

/// Enriched task, ready to hand to the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
    pub extracted_entities: Option<ExtractedEntities>,
    pub suggested_actions: Option<SuggestedActions>,
}
