//! Priority detection from urgency cues.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::rules::{first_match, normalize, KeywordRule};

/// Urgency level inferred from language cues
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority: {0}")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(UnknownPriority(other.to_string())),
        }
    }
}

/// High strictly dominates medium. Low has no keywords; it is the fallback.
pub static PRIORITY_RULES: [KeywordRule<Priority>; 2] = [
    KeywordRule::new(
        Priority::High,
        &["urgent", "asap", "immediately", "today", "critical", "emergency"],
    ),
    KeywordRule::new(Priority::Medium, &["soon", "this week", "important"]),
];

/// Maps a description to a [`Priority`]
#[derive(Debug, Clone, Copy)]
pub struct PriorityDetector {
    rules: &'static [KeywordRule<Priority>],
}

impl Default for PriorityDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityDetector {
    pub fn new() -> Self {
        Self {
            rules: &PRIORITY_RULES,
        }
    }

    pub fn detect(&self, text: &str) -> Priority {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Priority::Low;
        }

        first_match(self.rules, &normalized).unwrap_or(Priority::Low)
    }
}

/// Detects the priority of `text` with the default rule table.
pub fn detect_priority(text: &str) -> Priority {
    PriorityDetector::new().detect(text)
}
