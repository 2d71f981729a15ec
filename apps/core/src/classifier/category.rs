//! Category detection using ordered keyword rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::rules::{first_match, normalize, KeywordRule};

/// Coarse classification bucket for a task description
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Scheduling,
    Finance,
    Technical,
    Safety,
    /// Fallback when no rule matches
    #[default]
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Scheduling,
        Category::Finance,
        Category::Technical,
        Category::Safety,
        Category::General,
    ];

    /// Returns the wire label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Scheduling => "scheduling",
            Category::Finance => "finance",
            Category::Technical => "technical",
            Category::Safety => "safety",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category rules in tie-break order: scheduling beats finance beats
/// technical beats safety.
pub static CATEGORY_RULES: [KeywordRule<Category>; 4] = [
    KeywordRule::new(
        Category::Scheduling,
        &["meeting", "schedule", "call", "appointment", "deadline"],
    ),
    KeywordRule::new(
        Category::Finance,
        &["payment", "invoice", "bill", "budget", "cost", "expense"],
    ),
    KeywordRule::new(
        Category::Technical,
        &["bug", "fix", "error", "install", "repair", "maintain"],
    ),
    KeywordRule::new(
        Category::Safety,
        &["safety", "hazard", "inspection", "compliance", "ppe"],
    ),
];

/// Maps a description to a [`Category`]
#[derive(Debug, Clone, Copy)]
pub struct CategoryDetector {
    rules: &'static [KeywordRule<Category>],
}

impl Default for CategoryDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryDetector {
    pub fn new() -> Self {
        Self::with_rules(&CATEGORY_RULES)
    }

    /// Detector over a custom rule table; table order is the tie-break order.
    pub fn with_rules(rules: &'static [KeywordRule<Category>]) -> Self {
        Self { rules }
    }

    pub fn detect(&self, text: &str) -> Category {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Category::General;
        }

        first_match(self.rules, &normalized).unwrap_or(Category::General)
    }
}

/// Detects the category of `text` with the default rule table.
pub fn detect_category(text: &str) -> Category {
    CategoryDetector::new().detect(text)
}
