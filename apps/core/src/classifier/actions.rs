//! Canned next actions per category.

use serde::{Deserialize, Serialize};

use super::category::Category;

const SCHEDULING_ACTIONS: &[&str] = &[
    "Block calendar",
    "Send invite",
    "Prepare agenda",
    "Set reminder",
];
const FINANCE_ACTIONS: &[&str] = &[
    "Check budget",
    "Get approval",
    "Generate invoice",
    "Update records",
];
const TECHNICAL_ACTIONS: &[&str] = &[
    "Diagnose issue",
    "Check resources",
    "Assign technician",
    "Document fix",
];
const SAFETY_ACTIONS: &[&str] = &[
    "Conduct inspection",
    "File report",
    "Notify supervisor",
    "Update checklist",
];

/// Suggested actions paired with the category they were derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedActions {
    pub category: Category,
    pub actions: Vec<String>,
}

impl SuggestedActions {
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            actions: suggested_actions(category)
                .iter()
                .map(|action| action.to_string())
                .collect(),
        }
    }
}

/// Ordered action list for `category`; empty for [`Category::General`].
pub fn suggested_actions(category: Category) -> &'static [&'static str] {
    match category {
        Category::Scheduling => SCHEDULING_ACTIONS,
        Category::Finance => FINANCE_ACTIONS,
        Category::Technical => TECHNICAL_ACTIONS,
        Category::Safety => SAFETY_ACTIONS,
        Category::General => &[],
    }
}

/// Lookup by raw category name; unrecognized names yield an empty list.
pub fn suggested_actions_for(name: &str) -> &'static [&'static str] {
    name.parse::<Category>()
        .map(suggested_actions)
        .unwrap_or_default()
}
