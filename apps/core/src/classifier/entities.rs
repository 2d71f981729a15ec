//! Entity extraction using regex patterns.
//!
//! Pulls dates/times, people, locations and action verbs out of a task
//! description. Name and location rules run on the raw, case-preserved text;
//! token and verb checks run on the lower-cased copy.
//!
//! Word boundaries, digits and word characters are ASCII-only (`(?-u:\b)`,
//! `[0-9]`, `[A-Za-z0-9_]`), so accented letters never count as part of a word.
//! Whitespace is the ECMAScript set: Unicode `White_Space` plus U+FEFF, minus
//! U+0085.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::ordered_set::OrderedSet;
use super::rules::normalize;

/// Entities extracted from a description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub dates: Vec<String>,
    pub people: Vec<String>,
    pub locations: Vec<String>,
    #[serde(rename = "actionVerbs")]
    pub action_verbs: Vec<String>,
}

impl ExtractedEntities {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
            && self.people.is_empty()
            && self.locations.is_empty()
            && self.action_verbs.is_empty()
    }
}

/// Relative date tokens, checked against the normalized text.
const DATE_TOKENS: &[&str] = &["today", "tomorrow"];

/// Output order of action verbs is the order of this list.
pub const ACTION_VERBS: &[&str] = &[
    "call", "meet", "schedule", "book", "send", "prepare", "review", "pay", "invoice", "approve",
    "update", "define", "check", "debug", "built", "solve", "implement", "improve", "fix",
    "install", "repair", "maintain", "diagnose", "document", "inspect", "audit", "notify", "file",
    "led", "direct", "plan",
];

/// One whitespace character: `\s` with U+FEFF added and U+0085 removed.
const SPACE: &str = r"[[\s\x{FEFF}]--\x{85}]";
const HONORIFIC: &str = r"(?:Dr\.?|Mr\.?|Ms\.?|Mrs\.?|Prof\.?|Sir|Madam)";
const NAME_PART: &str = "[A-Z][a-z]+";
const PLACE_PART: &str = "[A-Z][A-Za-z0-9_]+";

// NOTE: expect() is acceptable here: patterns are fixed at compile time
static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let clock = format!(r"(?-u:\b)([0-9]{{1,2}}:[0-9]{{2}}{SPACE}?(am|pm)?)(?-u:\b)");
    let bare_hour = format!(r"(?-u:\b)([0-9]{{1,2}}{SPACE}?(am|pm))(?-u:\b)");

    vec![
        // 2025-12-31, 2025/12/31
        Regex::new(r"(?-u:\b)[0-9]{4}[-/][0-9]{2}[-/][0-9]{2}(?-u:\b)")
            .expect("Invalid regex: ISO date"),
        // 31-12-2025, 31/12/2025
        Regex::new(r"(?-u:\b)[0-9]{1,2}[-/][0-9]{1,2}[-/][0-9]{4}(?-u:\b)")
            .expect("Invalid regex: day-month-year date"),
        // 2pm, 2:30pm, 2:30 pm, 14:30
        Regex::new(&format!("(?i){clock}|{bare_hour}")).expect("Invalid regex: clock time"),
    ]
});

static PERSON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    // 2..4 name parts: Emily Smith, Emily Jane Smith, Emily Jane Ann Smith
    let full_name =
        format!(r"(?:{HONORIFIC}{SPACE}+)?({NAME_PART}(?:{SPACE}+{NAME_PART}){{1,3}})");

    [
        "with".to_string(),
        "by".to_string(),
        format!("assign{SPACE}+to"),
        format!("Assign{SPACE}+to"),
    ]
    .iter()
    .map(|trigger| {
        Regex::new(&format!(r"(?-u:\b){trigger}{SPACE}+{full_name}(?-u:\b)"))
            .expect("Invalid regex: person trigger")
    })
    .collect()
});

static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["at", "in", "on"]
        .iter()
        .map(|trigger| {
            Regex::new(&format!(
                r"(?-u:\b){trigger}{SPACE}+({PLACE_PART}(?:{SPACE}+{PLACE_PART}){{0,4}})(?-u:\b)"
            ))
            .expect("Invalid regex: location trigger")
        })
        .collect()
});

/// Extracts structured fragments from free text
#[derive(Debug, Clone, Copy)]
pub struct EntityExtractor {
    date_tokens: &'static [&'static str],
    action_verbs: &'static [&'static str],
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor {
    pub fn new() -> Self {
        Self {
            date_tokens: DATE_TOKENS,
            action_verbs: ACTION_VERBS,
        }
    }

    pub fn extract(&self, text: &str) -> ExtractedEntities {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return ExtractedEntities::default();
        }

        ExtractedEntities {
            dates: self.extract_dates(text, &normalized),
            people: captures_from(&PERSON_PATTERNS, text),
            locations: captures_from(&LOCATION_PATTERNS, text),
            action_verbs: self.extract_action_verbs(&normalized),
        }
    }

    /// Tokens first, then ISO dates, day-month-year dates and clock times.
    fn extract_dates(&self, raw: &str, normalized: &str) -> Vec<String> {
        let mut dates = OrderedSet::new();

        dates.extend(
            self.date_tokens
                .iter()
                .copied()
                .filter(|token| normalized.contains(token)),
        );

        for pattern in DATE_PATTERNS.iter() {
            dates.extend(pattern.find_iter(raw).map(|m| m.as_str().trim()));
        }

        dates.into_vec()
    }

    fn extract_action_verbs(&self, normalized: &str) -> Vec<String> {
        self.action_verbs
            .iter()
            .filter(|verb| normalized.contains(*verb))
            .map(|verb| verb.to_string())
            .collect()
    }
}

/// First capture group of every match, pattern by pattern, deduplicated.
fn captures_from(patterns: &[Regex], raw: &str) -> Vec<String> {
    let mut found = OrderedSet::new();

    for pattern in patterns {
        for caps in pattern.captures_iter(raw) {
            if let Some(m) = caps.get(1) {
                found.insert(m.as_str().trim());
            }
        }
    }

    found.into_vec()
}

/// Extracts entities from `text` with the default tables.
pub fn extract_entities(text: &str) -> ExtractedEntities {
    EntityExtractor::new().extract(text)
}
