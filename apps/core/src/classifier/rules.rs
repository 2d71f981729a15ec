//! Ordered keyword rules.
//!
//! Precedence between outcomes is the order of the table: the first rule with
//! any keyword present in the text wins, regardless of how many keywords later
//! rules would match.

/// A single `(keywords, result)` entry of an ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T: 'static> {
    pub result: T,
    pub keywords: &'static [&'static str],
}

impl<T: Copy> KeywordRule<T> {
    pub const fn new(result: T, keywords: &'static [&'static str]) -> Self {
        Self { result, keywords }
    }

    /// Substring match against already-normalized text.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized.contains(keyword))
    }
}

/// Evaluates `rules` in order and returns the result of the first hit.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], normalized: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.matches(normalized))
        .map(|rule| rule.result)
}

/// Lower-cases and trims a description for keyword checks.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}
