use std::fmt;

/// Free-text prompt submitted to the image search provider.
///
/// Only the empty string is rejected. Surrounding whitespace is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            log::debug!("[SEARCH_QUERY] rejecting empty query");
            return None;
        }

        Some(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
