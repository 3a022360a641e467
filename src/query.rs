//! Search Query Utilities
//!
//! Normalization and URL building for suggestion lookups.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched, removed from the escape set
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A trimmed, lowercased, non-empty search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Returns `None` when nothing is left after trimming
    pub fn normalize(raw: &str) -> Option<Self> {
        let query = raw
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
            .to_lowercase();
        if query.is_empty() {
            None
        } else {
            Some(Self(query))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<endpoint>?query=<encoded>`
    pub fn request_url(&self, endpoint: &str) -> String {
        format!("{}?query={}", endpoint, encode_component(&self.0))
    }
}

/// Category listing page, e.g. `/category/science%20fiction`
pub fn category_href(category: &str) -> String {
    format!("/category/{}", encode_component(category))
}
