//! Server API Wrappers
//!
//! Frontend bindings to the bookstore's JSON endpoints.

mod suggestions;

use std::fmt;

pub use suggestions::*;

/// Failure of a request to the server
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Server answered with a non-2xx status
    Status(u16),
    /// Request never completed
    Network(String),
    /// Body was not the expected JSON
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "Network response was not ok (HTTP {})", code),
            FetchError::Network(msg) => write!(f, "request failed: {}", msg),
            FetchError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Status(404).to_string(), "Network response was not ok (HTTP 404)");
        assert_eq!(FetchError::Network("offline".into()).to_string(), "request failed: offline");
        assert!(FetchError::Decode("expected `[`".into()).to_string().starts_with("invalid response body"));
    }
}
