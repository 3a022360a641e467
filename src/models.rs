//! Frontend Models
//!
//! Data structures matching the server's JSON payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Book primary key (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the `/search_suggestions` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: BookId,
    pub title: String,
}

impl Suggestion {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id: BookId(id),
            title: title.into(),
        }
    }

    /// Book page this suggestion navigates to, e.g. `/book/42`
    pub fn href(&self, book_path: &str) -> String {
        format!("{}/{}", book_path.trim_end_matches('/'), self.id)
    }
}

/// Fixed sidebar link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}
