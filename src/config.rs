//! UI Configuration
//!
//! Read once at start-up from an optional JSON block embedded in the page:
//! `<script type="application/json" id="ui-config">{ ... }</script>`.
//! Every field has a default matching the bookstore's templates.

use log::LevelFilter;
use serde::Deserialize;

use crate::models::NavLink;

/// Id of the element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub suggestions_endpoint: String,
    pub book_path: String,
    pub sidebar_id: String,
    pub sidebar_open_class: String,
    pub search_bar_id: String,
    pub suggestions_id: String,
    pub no_results_text: String,
    pub search_placeholder: String,
    /// 0 sends one request per keystroke
    pub debounce_ms: u32,
    pub discard_stale_responses: bool,
    pub log_level: String,
    pub nav_links: Vec<NavLink>,
    pub categories: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            suggestions_endpoint: "/search_suggestions".to_string(),
            book_path: "/book".to_string(),
            sidebar_id: "sidebar".to_string(),
            sidebar_open_class: "open".to_string(),
            search_bar_id: "search-bar".to_string(),
            suggestions_id: "search-suggestions".to_string(),
            no_results_text: "No results found".to_string(),
            search_placeholder: "Search books...".to_string(),
            debounce_ms: 0,
            discard_stale_responses: true,
            log_level: "info".to_string(),
            nav_links: vec![NavLink::new("Home", "/"), NavLink::new("Cart", "/cart")],
            categories: Vec::new(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }

    /// Load from the page; a missing config element yields the defaults
    pub fn load() -> Result<Self, serde_json::Error> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        console_logger::parse_level(&self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_templates() {
        let config = UiConfig::default();
        assert_eq!(config.suggestions_endpoint, "/search_suggestions");
        assert_eq!(config.sidebar_id, "sidebar");
        assert_eq!(config.search_bar_id, "search-bar");
        assert_eq!(config.suggestions_id, "search-suggestions");
        assert_eq!(config.debounce_ms, 0);
        assert!(config.discard_stale_responses);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = UiConfig::from_json(r#"{"debounce_ms": 150, "categories": ["Fantasy", "Poetry"]}"#).unwrap();
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.categories, vec!["Fantasy".to_string(), "Poetry".to_string()]);
        assert_eq!(config.book_path, "/book");
        assert_eq!(config.nav_links.len(), 2);
    }

    #[test]
    fn test_blank_json_is_default() {
        assert_eq!(UiConfig::from_json("  \n").unwrap(), UiConfig::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(UiConfig::from_json("{debounce_ms: 1").is_err());
        assert!(UiConfig::from_json(r#"{"debounce_ms": "fast"}"#).is_err());
    }

    #[test]
    fn test_level_filter() {
        let config = UiConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }
}
