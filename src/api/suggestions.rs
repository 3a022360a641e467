//! Search Suggestion Endpoint
//!
//! `GET /search_suggestions?query=...` returning `[{id, title}]`.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::FetchError;
use crate::models::Suggestion;
use crate::query::SearchQuery;

/// Anything that can answer a suggestion lookup
#[async_trait(?Send)]
pub trait SuggestionSource {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Suggestion>, FetchError>;
}

/// Suggestion source backed by the browser's `fetch`
#[derive(Debug, Clone)]
pub struct HttpSuggestionSource {
    endpoint: String,
}

impl HttpSuggestionSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl SuggestionSource for HttpSuggestionSource {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Suggestion>, FetchError> {
        let url = query.request_url(&self.endpoint);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<Vec<Suggestion>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
