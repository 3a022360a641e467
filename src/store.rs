//! Search State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! suggestions container.

use reactive_stores::Store;

use crate::api::FetchError;
use crate::models::Suggestion;
use crate::query::SearchQuery;

/// What the suggestions container currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SuggestionsView {
    /// No children
    #[default]
    Cleared,
    /// A single non-interactive "No results found" item
    NoResults,
    /// One clickable item per suggestion, in server order
    Entries(Vec<Suggestion>),
}

/// Request counter value a search was issued with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// A lookup that still has to go to the server
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub ticket: Ticket,
    pub query: SearchQuery,
}

/// Result of one search invocation
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Empty query, container emptied without a request
    Cleared,
    /// Server returned `[]`
    NoResults,
    /// Server returned this many suggestions
    Rendered(usize),
    /// Request failed; container emptied
    Failed(FetchError),
    /// A newer search was issued before this one finished
    Superseded,
    /// The search state was disposed (component unmounted) mid-request
    Detached,
}

/// Suggestions container state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct SearchState {
    /// Current container contents
    pub view: SuggestionsView,
    /// Keyboard-highlighted entry index
    pub highlighted: Option<usize>,
    /// Number of searches issued so far (latest ticket)
    pub issued: u64,
    /// Drop responses of searches that are no longer the latest
    pub discard_stale: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SearchState {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            view: SuggestionsView::Cleared,
            highlighted: None,
            issued: 0,
            discard_stale,
        }
    }

    /// Start a search for the raw input value
    ///
    /// An empty normalized query clears the container and needs no request.
    pub fn begin(&mut self, raw: &str) -> Option<PendingSearch> {
        self.issued += 1;
        match SearchQuery::normalize(raw) {
            Some(query) => Some(PendingSearch {
                ticket: Ticket(self.issued),
                query,
            }),
            None => {
                self.clear();
                None
            }
        }
    }

    /// Whether no search was issued after `ticket`
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply a finished request to the container
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Suggestion>, FetchError>,
    ) -> SearchOutcome {
        if self.discard_stale && !self.is_latest(ticket) {
            return SearchOutcome::Superseded;
        }
        self.highlighted = None;
        match result {
            Ok(suggestions) if suggestions.is_empty() => {
                self.view = SuggestionsView::NoResults;
                SearchOutcome::NoResults
            }
            Ok(suggestions) => {
                let count = suggestions.len();
                self.view = SuggestionsView::Entries(suggestions);
                SearchOutcome::Rendered(count)
            }
            Err(err) => {
                self.view = SuggestionsView::Cleared;
                SearchOutcome::Failed(err)
            }
        }
    }

    pub fn clear(&mut self) {
        self.view = SuggestionsView::Cleared;
        self.highlighted = None;
    }

    /// Close the list and ignore every request still in flight
    pub fn dismiss(&mut self) {
        self.issued += 1;
        self.clear();
    }

    fn entry_count(&self) -> usize {
        match &self.view {
            SuggestionsView::Entries(entries) => entries.len(),
            _ => 0,
        }
    }

    pub fn highlight_next(&mut self) {
        let count = self.entry_count();
        if count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < count => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        if let Some(i) = self.highlighted {
            self.highlighted = if i == 0 { None } else { Some(i - 1) };
        }
    }

    /// Suggestion under the keyboard highlight
    pub fn highlighted_suggestion(&self) -> Option<&Suggestion> {
        match (&self.view, self.highlighted) {
            (SuggestionsView::Entries(entries), Some(i)) => entries.get(i),
            _ => None,
        }
    }
}

/// Type alias for the store
pub type SearchStore = Store<SearchState>;
