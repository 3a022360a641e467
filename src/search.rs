//! Search Handler
//!
//! One invocation per input event: normalize, fetch, render.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::api::SuggestionSource;
use crate::store::{SearchOutcome, SearchStore};

/// Run a suggestion lookup for the current input value
///
/// With `debounce_ms > 0` the request waits that long and is skipped if
/// another keystroke arrived meanwhile.
pub async fn run_search<S>(source: &S, state: SearchStore, raw: &str, debounce_ms: u32) -> SearchOutcome
where
    S: SuggestionSource + ?Sized,
{
    let wait = async move {
        if debounce_ms > 0 {
            TimeoutFuture::new(debounce_ms).await;
        }
    };
    search_after(source, state, raw, wait).await
}

/// Same as `run_search`, with the pre-request wait supplied by the caller
///
/// The request is only sent if no other search began while `wait` ran.
pub async fn search_after<S, W>(source: &S, state: SearchStore, raw: &str, wait: W) -> SearchOutcome
where
    S: SuggestionSource + ?Sized,
    W: Future<Output = ()>,
{
    let pending = match state.try_update(|s| s.begin(raw)) {
        Some(Some(pending)) => pending,
        Some(None) => return SearchOutcome::Cleared,
        None => return detached(raw),
    };

    wait.await;
    match state.try_with_untracked(|s| s.is_latest(pending.ticket)) {
        Some(true) => {}
        Some(false) => {
            log::debug!("[search] skipped '{}' (newer input)", pending.query.as_str());
            return SearchOutcome::Superseded;
        }
        None => return detached(pending.query.as_str()),
    }

    let result = source.fetch(&pending.query).await;
    let outcome = match state.try_update(|s| s.resolve(pending.ticket, result)) {
        Some(outcome) => outcome,
        None => return detached(pending.query.as_str()),
    };

    match &outcome {
        SearchOutcome::Failed(err) => {
            log::error!("Fetch error: {} (query '{}')", err, pending.query.as_str())
        }
        SearchOutcome::Superseded => {
            log::debug!("[search] dropped stale response for '{}'", pending.query.as_str())
        }
        SearchOutcome::Rendered(count) => {
            log::debug!("[search] '{}' -> {} suggestions", pending.query.as_str(), count)
        }
        SearchOutcome::NoResults | SearchOutcome::Cleared | SearchOutcome::Detached => {}
    }
    outcome
}

fn detached(query: &str) -> SearchOutcome {
    log::debug!("[search] state disposed, dropping '{}'", query);
    SearchOutcome::Detached
}
