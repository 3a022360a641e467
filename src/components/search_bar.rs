//! Search Bar Component
//!
//! Search input with server-backed book suggestions. Each input event runs
//! one lookup; the list below the input is replaced with the result.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpSuggestionSource;
use crate::config::UiConfig;
use crate::navigation;
use crate::search::run_search;
use crate::store::{SearchState, SearchStateStoreFields, SuggestionsView};

/// Search input plus suggestions container
#[component]
pub fn SearchBar() -> impl IntoView {
    let config = expect_context::<UiConfig>();
    let state = Store::new(SearchState::new(config.discard_stale_responses));
    let source = HttpSuggestionSource::new(config.suggestions_endpoint.clone());
    let debounce_ms = config.debounce_ms;
    let book_path = config.book_path.clone();
    let no_results_text = config.no_results_text.clone();

    let on_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        let source = source.clone();
        spawn_local(async move {
            run_search(&source, state, &raw, debounce_ms).await;
        });
    };

    let on_keydown = {
        let book_path = book_path.clone();
        move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                state.update(|s| s.highlight_next());
            }
            "ArrowUp" => {
                ev.prevent_default();
                state.update(|s| s.highlight_prev());
            }
            "Enter" => {
                let href = state.with_untracked(|s| s.highlighted_suggestion().map(|s| s.href(&book_path)));
                if let Some(href) = href {
                    ev.prevent_default();
                    navigation::navigate(&href);
                }
            }
            "Escape" => state.update(|s| s.dismiss()),
            _ => {}
        }
    };

    let suggestions = move || {
        let highlighted = state.highlighted().get();
        match state.view().get() {
            SuggestionsView::Cleared => ().into_any(),
            SuggestionsView::NoResults => view! {
                <li class="no-results">{no_results_text.clone()}</li>
            }
            .into_any(),
            SuggestionsView::Entries(entries) => entries
                .into_iter()
                .enumerate()
                .map(|(i, suggestion)| {
                    let href = suggestion.href(&book_path);
                    view! {
                        <li
                            class=if highlighted == Some(i) { "suggestion highlighted" } else { "suggestion" }
                            on:click=move |_| navigation::navigate(&href)
                        >
                            {suggestion.title}
                        </li>
                    }
                })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="search-container">
            <input
                type="text"
                id=config.search_bar_id.clone()
                placeholder=config.search_placeholder.clone()
                autocomplete="off"
                on:input=on_input
                on:keydown=on_keydown
            />
            <ul id=config.suggestions_id.clone() class="suggestions">
                {suggestions}
            </ul>
        </div>
    }
}
