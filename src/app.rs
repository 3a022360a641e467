//! Bookstore Frontend App
//!
//! Page chrome: menu button, search bar with suggestions, and sidebar.

use leptos::prelude::*;

use crate::components::{SearchBar, Sidebar, SidebarToggle};
use crate::config::UiConfig;
use crate::context::SidebarContext;

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(config);
    provide_context(SidebarContext::new(signal(false)));

    view! {
        <header class="top-bar">
            <SidebarToggle />
            <SearchBar />
        </header>
        <Sidebar />
    }
}
