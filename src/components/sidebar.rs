//! Sidebar Components
//!
//! Toggle button plus the sidebar navigation it opens and closes.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::context::use_sidebar;
use crate::models::NavLink;
use crate::query::category_href;

/// Class list of the sidebar element
pub fn sidebar_class(open: bool, open_class: &str) -> String {
    if open {
        format!("sidebar {}", open_class)
    } else {
        "sidebar".to_string()
    }
}

/// Menu button flipping the sidebar's open class
#[component]
pub fn SidebarToggle() -> impl IntoView {
    let sidebar = use_sidebar();

    view! {
        <button
            class="menu-toggle"
            aria-label="Toggle menu"
            aria-expanded=move || sidebar.open.get().to_string()
            on:click=move |_| sidebar.toggle()
        >
            "☰"
        </button>
    }
}

/// Sidebar with site links and one link per book category
#[component]
pub fn Sidebar() -> impl IntoView {
    let config = expect_context::<UiConfig>();
    let sidebar = use_sidebar();
    let open_class = config.sidebar_open_class.clone();

    let links = config
        .nav_links
        .iter()
        .cloned()
        .chain(config.categories.iter().map(|name| NavLink::new(name.clone(), category_href(name))))
        .collect::<Vec<_>>();

    view! {
        <nav id=config.sidebar_id.clone() class=move || sidebar_class(sidebar.open.get(), &open_class)>
            <ul class="sidebar-links">
                {links.into_iter().map(|link| {
                    view! {
                        <li>
                            <a href=link.href on:click=move |_| sidebar.close()>{link.label}</a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
