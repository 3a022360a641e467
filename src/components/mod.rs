//! UI Components
//!
//! Leptos components for the bookstore page chrome.

mod search_bar;
mod sidebar;

pub use search_bar::SearchBar;
pub use sidebar::{Sidebar, SidebarToggle};
