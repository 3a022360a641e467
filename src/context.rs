//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Sidebar visibility shared by the toggle button and the sidebar itself
#[derive(Clone, Copy)]
pub struct SidebarContext {
    /// Whether the sidebar carries the open class - read
    pub open: ReadSignal<bool>,
    /// Whether the sidebar carries the open class - write
    set_open: WriteSignal<bool>,
}

impl SidebarContext {
    pub fn new(open: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            open: open.0,
            set_open: open.1,
        }
    }

    /// Flip the open class
    pub fn toggle(&self) {
        self.set_open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.set_open.set(false);
    }
}

/// Get the sidebar context
pub fn use_sidebar() -> SidebarContext {
    expect_context::<SidebarContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_state() {
        let owner = Owner::new();
        owner.set();
        let sidebar = SidebarContext::new(signal(false));

        sidebar.toggle();
        assert!(sidebar.open.get_untracked());
        sidebar.toggle();
        assert!(!sidebar.open.get_untracked());
    }

    #[test]
    fn test_close() {
        let owner = Owner::new();
        owner.set();
        let sidebar = SidebarContext::new(signal(true));
        sidebar.close();
        sidebar.close();
        assert!(!sidebar.open.get_untracked());
    }
}
