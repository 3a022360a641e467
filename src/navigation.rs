//! Full-page navigation

/// Point the browser at `href`; failures are logged
pub fn navigate(href: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("[nav] no window, cannot open {}", href);
        return;
    };
    if let Err(err) = window.location().set_href(href) {
        log::error!("[nav] failed to open {}: {:?}", href, err);
    }
}
