//! Bookstore Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod navigation;
mod query;
mod search;
mod store;

use app::App;
use config::UiConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let config = UiConfig::load();
    let level = config.as_ref().map(UiConfig::level_filter).unwrap_or(LevelFilter::Info);
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }
    let config = config.unwrap_or_else(|err| {
        log::warn!("[APP] ignoring malformed ui config: {}", err);
        UiConfig::default()
    });

    log::info!("[APP] mounting, suggestions from {}", config.suggestions_endpoint);
    mount_to_body(move || view! { <App config=config /> });
}
