//! Todo UI Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod error;
mod models;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::AppConfig::from_env();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("[MAIN] logger init failed: {}", e).into());
    }
    log::info!("[MAIN] backend at {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
