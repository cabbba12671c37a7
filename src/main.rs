//! Portfolio Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod markdown;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    console_log::init_with_level(level).expect("logger initialised twice");
    log::info!("[App] API origin {}", context::api_config().base_url());
    mount_to_body(App);
}
